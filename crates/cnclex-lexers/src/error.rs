use thiserror::Error;

/// Errors raised while compiling a rule table or preparing a scan.
///
/// Scanning itself never fails: unmatched input becomes error tokens.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("lexer '{lexer}' has no '{root}' mode", root = crate::rules::ROOT)]
    MissingRoot { lexer: &'static str },

    #[error("lexer '{lexer}' has no mode named '{mode}'")]
    UnknownMode { lexer: &'static str, mode: String },

    #[error("lexer '{lexer}' includes mode '{mode}' recursively")]
    IncludeCycle {
        lexer: &'static str,
        mode: &'static str,
    },

    #[error("invalid pattern {pattern:?} in mode '{mode}' of lexer '{lexer}'")]
    InvalidPattern {
        lexer: &'static str,
        mode: &'static str,
        pattern: String,
        #[source]
        source: Box<regex_automata::meta::BuildError>,
    },

    #[error(
        "pattern {pattern:?} in mode '{mode}' of lexer '{lexer}' has {groups} capture groups but emits {declared} token kinds"
    )]
    GroupMismatch {
        lexer: &'static str,
        mode: &'static str,
        pattern: String,
        groups: usize,
        declared: usize,
    },

    #[error("initial mode stack for lexer '{lexer}' is empty")]
    EmptyStack { lexer: &'static str },
}
