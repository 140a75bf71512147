use crate::{Token, TokenKind, registry};
use std::fmt::Write as _;

/// Kind and text of each token, for compact assertions.
pub fn kinds<'s>(tokens: &[Token<'s>]) -> Vec<(TokenKind, &'s str)> {
    tokens.iter().map(|token| (token.kind, token.text)).collect()
}

/// Concatenated token texts; equals the scanned input when coverage is total.
pub fn concat(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|token| token.text).collect()
}

/// Render the tokens of a sample file one per line, for snapshotting. The
/// lexer is picked from the file name.
pub fn snapshot_tokens_from_str(file_name: &str, input: &str) -> String {
    let Some(lexer) = registry::for_filename(file_name) else {
        return format!("no lexer for {file_name}");
    };
    let mut out = String::new();
    for token in lexer.tokens(input) {
        let _ = writeln!(
            out,
            "{}:{} {} {:?}",
            token.line, token.column, token.kind, token.text
        );
    }
    out
}
