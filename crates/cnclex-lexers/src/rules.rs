//! Declarative rule tables.
//!
//! A lexer is described entirely by static data: a set of named modes, each
//! an ordered list of rules. Tables are compiled once into a
//! [`Lexer`](crate::Lexer) which owns the regexes and resolved mode indices.

use crate::token::TokenKind;

/// Name of the mode every scan starts in.
pub const ROOT: &str = "root";

/// Registration record for one language: what a host needs to pick the lexer
/// for a document, plus its rule table.
#[derive(Debug)]
pub struct LexerDef {
    /// Human readable language name.
    pub name: &'static str,
    /// Short lookup names.
    pub aliases: &'static [&'static str],
    /// Filename globs (`*.hal`) of documents in this language.
    pub filenames: &'static [&'static str],
    pub flags: Flags,
    pub modes: &'static [ModeDef],
}

/// Regex flags applied to every pattern of a lexer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
}

#[derive(Debug)]
pub struct ModeDef {
    pub name: &'static str,
    pub rules: &'static [RuleDef],
}

#[derive(Debug)]
pub enum RuleDef {
    Match {
        pattern: Pattern,
        emit: Emit,
        transition: Transition,
    },
    /// Splice the rules of another mode in at this position.
    Include(&'static str),
}

#[derive(Debug)]
pub enum Pattern {
    Regex(&'static str),
    /// Alternation of literal words wrapped in `prefix` and `suffix`.
    Words {
        words: &'static [&'static str],
        prefix: &'static str,
        suffix: &'static str,
    },
}

impl Pattern {
    /// Regex source for this pattern.
    ///
    /// Words are ordered longest first so an alternative never loses to one
    /// of its own prefixes under leftmost-first matching.
    pub fn source(&self) -> String {
        match self {
            Pattern::Regex(re) => (*re).to_string(),
            Pattern::Words {
                words,
                prefix,
                suffix,
            } => {
                let mut sorted = words.to_vec();
                sorted.sort_by(|a, b| b.len().cmp(&a.len()));
                format!("{prefix}(?:{}){suffix}", sorted.join("|"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Emit {
    /// One token spanning the whole match.
    Whole(TokenKind),
    /// One token per capture group, in group order.
    Groups(&'static [TokenKind]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Push(&'static str),
    Pop,
}

/// Shorthand for a rule without a mode transition.
pub const fn rule(pattern: &'static str, kind: TokenKind) -> RuleDef {
    RuleDef::Match {
        pattern: Pattern::Regex(pattern),
        emit: Emit::Whole(kind),
        transition: Transition::None,
    }
}
