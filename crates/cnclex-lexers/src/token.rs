use serde::{Serialize, Serializer};
use std::fmt;

/// Highlighting category of a token.
///
/// Categories form a small hierarchy (`Number.Integer.Long` is a kind of
/// `Number.Integer`, which is a kind of `Number`). Hosts that style tokens
/// usually fall back to the nearest styled ancestor, see [`TokenKind::parent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Error,
    Keyword,
    KeywordReserved,
    KeywordType,
    Name,
    NameNamespace,
    NameVariable,
    NameFunction,
    NameLabel,
    NameAttribute,
    NameBuiltin,
    String,
    StringDouble,
    StringSingle,
    Number,
    NumberFloat,
    NumberOct,
    NumberBin,
    NumberHex,
    NumberInteger,
    NumberIntegerLong,
    Operator,
    OperatorWord,
    Comment,
    CommentSingle,
}

impl TokenKind {
    /// Dotted category name, e.g. `"Name.Variable"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Error => "Error",
            TokenKind::Keyword => "Keyword",
            TokenKind::KeywordReserved => "Keyword.Reserved",
            TokenKind::KeywordType => "Keyword.Type",
            TokenKind::Name => "Name",
            TokenKind::NameNamespace => "Name.Namespace",
            TokenKind::NameVariable => "Name.Variable",
            TokenKind::NameFunction => "Name.Function",
            TokenKind::NameLabel => "Name.Label",
            TokenKind::NameAttribute => "Name.Attribute",
            TokenKind::NameBuiltin => "Name.Builtin",
            TokenKind::String => "String",
            TokenKind::StringDouble => "String.Double",
            TokenKind::StringSingle => "String.Single",
            TokenKind::Number => "Number",
            TokenKind::NumberFloat => "Number.Float",
            TokenKind::NumberOct => "Number.Oct",
            TokenKind::NumberBin => "Number.Bin",
            TokenKind::NumberHex => "Number.Hex",
            TokenKind::NumberInteger => "Number.Integer",
            TokenKind::NumberIntegerLong => "Number.Integer.Long",
            TokenKind::Operator => "Operator",
            TokenKind::OperatorWord => "Operator.Word",
            TokenKind::Comment => "Comment",
            TokenKind::CommentSingle => "Comment.Single",
        }
    }

    /// The enclosing category, or `None` for top-level categories.
    pub const fn parent(self) -> Option<TokenKind> {
        match self {
            TokenKind::KeywordReserved | TokenKind::KeywordType => Some(TokenKind::Keyword),
            TokenKind::NameNamespace
            | TokenKind::NameVariable
            | TokenKind::NameFunction
            | TokenKind::NameLabel
            | TokenKind::NameAttribute
            | TokenKind::NameBuiltin => Some(TokenKind::Name),
            TokenKind::StringDouble | TokenKind::StringSingle => Some(TokenKind::String),
            TokenKind::NumberFloat
            | TokenKind::NumberOct
            | TokenKind::NumberBin
            | TokenKind::NumberHex
            | TokenKind::NumberInteger => Some(TokenKind::Number),
            TokenKind::NumberIntegerLong => Some(TokenKind::NumberInteger),
            TokenKind::OperatorWord => Some(TokenKind::Operator),
            TokenKind::CommentSingle => Some(TokenKind::Comment),
            TokenKind::Text
            | TokenKind::Error
            | TokenKind::Keyword
            | TokenKind::Name
            | TokenKind::String
            | TokenKind::Number
            | TokenKind::Operator
            | TokenKind::Comment => None,
        }
    }

    /// Returns true if `self` is `other` or one of its subcategories.
    pub fn is_a(self, other: TokenKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Short style class used by HTML highlighting hosts. Empty for plain text.
    pub const fn css_class(self) -> &'static str {
        match self {
            TokenKind::Text => "",
            TokenKind::Error => "err",
            TokenKind::Keyword => "k",
            TokenKind::KeywordReserved => "kr",
            TokenKind::KeywordType => "kt",
            TokenKind::Name => "n",
            TokenKind::NameNamespace => "nn",
            TokenKind::NameVariable => "nv",
            TokenKind::NameFunction => "nf",
            TokenKind::NameLabel => "nl",
            TokenKind::NameAttribute => "na",
            TokenKind::NameBuiltin => "nb",
            TokenKind::String => "s",
            TokenKind::StringDouble => "s2",
            TokenKind::StringSingle => "s1",
            TokenKind::Number => "m",
            TokenKind::NumberFloat => "mf",
            TokenKind::NumberOct => "mo",
            TokenKind::NumberBin => "mb",
            TokenKind::NumberHex => "mh",
            TokenKind::NumberInteger => "mi",
            TokenKind::NumberIntegerLong => "il",
            TokenKind::Operator => "o",
            TokenKind::OperatorWord => "ow",
            TokenKind::Comment => "c",
            TokenKind::CommentSingle => "c1",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Byte range of a token in the scanned input.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub text: &'s str,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}
