//! Lexer for halcmd, the command language that wires HAL components, pins
//! and signals together.

use crate::{
    Lexer,
    rules::{Emit, Flags, LexerDef, ModeDef, Pattern, RuleDef, Transition, rule},
    token::TokenKind::*,
};
use std::sync::LazyLock;

/// Command verbs understood by halcmd.
pub const COMMANDS: &[&str] = &[
    "addf",
    "alias",
    "autoload",
    "delf",
    "delg",
    "delinst",
    "delm",
    "delring",
    "delsig",
    "delthread",
    "exit",
    "getp",
    "gets",
    "help",
    "linkpp",
    "linkps",
    "linksp",
    "list",
    "loadrt",
    "loadusr",
    "lock",
    "log",
    "net",
    "newcomp",
    "newg",
    "newinst",
    "newm",
    "newpin",
    "newring",
    "newsig",
    "newthread",
    "ping",
    "ptype",
    "quit",
    "ready",
    "ringdump",
    "ringread",
    "ringwrite",
    "save",
    "sete",
    "setp",
    "sets",
    "show",
    "shutdown",
    "sleep",
    "source",
    "start",
    "status",
    "stop",
    "stype",
    "unalias",
    "unlinkp",
    "unload",
    "unlock",
    "vtable",
    "waitbound",
    "waitexists",
    "waitunbound",
];

pub static DEF: LexerDef = LexerDef {
    name: "Halcmd",
    aliases: &["halcmd", "hal"],
    filenames: &["*.hal"],
    flags: Flags {
        case_insensitive: false,
        multi_line: true,
    },
    modes: &[
        ModeDef {
            name: "root",
            rules: &[
                rule(r"\n", Text),
                rule(r"\s+", Text),
                rule(r"[;#].*$", CommentSingle),
                RuleDef::Include("keywords"),
                rule(r#"(?s)"(\\\\|\\.|[^"\\])*""#, StringDouble),
                rule(r"(?s)'(\\\\|\\.|[^'\\])*'", StringSingle),
                rule(r"=>|<=|=", Operator),
                // ini substitution: [AXIS_0]MAX_VELOCITY
                rule(r"\[.*?\]\w+", NameNamespace),
                // pin and signal names, dots separate levels
                rule(r"[a-zA-Z][-_.a-zA-Z0-9]*", NameVariable),
                RuleDef::Include("numbers"),
            ],
        },
        ModeDef {
            name: "keywords",
            rules: &[RuleDef::Match {
                pattern: Pattern::Words {
                    words: COMMANDS,
                    prefix: r"\b",
                    suffix: r"\b",
                },
                emit: Emit::Whole(Keyword),
                transition: Transition::None,
            }],
        },
        ModeDef {
            name: "numbers",
            rules: &[
                rule(r"(\d+\.\d*|\d*\.\d+)([eE][+-]?[0-9]+)?j?", NumberFloat),
                rule(r"\d+[eE][+-]?[0-9]+j?", NumberFloat),
                rule(r"0[0-7]+j?", NumberOct),
                rule(r"0[bB][01]+", NumberBin),
                rule(r"0[xX][a-fA-F0-9]+", NumberHex),
                rule(r"\d+L", NumberIntegerLong),
                rule(r"\d+j?", NumberInteger),
            ],
        },
    ],
};

static LEXER: LazyLock<Lexer> =
    LazyLock::new(|| Lexer::compile(&DEF).expect("halcmd rule table is valid"));

/// The shared halcmd lexer.
pub fn lexer() -> &'static Lexer {
    &LEXER
}
