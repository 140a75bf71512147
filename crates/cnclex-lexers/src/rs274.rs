//! Lexer for RS274NGC G-code in the LinuxCNC/Machinekit dialect.
//!
//! Matching is case-insensitive. Axis words are split into the letter
//! ([`NameFunction`](crate::TokenKind::NameFunction)) and its value, so
//! `Y-3` yields `Y` and `-3` rather than an operator.
//!
//! Calls to built-in functions such as `SIN(...)` push a `function` mode
//! whose argument text is not tokenized further; nested parentheses push
//! another frame so the closing paren always pops the matching call.

use crate::{
    Lexer,
    rules::{Emit, Flags, LexerDef, ModeDef, Pattern, RuleDef, Transition, rule},
    token::TokenKind::*,
};
use std::sync::LazyLock;

/// Built-in math and logic functions.
pub const BUILTINS: &[&str] = &[
    "cos", "tan", "asin", "sin", "acos", "atan", "exp", "ln", "sqrt", "fup", "fix", "abs", "or",
    "xor", "and", "mod", "gt", "lt", "ge", "le", "eq", "ne", "exists",
];

/// Binary operators spelled as words inside `[...]` expressions.
pub const OPERATOR_WORDS: &[&str] = &[
    "mod", "and", "or", "xor", "eq", "ne", "gt", "ge", "lt", "le",
];

/// O-word control flow keywords.
pub const FLOW_CONTROL: &[&str] = &[
    "sub",
    "endsub",
    "while",
    "endwhile",
    "if",
    "else",
    "endif",
    "do",
    "call",
    "break",
    "continue",
    "return",
    "repeat",
    "endrepeat",
    "elseif",
];

pub static DEF: LexerDef = LexerDef {
    name: "G-code",
    aliases: &["rs274", "gcode", "ngc"],
    filenames: &["*.ngc"],
    flags: Flags {
        case_insensitive: true,
        multi_line: false,
    },
    modes: &[
        ModeDef {
            name: "root",
            rules: &[
                rule(r"\n", Text),
                rule(r"\s+", Text),
                rule(r";.*", CommentSingle),
                // program start/end marker
                rule(r"%", NameAttribute),
                rule(r"\([^)]*\)", CommentSingle),
                // predefined #5420, positional #1..#30, named #<foo>
                rule(r"#[0-9]{4}", NameVariable),
                rule(r"#[0-9][0-9]?", NameVariable),
                rule(r"#<[^>]+>", NameVariable),
                RuleDef::Include("builtins"),
                RuleDef::Include("operator-words"),
                RuleDef::Include("owords"),
                RuleDef::Include("flowcontrol"),
                rule(r"n(?:[ \t]*[0-9]){1,5}", NameAttribute),
                rule(r"[-/|=+*\[\]]", Operator),
                // feeds and speeds
                rule(r"[fs][0-9]+(?:\.[0-9]+)?", KeywordType),
                rule(r"[gmth][0-9]{1,3}(?:\.[0-9])?", Keyword),
                RuleDef::Include("axes"),
                RuleDef::Include("numbers"),
            ],
        },
        ModeDef {
            name: "builtins",
            rules: &[
                // the opening paren belongs to the builtin token: `SIN(`
                RuleDef::Match {
                    pattern: Pattern::Words {
                        words: BUILTINS,
                        prefix: r"\b",
                        suffix: r"\s*\(",
                    },
                    emit: Emit::Whole(NameBuiltin),
                    transition: Transition::Push("function"),
                },
                // SIN[30]: the bracket is an ordinary expression operator
                RuleDef::Match {
                    pattern: Pattern::Words {
                        words: BUILTINS,
                        prefix: r"\b(",
                        suffix: r")(\s*)(\[)",
                    },
                    emit: Emit::Groups(&[NameBuiltin, Text, Operator]),
                    transition: Transition::None,
                },
            ],
        },
        ModeDef {
            name: "function",
            rules: &[
                rule(r"[^()]+", Text),
                RuleDef::Match {
                    pattern: Pattern::Regex(r"\("),
                    emit: Emit::Whole(Keyword),
                    transition: Transition::Push("function"),
                },
                RuleDef::Match {
                    pattern: Pattern::Regex(r"\)"),
                    emit: Emit::Whole(Keyword),
                    transition: Transition::Pop,
                },
            ],
        },
        ModeDef {
            name: "operator-words",
            rules: &[RuleDef::Match {
                pattern: Pattern::Words {
                    words: OPERATOR_WORDS,
                    prefix: r"\b",
                    suffix: r"\b",
                },
                emit: Emit::Whole(OperatorWord),
                transition: Transition::None,
            }],
        },
        ModeDef {
            name: "owords",
            rules: &[rule(
                r"o(?:(?:[ \t]*[0-9])+|<[a-z_][a-z0-9_]*>)",
                NameLabel,
            )],
        },
        ModeDef {
            name: "flowcontrol",
            rules: &[RuleDef::Match {
                pattern: Pattern::Words {
                    words: FLOW_CONTROL,
                    prefix: r"\b",
                    suffix: r"\b",
                },
                emit: Emit::Whole(KeywordReserved),
                transition: Transition::None,
            }],
        },
        ModeDef {
            name: "axes",
            rules: &[
                RuleDef::Match {
                    pattern: Pattern::Regex(r"([xyzabcuvwijkpqrl])([+-]?[0-9]+\.[0-9]*)"),
                    emit: Emit::Groups(&[NameFunction, NumberFloat]),
                    transition: Transition::None,
                },
                RuleDef::Match {
                    pattern: Pattern::Regex(r"([xyzabcuvwijkpqrl])([+-]?[0-9]*\.[0-9]+)"),
                    emit: Emit::Groups(&[NameFunction, NumberFloat]),
                    transition: Transition::None,
                },
                RuleDef::Match {
                    pattern: Pattern::Regex(r"([xyzabcuvwijkpqrl])([+-]?[0-9]+)"),
                    emit: Emit::Groups(&[NameFunction, NumberInteger]),
                    transition: Transition::None,
                },
                rule(r"[xyzabcuvwijkpqrl]", NameFunction),
            ],
        },
        ModeDef {
            name: "numbers",
            rules: &[
                rule(r"[+-]?[0-9]+\.[0-9]*", NumberFloat),
                rule(r"[+-]?[0-9]*\.[0-9]+", NumberFloat),
                rule(r"[+-]?[0-9]+", NumberInteger),
            ],
        },
    ],
};

static LEXER: LazyLock<Lexer> =
    LazyLock::new(|| Lexer::compile(&DEF).expect("rs274 rule table is valid"));

/// The shared G-code lexer.
pub fn lexer() -> &'static Lexer {
    &LEXER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{testing::kinds, token::TokenKind};

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        kinds(&lexer().tokenize(input))
    }

    #[test]
    fn linear_move_with_comment() {
        assert_eq!(
            lex("G1 X10.5 Y-3 (rapid move)"),
            vec![
                (Keyword, "G1"),
                (Text, " "),
                (NameFunction, "X"),
                (NumberFloat, "10.5"),
                (Text, " "),
                (NameFunction, "Y"),
                (NumberInteger, "-3"),
                (Text, " "),
                (CommentSingle, "(rapid move)"),
            ]
        );
    }

    #[test]
    fn subroutine_labels() {
        let program = "o100 sub\nG0 X0\no100 endsub\n";
        assert_eq!(
            lex(program),
            vec![
                (NameLabel, "o100"),
                (Text, " "),
                (KeywordReserved, "sub"),
                (Text, "\n"),
                (Keyword, "G0"),
                (Text, " "),
                (NameFunction, "X"),
                (NumberInteger, "0"),
                (Text, "\n"),
                (NameLabel, "o100"),
                (Text, " "),
                (KeywordReserved, "endsub"),
                (Text, "\n"),
            ]
        );
    }

    #[test]
    fn named_oword() {
        assert_eq!(
            lex("O<probe_z> call"),
            vec![
                (NameLabel, "O<probe_z>"),
                (Text, " "),
                (KeywordReserved, "call"),
            ]
        );
    }

    #[test]
    fn parameter_forms() {
        assert_eq!(lex("#<tool_len>"), vec![(NameVariable, "#<tool_len>")]);
        assert_eq!(lex("#5420"), vec![(NameVariable, "#5420")]);
        assert_eq!(lex("#12"), vec![(NameVariable, "#12")]);
        assert_eq!(lex("#3"), vec![(NameVariable, "#3")]);
    }

    #[test]
    fn builtin_call_pushes_function_mode() {
        let lexer = lexer();
        let mut tokens = lexer.tokens("SIN(#1 + 30)");
        let head: Vec<_> = tokens.by_ref().take(1).collect();
        assert_eq!(kinds(&head), vec![(NameBuiltin, "SIN(")]);
        assert_eq!(tokens.stack(), vec!["root", "function"]);

        let rest: Vec<_> = tokens.by_ref().collect();
        assert_eq!(kinds(&rest), vec![(Text, "#1 + 30"), (Keyword, ")")]);
        assert_eq!(tokens.stack(), vec!["root"]);
    }

    #[test]
    fn blanks_between_builtin_and_paren() {
        assert_eq!(
            lex("sqrt (4)"),
            vec![
                (NameBuiltin, "sqrt ("),
                (Text, "4"),
                (Keyword, ")"),
            ]
        );
    }

    #[test]
    fn nested_calls_balance() {
        let lexer = lexer();
        let mut tokens = lexer.tokens("X[ABS(SIN(30))]");
        let all: Vec<_> = tokens.by_ref().collect();
        assert_eq!(
            kinds(&all),
            vec![
                (NameFunction, "X"),
                (Operator, "["),
                (NameBuiltin, "ABS("),
                (Text, "SIN"),
                (Keyword, "("),
                (Text, "30"),
                (Keyword, ")"),
                (Keyword, ")"),
                (Operator, "]"),
            ]
        );
        assert_eq!(tokens.depth(), 1);
    }

    #[test]
    fn bracketed_builtin_and_operator_words() {
        assert_eq!(
            lex("o1 if [ATAN[#1]/[#2] GT 0]"),
            vec![
                (NameLabel, "o1"),
                (Text, " "),
                (KeywordReserved, "if"),
                (Text, " "),
                (Operator, "["),
                (NameBuiltin, "ATAN"),
                (Operator, "["),
                (NameVariable, "#1"),
                (Operator, "]"),
                (Operator, "/"),
                (Operator, "["),
                (NameVariable, "#2"),
                (Operator, "]"),
                (Text, " "),
                (OperatorWord, "GT"),
                (Text, " "),
                (NumberInteger, "0"),
                (Operator, "]"),
            ]
        );
    }

    #[test]
    fn line_numbers_feeds_and_codes() {
        assert_eq!(
            lex("N10 G38.2 F100.5 S1200 M3 T1 H2"),
            vec![
                (NameAttribute, "N10"),
                (Text, " "),
                (Keyword, "G38.2"),
                (Text, " "),
                (KeywordType, "F100.5"),
                (Text, " "),
                (KeywordType, "S1200"),
                (Text, " "),
                (Keyword, "M3"),
                (Text, " "),
                (Keyword, "T1"),
                (Text, " "),
                (Keyword, "H2"),
            ]
        );
        assert_eq!(lex("n 1 0"), vec![(NameAttribute, "n 1 0")]);
    }

    #[test]
    fn program_markers_and_semicolon_comments() {
        assert_eq!(
            lex("%\nM2 ; end\n%"),
            vec![
                (NameAttribute, "%"),
                (Text, "\n"),
                (Keyword, "M2"),
                (Text, " "),
                (CommentSingle, "; end"),
                (Text, "\n"),
                (NameAttribute, "%"),
            ]
        );
    }

    #[test]
    fn debug_comment_is_a_comment() {
        assert_eq!(
            lex("(DEBUG, depth=#<depth>)"),
            vec![(CommentSingle, "(DEBUG, depth=#<depth>)")]
        );
    }

    #[test]
    fn numbers_and_operators_in_expressions() {
        assert_eq!(
            lex("#1=[.5*2.]"),
            vec![
                (NameVariable, "#1"),
                (Operator, "="),
                (Operator, "["),
                (NumberFloat, ".5"),
                (Operator, "*"),
                (NumberFloat, "2."),
                (Operator, "]"),
            ]
        );
        assert_eq!(lex("Z.25"), vec![(NameFunction, "Z"), (NumberFloat, ".25")]);
        assert_eq!(lex("Z#3"), vec![(NameFunction, "Z"), (NameVariable, "#3")]);
    }

    #[test]
    fn flow_keywords_are_case_insensitive() {
        for &word in FLOW_CONTROL {
            let upper = word.to_uppercase();
            assert_eq!(lex(word), vec![(KeywordReserved, word)], "{word}");
            assert_eq!(lex(&upper), vec![(KeywordReserved, upper.as_str())]);
        }
    }

    #[test]
    fn builtins_are_case_insensitive() {
        for &word in BUILTINS {
            for name in [word.to_string(), word.to_uppercase()] {
                let call = format!("{name}(1)");
                assert_eq!(
                    lex(&call),
                    vec![
                        (NameBuiltin, &call[..name.len() + 1]),
                        (Text, "1"),
                        (Keyword, ")"),
                    ],
                    "{call}"
                );
            }
        }
    }

    #[test]
    fn machine_codes_are_keywords() {
        for code in ["g0", "G1", "g17", "G38.2", "m3", "M100", "t12", "H1"] {
            assert_eq!(lex(code), vec![(Keyword, code)], "{code}");
        }
    }

    #[test]
    fn unclosed_call_leaves_function_mode_open() {
        let lexer = lexer();
        let mut tokens = lexer.tokens("COS(");
        let all: Vec<_> = tokens.by_ref().collect();
        assert_eq!(kinds(&all), vec![(NameBuiltin, "COS(")]);
        assert_eq!(tokens.depth(), 2);
    }
}
