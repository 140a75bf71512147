//! Lookup of the built-in lexers by alias or file name.

use crate::{Lexer, halcmd, rs274};
use std::path::Path;

/// Every built-in lexer.
pub fn all() -> [&'static Lexer; 2] {
    [halcmd::lexer(), rs274::lexer()]
}

/// Find a lexer by alias or display name, ignoring ASCII case.
pub fn by_alias(name: &str) -> Option<&'static Lexer> {
    all().into_iter().find(|lexer| {
        lexer.name().eq_ignore_ascii_case(name)
            || lexer
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Find the lexer whose filename globs match the final component of `path`.
pub fn for_filename(path: impl AsRef<Path>) -> Option<&'static Lexer> {
    let name = path.as_ref().file_name()?.to_str()?;
    all().into_iter().find(|lexer| {
        lexer
            .filenames()
            .iter()
            .any(|pattern| glob_match(pattern, name))
    })
}

/// Shell-style match supporting `*` and `?`, ignoring ASCII case.
fn glob_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().map(|c| c.to_ascii_lowercase()).collect();
    let name: Vec<char> = name.chars().map(|c| c.to_ascii_lowercase()).collect();

    let (mut p, mut n) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;
    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, n));
                p += 1;
            }
            Some(&c) if c == '?' || c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match backtrack {
                // let the last star absorb one more character
                Some((star, from)) => {
                    p = star + 1;
                    n = from + 1;
                    backtrack = Some((star, from + 1));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_by_alias_and_name() {
        assert_eq!(by_alias("halcmd").map(Lexer::name), Some("Halcmd"));
        assert_eq!(by_alias("RS274").map(Lexer::name), Some("G-code"));
        assert_eq!(by_alias("g-code").map(Lexer::name), Some("G-code"));
        assert!(by_alias("python").is_none());
    }

    #[test]
    fn finds_by_filename() {
        assert_eq!(
            for_filename("configs/sim/axis.hal").map(Lexer::name),
            Some("Halcmd")
        );
        assert_eq!(for_filename("PART.NGC").map(Lexer::name), Some("G-code"));
        assert!(for_filename("notes.txt").is_none());
        assert!(for_filename("hal").is_none());
    }

    #[test]
    fn globs() {
        assert!(glob_match("*.hal", "a.hal"));
        assert!(glob_match("*.hal", ".hal"));
        assert!(glob_match("a?c*", "abcdef"));
        assert!(glob_match("*x*y", "axbxy"));
        assert!(!glob_match("*.hal", "a.hal.bak"));
        assert!(!glob_match("a?c", "ac"));
    }
}
