use anyhow::{Result, bail};
use cnclex_lexers::{Lexer, registry};
use std::path::Path;

pub mod check;
pub mod lexers;
pub mod tokens;

/// Pick the lexer named by `--lexer`, or the one whose filename globs match
/// `path`.
pub fn select_lexer(path: &Path, name: Option<&str>) -> Result<&'static Lexer> {
    if let Some(name) = name {
        return match registry::by_alias(name) {
            Some(lexer) => Ok(lexer),
            None => bail!("unknown lexer {name:?}; run `cnclex lexers` to list them"),
        };
    }
    match registry::for_filename(path) {
        Some(lexer) => Ok(lexer),
        None => bail!(
            "no lexer matches {}; pass --lexer to choose one",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_name_wins_over_extension() {
        let lexer = select_lexer(Path::new("spindle.hal"), Some("rs274")).unwrap();
        assert_eq!(lexer.name(), "G-code");
    }

    #[test]
    fn falls_back_to_filename() {
        let lexer = select_lexer(Path::new("cfg/spindle.hal"), None).unwrap();
        assert_eq!(lexer.name(), "Halcmd");
    }

    #[test]
    fn reports_unknown_names_and_files() {
        let err = select_lexer(Path::new("a.ngc"), Some("pascal")).unwrap_err();
        assert!(err.to_string().contains("unknown lexer"));
        let err = select_lexer(Path::new("notes.txt"), None).unwrap_err();
        assert!(err.to_string().contains("pass --lexer"));
    }
}
