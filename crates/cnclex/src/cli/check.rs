use super::select_lexer;
use anyhow::{Context, Result, bail};
use clap::Args;
use cnclex_lexers::{Lexer, Token, TokenKind};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Args)]
pub struct CheckArgs {
    /// Files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Lexer name or alias.
    ///
    /// Defaults to the lexer whose filename patterns match each file.
    #[arg(long)]
    pub lexer: Option<String>,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        let mut failed = 0;
        for path in &self.files {
            match self.check_file(path) {
                Ok(report) if report.errors == 0 => println!("OK {}", path.display()),
                Ok(report) => {
                    failed += 1;
                    let (line, column) = report.first.unwrap_or_default();
                    println!(
                        "ERR {}: {} error tokens (first at {line}:{column})",
                        path.display(),
                        report.errors
                    );
                }
                Err(err) => {
                    failed += 1;
                    println!("ERR {}: {err:#}", path.display());
                }
            }
        }

        if failed > 0 {
            bail!("{failed} of {} files failed the check", self.files.len());
        }
        Ok(())
    }

    fn check_file(&self, path: &Path) -> Result<Report> {
        let lexer = select_lexer(path, self.lexer.as_deref())?;
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display()))?;
        Ok(Report::scan(lexer, &source))
    }
}

/// Error tokens found in one source.
#[derive(Debug, Default, PartialEq, Eq)]
struct Report {
    errors: usize,
    /// Line and column of the first error token.
    first: Option<(usize, usize)>,
}

impl Report {
    fn scan(lexer: &Lexer, source: &str) -> Self {
        let mut report = Self::default();
        for token in lexer.tokens(source).filter(is_error) {
            report.errors += 1;
            report.first.get_or_insert((token.line, token.column));
        }
        report
    }
}

fn is_error(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Error
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnclex_lexers::{halcmd, rs274};

    #[test]
    fn clean_sources_have_no_errors() {
        let report = Report::scan(halcmd::lexer(), "setp a.b 1\nnet x a => b\n");
        assert_eq!(report, Report::default());
    }

    #[test]
    fn counts_errors_and_keeps_the_first_position() {
        let report = Report::scan(rs274::lexer(), "G1 X1\nG0 $ Y2 $\n");
        assert_eq!(
            report,
            Report {
                errors: 2,
                first: Some((2, 4)),
            }
        );
    }
}
