use super::select_lexer;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

#[derive(Args)]
pub struct TokensArgs {
    /// Files to tokenize.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Lexer name or alias.
    ///
    /// Defaults to the lexer whose filename patterns match each file.
    #[arg(long)]
    pub lexer: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `line:column kind "text"` entry per line.
    Text,
    /// One JSON document per file.
    Json,
}

impl TokensArgs {
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        for path in &self.files {
            let lexer = select_lexer(path, self.lexer.as_deref())?;
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read input {}", path.display()))?;
            let tokens = lexer.tokenize(&source);
            tracing::debug!(file = %path.display(), lexer = lexer.name(), tokens = tokens.len());

            match self.format {
                Format::Text => {
                    if self.files.len() > 1 {
                        writeln!(out, "==> {} <==", path.display())?;
                    }
                    for token in &tokens {
                        writeln!(
                            out,
                            "{}:{} {} {:?}",
                            token.line, token.column, token.kind, token.text
                        )?;
                    }
                }
                Format::Json => {
                    let document = serde_json::json!({
                        "file": path.display().to_string(),
                        "lexer": lexer.name(),
                        "tokens": tokens,
                    });
                    serde_json::to_writer(&mut out, &document)?;
                    writeln!(out)?;
                }
            }
        }

        Ok(())
    }
}
