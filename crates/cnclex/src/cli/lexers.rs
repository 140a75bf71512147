use anyhow::Result;
use clap::Args;
use cnclex_lexers::registry;

#[derive(Args)]
pub struct LexersArgs {}

impl LexersArgs {
    pub fn run(&self) -> Result<()> {
        for lexer in registry::all() {
            println!(
                "{}\taliases: {}\tfilenames: {}",
                lexer.name(),
                lexer.aliases().join(", "),
                lexer.filenames().join(", ")
            );
        }
        Ok(())
    }
}
