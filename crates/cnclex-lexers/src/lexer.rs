use crate::{
    error::TableError,
    rules::{Emit, LexerDef, ROOT, RuleDef, Transition},
    scanner::Tokens,
    token::Token,
};
use regex_automata::{meta::Regex, util::syntax};

/// A compiled rule table, ready to scan input.
///
/// Compilation resolves mode names to indices, splices `include`d modes in
/// place and builds one anchored regex per rule. A `Lexer` is immutable and
/// can be shared freely between threads.
#[derive(Debug)]
pub struct Lexer {
    def: &'static LexerDef,
    pub(crate) rules: Vec<CompiledRule>,
    pub(crate) modes: Vec<Mode>,
    pub(crate) root: usize,
}

#[derive(Debug)]
pub(crate) struct CompiledRule {
    pub(crate) regex: Regex,
    pub(crate) emit: Emit,
    pub(crate) action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Push(usize),
    Pop,
}

#[derive(Debug)]
pub(crate) struct Mode {
    pub(crate) name: &'static str,
    /// Indices into `Lexer::rules`, includes already spliced in.
    pub(crate) rules: Vec<usize>,
}

enum Slot {
    Rule(usize),
    Include(usize),
}

impl Lexer {
    pub fn compile(def: &'static LexerDef) -> Result<Self, TableError> {
        let root = mode_index(def, ROOT).ok_or(TableError::MissingRoot { lexer: def.name })?;
        let config = syntax::Config::new()
            .case_insensitive(def.flags.case_insensitive)
            .multi_line(def.flags.multi_line);

        let mut rules = Vec::new();
        let mut slots = Vec::with_capacity(def.modes.len());
        for mode in def.modes {
            let mut own = Vec::with_capacity(mode.rules.len());
            for rule in mode.rules {
                match rule {
                    RuleDef::Include(name) => own.push(Slot::Include(resolve(def, name)?)),
                    RuleDef::Match {
                        pattern,
                        emit,
                        transition,
                    } => {
                        let source = pattern.source();
                        let regex = Regex::builder().syntax(config).build(&source).map_err(
                            |err| TableError::InvalidPattern {
                                lexer: def.name,
                                mode: mode.name,
                                pattern: source.clone(),
                                source: Box::new(err),
                            },
                        )?;

                        if let Emit::Groups(kinds) = emit {
                            // group 0 is the implicit whole-match group
                            let groups = regex.captures_len().saturating_sub(1);
                            if groups != kinds.len() {
                                return Err(TableError::GroupMismatch {
                                    lexer: def.name,
                                    mode: mode.name,
                                    pattern: source,
                                    groups,
                                    declared: kinds.len(),
                                });
                            }
                        }

                        let action = match transition {
                            Transition::None => Action::None,
                            Transition::Push(name) => Action::Push(resolve(def, name)?),
                            Transition::Pop => Action::Pop,
                        };

                        rules.push(CompiledRule {
                            regex,
                            emit: *emit,
                            action,
                        });
                        own.push(Slot::Rule(rules.len() - 1));
                    }
                }
            }
            slots.push(own);
        }

        let mut modes = Vec::with_capacity(def.modes.len());
        for (index, mode) in def.modes.iter().enumerate() {
            let mut flat = Vec::new();
            flatten(def, &slots, index, &mut Vec::new(), &mut flat)?;
            modes.push(Mode {
                name: mode.name,
                rules: flat,
            });
        }

        tracing::debug!(
            lexer = def.name,
            modes = modes.len(),
            rules = rules.len(),
            "compiled rule table"
        );

        Ok(Self {
            def,
            rules,
            modes,
            root,
        })
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.def.aliases
    }

    pub fn filenames(&self) -> &'static [&'static str] {
        self.def.filenames
    }

    pub fn def(&self) -> &'static LexerDef {
        self.def
    }

    /// Scan `input` starting from the root mode.
    pub fn tokens<'l, 's>(&'l self, input: &'s str) -> Tokens<'l, 's> {
        Tokens::new(self, input, vec![self.root])
    }

    /// Scan `input` starting from an explicit mode stack, bottom first.
    pub fn tokens_with_stack<'l, 's>(
        &'l self,
        input: &'s str,
        stack: &[&str],
    ) -> Result<Tokens<'l, 's>, TableError> {
        if stack.is_empty() {
            return Err(TableError::EmptyStack {
                lexer: self.def.name,
            });
        }
        let stack = stack
            .iter()
            .map(|name| resolve(self.def, name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Tokens::new(self, input, stack))
    }

    pub fn tokenize<'s>(&self, input: &'s str) -> Vec<Token<'s>> {
        self.tokens(input).collect()
    }
}

fn mode_index(def: &LexerDef, name: &str) -> Option<usize> {
    def.modes.iter().position(|mode| mode.name == name)
}

fn resolve(def: &'static LexerDef, name: &str) -> Result<usize, TableError> {
    mode_index(def, name).ok_or_else(|| TableError::UnknownMode {
        lexer: def.name,
        mode: name.to_string(),
    })
}

fn flatten(
    def: &'static LexerDef,
    slots: &[Vec<Slot>],
    mode: usize,
    visiting: &mut Vec<usize>,
    out: &mut Vec<usize>,
) -> Result<(), TableError> {
    if visiting.contains(&mode) {
        return Err(TableError::IncludeCycle {
            lexer: def.name,
            mode: def.modes[mode].name,
        });
    }
    visiting.push(mode);
    for slot in &slots[mode] {
        match slot {
            Slot::Rule(index) => out.push(*index),
            Slot::Include(included) => flatten(def, slots, *included, visiting, out)?,
        }
    }
    visiting.pop();
    Ok(())
}
