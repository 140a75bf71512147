use crate::{
    lexer::{Action, CompiledRule, Lexer},
    rules::Emit,
    token::{Span, Token, TokenKind},
};
use regex_automata::{Anchored, Input};
use std::{collections::VecDeque, iter::FusedIterator};

/// Consecutive zero-width transitions allowed at one offset before the
/// scanner stops trying zero-width rules there.
const MAX_STALLED_STEPS: usize = 32;

/// Lazy token stream over one input.
///
/// Every byte of the input ends up in exactly one token, in order. Input no
/// rule accepts comes out as single-character [`TokenKind::Error`] tokens.
pub struct Tokens<'l, 's> {
    lexer: &'l Lexer,
    input: &'s str,
    pos: usize,
    stack: Vec<usize>,
    pending: VecDeque<Token<'s>>,
    line: usize,
    column: usize,
    stalled: usize,
}

impl<'l, 's> Tokens<'l, 's> {
    pub(crate) fn new(lexer: &'l Lexer, input: &'s str, stack: Vec<usize>) -> Self {
        Self {
            lexer,
            input,
            pos: 0,
            stack,
            pending: VecDeque::new(),
            line: 1,
            column: 1,
            stalled: 0,
        }
    }

    /// Names of the modes on the stack, bottom first.
    pub fn stack(&self) -> Vec<&'static str> {
        self.stack
            .iter()
            .map(|&mode| self.lexer.modes[mode].name)
            .collect()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Byte offset of the next unscanned character.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn active(&self) -> usize {
        self.stack.last().copied().unwrap_or(self.lexer.root)
    }

    fn step(&mut self) {
        let lexer = self.lexer;
        for &index in &lexer.modes[self.active()].rules {
            if self.apply(&lexer.rules[index]) {
                return;
            }
        }
        self.fallback();
    }

    /// Try one rule at the cursor. Returns false if it does not match.
    fn apply(&mut self, rule: &CompiledRule) -> bool {
        let input = Input::new(self.input)
            .range(self.pos..)
            .anchored(Anchored::Yes);

        match rule.emit {
            Emit::Whole(kind) => {
                let Some(m) = rule.regex.search(&input) else {
                    return false;
                };
                if m.is_empty() {
                    return self.zero_width(rule.action);
                }
                self.push(kind, m.end());
            }
            Emit::Groups(kinds) => {
                let mut caps = rule.regex.create_captures();
                rule.regex.search_captures(&input, &mut caps);
                let Some(m) = caps.get_match() else {
                    return false;
                };
                if m.is_empty() {
                    return self.zero_width(rule.action);
                }
                for (group, &kind) in kinds.iter().enumerate() {
                    let Some(span) = caps.get_group(group + 1) else {
                        continue;
                    };
                    // nested or empty groups add nothing
                    if span.is_empty() || span.start < self.pos {
                        continue;
                    }
                    if span.start > self.pos {
                        self.push(TokenKind::Text, span.start);
                    }
                    self.push(kind, span.end);
                }
                if self.pos < m.end() {
                    self.push(TokenKind::Text, m.end());
                }
            }
        }

        self.stalled = 0;
        self.transition(rule.action);
        true
    }

    fn zero_width(&mut self, action: Action) -> bool {
        if action == Action::None || self.stalled >= MAX_STALLED_STEPS {
            return false;
        }
        self.stalled += 1;
        self.transition(action);
        true
    }

    fn transition(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Push(mode) => {
                tracing::trace!(
                    lexer = self.lexer.name(),
                    mode = self.lexer.modes[mode].name,
                    offset = self.pos,
                    "push mode"
                );
                self.stack.push(mode);
            }
            Action::Pop => {
                // the bottom frame always stays
                if self.stack.len() > 1 {
                    let mode = self.active();
                    tracing::trace!(
                        lexer = self.lexer.name(),
                        mode = self.lexer.modes[mode].name,
                        offset = self.pos,
                        "pop mode"
                    );
                    self.stack.pop();
                }
            }
        }
    }

    fn fallback(&mut self) {
        self.stalled = 0;
        let Some(ch) = self.input[self.pos..].chars().next() else {
            self.pos = self.input.len();
            return;
        };
        let end = self.pos + ch.len_utf8();

        if ch == '\n' {
            self.stack.clear();
            self.stack.push(self.lexer.root);
            self.push(TokenKind::Text, end);
            return;
        }

        tracing::debug!(
            lexer = self.lexer.name(),
            line = self.line,
            column = self.column,
            ch = ?ch,
            "no rule matched"
        );
        self.push(TokenKind::Error, end);
    }

    /// Queue a token from the cursor up to `end` and advance past it.
    fn push(&mut self, kind: TokenKind, end: usize) {
        let start = self.pos;
        let text = &self.input[start..end];
        self.pending.push_back(Token {
            kind,
            text,
            span: Span { start, end },
            line: self.line,
            column: self.column,
        });
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }
}

impl<'s> Iterator for Tokens<'_, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.pos >= self.input.len() {
                return None;
            }
            self.step();
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}
