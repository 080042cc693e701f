//! Rule recognition: alternative prediction and matching.
//!
//! Prediction simulates every alternative of a rule in parallel over the
//! token stream. Each configuration is an alternative plus a position in it;
//! a token advances the configurations that can consume it and drops the
//! rest. Prediction succeeds once a single alternative is left and fails
//! with "no viable alternative" at the token that leaves none.

use std::fmt::Write;

use quill_grammar::{Grammar, Repeat, Rule, TokenType};
use smallvec::SmallVec;

use crate::{Lexer, RecognitionError, Token, UnknownRule};

/// Result of recognizing one rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Predicted alternative, 1-based.
    pub alternative: Option<usize>,
    /// Errors in report order: lexer errors first, then parser errors.
    pub errors: Vec<RecognitionError>,
}

impl ParseOutcome {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// The text a generated parser writes to stderr: one line per error.
    pub fn stderr(&self) -> String {
        let mut out = String::new();
        for error in &self.errors {
            // Writing to a String is infallible
            let _ = writeln!(out, "{error}");
        }
        out
    }
}

/// Interprets the rules of an analysed grammar.
#[derive(Debug)]
pub struct Recognizer<'g> {
    grammar: &'g Grammar,
    lexer: Lexer,
}

impl<'g> Recognizer<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Recognizer {
            grammar,
            lexer: Lexer::new(grammar),
        }
    }

    /// Recognize `input` starting at rule `rule`.
    ///
    /// Input after the end of the rule is left unconsumed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse(&self, rule: &str, input: &str) -> Result<ParseOutcome, UnknownRule> {
        let rule = self
            .grammar
            .resolve_rule(rule)
            .ok_or_else(|| UnknownRule(rule.to_owned()))?;
        let (tokens, mut errors) = self.lexer.tokenize(input);
        let decision = Decision::new(self.grammar, rule);

        let alternative = match decision.predict(&tokens) {
            Ok(alt) => {
                tracing::debug!(alt = alt + 1, "predicted alternative");
                if let Err(err) = decision.match_alternative(self.grammar, alt, &tokens) {
                    errors.push(err);
                }
                Some(alt + 1)
            }
            Err(err) => {
                errors.push(err);
                None
            }
        };

        Ok(ParseOutcome {
            alternative,
            errors,
        })
    }
}

/// A rule's alternatives lowered to token types.
struct Decision {
    alternatives: Vec<Vec<(TokenType, Repeat)>>,
}

/// Alternative index, position within it, and whether the element at the
/// position has already matched once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Config {
    alt: usize,
    pos: usize,
    looping: bool,
}

type Configs = SmallVec<[Config; 8]>;

impl Decision {
    fn new(grammar: &Grammar, rule: &Rule) -> Self {
        let vocabulary = grammar.vocabulary();
        let alternatives = rule
            .alternatives()
            .iter()
            .map(|alt| {
                alt.elements()
                    .iter()
                    .map(|element| {
                        // Type 0 is never assigned, so an undefined literal never matches.
                        let ttype = vocabulary
                            .token_type(element.grammar_literal())
                            .unwrap_or(TokenType::from_raw(0));
                        (ttype, element.repeat())
                    })
                    .collect()
            })
            .collect();
        Decision { alternatives }
    }

    /// Index of the alternative `tokens` can only belong to.
    fn predict(&self, tokens: &[Token]) -> Result<usize, RecognitionError> {
        let start = (0..self.alternatives.len())
            .map(|alt| Config {
                alt,
                pos: 0,
                looping: false,
            })
            .collect();
        let mut configs = self.closure(start);

        for token in tokens {
            let mut alts = configs.iter().map(|c| c.alt);
            if let Some(first) = alts.next() {
                if alts.all(|alt| alt == first) {
                    return Ok(first);
                }
            }

            let next = self.step(&configs, token.ttype);
            if next.is_empty() {
                // Alternatives that are complete here absorb the token's
                // absence; the lowest-numbered one wins.
                return configs
                    .iter()
                    .filter(|c| c.pos == self.alternatives[c.alt].len())
                    .map(|c| c.alt)
                    .min()
                    .ok_or_else(|| RecognitionError::no_viable_alt(token));
            }
            tracing::trace!(token = %token.text, live = next.len(), "advanced decision");
            configs = next;
        }

        configs
            .iter()
            .map(|c| c.alt)
            .min()
            .ok_or_else(|| match tokens.last() {
                Some(token) => RecognitionError::no_viable_alt(token),
                None => RecognitionError::no_viable_alt(&Token::eof(1, 0)),
            })
    }

    /// Configurations after consuming a token of type `ttype`.
    fn step(&self, configs: &Configs, ttype: TokenType) -> Configs {
        let mut next = Configs::new();
        for config in configs {
            let Some(&(expected, repeat)) = self.alternatives[config.alt].get(config.pos) else {
                continue;
            };
            if expected != ttype {
                continue;
            }
            let moved = if repeat.loops() {
                Config {
                    looping: true,
                    ..*config
                }
            } else {
                Config {
                    pos: config.pos + 1,
                    looping: false,
                    ..*config
                }
            };
            if !next.contains(&moved) {
                next.push(moved);
            }
        }
        self.closure(next)
    }

    /// Add the configurations reachable without consuming input: past an
    /// optional element, or out of a loop that has matched once.
    fn closure(&self, mut configs: Configs) -> Configs {
        let mut i = 0;
        while i < configs.len() {
            let config = configs[i];
            if let Some(&(_, repeat)) = self.alternatives[config.alt].get(config.pos) {
                if repeat.is_optional() || (repeat.loops() && config.looping) {
                    let skipped = Config {
                        pos: config.pos + 1,
                        looping: false,
                        ..config
                    };
                    if !configs.contains(&skipped) {
                        configs.push(skipped);
                    }
                }
            }
            i += 1;
        }
        configs
    }

    /// Match the predicted alternative from the first token.
    fn match_alternative(
        &self,
        grammar: &Grammar,
        alt: usize,
        tokens: &[Token],
    ) -> Result<(), RecognitionError> {
        let mut index = 0;

        for &(expected, repeat) in &self.alternatives[alt] {
            if !repeat.is_optional() && at(tokens, index).ttype != expected {
                let expecting = grammar
                    .token_display_name(expected)
                    .unwrap_or("<invalid>")
                    .to_owned();
                return Err(RecognitionError::mismatched(at(tokens, index), expecting));
            }
            while at(tokens, index).ttype == expected {
                index += 1;
                if !repeat.loops() {
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Token at `index`, clamped to the trailing EOF.
fn at(tokens: &[Token], index: usize) -> &Token {
    &tokens[index.min(tokens.len().saturating_sub(1))]
}
