//! Reading the canonical text form
//!
//! Accepts exactly what the `Display` impls produce, with any amount of
//! whitespace between tokens:
//!
//! ```text
//! label     := '<' component ',' component '>'
//! component := '|True' | '|False' | '{' clause ( '/\' clause )* '}'
//! clause    := '[' ( principal ( '\/' principal )* )? ']'
//! ```
//!
//! Parsed components are returned as written (not reduced); parsed labels
//! are reduced by [`DCLabel::new`].

use crate::clause::Clause;
use crate::component::Component;
use crate::config::ParserConfig;
use crate::errors::{LabelError, LabelResult};
use crate::label::DCLabel;
use crate::principal::{Principal, RESERVED_CHARS};
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::debug;

/// Parser for label text, bounded by a [`ParserConfig`]
#[derive(Debug, Clone, Default)]
pub struct LabelParser {
    config: ParserConfig,
}

impl LabelParser {
    /// Create a parser with the given limits
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Limits in effect
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `[a \/ b]`
    pub fn parse_clause(&self, input: &str) -> LabelResult<Clause> {
        self.parse_all(input, |cursor| cursor.clause())
    }

    /// Parse `{[a] /\ [b]}`, `|True` or `|False`
    pub fn parse_component(&self, input: &str) -> LabelResult<Component> {
        self.parse_all(input, |cursor| cursor.component())
    }

    /// Parse `<S , I>`
    pub fn parse_label(&self, input: &str) -> LabelResult<DCLabel> {
        self.parse_all(input, |cursor| cursor.label())
    }

    fn parse_all<T>(
        &self,
        input: &str,
        term: impl FnOnce(&mut Cursor<'_>) -> LabelResult<T>,
    ) -> LabelResult<T> {
        let result = self.check_len(input).and_then(|()| {
            let mut cursor = Cursor::new(input, &self.config);
            let value = term(&mut cursor)?;
            cursor.finish()?;
            Ok(value)
        });
        if let Err(err) = &result {
            debug!(error = %err, "rejected label text");
        }
        result
    }

    fn check_len(&self, input: &str) -> LabelResult<()> {
        if input.len() > self.config.max_input_len {
            return Err(LabelError::InputTooLong {
                max: self.config.max_input_len,
                length: input.len(),
            });
        }
        Ok(())
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    config: &'a ParserConfig,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str, config: &'a ParserConfig) -> Self {
        Self {
            input,
            pos: 0,
            config,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume `token` (after whitespace) if present.
    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str, expected: &'static str) -> LabelResult<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(LabelError::unexpected(self.pos, expected, self.rest()))
        }
    }

    fn finish(&mut self) -> LabelResult<()> {
        self.skip_ws();
        if self.rest().is_empty() {
            Ok(())
        } else {
            Err(LabelError::TrailingInput { position: self.pos })
        }
    }

    fn principal(&mut self) -> LabelResult<Principal> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .find(|c: char| c.is_whitespace() || RESERVED_CHARS.contains(&c))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(LabelError::InvalidPrincipal { position: self.pos });
        }
        self.pos += len;
        Ok(Principal::new(&rest[..len]))
    }

    fn clause(&mut self) -> LabelResult<Clause> {
        self.expect("[", "'['")?;
        let mut principals = Vec::new();
        if !self.eat("]") {
            loop {
                principals.push(self.principal()?);
                if principals.len() > self.config.max_principals_per_clause {
                    return Err(LabelError::ClauseTooWide {
                        max: self.config.max_principals_per_clause,
                        attempted: principals.len(),
                    });
                }
                if self.eat("]") {
                    break;
                }
                self.expect("\\/", "'\\/' or ']'")?;
            }
        }
        Ok(Clause::new(principals))
    }

    fn component(&mut self) -> LabelResult<Component> {
        if self.eat("|True") {
            return Ok(Component::dc_true());
        }
        if self.eat("|False") {
            return Ok(Component::dc_false());
        }
        self.expect("{", "'{', '|True' or '|False'")?;

        let mut clauses = BTreeSet::new();
        let mut attempted = 0;
        loop {
            clauses.insert(self.clause()?);
            attempted += 1;
            if attempted > self.config.max_clauses {
                return Err(LabelError::TooManyClauses {
                    max: self.config.max_clauses,
                    attempted,
                });
            }
            if self.eat("}") {
                break;
            }
            self.expect("/\\", "'/\\' or '}'")?;
        }
        Ok(Component::Formula(clauses))
    }

    fn label(&mut self) -> LabelResult<DCLabel> {
        self.expect("<", "'<'")?;
        let secrecy = self.component()?;
        self.expect(",", "','")?;
        let integrity = self.component()?;
        self.expect(">", "'>'")?;
        Ok(DCLabel::new(secrecy, integrity))
    }
}

impl FromStr for Clause {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelParser::default().parse_clause(s)
    }
}

impl FromStr for Component {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelParser::default().parse_component(s)
    }
}

impl FromStr for DCLabel {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelParser::default().parse_label(s)
    }
}
