//! Comma/newline-separated token lists.

use serde::{Deserialize, Serialize};

use crate::types::{ModuleId, RuleId};

/// Result of parsing a token list: accepted values in input order, and
/// the tokens that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTokens<T> {
    pub values: Vec<T>,
    pub rejected: Vec<String>,
}

impl<T> Default for ParsedTokens<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> ParsedTokens<T> {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append another parse, keeping order.
    pub fn extend(&mut self, other: ParsedTokens<T>) {
        self.values.extend(other.values);
        self.rejected.extend(other.rejected);
    }
}

/// Split on `,`, CR and LF; trim spaces and tabs; drop empty tokens.
/// Lines whose first non-blank character is `#` are comments.
fn split_tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(['\r', '\n'])
        .filter(|line| !line.trim_start_matches([' ', '\t']).starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(|tok| tok.trim_matches([' ', '\t']))
        .filter(|tok| !tok.is_empty())
}

/// Parse rule names. Matching is exact and case-sensitive.
pub fn parse_rule_tokens(input: &str) -> ParsedTokens<RuleId> {
    let mut parsed = ParsedTokens::default();
    for tok in split_tokens(input) {
        match RuleId::from_name(tok) {
            Some(id) => parsed.values.push(id),
            None => {
                tracing::warn!(target: "acs::parse", "Invalid rule id: {tok}");
                parsed.rejected.push(tok.to_string());
            }
        }
    }
    parsed
}

/// Parse module names against the fixed name table. Numeric ids are
/// not accepted here.
pub fn parse_module_tokens(input: &str) -> ParsedTokens<ModuleId> {
    let mut parsed = ParsedTokens::default();
    for tok in split_tokens(input) {
        match ModuleId::from_name(tok) {
            Some(id) => parsed.values.push(id),
            None => {
                tracing::warn!(target: "acs::parse", "Invalid module: {tok}");
                parsed.rejected.push(tok.to_string());
            }
        }
    }
    parsed
}

/// Parse the build-time module list, which may carry either names or
/// numeric module ids.
pub fn parse_build_module_list(input: &str) -> ParsedTokens<ModuleId> {
    let mut parsed = ParsedTokens::default();
    for tok in split_tokens(input) {
        let id = tok
            .parse::<u32>()
            .ok()
            .and_then(ModuleId::from_u32)
            .or_else(|| ModuleId::from_name(tok));
        match id {
            Some(id) => parsed.values.push(id),
            None => {
                tracing::warn!(target: "acs::parse", "Invalid build module id: {tok}");
                parsed.rejected.push(tok.to_string());
            }
        }
    }
    parsed
}
