//! Rule and module token parsing.
//!
//! Unknown tokens are reported and skipped; they never fail a parse.

pub mod rules_file;
pub mod tokens;

pub use rules_file::{decode_rules_file, read_rules_file, resolve_rule_arg};
pub use tokens::{parse_build_module_list, parse_module_tokens, parse_rule_tokens, ParsedTokens};
