//! Rules files: UTF-8 or UTF-16LE text holding a rule token list.

use std::path::Path;

use crate::errors::ParseError;
use crate::types::RuleId;

use super::tokens::{parse_rule_tokens, ParsedTokens};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Looks like UTF-16LE: a BOM, or more than a quarter of the bytes zero.
fn is_utf16le(bytes: &[u8]) -> bool {
    if bytes.starts_with(&UTF16LE_BOM) {
        return true;
    }
    let zeros = bytes.iter().filter(|b| **b == 0).count();
    zeros > bytes.len() / 4
}

/// Decode rules file bytes into text.
pub fn decode_rules_file(path: &str, bytes: &[u8]) -> Result<String, ParseError> {
    if is_utf16le(bytes) {
        let body = bytes.strip_prefix(&UTF16LE_BOM).unwrap_or(bytes);
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16(&units).map_err(|_| ParseError::InvalidEncoding {
            path: path.to_string(),
            encoding: "UTF-16LE",
        });
    }

    let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    String::from_utf8(body.to_vec()).map_err(|_| ParseError::InvalidEncoding {
        path: path.to_string(),
        encoding: "UTF-8",
    })
}

/// Read and parse a rules file.
pub fn read_rules_file(path: &Path) -> Result<ParsedTokens<RuleId>, ParseError> {
    let path_str = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|source| ParseError::RulesFileRead {
        path: path_str.clone(),
        source,
    })?;
    let text = decode_rules_file(&path_str, &bytes)?;
    let parsed = parse_rule_tokens(&text);
    tracing::debug!(
        target: "acs::parse",
        path = %path_str,
        accepted = parsed.values.len(),
        rejected = parsed.rejected.len(),
        "read rules file"
    );
    Ok(parsed)
}

/// A `-r` argument is either a path to a rules file or an inline list.
pub fn resolve_rule_arg(arg: &str) -> Result<ParsedTokens<RuleId>, ParseError> {
    let path = Path::new(arg);
    if path.is_file() {
        read_rules_file(path)
    } else {
        Ok(parse_rule_tokens(arg))
    }
}
