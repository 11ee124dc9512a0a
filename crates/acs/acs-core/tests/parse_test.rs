//! Tests for rule/module token lists and rules files.

use acs_core::errors::ParseError;
use acs_core::parse::{
    decode_rules_file, parse_build_module_list, parse_module_tokens, parse_rule_tokens,
    read_rules_file, resolve_rule_arg,
};
use acs_core::types::{ModuleId, RuleId};
use proptest::prelude::*;

/// Tokens split on commas and newlines, trimmed, with empties dropped.
#[test]
fn test_rule_tokens_split_and_trim() {
    let parsed = parse_rule_tokens(" B_PE_01 ,\tB_PE_02\r\n\nB_GIC_01,, ");
    assert_eq!(parsed.values, vec![RuleId::B_PE_01, RuleId::B_PE_02, RuleId::B_GIC_01]);
    assert!(parsed.rejected.is_empty());
}

/// Unknown tokens are reported and the rest still parse.
#[test]
fn test_unknown_rule_tokens_are_not_fatal() {
    let parsed = parse_rule_tokens("B_PE_01,NOT_A_RULE,b_pe_02,B_PE_03");
    assert_eq!(parsed.values, vec![RuleId::B_PE_01, RuleId::B_PE_03]);
    assert_eq!(parsed.rejected, vec!["NOT_A_RULE", "b_pe_02"]);
}

/// `#` lines are comments.
#[test]
fn test_comment_lines_are_ignored() {
    let parsed = parse_rule_tokens("# PE rules\nB_PE_01\n  # B_PE_02\nB_PE_03\n");
    assert_eq!(parsed.values, vec![RuleId::B_PE_01, RuleId::B_PE_03]);
}

/// Module names match the fixed table exactly.
#[test]
fn test_module_tokens() {
    let parsed = parse_module_tokens("PCIE,MEM_MAP,pcie,POWER_WAKEUP,12");
    assert_eq!(parsed.values, vec![ModuleId::Pcie, ModuleId::MemMap, ModuleId::PowerWakeup]);
    assert_eq!(parsed.rejected, vec!["pcie", "12"]);
}

/// The build-time list accepts names and numeric ids.
#[test]
fn test_build_module_list_accepts_numbers() {
    let parsed = parse_build_module_list("1,GIC,11,99");
    assert_eq!(parsed.values, vec![ModuleId::Pe, ModuleId::Gic, ModuleId::Pcie]);
    assert_eq!(parsed.rejected, vec!["99"]);
}

/// UTF-16LE files with a BOM decode to the same tokens.
#[test]
fn test_utf16le_with_bom() {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "B_PE_01\r\nB_PE_02".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let text = decode_rules_file("rules.txt", &bytes).unwrap();
    assert_eq!(parse_rule_tokens(&text).values, vec![RuleId::B_PE_01, RuleId::B_PE_02]);
}

/// UTF-16LE without a BOM is detected from its zero bytes.
#[test]
fn test_utf16le_without_bom() {
    let bytes: Vec<u8> = "B_PE_04".encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
    let text = decode_rules_file("rules.txt", &bytes).unwrap();
    assert_eq!(text, "B_PE_04");
}

/// A UTF-8 BOM is stripped.
#[test]
fn test_utf8_bom_stripped() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"B_PE_05");
    assert_eq!(decode_rules_file("rules.txt", &bytes).unwrap(), "B_PE_05");
}

/// Invalid UTF-8 is an encoding error.
#[test]
fn test_invalid_utf8() {
    let err = decode_rules_file("rules.txt", &[b'B', 0xC3, 0x28, b'X', b'Y']).unwrap_err();
    assert!(matches!(err, ParseError::InvalidEncoding { encoding: "UTF-8", .. }));
}

/// A `-r` argument naming a file reads the file; anything else is inline.
#[test]
fn test_resolve_rule_arg_file_or_inline() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("rules.txt");
    std::fs::write(&path, "# selected\nB_PE_06\nB_PE_07\n").unwrap();

    let from_file = resolve_rule_arg(path.to_str().unwrap()).unwrap();
    assert_eq!(from_file.values, vec![RuleId::B_PE_06, RuleId::B_PE_07]);

    let inline = resolve_rule_arg("B_PE_08").unwrap();
    assert_eq!(inline.values, vec![RuleId::B_PE_08]);
}

/// A missing rules file is a read error.
#[test]
fn test_read_missing_rules_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = read_rules_file(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, ParseError::RulesFileRead { .. }));
}

proptest! {
    #[test]
    fn known_rule_names_always_parse(
        ids in prop::collection::vec(prop::sample::select(RuleId::ALL), 0..20)
    ) {
        let input = ids.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(" ,\n");
        let parsed = parse_rule_tokens(&input);
        prop_assert_eq!(parsed.values, ids);
        prop_assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn every_token_is_accepted_or_rejected(input in "[A-Z_0-9, \t\n#]{0,80}") {
        let parsed = parse_rule_tokens(&input);
        for token in &parsed.rejected {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(','));
            prop_assert!(RuleId::from_name(token).is_none());
        }
    }
}
