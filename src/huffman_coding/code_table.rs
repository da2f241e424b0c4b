//! Code tables: derivation from a tree, validation and inversion for decoding.
//!
//! A code is a string of '0' and '1' characters. Every table the codec accepts is injective and
//! prefix-free, which is what lets the decoder consume bits greedily.

use log::trace;
use rustc_hash::FxHashMap;

use super::huffman::{Node, NodeData};
use crate::error::{HufError, Result};
use crate::tools::options::SingleSymbol;
use std::collections::BTreeMap;

/// Symbol to code. Ordered so serialized metadata is identical for identical input.
pub type CodeTable = BTreeMap<char, String>;

/// Walk the tree depth first, appending '0' for a left step and '1' for a right step, and record
/// the path to every leaf.
///
/// Uses an explicit stack rather than recursion. A lone leaf at the root gets "0" or "" depending
/// on `single`.
pub fn derive_codes(root: &Node, single: SingleSymbol) -> CodeTable {
    let mut table = CodeTable::new();
    let mut stack: Vec<(&Node, String)> = vec![(root, String::new())];

    while let Some((node, path)) = stack.pop() {
        match &node.node_data {
            NodeData::Kids(left, right) => {
                let mut right_path = path.clone();
                right_path.push('1');
                stack.push((right.as_ref(), right_path));
                let mut left_path = path;
                left_path.push('0');
                stack.push((left.as_ref(), left_path));
            }
            NodeData::Leaf(sym) => {
                let code = match (path.is_empty(), single) {
                    (true, SingleSymbol::OneBit) => "0".to_string(),
                    _ => path,
                };
                trace!("{:?} -> {}", sym, code);
                table.insert(*sym, code);
            }
        }
    }
    table
}

/// True when the table is the single-symbol empty-code form.
pub fn is_empty_code_table(table: &CodeTable) -> bool {
    table.len() == 1 && table.values().all(|code| code.is_empty())
}

/// Check that every code is a non-empty run of '0'/'1', that no two symbols share a code, and
/// that no code is a prefix of another. The error is the reason the table was refused.
///
/// The single-symbol empty-code table is allowed only under `SingleSymbol::EmptyCode`.
pub fn validate(table: &CodeTable, single: SingleSymbol) -> std::result::Result<(), String> {
    if is_empty_code_table(table) {
        return match single {
            SingleSymbol::EmptyCode => Ok(()),
            SingleSymbol::OneBit => Err(
                "table holds an empty code (written with the legacy single-symbol policy)".into(),
            ),
        };
    }

    for (sym, code) in table {
        if code.is_empty() {
            return Err(format!("empty code for {:?}", sym));
        }
        if let Some(bad) = code.chars().find(|c| *c != '0' && *c != '1') {
            return Err(format!("code for {:?} contains {:?}", sym, bad));
        }
    }

    // After sorting, a code that is a prefix of any other is a prefix of its successor.
    let mut codes: Vec<&str> = table.values().map(String::as_str).collect();
    codes.sort_unstable();
    for pair in codes.windows(2) {
        if pair[0] == pair[1] {
            return Err(format!("code {} is assigned to more than one symbol", pair[0]));
        }
        if pair[1].starts_with(pair[0]) {
            return Err(format!("code {} is a prefix of {}", pair[0], pair[1]));
        }
    }
    Ok(())
}

/// Code to symbol, for the decoder. A table that fails `validate` is a decoding error.
pub fn invert(table: &CodeTable, single: SingleSymbol) -> Result<FxHashMap<String, char>> {
    validate(table, single).map_err(HufError::Decoding)?;
    Ok(table
        .iter()
        .map(|(sym, code)| (code.clone(), *sym))
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::freqs;

    fn table_of(pairs: &[(char, &str)]) -> CodeTable {
        pairs.iter().map(|(c, s)| (*c, s.to_string())).collect()
    }

    #[test]
    fn two_symbol_codes_test() {
        let root = build_tree(&freqs("aaab")).unwrap();
        let table = derive_codes(&root, SingleSymbol::OneBit);
        assert_eq!(table, table_of(&[('a', "1"), ('b', "0")]));
    }

    #[test]
    fn single_symbol_codes_test() {
        let root = build_tree(&freqs("aaaa")).unwrap();
        assert_eq!(
            derive_codes(&root, SingleSymbol::OneBit),
            table_of(&[('a', "0")])
        );
        assert_eq!(
            derive_codes(&root, SingleSymbol::EmptyCode),
            table_of(&[('a', "")])
        );
    }

    #[test]
    fn derived_tables_are_valid_test() {
        for text in ["abracadabra", "mississippi river", "ab", "αβγαβα 日本語"] {
            let root = build_tree(&freqs(text)).unwrap();
            let table = derive_codes(&root, SingleSymbol::OneBit);
            assert!(validate(&table, SingleSymbol::OneBit).is_ok(), "{}", text);
            assert_eq!(table.len(), freqs(text).len());
        }
    }

    #[test]
    fn skewed_tree_test() {
        // Fibonacci weights give the deepest possible tree for the alphabet
        let mut text = String::new();
        let weights = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
        for (i, w) in weights.iter().enumerate() {
            let c = char::from(b'a' + i as u8);
            text.extend(std::iter::repeat(c).take(*w));
        }
        let root = build_tree(&freqs(&text)).unwrap();
        let table = derive_codes(&root, SingleSymbol::OneBit);
        assert_eq!(table[&'l'].len(), 1);
        assert_eq!(table[&'a'].len(), weights.len() - 1);
        assert!(validate(&table, SingleSymbol::OneBit).is_ok());
    }

    #[test]
    fn prefix_rejected_test() {
        let table = table_of(&[('a', "0"), ('b', "01"), ('c', "11")]);
        assert_eq!(
            validate(&table, SingleSymbol::OneBit),
            Err("code 0 is a prefix of 01".to_string())
        );
        assert!(matches!(
            invert(&table, SingleSymbol::OneBit),
            Err(HufError::Decoding(_))
        ));
    }

    #[test]
    fn duplicate_rejected_test() {
        let table = table_of(&[('a', "10"), ('b', "10")]);
        assert!(validate(&table, SingleSymbol::OneBit).is_err());
    }

    #[test]
    fn bad_digit_rejected_test() {
        let table = table_of(&[('a', "0"), ('b', "12")]);
        assert!(validate(&table, SingleSymbol::OneBit).is_err());
    }

    #[test]
    fn empty_code_policy_test() {
        let table = table_of(&[('a', "")]);
        assert!(validate(&table, SingleSymbol::OneBit).is_err());
        assert!(validate(&table, SingleSymbol::EmptyCode).is_ok());
        // An empty code beside other codes is never valid
        let table = table_of(&[('a', ""), ('b', "1")]);
        assert!(validate(&table, SingleSymbol::EmptyCode).is_err());
    }

    #[test]
    fn invert_test() {
        let inv = invert(&table_of(&[('a', "1"), ('b', "0")]), SingleSymbol::OneBit).unwrap();
        assert_eq!(inv.get("1"), Some(&'a'));
        assert_eq!(inv.get("0"), Some(&'b'));
        assert_eq!(inv.len(), 2);
    }
}
