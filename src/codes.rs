use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::tree::{Node, NodeType};

/// Bit string of `'0'`/`'1'` characters for every symbol of a tree.
pub type CodeMap = BTreeMap<char, String>;

/// Derive the code of every leaf from its path below `root`.
///
/// Going left appends `'0'`, going right appends `'1'`. A tree made of a single
/// leaf has no path to walk, so that symbol gets the code `"0"`.
pub fn generate(root: &Node) -> CodeMap {
    let mut codec_dict = CodeMap::new();
    fill(root, String::new(), &mut codec_dict);
    codec_dict
}

fn fill(node: &Node, code: String, dict: &mut CodeMap) {
    match node.node_type() {
        NodeType::Leaf(symbol) => {
            let code = if code.is_empty() { "0".to_string() } else { code };
            let _ = dict.insert(*symbol, code);
        }
        NodeType::Internal(ln, rn) => {
            fill(ln, format!("{}0", code), dict);
            fill(rn, format!("{}1", code), dict);
        }
    }
}

/// Replace every character of `input` with its code.
///
/// # Errors
/// Returns `Error::MissingCode` for a character that `codes` does not cover.
pub fn encode(codes: &CodeMap, input: &str) -> Result<String> {
    let mut encoded = String::new();
    for symbol in input.chars() {
        let code = codes.get(&symbol).ok_or(Error::MissingCode(symbol))?;
        encoded += code;
    }

    Ok(encoded)
}
