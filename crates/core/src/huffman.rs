//! Huffman codec for symbol sequences.
//!
//! Encoding builds a prefix-free binary code from the input's symbol
//! frequencies, concatenates per-symbol codes into one bitstream, and
//! packs the bitstream into base-36 text (see [`crate::base36`]). The
//! code table travels with the token, so decoding never rebuilds the
//! tree: it maps codes back to symbols directly and consumes the
//! bitstream greedily from the front.
//!
//! # Determinism
//!
//! Tree construction extracts the two lowest-frequency entries from a
//! min-heap ordered by (frequency, insertion order). Leaves enter the
//! heap in symbol order and merged nodes are numbered afterwards, so
//! equal frequencies always resolve the same way and identical inputs
//! produce identical tokens on every call and platform.
//!
//! # Degenerate Inputs
//!
//! A sequence with a single distinct symbol produces a tree that is just
//! one leaf. A zero-length code would emit no bits at all and lose the
//! repeat count, so the lone leaf takes the one-bit code "0" instead;
//! the table stays prefix-free and decoding needs no special case. The
//! empty sequence produces an empty table and an empty bitstream.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use crate::base36;
use crate::error::{HuffmanError, Result};

/// A node of the coding tree: a leaf holding one symbol, or an internal
/// node owning two subtrees. The tree lives only long enough to derive
/// the code table.
enum Node {
    Leaf(char),
    Internal(Box<Node>, Box<Node>),
}

/// Heap entry pairing a subtree with its weight and tie-break rank.
struct HeapEntry {
    freq: u64,
    order: u64,
    node: Node,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.freq, self.order).cmp(&(other.freq, other.order))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Count symbol occurrences. Ordered so leaves seed the heap in symbol
/// order, which the tie-break depends on.
fn frequency_table(seq: &str) -> BTreeMap<char, u64> {
    let mut freqs = BTreeMap::new();
    for symbol in seq.chars() {
        *freqs.entry(symbol).or_insert(0) += 1;
    }
    freqs
}

/// Combine leaves into a single tree, or None for an empty table.
///
/// The lighter of each extracted pair becomes the left child, so it
/// takes the '0' branch.
fn build_tree(freqs: &BTreeMap<char, u64>) -> Option<Node> {
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut order = 0u64;
    for (&symbol, &freq) in freqs {
        heap.push(Reverse(HeapEntry {
            freq,
            order,
            node: Node::Leaf(symbol),
        }));
        order += 1;
    }

    while heap.len() > 1 {
        // Length checked, both pops succeed
        let Reverse(lighter) = heap.pop().unwrap();
        let Reverse(heavier) = heap.pop().unwrap();
        heap.push(Reverse(HeapEntry {
            freq: lighter.freq + heavier.freq,
            order,
            node: Node::Internal(Box::new(lighter.node), Box::new(heavier.node)),
        }));
        order += 1;
    }

    heap.pop().map(|Reverse(entry)| entry.node)
}

/// Walk the tree once, assigning '0' on left descent and '1' on right.
fn assign_codes(node: &Node, prefix: String, codes: &mut BTreeMap<char, String>) {
    match node {
        Node::Leaf(symbol) => {
            // Only a root that is itself a leaf arrives with an empty
            // prefix; it takes "0" so the repeat count stays encoded.
            let code = if prefix.is_empty() {
                "0".to_owned()
            } else {
                prefix
            };
            codes.insert(*symbol, code);
        }
        Node::Internal(left, right) => {
            assign_codes(left, format!("{prefix}0"), codes);
            assign_codes(right, format!("{prefix}1"), codes);
        }
    }
}

/// Build the prefix-free code table for a sequence.
///
/// Every distinct symbol of `seq` appears exactly once; the empty
/// sequence yields an empty table.
pub fn code_table(seq: &str) -> BTreeMap<char, String> {
    let freqs = frequency_table(seq);
    let mut codes = BTreeMap::new();
    if let Some(root) = build_tree(&freqs) {
        assign_codes(&root, String::new(), &mut codes);
    }
    codes
}

/// Encode a sequence into its code table and packed bitstream.
///
/// The bitstream is each input symbol's code concatenated in sequence
/// order, packed into base-36 text with the sentinel bit preserved.
pub fn encode(seq: &str) -> Result<(BTreeMap<char, String>, String)> {
    let codes = code_table(seq);
    let mut bits = String::new();
    for symbol in seq.chars() {
        // The table was built from this sequence; the lookup cannot miss
        bits.push_str(&codes[&symbol]);
    }
    let packed = base36::pack_bits(&bits)?;
    Ok((codes, packed))
}

/// Decode a packed bitstream using a stored code table.
///
/// Builds the code-to-symbol mapping straight from the table and
/// repeatedly consumes the code found at the front of the remaining
/// bits. Prefix-freeness makes the match unambiguous.
///
/// # Errors
/// - Propagates base-36 unpacking errors for a corrupted packed field
/// - `HuffmanError::UndecodableBits` when the remaining bits match no
///   code in the table
pub fn decode(codes: &BTreeMap<char, String>, packed: &str) -> Result<String> {
    let bits = base36::unpack_bits(packed)?;
    let by_code: HashMap<&str, char> = codes
        .iter()
        .map(|(&symbol, code)| (code.as_str(), symbol))
        .collect();

    let mut seq = String::new();
    let mut pos = 0;
    while pos < bits.len() {
        let mut len = 1;
        let symbol = loop {
            if pos + len > bits.len() {
                return Err(HuffmanError::UndecodableBits { position: pos }.into());
            }
            if let Some(&symbol) = by_code.get(&bits[pos..pos + len]) {
                break symbol;
            }
            len += 1;
        };
        seq.push(symbol);
        pos += len;
    }
    Ok(seq)
}
