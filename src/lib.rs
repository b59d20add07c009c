//! # huffcode
//!
//! Huffman codes for a line of text, written out as a string of `'0'`/`'1'`
//! characters, with an account of the space they save.
//!
//! ```rust
//! use huffcode::Huffman;
//!
//! let huffman = Huffman::new("aaabbc")?;
//! assert_eq!(huffman.codes()[&'a'], "0");
//! assert_eq!(huffman.encode()?, "000111110");
//!
//! let report = huffman.report()?;
//! assert_eq!(report.encoded_bytes, 1);
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! The pipeline runs strictly forward: [`frequency::count`] ->
//! [`tree::build`] -> [`codes::generate`] -> [`codes::encode`] ->
//! [`report::Report`]. [`Huffman`] runs all of it for one input.

pub mod codes;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod input;
pub mod queue;
pub mod report;
pub mod tree;

pub use codes::CodeMap;
pub use error::{Error, Result};
pub use frequency::FrequencyMap;
pub use huffman::Huffman;
pub use queue::{MinHeap, PriorityQueue, SortedArray, SortedList};
pub use report::Report;
pub use tree::Node;
