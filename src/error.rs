//! Error types for the Huffman pipeline.

use thiserror::Error;

/// Error variants for building and applying a Huffman code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input text is empty, so there is nothing to build a code for.
    #[error("input text is empty")]
    EmptyInput,

    /// `remove_smallest` was called on an empty priority queue.
    #[error("remove_smallest called on an empty priority queue")]
    EmptyStructure,

    /// The encoder met a symbol that has no code.
    #[error("no code for symbol {0:?}")]
    MissingCode(char),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
