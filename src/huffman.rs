use crate::codes::{self, CodeMap};
use crate::error::{Error, Result};
use crate::frequency::{self, FrequencyMap};
use crate::queue::{PriorityQueue, SortedArray};
use crate::report::Report;
use crate::tree::{self, Node};

/// The whole pipeline for one input text: counts, tree and codes.
pub struct Huffman<'a> {
    root: Node,
    freq_dict: FrequencyMap,
    codec_dict: CodeMap,
    input: &'a str,
}

impl<'a> Huffman<'a> {
    /// Build the code for `input` with the array-backed queue.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `input` is empty.
    pub fn new(input: &'a str) -> Result<Self> {
        Self::with_queue::<SortedArray<Node>>(input)
    }

    /// Build the code for `input`, merging nodes through the queue backend `Q`.
    pub fn with_queue<Q>(input: &'a str) -> Result<Self>
    where
        Q: PriorityQueue<Node> + Default,
    {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let freq_dict = frequency::count(input);
        let root = tree::build_with::<Q>(&freq_dict)?;
        let codec_dict = codes::generate(&root);

        Ok(Self {
            root,
            freq_dict,
            codec_dict,
            input,
        })
    }

    pub fn encode(&self) -> Result<String> {
        codes::encode(&self.codec_dict, self.input)
    }

    /// Encode the input and account for the space it saves.
    pub fn report(&self) -> Result<Report> {
        let encoded = self.encode()?;
        Report::new(&self.freq_dict, &self.codec_dict, self.input, &encoded)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn frequencies(&self) -> &FrequencyMap {
        &self.freq_dict
    }

    pub fn codes(&self) -> &CodeMap {
        &self.codec_dict
    }

    pub fn input(&self) -> &str {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::{MinHeap, SortedList};

    #[test]
    fn empty_input_builds_nothing() {
        assert!(matches!(Huffman::new(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn aaabbc_end_to_end() {
        let huffman = Huffman::new("aaabbc").unwrap();

        assert_eq!(huffman.frequencies()[&'a'], 3);
        assert_eq!(huffman.root().weight(), 6);
        assert_eq!(huffman.codes()[&'a'].len(), 1);
        assert_eq!(huffman.codes()[&'b'].len(), 2);
        assert_eq!(huffman.codes()[&'c'].len(), 2);
        assert_eq!(huffman.encode().unwrap().len(), 9);
    }

    #[test]
    fn repeated_builds_are_identical() {
        let text = "abracadabra, alakazam";
        let first = Huffman::new(text).unwrap();
        let second = Huffman::new(text).unwrap();

        assert_eq!(first.codes(), second.codes());
        assert_eq!(first.encode().unwrap(), second.encode().unwrap());
    }

    #[test]
    fn every_backend_gives_the_same_codes() {
        let text = "peter piper picked a peck of pickled peppers";
        let array = Huffman::new(text).unwrap();
        let list = Huffman::with_queue::<SortedList<Node>>(text).unwrap();
        let heap = Huffman::with_queue::<MinHeap<Node>>(text).unwrap();

        assert_eq!(array.codes(), list.codes());
        assert_eq!(array.codes(), heap.codes());
    }

    #[test]
    fn report_matches_encoding() {
        let huffman = Huffman::new("zzzz").unwrap();
        let report = huffman.report().unwrap();

        assert_eq!(report.encoded, "0000");
        assert_eq!(report.original_bytes, 4);
        assert_eq!(report.encoded_bytes, 1);
        assert_eq!(report.space_saved(), 75.0);
    }
}
