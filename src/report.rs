//! Space accounting for an encoded text.

use std::cmp::Reverse;
use std::fmt;

use crate::codes::CodeMap;
use crate::error::{Error, Result};
use crate::frequency::FrequencyMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub symbol: char,
    pub frequency: u64,
    pub code: String,
}

/// Before/after sizes of a text and its encoding, plus the per-symbol table.
#[derive(Debug, Clone)]
pub struct Report {
    /// Most frequent symbol first; equal frequencies keep the larger symbol first.
    pub rows: Vec<Row>,
    pub original: String,
    pub encoded: String,
    pub original_bytes: usize,
    pub encoded_bytes: usize,
}

impl Report {
    /// # Errors
    /// Returns `Error::MissingCode` for a counted symbol that `codes` does not cover.
    pub fn new(
        freqs: &FrequencyMap,
        codes: &CodeMap,
        original: &str,
        encoded: &str,
    ) -> Result<Self> {
        let mut rows = freqs
            .iter()
            .map(|(&symbol, &frequency)| -> Result<Row> {
                let code = codes.get(&symbol).ok_or(Error::MissingCode(symbol))?;
                Ok(Row {
                    symbol,
                    frequency,
                    code: code.clone(),
                })
            })
            .collect::<Result<Vec<Row>>>()?;
        rows.sort_by_key(|row| Reverse((row.frequency, row.symbol)));

        Ok(Self {
            rows,
            original: original.to_string(),
            encoded: encoded.to_string(),
            original_bytes: original.len(),
            encoded_bytes: bits_to_bytes(encoded.len()),
        })
    }

    /// Percentage of the original size saved by the encoding.
    pub fn space_saved(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.encoded_bytes as f64 / self.original_bytes as f64)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol\tFrequency\tCode")?;
        writeln!(f, "------\t---------\t----")?;
        for row in &self.rows {
            writeln!(f, "{}\t{}\t\t{}", row.symbol, row.frequency, row.code)?;
        }

        writeln!(f, "Original String:")?;
        writeln!(f, "{}", self.original)?;
        writeln!(f, "Encoded String:")?;
        writeln!(f, "{}", self.encoded)?;

        writeln!(f, "The original string requires {} bytes.", self.original_bytes)?;
        writeln!(f, "The encoded string requires {} bytes.", self.encoded_bytes)?;
        write!(
            f,
            "Difference in space required is {}%.",
            format_percent(self.space_saved())
        )
    }
}

/// Whole bytes needed for `bits`, rounding half a byte up.
pub fn bits_to_bytes(bits: usize) -> usize {
    (bits as f64 / 8.0).round() as usize
}

/// At most two decimals, without trailing zeros: `42.5`, `75`, `83.33`.
pub fn format_percent(value: f64) -> String {
    let fixed = format!("{value:.2}");
    match fixed.trim_end_matches('0').trim_end_matches('.') {
        "-0" | "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codes, frequency, tree};

    fn report_for(input: &str) -> Report {
        let freqs = frequency::count(input);
        let codes = codes::generate(&tree::build(&freqs).unwrap());
        let encoded = codes::encode(&codes, input).unwrap();
        Report::new(&freqs, &codes, input, &encoded).unwrap()
    }

    #[test]
    fn symbol_without_code_is_reported() {
        let freqs = frequency::count("aaabbc");
        let mut codes = codes::generate(&tree::build(&freqs).unwrap());
        let encoded = codes::encode(&codes, "aaabbc").unwrap();
        codes.remove(&'b');

        let result = Report::new(&freqs, &codes, "aaabbc", &encoded);
        assert!(matches!(result, Err(Error::MissingCode('b'))));
    }

    #[test]
    fn rounds_bits_to_nearest_byte() {
        assert_eq!(bits_to_bytes(0), 0);
        assert_eq!(bits_to_bytes(3), 0);
        assert_eq!(bits_to_bytes(4), 1);
        assert_eq!(bits_to_bytes(9), 1);
        assert_eq!(bits_to_bytes(12), 2);
    }

    #[test]
    fn formats_percent_without_trailing_zeros() {
        assert_eq!(format_percent(42.5), "42.5");
        assert_eq!(format_percent(75.0), "75");
        assert_eq!(format_percent(100.0), "100");
        assert_eq!(format_percent(83.333_333), "83.33");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(-0.001), "0");
        assert_eq!(format_percent(-12.5), "-12.5");
    }

    #[test]
    fn accounts_for_aaabbc() {
        let report = report_for("aaabbc");
        assert_eq!(report.original_bytes, 6);
        assert_eq!(report.encoded_bytes, 1);
        assert_eq!(format_percent(report.space_saved()), "83.33");
    }

    #[test]
    fn original_size_counts_utf8_bytes() {
        let report = report_for("ññ");
        assert_eq!(report.original_bytes, 4);
        // "00" rounds down to zero bytes
        assert_eq!(report.encoded_bytes, 0);
        assert_eq!(format_percent(report.space_saved()), "100");
    }

    #[test]
    fn rows_sorted_by_descending_frequency() {
        let report = report_for("aaabbcd");
        let symbols: Vec<char> = report.rows.iter().map(|row| row.symbol).collect();
        assert_eq!(symbols, vec!['a', 'b', 'd', 'c']);
    }

    #[test]
    fn renders_console_layout() {
        let rendered = report_for("aaabbc").to_string();
        let expected = "Symbol\tFrequency\tCode\n\
                        ------\t---------\t----\n\
                        a\t3\t\t0\n\
                        b\t2\t\t11\n\
                        c\t1\t\t10\n\
                        Original String:\n\
                        aaabbc\n\
                        Encoded String:\n\
                        000111110\n\
                        The original string requires 6 bytes.\n\
                        The encoded string requires 1 bytes.\n\
                        Difference in space required is 83.33%.";
        assert_eq!(rendered, expected);
    }
}
