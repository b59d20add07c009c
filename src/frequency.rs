use std::collections::BTreeMap;

/// Occurrence count of every distinct character of a text.
pub type FrequencyMap = BTreeMap<char, u64>;

pub fn count(input: &str) -> FrequencyMap {
    let mut freq_dict = FrequencyMap::new();
    for symbol in input.chars() {
        *freq_dict.entry(symbol).or_default() += 1;
    }

    freq_dict
}
