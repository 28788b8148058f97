/// Word extraction: compatibility-normalize, pull out runs matching the
/// word pattern (ASCII alphanumerics and underscores, optionally joined by
/// apostrophes or hyphens), then lowercase each run. Bytes that are not
/// valid UTF-8 decode to U+FFFD and separate words like any other symbol.
use rayon::prelude::*;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

const WORD_PAT: &str = r"(')*[a-zA-Z0-9_]+(('|-)[a-zA-Z0-9_]*)*";

/// Inputs with more lines than this are tokenized across the rayon pool.
const PARALLEL_LINES: usize = 1024;

pub struct WordSplitter {
    regex: fancy_regex::Regex,
}

impl WordSplitter {
    pub fn new() -> Result<Self> {
        let regex = fancy_regex::Regex::new(WORD_PAT).map_err(|e| Error::Regex(e.to_string()))?;
        Ok(WordSplitter { regex })
    }

    pub fn words(&self, text: &str) -> Vec<String> {
        let normalized: String = text.nfkc().collect();
        let mut out = Vec::new();
        for m in self.regex.find_iter(&normalized) {
            let m = match m {
                Ok(m) => m,
                Err(_) => continue,
            };
            out.push(m.as_str().to_ascii_lowercase());
        }
        out
    }

    /// Words of raw input bytes, decoded lossily.
    pub fn bytes(&self, input: &[u8]) -> Vec<String> {
        self.document(&String::from_utf8_lossy(input))
    }

    /// Words of a whole document, in order. Large inputs are split by line
    /// and tokenized in parallel.
    pub fn document(&self, text: &str) -> Vec<String> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() <= PARALLEL_LINES {
            return self.words(text);
        }
        lines
            .par_iter()
            .map(|line| self.words(line))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}
