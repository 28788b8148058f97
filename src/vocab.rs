/// Vocabulary files: whitespace-separated words (forbidden list) and
/// whitespace-separated `old new` pairs (translation list).
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::lexicon::Lexicon;

pub const DEFAULT_BADSPEAK: &str = "badspeak.txt";
pub const DEFAULT_NEWSPEAK: &str = "newspeak.txt";

pub fn parse_badspeak(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Pairs up tokens in order. On an odd count, returns the 1-based index of
/// the unpaired word as the error.
pub fn parse_newspeak(text: &str) -> std::result::Result<Vec<(&str, &str)>, usize> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() % 2 != 0 {
        return Err(words.len());
    }
    Ok(words.chunks_exact(2).map(|p| (p[0], p[1])).collect())
}

/// Invalid UTF-8 decodes to U+FFFD rather than failing the load.
fn read(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Load both vocabulary files into `lex`. Returns how many forbidden words
/// and translation pairs were read.
pub fn load(lex: &mut Lexicon, badspeak: &Path, newspeak: &Path) -> Result<(usize, usize)> {
    let bad_text = read(badspeak)?;
    let bad = parse_badspeak(&bad_text);
    for word in &bad {
        lex.forbid(word)?;
    }
    tracing::info!(path = %badspeak.display(), words = bad.len(), "loaded forbidden words");

    let new_text = read(newspeak)?;
    let pairs = parse_newspeak(&new_text).map_err(|n| Error::Vocab {
        path: PathBuf::from(newspeak),
        message: format!("word {n} has no replacement"),
    })?;
    for (old, new) in &pairs {
        lex.translate(old, new)?;
    }
    tracing::info!(path = %newspeak.display(), pairs = pairs.len(), "loaded translations");

    Ok((bad.len(), pairs.len()))
}
