/// Verdict collection and the three notice templates.
use std::io::{self, Write};

use crate::bst::Tree;
use crate::error::Result;
use crate::lexicon::{Lexicon, Verdict};
use crate::stats::Stats;

pub const MIXSPEAK_NOTICE: &str = "\
Dear Comrade,

You have chosen to use degenerate words that may cause hurt
feelings or cause your comrades to think unpleasant thoughts.
This is doubleplus bad. To correct your wrongthink and
preserve community consensus we will be sending you to joycamp.

Your errors, followed by the oldspeak you must unlearn
and the newspeak to use in its place:

";

pub const BADSPEAK_NOTICE: &str = "\
Dear Comrade,

You have chosen to use degenerate words that may cause hurt
feelings or cause your comrades to think unpleasant thoughts.
This is doubleplus bad. To correct your wrongthink and
preserve community consensus we will be sending you to joycamp.

Your errors:

";

pub const GOODSPEAK_NOTICE: &str = "\
Dear Comrade,

Submitting your text helps to preserve feelings and prevent
badthink. Some of the words that you used are not goodspeak.
The list shows how to turn the oldspeak words into newspeak.

";

/// Distinct offending words seen in a stream, each list in key order.
#[derive(Default)]
pub struct Offenses {
    pub forbidden: Tree,
    pub translatable: Tree,
    /// Branch steps spent building the two lists.
    pub stats: Stats,
}

impl Offenses {
    pub fn new() -> Self {
        Offenses::default()
    }

    /// Classify each word and remember the offending ones. Returns the number
    /// of filter false positives seen.
    pub fn scan<'w, I>(&mut self, lex: &mut Lexicon, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut false_positives = 0;
        for word in words {
            match lex.classify(word) {
                Verdict::Clean => {}
                Verdict::FalsePositive => false_positives += 1,
                Verdict::Forbidden { word } => {
                    self.forbidden.insert(word, None, &mut self.stats)?;
                }
                Verdict::Translatable { word, replacement } => {
                    self.translatable.insert(word, Some(replacement), &mut self.stats)?;
                }
            }
        }
        Ok(false_positives)
    }

    pub fn is_clean(&self) -> bool {
        self.forbidden.is_empty() && self.translatable.is_empty()
    }

    /// Write the notice matching what was found; nothing for a clean stream.
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_clean() {
            return Ok(());
        }
        match (self.forbidden.is_empty(), self.translatable.is_empty()) {
            (false, false) => {
                out.write_all(MIXSPEAK_NOTICE.as_bytes())?;
                self.forbidden.print(out)?;
                self.translatable.print(out)
            }
            (false, true) => {
                out.write_all(BADSPEAK_NOTICE.as_bytes())?;
                self.forbidden.print(out)
            }
            _ => {
                out.write_all(GOODSPEAK_NOTICE.as_bytes())?;
                self.translatable.print(out)
            }
        }
    }
}
