//! Word-list loading and validation.
//!
//! Two line formats are understood and may be mixed:
//!
//! * Diceware: `"<dice code>\t<word>"` where the code is a base-6 number
//!   written with the characters `1..=6`, most significant first
//!   (`11111` is 0, `11112` is 1, `66666` is 7775).
//! * Flat: `"<word>"`, indexed by its 0-based line number. Every line,
//!   blank or not, occupies its line number; a blank line is an error.
//!
//! A loaded list is complete (every index `0..N` has a word), holds no
//! duplicate words and its size is an exact power of 2 or 6.

use std::collections::HashMap;
use std::io::BufRead;

use log::debug;
use sha2::{Digest, Sha256};

use crate::digits::is_full_base;
use crate::MnemonicError;

/// Longest accepted dice code. `6^8` words is far beyond any real list and
/// keeps a corrupt code from allocating an enormous table.
pub const MAX_DICE_DIGITS: usize = 8;

/// Decode a `123456`-style dice code into its index.
pub fn decode_dice(code: &str, line: usize) -> Result<usize, MnemonicError> {
    let invalid = || MnemonicError::InvalidDiceCode {
        line,
        code: code.to_string(),
    };
    if code.is_empty() || code.chars().count() > MAX_DICE_DIGITS {
        return Err(invalid());
    }
    code.chars().try_fold(0usize, |acc, c| match c {
        '1'..='6' => Ok(acc * 6 + (c as usize - '1' as usize)),
        _ => Err(invalid()),
    })
}

/// Lower-cased word to index lookup. Always a bijection with its
/// [`Wordlist`].
#[derive(Debug, Clone, Default)]
pub struct InverseWordlist {
    index: HashMap<String, usize>,
}

impl InverseWordlist {
    /// Build the inverse of an index-ordered word slice.
    pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Self, MnemonicError> {
        let mut index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let word = word.as_ref().to_lowercase();
            if let Some(&first) = index.get(&word) {
                return Err(MnemonicError::DuplicateWord {
                    word,
                    first,
                    second: i,
                });
            }
            index.insert(word, i);
        }
        Ok(Self { index })
    }

    /// Case-insensitive lookup.
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl AsRef<InverseWordlist> for InverseWordlist {
    fn as_ref(&self) -> &InverseWordlist {
        self
    }
}

/// A validated, read-only word list.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    inverse: InverseWordlist,
}

impl Wordlist {
    /// Parse and validate word-list lines. Fails without returning a partial
    /// list.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MnemonicError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slots: Vec<Option<String>> = Vec::new();
        for (position, line) in lines.into_iter().enumerate() {
            let line_no = position + 1;
            let line = line.as_ref().trim();
            let (index, word) = match line.split_once('\t') {
                Some((_, word)) if word.contains('\t') => {
                    return Err(MnemonicError::InvalidLine {
                        line: line_no,
                        reason: "more than one tab".into(),
                    });
                }
                Some((code, word)) => (decode_dice(code.trim(), line_no)?, word.trim()),
                None => (position, line),
            };
            if word.is_empty() {
                return Err(MnemonicError::InvalidLine {
                    line: line_no,
                    reason: "no word".into(),
                });
            }

            if slots.len() <= index {
                slots.resize(index + 1, None);
            }
            if slots[index].is_some() {
                return Err(MnemonicError::DuplicateIndex(index));
            }
            slots[index] = Some(word.to_lowercase());
        }

        let words = slots
            .into_iter()
            .enumerate()
            .map(|(i, w)| w.ok_or(MnemonicError::MissingIndex(i)))
            .collect::<Result<Vec<_>, _>>()?;

        let total = words.len();
        let size = total as u64;
        if total < 2 || !(is_full_base(size, 2) || is_full_base(size, 6)) {
            return Err(MnemonicError::InvalidWordlistSize(total));
        }

        let inverse = InverseWordlist::build(&words)?;
        debug!("loaded word list with {total} words");
        Ok(Self { words, inverse })
    }

    /// Read a word list from an already opened stream.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MnemonicError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::from_lines(lines)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn inverse(&self) -> &InverseWordlist {
        &self.inverse
    }

    /// Hex SHA-256 over the words in index order, newline separated.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                hasher.update(b"\n");
            }
            hasher.update(word.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl AsRef<InverseWordlist> for Wordlist {
    fn as_ref(&self) -> &InverseWordlist {
        &self.inverse
    }
}
