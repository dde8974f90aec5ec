//! Conversion between up2bit values and word lists.
//!
//! The up2bit integer is cut into fixed-size digit blocks, least significant
//! block first, and each block indexes one word. Lists whose size is a power
//! of 6 use base-6 blocks ("hexal"), lists whose size is a power of 2 use
//! bit blocks. The first word therefore covers the left-most bases of the
//! sequence.

use std::fmt;

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use serde::Serialize;

use crate::digits::{from_digits, int_log, is_full_base, to_digits};
use crate::up2bit::{self, Sequence};
use crate::wordlist::{InverseWordlist, Wordlist};
use crate::MnemonicError;

/// Digit mode chosen from the word-list size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Hexal,
    Binary,
}

impl Radix {
    /// Hexal wins when a size is full in both bases (only `1`).
    pub fn for_size(words: usize) -> Option<Self> {
        let n = words as u64;
        if is_full_base(n, 6) {
            Some(Radix::Hexal)
        } else if is_full_base(n, 2) {
            Some(Radix::Binary)
        } else {
            None
        }
    }

    pub fn base(self) -> u32 {
        match self {
            Radix::Hexal => 6,
            Radix::Binary => 2,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Hexal => f.write_str("hexal"),
            Radix::Binary => f.write_str("binary"),
        }
    }
}

/// Block layout for a word list of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MnemonicCodec {
    radix: Radix,
    block_size: usize,
    words: usize,
}

impl MnemonicCodec {
    pub fn for_size(words: usize) -> Result<Self, MnemonicError> {
        let radix = Radix::for_size(words).ok_or(MnemonicError::InvalidWordlistSize(words))?;
        let block_size = int_log(words as u64, u64::from(radix.base())) as usize;
        if block_size == 0 {
            return Err(MnemonicError::InvalidWordlistSize(words));
        }
        Ok(Self {
            radix,
            block_size,
            words,
        })
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Digits of the chosen radix consumed per word.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Split `value` into word indices, least significant block first.
    pub fn value_to_indices(&self, value: &BigUint) -> Result<Vec<usize>, MnemonicError> {
        match self.radix {
            Radix::Hexal => {
                let mut digits = to_digits(value, 6)?;
                let padded = digits.len().div_ceil(self.block_size) * self.block_size;
                digits.resize(padded, 0);
                Ok(digits
                    .chunks(self.block_size)
                    .map(|chunk| chunk.iter().rev().fold(0usize, |acc, &d| acc * 6 + d as usize))
                    .collect())
            }
            Radix::Binary => {
                let mask = (BigUint::one() << self.block_size) - 1u32;
                let mut rest = value.clone();
                let mut indices = Vec::new();
                while !rest.is_zero() {
                    let block = (&rest & &mask)
                        .to_usize()
                        .ok_or_else(|| MnemonicError::Format("block exceeds usize".into()))?;
                    indices.push(block);
                    rest >>= self.block_size;
                }
                Ok(indices)
            }
        }
    }

    /// Reassemble a value from word indices, least significant block first.
    pub fn indices_to_value(&self, indices: &[usize]) -> Result<BigUint, MnemonicError> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.words) {
            return Err(MnemonicError::Format(format!(
                "word index {bad} out of range for {} words",
                self.words
            )));
        }
        match self.radix {
            Radix::Hexal => {
                let mut digits = Vec::with_capacity(indices.len() * self.block_size);
                for &index in indices {
                    let mut block = to_digits(&BigUint::from(index), 6)?;
                    block.resize(self.block_size, 0);
                    digits.extend_from_slice(&block);
                }
                from_digits(&digits, 6)
            }
            Radix::Binary => Ok(indices
                .iter()
                .enumerate()
                .fold(BigUint::zero(), |acc, (i, &index)| {
                    acc | (BigUint::from(index) << (self.block_size * i))
                })),
        }
    }
}

/// An ordered list of lower-case words, least significant block first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Mnemonic(Vec<String>);

impl Mnemonic {
    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Words with their first letter upper-cased, for display.
    pub fn title_case(&self) -> Vec<String> {
        self.0.iter().map(|w| title_case(w)).collect()
    }

    pub fn render(&self, separator: &str, title: bool) -> String {
        if title {
            self.title_case().join(separator)
        } else {
            self.0.join(separator)
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Encode a sequence as words of `wordlist`.
pub fn encode(sequence: &Sequence, wordlist: &Wordlist) -> Result<Mnemonic, MnemonicError> {
    let codec = MnemonicCodec::for_size(wordlist.len())?;
    let value = up2bit::encode(sequence.bases());
    let indices = codec.value_to_indices(&value)?;
    debug!(
        "encoding {} bases ({} bits) as {} {} words of {} digits",
        sequence.len(),
        value.bits(),
        indices.len(),
        codec.radix(),
        codec.block_size()
    );
    indices
        .into_iter()
        .map(|index| {
            trace!("block index {index}");
            wordlist
                .get(index)
                .map(str::to_string)
                .ok_or_else(|| MnemonicError::Format(format!("no word for index {index}")))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Mnemonic)
}

/// Decode mnemonic words back into a sequence. Accepts a [`Wordlist`] or an
/// [`InverseWordlist`]; lookup is case-insensitive.
pub fn decode<S, W>(words: &[S], wordlist: &W) -> Result<Sequence, MnemonicError>
where
    S: AsRef<str>,
    W: AsRef<InverseWordlist> + ?Sized,
{
    let inverse = wordlist.as_ref();
    let codec = MnemonicCodec::for_size(inverse.len())?;
    let indices = words
        .iter()
        .map(|word| {
            let word = word.as_ref().to_lowercase();
            inverse.get(&word).ok_or(MnemonicError::UnknownWord(word))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let value = codec.indices_to_value(&indices)?;
    debug!(
        "decoded {} {} words into a {} bit value",
        indices.len(),
        codec.radix(),
        value.bits()
    );
    up2bit::decode(&value)
}
