//! Lossless conversion between DNA sequences and word mnemonics.
//!
//! A sequence over `A`, `C`, `T`, `G` is packed into a capped up2bit integer
//! ([`up2bit`]), the integer is split into base-2 or base-6 digit blocks
//! ([`digits`]) and every block selects one word from a validated word list
//! ([`wordlist`], [`mnemonic`]).
//!
//! ```
//! use dna_mnemonic::{decode_mnemonic, encode_sequence, load_wordlist};
//!
//! let lines: Vec<String> = (0..2048).map(|i| format!("word{i}")).collect();
//! let wordlist = load_wordlist(&lines).unwrap();
//! let words = encode_sequence("ACTG", &wordlist).unwrap();
//! assert_eq!(words.words(), &["word484".to_string()]);
//! assert_eq!(decode_mnemonic(words.words(), &wordlist).unwrap(), "ACTG");
//! ```

pub mod config;
pub mod digits;
pub mod error;
pub mod io_utils;
pub mod mnemonic;
pub mod up2bit;
pub mod wordlist;

use num_bigint::BigUint;

pub use config::Config;
pub use error::MnemonicError;
pub use mnemonic::{Mnemonic, MnemonicCodec, Radix};
pub use up2bit::{Base, Sequence};
pub use wordlist::{InverseWordlist, Wordlist};

/// Encode a sequence string as an up2bit integer.
pub fn up2bit_encode(sequence: &str) -> Result<BigUint, MnemonicError> {
    let sequence: Sequence = sequence.parse()?;
    Ok(up2bit::encode(sequence.bases()))
}

/// Decode an up2bit integer into a sequence string.
pub fn up2bit_decode(value: &BigUint) -> Result<String, MnemonicError> {
    up2bit::decode(value).map(|s| s.to_string())
}

/// Parse and validate word-list lines.
pub fn load_wordlist<I, S>(lines: I) -> Result<Wordlist, MnemonicError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Wordlist::from_lines(lines)
}

/// Encode a sequence string as words of `wordlist`.
pub fn encode_sequence(sequence: &str, wordlist: &Wordlist) -> Result<Mnemonic, MnemonicError> {
    let sequence: Sequence = sequence.parse()?;
    mnemonic::encode(&sequence, wordlist)
}

/// Decode words back to a sequence string using a [`Wordlist`] or
/// [`InverseWordlist`].
pub fn decode_mnemonic<S, W>(words: &[S], wordlist: &W) -> Result<String, MnemonicError>
where
    S: AsRef<str>,
    W: AsRef<InverseWordlist> + ?Sized,
{
    mnemonic::decode(words, wordlist).map(|s| s.to_string())
}
