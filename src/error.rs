use thiserror::Error;

#[derive(Error, Debug)]
pub enum MnemonicError {
    /// A sequence contained something other than `A`, `C`, `T` or `G`.
    #[error("invalid base '{character}' at position {position}")]
    InvalidBaseCharacter { character: char, position: usize },

    /// Malformed up2bit value (even bit length or missing cap).
    #[error("up2bit format error: {0}")]
    Format(String),

    /// Two word-list lines claimed the same index.
    #[error("duplicate word-list index {0}")]
    DuplicateIndex(usize),

    /// An index below the highest seen index has no word.
    #[error("missing word for index {0}")]
    MissingIndex(usize),

    /// Word count is not a full power of 2 or 6.
    #[error("total words {0} is not a full range in base-2 or base-6")]
    InvalidWordlistSize(usize),

    /// The same word appears at two indices.
    #[error("word '{word}' appears at index {first} and {second}")]
    DuplicateWord {
        word: String,
        first: usize,
        second: usize,
    },

    /// Dice code with characters outside `1..=6`.
    #[error("invalid dice code '{code}' on line {line}")]
    InvalidDiceCode { line: usize, code: String },

    /// Word-list line with no word or a stray tab.
    #[error("invalid word-list line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    /// Mnemonic word not present in the word list.
    #[error("unknown word '{0}'")]
    UnknownWord(String),

    #[error("radix {0} out of range 2..=256")]
    InvalidRadix(u32),

    #[error("digit {digit} out of range for base {base}")]
    InvalidDigit { digit: u8, base: u32 },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
