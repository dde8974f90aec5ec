//! up2bit encoding of DNA sequences.
//!
//! A sequence is stored as a little-endian run of 2-bit codes with a `01`
//! cap above the last base:
//!
//! ```text
//!  -  G  T  C  A
//! 01 11 10 01 00      "ACTG" == 484
//! ```
//!
//! The left-most base sits in the least significant bits, so the cap always
//! marks where real sequence data ends and no length has to be stored.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::MnemonicError;

/// A single nucleotide. The discriminant is its 2-bit up2bit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Base {
    A = 0,
    C = 1,
    T = 2,
    G = 3,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::T, Base::G];

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Map the low two bits of `code` to a base.
    #[inline]
    pub fn from_code(code: u8) -> Self {
        Self::ALL[(code & 0b11) as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Base::A),
            'C' => Some(Base::C),
            'T' => Some(Base::T),
            'G' => Some(Base::G),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::T => 'T',
            Base::G => 'G',
        }
    }
}

/// An immutable run of bases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Base>);

impl Sequence {
    pub fn bases(&self) -> &[Base] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Sequence {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, character)| {
                Base::from_char(character)
                    .ok_or(MnemonicError::InvalidBaseCharacter { character, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Sequence)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base.to_char())?;
        }
        Ok(())
    }
}

/// Encode `bases` as a capped up2bit integer.
///
/// Equivalent to starting from `1` and, for each base from last to first,
/// shifting left by two and adding the base code. Base `i` lands in bits
/// `2i..2i+2` and the cap bit at `2n`.
pub fn encode(bases: &[Base]) -> BigUint {
    let n = bases.len();
    let mut bytes = vec![0u8; n / 4 + 1];
    for (i, base) in bases.iter().enumerate() {
        bytes[i / 4] |= base.code() << (2 * (i % 4));
    }
    bytes[n / 4] |= 1 << (2 * (n % 4));
    BigUint::from_bytes_le(&bytes)
}

/// Decode a capped up2bit integer back into a sequence.
///
/// The value must have an odd bit length and its top 2-bit group must be the
/// `01` cap. `1` decodes to the empty sequence.
pub fn decode(value: &BigUint) -> Result<Sequence, MnemonicError> {
    let bits = value.bits();
    if bits % 2 == 0 {
        return Err(MnemonicError::Format(format!(
            "bit length {bits} is even, expected an odd length with a 01 cap"
        )));
    }
    let n = ((bits - 1) / 2) as usize;
    let bytes = value.to_bytes_le();
    let code_at = |i: usize| (bytes[i / 4] >> (2 * (i % 4))) & 0b11;

    let cap = code_at(n);
    if cap != 0b01 {
        return Err(MnemonicError::Format(format!("terminal code {cap:02b} is not the 01 cap")));
    }
    Ok(Sequence((0..n).map(|i| Base::from_code(code_at(i))).collect()))
}
