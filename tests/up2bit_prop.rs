use num_bigint::BigUint;
use proptest::prelude::*;
use dna_mnemonic::{up2bit_decode, up2bit_encode, MnemonicError};

proptest! {
    #[test]
    fn sequence_roundtrip(seq in "[ACTG]{0,32}") {
        let value = up2bit_encode(&seq).unwrap();
        prop_assert_eq!(value.bits() % 2, 1);
        prop_assert_eq!(value.bits(), 2 * seq.len() as u64 + 1);
        prop_assert_eq!(up2bit_decode(&value).unwrap(), seq);
    }

    #[test]
    fn long_sequence_roundtrip(seq in "[ACTG]{100,400}") {
        let value = up2bit_encode(&seq).unwrap();
        prop_assert_eq!(up2bit_decode(&value).unwrap(), seq);
    }

    #[test]
    fn even_bit_lengths_never_decode(raw in any::<u64>()) {
        let value = BigUint::from(raw);
        if value.bits() % 2 == 0 {
            prop_assert!(matches!(up2bit_decode(&value), Err(MnemonicError::Format(_))));
        } else {
            prop_assert_eq!(up2bit_encode(&up2bit_decode(&value).unwrap()).unwrap(), value);
        }
    }

    #[test]
    fn invalid_characters_rejected(prefix in "[ACTG]{0,8}", bad in "[^ACTG]", suffix in "[ACTG]{0,8}") {
        let seq = format!("{prefix}{bad}{suffix}");
        let is_invalid_char = matches!(
            up2bit_encode(&seq),
            Err(MnemonicError::InvalidBaseCharacter { position, .. }) if position == prefix.len()
        );
        prop_assert!(is_invalid_char);
    }
}

#[test]
fn regression_vectors() {
    assert_eq!(up2bit_encode("").unwrap(), BigUint::from(1u8));
    assert_eq!(up2bit_encode("ACTG").unwrap(), BigUint::from(484u32));
    assert_eq!(up2bit_encode("A").unwrap(), BigUint::from(4u8));
    assert_eq!(up2bit_encode("G").unwrap(), BigUint::from(7u8));
    assert_eq!(up2bit_decode(&BigUint::from(484u32)).unwrap(), "ACTG");
}

#[test]
fn zero_has_no_cap() {
    assert!(matches!(
        up2bit_decode(&BigUint::from(0u8)),
        Err(MnemonicError::Format(_))
    ));
}
