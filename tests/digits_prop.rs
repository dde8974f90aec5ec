use num_bigint::BigUint;
use quickcheck::quickcheck;
use dna_mnemonic::digits::{from_digits, int_log, is_full_base, to_digits};

quickcheck! {
    fn digits_roundtrip(n: u64, base: u8) -> bool {
        let base = u32::from(base.max(2));
        let value = BigUint::from(n);
        let digits = to_digits(&value, base).unwrap();
        digits.iter().all(|&d| u32::from(d) < base)
            && digits.last() != Some(&0)
            && from_digits(&digits, base).unwrap() == value
    }

    fn trailing_zeros_add_nothing(n: u64, pad: u8) -> bool {
        let value = BigUint::from(n);
        let mut digits = to_digits(&value, 6).unwrap();
        digits.extend(std::iter::repeat(0).take(pad as usize % 16));
        from_digits(&digits, 6).unwrap() == value
    }

    fn powers_are_full(exp: u8) -> bool {
        let two = 1u64 << (exp % 40);
        let six = 6u64.pow(u32::from(exp % 20));
        is_full_base(two, 2)
            && is_full_base(six, 6)
            && int_log(two, 2) == u32::from(exp % 40)
            && int_log(six, 6) == u32::from(exp % 20)
    }

    fn neighbours_of_powers_are_not_full(exp: u8) -> bool {
        let six = 6u64.pow(u32::from(exp % 20 + 1));
        !is_full_base(six - 1, 6) && !is_full_base(six + 1, 6)
    }
}
