use proptest::prelude::*;
use dna_mnemonic::{
    decode_mnemonic, encode_sequence, load_wordlist, MnemonicCodec, MnemonicError, Radix, Wordlist,
};

fn numbered(n: usize) -> Wordlist {
    load_wordlist((0..n).map(|i| format!("word{i}"))).unwrap()
}

fn dice_code(mut index: usize, digits: usize) -> String {
    let mut code = vec![b'1'; digits];
    for slot in code.iter_mut().rev() {
        *slot = b'1' + (index % 6) as u8;
        index /= 6;
    }
    String::from_utf8(code).unwrap()
}

fn diceware(digits: u32) -> Wordlist {
    let n = 6usize.pow(digits);
    load_wordlist((0..n).map(|i| format!("{}\tdice{i}", dice_code(i, digits as usize)))).unwrap()
}

proptest! {
    #[test]
    fn binary_2048_roundtrip(seq in "[ACTG]{0,64}") {
        let wl = numbered(2048);
        let words = encode_sequence(&seq, &wl).unwrap();
        prop_assert_eq!(decode_mnemonic(words.words(), &wl).unwrap(), seq);
    }

    #[test]
    fn hexal_7776_roundtrip(seq in "[ACTG]{0,64}") {
        let wl = diceware(5);
        let words = encode_sequence(&seq, &wl).unwrap();
        prop_assert_eq!(decode_mnemonic(words.words(), wl.inverse()).unwrap(), seq);
    }

    #[test]
    fn small_lists_roundtrip(seq in "[ACTG]{0,64}", pick in 0usize..6) {
        let sizes = [2usize, 4, 6, 36, 256, 1296];
        let wl = numbered(sizes[pick]);
        let words = encode_sequence(&seq, &wl).unwrap();
        prop_assert_eq!(decode_mnemonic(words.words(), &wl).unwrap(), seq);
    }

    #[test]
    fn title_case_words_decode(seq in "[ACTG]{0,32}") {
        let wl = numbered(2048);
        let words = encode_sequence(&seq, &wl).unwrap();
        prop_assert_eq!(decode_mnemonic(&words.title_case(), &wl).unwrap(), seq);
    }
}

#[test]
fn actg_end_to_end() {
    let binary = numbered(2048);
    let hexal = diceware(5);
    assert_eq!(MnemonicCodec::for_size(binary.len()).unwrap().radix(), Radix::Binary);
    assert_eq!(MnemonicCodec::for_size(hexal.len()).unwrap().radix(), Radix::Hexal);
    for wl in [&binary, &hexal] {
        let words = encode_sequence("ACTG", wl).unwrap();
        assert_eq!(decode_mnemonic(words.words(), wl).unwrap(), "ACTG");
    }
}

#[test]
fn hexal_word_count_tracks_padding() {
    // 484 has four base-6 digits, padded to one 5-digit block.
    let wl = diceware(5);
    let words = encode_sequence("ACTG", &wl).unwrap();
    assert_eq!(words.words(), &["dice484".to_string()]);
    // A 20 base sequence is a 41 bit value: 16 base-6 digits, 4 blocks.
    let words = encode_sequence("TAGCCACACAGACTATTGTG", &wl).unwrap();
    assert_eq!(words.len(), 4);
}

#[test]
fn first_word_covers_left_most_bases() {
    let wl = numbered(2048);
    let a = encode_sequence("GATTACAGATTACA", &wl).unwrap();
    let b = encode_sequence("CATTACAGATTACA", &wl).unwrap();
    assert_ne!(a.words()[0], b.words()[0]);
    assert_eq!(a.words()[1..], b.words()[1..]);
}

#[test]
fn unknown_word_error() {
    let wl = numbered(2048);
    match decode_mnemonic(&["word1", "banana"], &wl) {
        Err(MnemonicError::UnknownWord(w)) => assert_eq!(w, "banana"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn corrupted_mnemonic_fails_format() {
    // "word0" alone is the value 0, which carries no cap.
    let wl = numbered(2048);
    assert!(matches!(
        decode_mnemonic(&["word0"], &wl),
        Err(MnemonicError::Format(_))
    ));
}
