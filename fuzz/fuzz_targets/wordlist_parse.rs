use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(text) = std::str::from_utf8(data) {
                if let Ok(wl) = dna_mnemonic::Wordlist::from_lines(text.lines()) {
                    for (i, word) in wl.words().iter().enumerate() {
                        assert_eq!(wl.inverse().get(word), Some(i));
                    }
                }
            }
        });
    }
}
