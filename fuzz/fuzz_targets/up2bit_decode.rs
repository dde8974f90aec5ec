use honggfuzz::fuzz;
use num_bigint::BigUint;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let value = BigUint::from_bytes_le(data);
            if let Ok(seq) = dna_mnemonic::up2bit::decode(&value) {
                assert_eq!(dna_mnemonic::up2bit::encode(seq.bases()), value);
            }
        });
    }
}
