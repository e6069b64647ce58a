//! Fuzz target for `find_longest_orf`.
//!
//! Any reported ORF must lie inside the sequence, start with the start codon,
//! and end with a stop codon in the same frame.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqprobe::orf::{find_longest_orf, CODON_LEN, START_CODON, STOP_CODONS};

fuzz_target!(|data: &[u8]| {
    let orf = find_longest_orf(data);

    assert_eq!(orf.length() % CODON_LEN, 0);
    assert!(orf.length() <= data.len());

    match (orf.frame(), orf.start()) {
        (Some(frame), Some(start)) => {
            let end = start + orf.length();
            assert_eq!(start % CODON_LEN, frame.offset());
            assert_eq!(&data[start..start + CODON_LEN], &START_CODON[..]);
            assert!(STOP_CODONS
                .iter()
                .any(|stop| &data[end - CODON_LEN..end] == &stop[..]));
        }
        (None, None) => assert_eq!(orf.length(), 0),
        other => panic!("inconsistent ORF result: {other:?}"),
    }
});
