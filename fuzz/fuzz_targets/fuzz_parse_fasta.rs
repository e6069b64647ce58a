//! Fuzz target for `parse_fasta`.
//!
//! Arbitrary bytes must either parse or produce a format error, never panic.
//! Parsed records must survive analysis with any small k.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqprobe::kmer::KmerLength;
use seqprobe::reader::{parse_fasta, ParseOptions};
use seqprobe::run::analyze;

fuzz_target!(|data: &[u8]| {
    let Some((&k, text)) = data.split_first() else {
        return;
    };
    let Ok(k) = KmerLength::new(usize::from(k % 16) + 1) else {
        return;
    };

    let options = ParseOptions {
        lenient: k.get() % 2 == 0,
        ..ParseOptions::default()
    };

    if let Ok(records) = parse_fasta(text, options) {
        let analysis = analyze(&records, k);
        assert_eq!(analysis.summary.total_sequences, records.len());
        assert_eq!(analysis.orfs.len(), records.len());

        let windows: usize = records.iter().map(|r| k.window_count(r.len())).sum();
        assert_eq!(analysis.repeats.total_windows(), windows as u64);
    }
});
