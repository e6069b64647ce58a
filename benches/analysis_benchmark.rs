use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqprobe::input::Input;
use seqprobe::kmer::KmerLength;
use seqprobe::orf::find_longest_orf;
use seqprobe::reader::{read_fasta, ParseOptions};
use seqprobe::record::{RecordSet, SequenceRecord};
use seqprobe::repeat::count_repeats;
use seqprobe::run::analyze;
use std::io::Write;
use tempfile::NamedTempFile;

/// Deterministic codon-rich sequence of the given length.
fn synthetic_sequence(len: usize) -> Vec<u8> {
    const CODONS: [&[u8]; 8] = [b"ATG", b"AAA", b"CCC", b"GGT", b"TAA", b"ACG", b"TGA", b"CAT"];
    let mut seq = Vec::with_capacity(len + 3);
    let mut state: u32 = 0x9E37_79B9;
    while seq.len() < len {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        seq.extend_from_slice(CODONS[(state % 8) as usize]);
    }
    seq.truncate(len);
    seq
}

fn synthetic_records(count: usize, len: usize) -> RecordSet {
    (0..count)
        .map(|i| SequenceRecord::new(format!("seq{i}"), synthetic_sequence(len + i)))
        .collect()
}

fn bench_find_longest_orf(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_longest_orf");

    for len in [300, 3_000, 30_000] {
        let seq = synthetic_sequence(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &seq, |b, seq| {
            b.iter(|| find_longest_orf(black_box(seq)))
        });
    }

    group.finish();
}

fn bench_count_repeats(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_repeats");
    let records = synthetic_records(100, 1_000);

    for k in [3, 8, 12] {
        let k_len = KmerLength::new(k).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(k), &k_len, |b, &k_len| {
            b.iter(|| count_repeats(black_box(&records), k_len))
        });
    }

    group.finish();
}

fn bench_read_and_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_and_analyze");

    let mut file = NamedTempFile::new().unwrap();
    for (i, chunk) in synthetic_sequence(32_000).chunks(320).enumerate() {
        writeln!(file, ">seq{i}").unwrap();
        for line in chunk.chunks(80) {
            file.write_all(line).unwrap();
            writeln!(file).unwrap();
        }
    }
    let input = Input::File(file.path().to_path_buf());
    let k = KmerLength::new(5).unwrap();

    group.bench_function("100x320bp", |b| {
        b.iter(|| {
            let records = read_fasta(black_box(&input), ParseOptions::default()).unwrap();
            analyze(&records, k)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_find_longest_orf,
    bench_count_repeats,
    bench_read_and_analyze,
);

criterion_main!(benches);
