use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use element_spell::elements::{isotope_policy, periodic_table};
use element_spell::{diagnose, segment, NormalizedText, ZeroCost};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_spelled(rng: &mut StdRng, symbols: &[&str], len: usize) -> String {
    let mut out = String::with_capacity(len + 2);
    while out.len() < len {
        out.push_str(symbols[rng.gen_range(0..symbols.len())]);
    }
    out
}

fn random_letters(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

fn bench_segment(c: &mut Criterion) {
    let table = periodic_table(true);
    let policy = isotope_policy();
    let symbols: Vec<&str> = table.symbols().map(|s| s.text()).collect();

    let mut group = c.benchmark_group("segment_spelled");
    for &len in &[64usize, 1_024, 16_384] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    NormalizedText::normalize(&random_spelled(&mut rng, &symbols, len))
                },
                |text| black_box(segment(&text, &table, &policy).map(|s| s.len())),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_diagnose(c: &mut Criterion) {
    let table = periodic_table(false);
    let mut group = c.benchmark_group("segment_then_diagnose_random");
    for &len in &[64usize, 1_024, 16_384] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(7);
                    NormalizedText::normalize(&random_letters(&mut rng, len))
                },
                |text| match segment(&text, &table, &ZeroCost) {
                    Some(seg) => black_box(seg.len()),
                    None => black_box(diagnose(&text, &table).map_or(0, |d| d.position)),
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segment, bench_diagnose);
criterion_main!(benches);
