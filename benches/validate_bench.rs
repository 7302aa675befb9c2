use criterion::{Criterion, black_box, criterion_group, criterion_main};

use iban_validator::*;

const SAMPLES: &[&str] = &[
    "DE89 3704 0044 0532 0130 00",
    "GB82WEST12345698765432",
    "MT84MALT011000012345MTLCAST001S",
    "LC55HEMM000100010012001200023015",
    "no93 8601 1117 947",
];

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_valid", |b| {
        b.iter(|| validate(black_box("DE89 3704 0044 0532 0130 00")))
    });
    c.bench_function("validate_bad_checksum", |b| {
        b.iter(|| validate(black_box("DE00370400440532013000")))
    });
    c.bench_function("validate_mixed_batch", |b| {
        b.iter(|| {
            SAMPLES
                .iter()
                .filter(|s| validate(black_box(s)).is_ok())
                .count()
        })
    });
}

fn bench_helpers(c: &mut Criterion) {
    c.bench_function("mod97_32_digits", |b| {
        b.iter(|| mod97(black_box("12345678901234567890123456789012")))
    });
    c.bench_function("format", |b| {
        b.iter(|| format(black_box("de89370400440532013000")))
    });
    c.bench_function("compute_check_digits", |b| {
        b.iter(|| compute_check_digits(black_box("GB"), black_box("WEST12345698765432")))
    });
}

criterion_group!(benches, bench_validate, bench_helpers);
criterion_main!(benches);
