use criterion::{Criterion, black_box, criterion_group, criterion_main};

use euvat::*;

/// One checksum-valid number per country.
const SAMPLES: &[(&str, &str)] = &[
    ("AT", "U13585627"),
    ("BE", "0776091951"),
    ("BG", "9404012530"),
    ("CY", "40337427X"),
    ("CZ", "7103192745"),
    ("DE", "136695976"),
    ("DK", "96084722"),
    ("EE", "100931558"),
    ("EL", "094259216"),
    ("ES", "Y1352566L"),
    ("FI", "20774740"),
    ("FR", "K7399859412"),
    ("GB", "980780684"),
    ("HR", "38192148118"),
    ("HU", "22981671"),
    ("IE", "6139608TW"),
    ("IT", "00743110157"),
    ("LT", "119511515"),
    ("LU", "03686317"),
    ("LV", "40003521600"),
    ("MT", "12387809"),
    ("NL", "549077826B44"),
    ("PL", "6610551919"),
    ("PT", "502757191"),
    ("RO", "11198699"),
    ("SE", "556188840401"),
    ("SI", "15012557"),
    ("SK", "4030000007"),
];

fn bench_validate_de(c: &mut Criterion) {
    c.bench_function("validate_de", |b| {
        b.iter(|| validate(black_box("DE"), black_box("136695976")))
    });
}

fn bench_validate_all_countries(c: &mut Criterion) {
    c.bench_function("validate_all_countries", |b| {
        b.iter(|| {
            for (cc, number) in SAMPLES {
                let _ = validate(black_box(cc), black_box(number));
            }
        })
    });
}

fn bench_validate_vat_id_with_separators(c: &mut Criterion) {
    c.bench_function("validate_vat_id_separators", |b| {
        b.iter(|| validate_vat_id(black_box("NL 5490.7782.6B44")))
    });
}

fn bench_nl_sole_proprietor(c: &mut Criterion) {
    c.bench_function("nl_sole_proprietor", |b| {
        b.iter(|| CountryCode::Nl.validate(black_box("549077826B44")))
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("FR K7 399.859-412_")))
    });
}

criterion_group!(
    benches,
    bench_validate_de,
    bench_validate_all_countries,
    bench_validate_vat_id_with_separators,
    bench_nl_sole_proprietor,
    bench_normalize,
);
criterion_main!(benches);
