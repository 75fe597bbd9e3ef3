use criterion::Criterion;

use zonescan::Scanner;

static EXAMPLE_INVALID: &str = include_str!("../tests/data/example.invalid.zone.txt");

fn scan_example_invalid(c: &mut Criterion) {
    c.bench_function("scan example.invalid.zone.txt", |b| {
        b.iter(|| {
            for record in Scanner::new(EXAMPLE_INVALID.as_bytes()) {
                record.unwrap();
            }
        })
    });
}

fn scan_many_records(c: &mut Criterion) {
    let mut zone = String::from("$ORIGIN example.invalid.\n$TTL 300\n");
    for i in 0..10000 {
        zone.push_str(&format!("host{} IN A 192.0.2.{} ; host {}\n", i, i % 256, i));
    }
    c.bench_function("scan 10000 A records", move |b| {
        b.iter(|| Scanner::new(zone.as_bytes()).count())
    });
}

criterion_group!(scanner, scan_example_invalid, scan_many_records);
