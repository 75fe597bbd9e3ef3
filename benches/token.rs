use criterion::Criterion;

use zonescan::token::Tokenizer;

fn tokenize_soa(c: &mut Criterion) {
    c.bench_function("tokenize multi-line SOA", |b| {
        b.iter(|| {
            let mut tokenizer = Tokenizer::new(
                &b"@ IN SOA ns1.nic.invalid. hostmaster.nic.invalid. (\n\
                   1517625548 ; serial\n 3600 900 1209600 300 )\n"[..],
            );
            while let Some(_) = tokenizer.next_token().unwrap() {}
        })
    });
}

fn tokenize_quoted(c: &mut Criterion) {
    c.bench_function("tokenize escaped TXT", |b| {
        b.iter(|| {
            let mut tokenizer =
                Tokenizer::new(&br#"@ IN TXT "v=DKIM1; k=rsa; p=\"MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQDwIRP\"""#[..]);
            while let Some(_) = tokenizer.next_token().unwrap() {}
        })
    });
}

criterion_group!(token, tokenize_soa, tokenize_quoted);
