use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use adif::{
    adi::Tokenizer,
    document::{DecodeConfig, Document},
};

const HEADER_ADI: &str = "<ADIF_VER:5>3.1.4<PROGRAMID:6>adiftk\n\
<USERDEF1:19:E>SWEATERSIZE,{S,M,L}<EOH>\n";

fn adi_log(records: usize) -> String {
    let mut out = String::from(HEADER_ADI);
    for i in 0..records {
        let call = format!("K{i}AA");
        out.push_str(&format!(
            "<CALL:{}>{call}<BAND:3>20M<MODE:2>CW<QSO_DATE:8>20240101<TIME_ON:6>{:06}\
             <SWEATERSIZE:1>M<APP_N1MM_EXCH:3>599<EOR>\n",
            call.len(),
            i % 240_000
        ));
    }
    out
}

fn adx_log(records: usize) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\"?>\n<ADX><HEADER><ADIF_VER>3.1.4</ADIF_VER>\
         <USERDEF FIELDID=\"1\" TYPE=\"E\" ENUM=\"{S,M,L}\">SWEATERSIZE</USERDEF></HEADER><RECORDS>\n",
    );
    for i in 0..records {
        out.push_str(&format!(
            "<RECORD><CALL>K{i}AA</CALL><BAND>20M</BAND><MODE>CW</MODE>\
             <QSO_DATE>20240101</QSO_DATE><TIME_ON>{:06}</TIME_ON>\
             <USERDEF FIELDNAME=\"SWEATERSIZE\">M</USERDEF>\
             <APP PROGRAMID=\"N1MM\" FIELDNAME=\"EXCH\">599</APP></RECORD>\n",
            i % 240_000
        ));
    }
    out.push_str("</RECORDS></ADX>\n");
    out
}

fn bench_tokenizer(c: &mut Criterion) {
    let input = adi_log(10_000);
    let mut group = c.benchmark_group("adi_tokenize");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("10k", |b| {
        b.iter(|| black_box(Tokenizer::new(black_box(&input)).count()));
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let config = DecodeConfig::default();
    let mut group = c.benchmark_group("decode");

    for n in [100usize, 1_000, 10_000] {
        let adi = adi_log(n);
        group.throughput(Throughput::Bytes(adi.len() as u64));
        group.bench_with_input(BenchmarkId::new("adi", n), &adi, |b, input| {
            b.iter(|| Document::decode(black_box(input), &config).expect("decode"));
        });

        let adx = adx_log(n);
        group.throughput(Throughput::Bytes(adx.len() as u64));
        group.bench_with_input(BenchmarkId::new("adx", n), &adx, |b, input| {
            b.iter(|| Document::decode(black_box(input), &config).expect("decode"));
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let doc = Document::from_adi(&adi_log(10_000)).expect("decode");
    c.bench_function("sort_by_datetime_10k", |b| {
        b.iter(|| {
            let mut doc = doc.clone();
            doc.sort_by_datetime(false);
            black_box(doc)
        });
    });
}

criterion_group!(benches, bench_tokenizer, bench_decode, bench_sort);
criterion_main!(benches);
