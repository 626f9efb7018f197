use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ptp_wire::{Certificate, PtpMessage, PtpTimestamp};

fn sync_benchmark(c: &mut Criterion) {
    let msg = PtpMessage::sync(0x001B_19FF_FE00_0001, 42, PtpTimestamp::new(1_700_000_000, 5));
    let encoded = msg.encode().unwrap();

    c.bench_function("sync_encode", |b| {
        b.iter(|| black_box(&msg).encode().unwrap())
    });

    c.bench_function("sync_decode", |b| {
        b.iter(|| PtpMessage::decode(black_box(&encoded)).unwrap())
    });
}

fn certified_announce_benchmark(c: &mut Criterion) {
    let certificate = Certificate::new(vec![0x30; 512]);
    let msg = PtpMessage::announce_certified(
        0x001B_19FF_FE00_0001,
        7,
        PtpTimestamp::new(1_700_000_000, 0),
        0x001B_19FF_FE00_0002,
        certificate,
    );
    let encoded = msg.encode().unwrap();

    c.bench_function("announce_certified_encode", |b| {
        b.iter(|| black_box(&msg).encode().unwrap())
    });

    c.bench_function("announce_certified_decode", |b| {
        b.iter(|| PtpMessage::decode(black_box(&encoded)).unwrap())
    });
}

criterion_group!(benches, sync_benchmark, certified_announce_benchmark);
criterion_main!(benches);
