use criterion::{black_box, criterion_group, criterion_main, Criterion};
use texprep_common::color_8888::Color8888;
use texprep_common::endpoint_88::remap_to_signed_bc_endpoint88;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color8888 Conversion");

    const NUM_ITEMS: usize = 1_048_576; // 1024x1024 texture

    // Fill with test data - every alpha value, varying colours
    let input: Vec<Color8888> = (0..NUM_ITEMS)
        .map(|x| Color8888::new(x as u8, (x >> 8) as u8, (x >> 16) as u8, (x * 7) as u8))
        .collect();

    group.throughput(criterion::Throughput::Bytes(
        (NUM_ITEMS * size_of::<Color8888>()) as u64,
    ));

    group.bench_function("to_premul", |b| {
        b.iter(|| {
            for color in &input {
                black_box(color.to_premul());
            }
        })
    });

    group.bench_function("unorm_round_trip", |b| {
        b.iter(|| {
            for color in &input {
                black_box(Color8888::from_unorm_float4(color.to_unorm_float4()));
            }
        })
    });

    group.bench_function("remap_to_signed_bc_endpoint88", |b| {
        b.iter(|| {
            for x in 0..=u16::MAX {
                black_box(remap_to_signed_bc_endpoint88(black_box(x)));
            }
        })
    });

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
