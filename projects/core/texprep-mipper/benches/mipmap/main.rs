use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use texprep_common::color_8888::Color8888;
use texprep_common::color_float::Float4;
use texprep_mipper::{MipChainSettings, MipSettings, Mipper, PixelBuffer};

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

const SIZE: u32 = 1024;

fn test_pixels() -> Vec<Color8888> {
    (0..(SIZE * SIZE) as usize)
        .map(|x| Color8888::new(x as u8, (x >> 8) as u8, (x >> 3) as u8, (x * 7) as u8))
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mipmap Level");
    group.throughput(criterion::Throughput::Bytes(
        (SIZE as usize * SIZE as usize * size_of::<Color8888>()) as u64,
    ));

    let mipper = Mipper::new();
    let pixels = test_pixels();

    for is_srgb in [false, true] {
        let src = PixelBuffer::from_unorm8(SIZE, SIZE, pixels.clone())
            .and_then(|image| image.with_srgb(is_srgb))
            .unwrap();
        let mut dst = src.next_level();
        group.bench_with_input(BenchmarkId::new("unorm8", if is_srgb { "srgb" } else { "linear" }), &src, |b, src| {
            b.iter(|| mipper.mipmap(black_box(src), &mut dst))
        });
    }

    // odd path
    let odd = PixelBuffer::from_unorm8(SIZE - 1, SIZE, pixels[..((SIZE - 1) * SIZE) as usize].to_vec()).unwrap();
    let mut odd_dst = odd.next_level();
    group.bench_function("unorm8_odd", |b| b.iter(|| mipper.mipmap(black_box(&odd), &mut odd_dst)));

    let mut premultiplied = PixelBuffer::from_unorm8(SIZE, SIZE, pixels.clone())
        .and_then(|image| image.with_srgb(true))
        .unwrap();
    mipper.init_pixels_half_if_needed(&mut premultiplied, MipSettings::new().with_premultiply(true));
    let mut premultiplied_dst = premultiplied.next_level();
    group.bench_function("unorm8_srgb_linear_half", |b| {
        b.iter(|| mipper.mipmap(black_box(&premultiplied), &mut premultiplied_dst))
    });

    let float_pixels: Vec<Float4> = pixels.iter().map(|color| color.to_unorm_float4()).collect();
    let float = PixelBuffer::from_float(SIZE, SIZE, float_pixels).unwrap();
    let mut float_dst = float.next_level();
    group.bench_function("float", |b| b.iter(|| mipper.mipmap(black_box(&float), &mut float_dst)));

    #[cfg(feature = "bench")]
    {
        let mut out = vec![Color8888::default(); (SIZE / 2 * SIZE / 2) as usize];
        group.bench_function("unorm8_generic_kernel", |b| {
            b.iter(|| texprep_mipper::bench::mipmap_unorm8_generic(SIZE as usize, SIZE as usize, black_box(&pixels), &mut out))
        });
        group.bench_function("unorm8_specialized_kernel", |b| {
            b.iter(|| texprep_mipper::bench::mipmap_unorm8_specialized(SIZE as usize, SIZE as usize, black_box(&pixels), &mut out))
        });
    }

    group.finish();

    let mut chain = c.benchmark_group("Mip Chain");
    let settings = MipChainSettings::new().with_mip(MipSettings::new().with_premultiply(true));
    chain.bench_function("srgb_premultiplied", |b| {
        b.iter_batched(
            || {
                PixelBuffer::from_unorm8(SIZE, SIZE, pixels.clone())
                    .and_then(|image| image.with_srgb(true))
                    .unwrap()
            },
            |level0| mipper.build_chain(level0, &settings),
            criterion::BatchSize::LargeInput,
        )
    });
    chain.finish();
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
