use crate::{upscale_frame_with, RowFn, HEIGHT, WIDTH};
use criterion::BenchmarkId;
use safe_allocator_api::RawAlloc;
use std::hint::black_box;
use vidblit_scale2x::bench::scale2x::{avx2_u16, avx2_u32, avx2_u8};

fn bench_frame<W>(
    b: &mut criterion::Bencher,
    kernel: RowFn<W>,
    input: &RawAlloc,
    output: &mut RawAlloc,
) {
    b.iter(|| unsafe {
        upscale_frame_with(
            black_box(kernel),
            black_box(input),
            black_box(&mut *output),
        )
    });
}

pub(crate) fn run_benchmarks(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    input: &RawAlloc,
    output: &mut RawAlloc,
    important_benches_only: bool,
) {
    let size = WIDTH * HEIGHT;

    group.bench_with_input(BenchmarkId::new("u16 avx2", size), &size, |b, _| {
        bench_frame(b, avx2_u16 as RowFn<u16>, input, output)
    });

    group.bench_with_input(BenchmarkId::new("u32 avx2", size), &size, |b, _| {
        bench_frame(b, avx2_u32 as RowFn<u32>, input, output)
    });

    if !important_benches_only {
        group.bench_with_input(BenchmarkId::new("u8 avx2", size), &size, |b, _| {
            bench_frame(b, avx2_u8 as RowFn<u8>, input, output)
        });
    }
}
