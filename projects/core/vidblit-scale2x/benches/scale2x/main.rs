use core::{alloc::Layout, time::Duration};
use criterion::{criterion_group, criterion_main, Criterion};
use safe_allocator_api::RawAlloc;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod avx2;
mod portable;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod sse2;

/// Source frame dimensions, in pixels.
pub(crate) const WIDTH: usize = 1280;
pub(crate) const HEIGHT: usize = 720;

/// Signature shared by every row kernel.
pub(crate) type RowFn<W> = unsafe fn(*mut W, *mut W, *const W, *const W, *const W, usize);

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

/// Fills the source frame with short horizontal runs and a diagonal stripe pattern,
/// so the rule takes both the replicate and the edge paths.
fn fill_source(input: &mut RawAlloc) {
    let bytes = input.as_mut_ptr();
    for i in 0..input.len() {
        let (x, y) = ((i / 4) % WIDTH, (i / 4) / WIDTH);
        let value = if (x + y) % 16 < 3 { 0xFF } else { ((x / 8) % 4) as u8 };
        unsafe { bytes.add(i).write(value) };
    }
}

/// Upscales the whole frame in `input` into `output` one row at a time.
///
/// # Safety
///
/// `input` must hold `WIDTH * HEIGHT` pixels of `W` and `output` four times as many.
pub(crate) unsafe fn upscale_frame_with<W>(kernel: RowFn<W>, input: &RawAlloc, output: &mut RawAlloc) {
    let src = input.as_ptr() as *const W;
    let dst = output.as_mut_ptr() as *mut W;
    for y in 0..HEIGHT {
        let above = src.add(y.saturating_sub(1) * WIDTH);
        let current = src.add(y * WIDTH);
        let below = src.add((y + 1).min(HEIGHT - 1) * WIDTH);
        let out = dst.add(y * WIDTH * 4);
        kernel(out, out.add(WIDTH * 2), above, current, below, WIDTH);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scale2x Frame");
    // Sized for the widest pixels; narrower words use a prefix.
    let size = WIDTH * HEIGHT * 4;
    let mut input = allocate_align_64(size);
    let mut output = allocate_align_64(size * 4);
    let important_benches_only = true; // Set to false to enable u8 benches.
    fill_source(&mut input);

    group.throughput(criterion::Throughput::Elements((WIDTH * HEIGHT) as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(20));

    // Run architecture-specific benchmarks
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if is_x86_feature_detected!("sse2") {
            sse2::run_benchmarks(&mut group, &input, &mut output, important_benches_only);
        }

        if is_x86_feature_detected!("avx2") {
            avx2::run_benchmarks(&mut group, &input, &mut output, important_benches_only);
        }
    }

    // Run all portable benchmarks
    portable::run_benchmarks(&mut group, &input, &mut output, important_benches_only);

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
