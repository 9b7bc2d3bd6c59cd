//! Runtime SIMD support checks, usable in `no_std` builds.
//!
//! The scanline kernels ask these before picking an AVX2 or SSE2 path. Each check runs
//! `cpuid` once through `cpufeatures` and caches the answer, so calling it per row costs
//! a single load.

/// Checks if the CPU supports AVX2 (Advanced Vector Extensions 2) instructions.
///
/// AVX2 provides 256-bit integer compares and blends, letting the scalers process
/// twice as many pixels per iteration as the SSE2 kernels.
///
/// # Returns
/// `true` if the CPU supports AVX2 instructions, `false` otherwise.
#[inline]
pub fn has_avx2() -> bool {
    cpufeatures::new!(cpuid_avx2, "avx2");
    cpuid_avx2::get()
}

/// Checks if the CPU supports SSE2 (Streaming SIMD Extensions 2) instructions.
///
/// SSE2 is available on virtually all x86-64 processors and provides the baseline
/// vector implementation of the scalers.
///
/// # Returns
/// `true` if the CPU supports SSE2 instructions, `false` otherwise.
#[inline]
pub fn has_sse2() -> bool {
    cpufeatures::new!(cpuid_sse2, "sse2");
    cpuid_sse2::get()
}
