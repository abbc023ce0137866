//! CPU capability detection
//!
//! On x86/x86_64 detection reads CPUID through `cpufeatures`, which caches
//! the result after the first query. On aarch64 Advanced SIMD is part of the
//! base architecture, so NEON is reported without a runtime check.

use crate::targets::TargetSet;
use lanekit_math::TargetVariant;

/// Raw feature flags relevant to the target variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuFeatures {
    /// SSSE3 (x86)
    pub has_ssse3: bool,
    /// SSE4.1 (x86)
    pub has_sse41: bool,
    /// SSE4.2 (x86)
    pub has_sse42: bool,
    /// AVX2 (x86)
    pub has_avx2: bool,
    /// FMA3 (x86)
    pub has_fma: bool,
    /// AVX-512 Foundation (x86)
    pub has_avx512_f: bool,
    /// AVX-512 Byte & Word (x86)
    pub has_avx512_bw: bool,
    /// AVX-512 Doubleword & Quadword (x86)
    pub has_avx512_dq: bool,
    /// AVX-512 Vector Length extensions (x86)
    pub has_avx512_vl: bool,
    /// Advanced SIMD (aarch64)
    pub has_neon: bool,
}

impl CpuFeatures {
    /// Query the running processor
    ///
    /// # Example
    /// ```
    /// use lanekit_dispatch::CpuFeatures;
    ///
    /// let features = CpuFeatures::detect();
    /// assert!(features.supported_targets().contains(lanekit_dispatch::TargetVariant::Scalar));
    /// ```
    pub fn detect() -> Self {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            cpufeatures::new!(cpuid_ssse3, "ssse3");
            cpufeatures::new!(cpuid_sse41, "sse4.1");
            cpufeatures::new!(cpuid_sse42, "sse4.2");
            cpufeatures::new!(cpuid_avx2, "avx2");
            cpufeatures::new!(cpuid_fma, "fma");
            cpufeatures::new!(cpuid_avx512f, "avx512f");
            cpufeatures::new!(cpuid_avx512bw, "avx512bw");
            cpufeatures::new!(cpuid_avx512dq, "avx512dq");
            cpufeatures::new!(cpuid_avx512vl, "avx512vl");

            Self {
                has_ssse3: cpuid_ssse3::get(),
                has_sse41: cpuid_sse41::get(),
                has_sse42: cpuid_sse42::get(),
                has_avx2: cpuid_avx2::get(),
                has_fma: cpuid_fma::get(),
                has_avx512_f: cpuid_avx512f::get(),
                has_avx512_bw: cpuid_avx512bw::get(),
                has_avx512_dq: cpuid_avx512dq::get(),
                has_avx512_vl: cpuid_avx512vl::get(),
                has_neon: false,
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            Self {
                has_neon: true,
                ..Self::default()
            }
        }

        #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self::default()
        }
    }

    /// SSSE3, SSE4.1 and SSE4.2 together
    pub fn has_sse4(&self) -> bool {
        self.has_ssse3 && self.has_sse41 && self.has_sse42
    }

    /// AVX2 with FMA
    pub fn has_avx2_fma(&self) -> bool {
        self.has_avx2 && self.has_fma
    }

    /// Foundation plus the BW, DQ and VL extensions
    pub fn has_avx512_full(&self) -> bool {
        self.has_avx512_f && self.has_avx512_bw && self.has_avx512_dq && self.has_avx512_vl
    }

    /// Variants this processor can run; always includes `Scalar`
    ///
    /// Each wide x86 variant also requires the narrower ones, matching the
    /// feature strings the variants are compiled with.
    pub fn supported_targets(&self) -> TargetSet {
        let mut set = TargetSet::single(TargetVariant::Scalar);
        if self.has_neon {
            set = set.with(TargetVariant::Neon);
        }
        if self.has_sse4() {
            set = set.with(TargetVariant::Sse4);
            if self.has_avx2_fma() {
                set = set.with(TargetVariant::Avx2);
                if self.has_avx512_full() {
                    set = set.with(TargetVariant::Avx512);
                }
            }
        }
        set
    }
}
