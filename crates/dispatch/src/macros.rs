//! Multiversioned function export

/// Export a function compiled once per target variant and dispatched at run time
///
/// The body is a function generic over the target tag, `fn body<Tg: Target>(..)`,
/// in scope at the call site. The macro emits one monomorphization per
/// compiled variant, each inside a `#[target_feature]` wrapper, plus a
/// [`DispatchTable`](crate::DispatchTable) and a chooser entry. The exported
/// function has the same signature as `body` and is safe to call on any
/// processor.
///
/// Bodies should be `#[inline(always)]` so they are compiled with each
/// variant's instruction set.
///
/// # Example
///
/// ```
/// use lanekit_dispatch::export_dispatched;
/// use lanekit_dispatch::lanekit_math::{Descriptor, Target};
///
/// #[inline(always)]
/// fn lanes_impl<Tg: Target>() -> usize {
///     <Tg::F32 as Descriptor>::new().lanes()
/// }
///
/// export_dispatched! {
///     /// f32 lane count of the chosen variant
///     pub fn f32_lanes() -> usize => lanes_impl;
/// }
///
/// assert!(f32_lanes() >= 1);
/// ```
#[macro_export]
macro_rules! export_dispatched {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident : $ty:ty),* $(,)?) $(-> $ret:ty)? => $body:ident;
    ) => {
        $(#[$meta])*
        $vis fn $name($($arg: $ty),*) $(-> $ret)? {
            type Entry = fn($($ty),*) $(-> $ret)?;

            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            fn avx512($($arg: $ty),*) $(-> $ret)? {
                #[target_feature(enable = "avx512f,avx512bw,avx512dq,avx512vl")]
                unsafe fn inner($($arg: $ty),*) $(-> $ret)? {
                    $body::<$crate::lanekit_math::target::Avx512>($($arg),*)
                }
                // SAFETY: only reachable through TABLE, which selects this
                // entry after detection reports AVX-512 F/BW/DQ/VL.
                unsafe { inner($($arg),*) }
            }

            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            fn avx2($($arg: $ty),*) $(-> $ret)? {
                #[target_feature(enable = "avx2,fma")]
                unsafe fn inner($($arg: $ty),*) $(-> $ret)? {
                    $body::<$crate::lanekit_math::target::Avx2>($($arg),*)
                }
                // SAFETY: only reachable through TABLE, which selects this
                // entry after detection reports AVX2 and FMA.
                unsafe { inner($($arg),*) }
            }

            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            fn sse4($($arg: $ty),*) $(-> $ret)? {
                #[target_feature(enable = "ssse3,sse4.1,sse4.2")]
                unsafe fn inner($($arg: $ty),*) $(-> $ret)? {
                    $body::<$crate::lanekit_math::target::Sse4>($($arg),*)
                }
                // SAFETY: only reachable through TABLE, which selects this
                // entry after detection reports SSSE3 and SSE4.1/4.2.
                unsafe { inner($($arg),*) }
            }

            #[cfg(target_arch = "aarch64")]
            fn neon($($arg: $ty),*) $(-> $ret)? {
                #[target_feature(enable = "neon")]
                unsafe fn inner($($arg: $ty),*) $(-> $ret)? {
                    $body::<$crate::lanekit_math::target::Neon>($($arg),*)
                }
                // SAFETY: Advanced SIMD is part of the aarch64 base architecture.
                unsafe { inner($($arg),*) }
            }

            fn scalar($($arg: $ty),*) $(-> $ret)? {
                $body::<$crate::lanekit_math::target::Scalar>($($arg),*)
            }

            fn choose($($arg: $ty),*) $(-> $ret)? {
                let slot = $crate::targets::update();
                (TABLE.entry(slot))($($arg),*)
            }

            const fn build() -> $crate::DispatchTable<Entry> {
                #[allow(unused_mut)]
                let mut table = $crate::DispatchTable::new(choose as Entry, scalar as Entry);
                #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
                {
                    use $crate::lanekit_math::TargetVariant;
                    if $crate::COMPILED.contains(TargetVariant::Avx512) {
                        table = table.with(TargetVariant::Avx512, avx512 as Entry);
                    }
                    if $crate::COMPILED.contains(TargetVariant::Avx2) {
                        table = table.with(TargetVariant::Avx2, avx2 as Entry);
                    }
                    if $crate::COMPILED.contains(TargetVariant::Sse4) {
                        table = table.with(TargetVariant::Sse4, sse4 as Entry);
                    }
                }
                #[cfg(target_arch = "aarch64")]
                {
                    use $crate::lanekit_math::TargetVariant;
                    if $crate::COMPILED.contains(TargetVariant::Neon) {
                        table = table.with(TargetVariant::Neon, neon as Entry);
                    }
                }
                table
            }

            static TABLE: $crate::DispatchTable<Entry> = build();

            (TABLE.get())($($arg),*)
        }
    };
}
