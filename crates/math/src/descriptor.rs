//! Lane descriptors
//!
//! A descriptor is a zero-size tag naming (element type, lane count, target
//! variant). Code takes a descriptor value `d` and builds every vector
//! through it (`d.set(x)`, `d.load_u(slice)`, ...), so the same source works
//! for any width and lane type.
//!
//! The lane count of [`Simd<T, N, Tg>`] must be a power of two that fits the
//! target's register (`N * size_of::<T>() <= register bytes`, exactly one lane
//! for the scalar target). Violations are reported when the descriptor is
//! constructed, at compile time:
//!
//! ```compile_fail
//! use lanekit_math::{Simd, target::Sse4};
//! // 8 x f32 does not fit a 16-byte register
//! let _d = Simd::<f32, 8, Sse4>::new();
//! ```
//!
//! ```compile_fail
//! use lanekit_math::{Simd, target::Avx2};
//! let _d = Simd::<u8, 3, Avx2>::new();
//! ```
//!
//! Partial vectors are allowed:
//!
//! ```rust
//! use lanekit_math::{Descriptor, Simd, SimdVector, target::Avx2};
//! let d = Simd::<f64, 2, Avx2>::new();
//! assert_eq!(d.set(1.5).sum_of_lanes().get_lane(), 3.0);
//! ```

use crate::backends::convert::{ConvertFrom, DemoteFrom, PromoteFrom};
use crate::backends::portable::Vector;
use crate::lane::{FloatLane, Lane};
use crate::target::Target;
use crate::traits::{SimdFloat, SimdMask, SimdVector};
use core::fmt;
use core::marker::PhantomData;
use core::mem::size_of;

/// Vector type named by a descriptor
pub type VecOf<D> = <D as Descriptor>::Vector;

/// Mask type named by a descriptor
pub type MaskOf<D> = <<D as Descriptor>::Vector as SimdVector>::Mask;

/// Zero-size tag selecting a concrete vector type and its operations
///
/// Construction and memory operations live here; everything else is a
/// method of the vector type ([`SimdVector`] and friends).
pub trait Descriptor: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Element type
    type Lane: Lane;
    /// Target variant tag
    type Target: Target;
    /// Vector type this descriptor names
    type Vector: SimdVector<Lane = Self::Lane>;

    /// Number of lanes
    const LANES: usize;

    /// The descriptor value (checks capacity at compile time)
    fn new() -> Self;

    /// Number of lanes
    #[inline(always)]
    fn lanes(self) -> usize {
        Self::LANES
    }

    /// All lanes zero
    #[inline(always)]
    fn zero(self) -> Self::Vector {
        Self::Vector::zero()
    }

    /// Broadcast `value` to all lanes
    #[inline(always)]
    fn set(self, value: Self::Lane) -> Self::Vector {
        Self::Vector::splat(value)
    }

    /// Unspecified contents, never read before written
    #[inline(always)]
    fn undefined(self) -> Self::Vector {
        Self::Vector::undefined()
    }

    /// Lane i = `start + i`
    #[inline(always)]
    fn iota(self, start: Self::Lane) -> Self::Vector {
        Self::Vector::iota(start)
    }

    /// Load from register-aligned memory
    #[inline(always)]
    fn load(self, slice: &[Self::Lane]) -> Self::Vector {
        Self::Vector::load(slice)
    }

    /// Load from any address
    #[inline(always)]
    fn load_u(self, slice: &[Self::Lane]) -> Self::Vector {
        Self::Vector::load_u(slice)
    }

    /// Replicate a 16-byte block across the register
    #[inline(always)]
    fn load_dup128(self, slice: &[Self::Lane]) -> Self::Vector {
        Self::Vector::load_dup128(slice)
    }

    /// Load the lanes selected by `mask`, zero elsewhere
    #[inline(always)]
    fn masked_load(self, mask: MaskOf<Self>, slice: &[Self::Lane]) -> Self::Vector {
        Self::Vector::masked_load(mask, slice)
    }

    /// Store to register-aligned memory
    #[inline(always)]
    fn store(self, v: Self::Vector, slice: &mut [Self::Lane]) {
        v.store(slice)
    }

    /// Store to any address
    #[inline(always)]
    fn store_u(self, v: Self::Vector, slice: &mut [Self::Lane]) {
        v.store_u(slice)
    }

    /// True in the first `n` lanes
    #[inline(always)]
    fn first_n(self, n: usize) -> MaskOf<Self> {
        <MaskOf<Self> as SimdMask>::first_n(n)
    }

    /// Mask of lanes whose bit pattern is all ones
    #[inline(always)]
    fn mask_from_vec(self, v: Self::Vector) -> MaskOf<Self> {
        v.to_mask()
    }

    /// All-ones lanes where `mask` is true
    #[inline(always)]
    fn vec_from_mask(self, mask: MaskOf<Self>) -> Self::Vector {
        Self::Vector::from_mask(mask)
    }
}

/// Descriptor whose lanes are `f32` or `f64`
///
/// The math kernels take this bound.
pub trait FloatDescriptor: Descriptor<Lane: FloatLane, Vector: SimdFloat> {}

impl<D> FloatDescriptor for D
where
    D: Descriptor,
    D::Lane: FloatLane,
    D::Vector: SimdFloat,
{
}

/// Descriptor of `N` lanes of `T` on target `Tg`
pub struct Simd<T: Lane, const N: usize, Tg: Target> {
    _marker: PhantomData<(T, Tg)>,
}

impl<T: Lane, const N: usize, Tg: Target> Simd<T, N, Tg> {
    const CAPACITY: () = assert!(
        N.is_power_of_two() && N <= Tg::VARIANT.max_lanes(size_of::<T>()),
        "lane count must be a power of two that fits the target register"
    );

    /// The descriptor value
    #[inline(always)]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY;
        Self {
            _marker: PhantomData,
        }
    }

    /// Widen each lane of `v` into this descriptor's lane type
    #[inline(always)]
    pub fn promote_to<S: Lane>(self, v: Vector<S, N>) -> Vector<T, N>
    where
        T: PromoteFrom<S>,
    {
        v.promote_to()
    }

    /// Narrow each lane of `v`, clamping to this lane type's range
    #[inline(always)]
    pub fn demote_to<S: Lane>(self, v: Vector<S, N>) -> Vector<T, N>
    where
        T: DemoteFrom<S>,
    {
        v.demote_to()
    }

    /// Convert each lane of `v` between int and float
    #[inline(always)]
    pub fn convert_to<S: Lane>(self, v: Vector<S, N>) -> Vector<T, N>
    where
        T: ConvertFrom<S>,
    {
        v.convert_to()
    }

    /// Reinterpret the bits of `v` as this lane type
    #[inline(always)]
    pub fn bit_cast<S: Lane>(self, v: Vector<S, N>) -> Vector<T, N> {
        v.bit_cast()
    }
}

impl<T: Lane, const N: usize, Tg: Target> Clone for Simd<T, N, Tg> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Lane, const N: usize, Tg: Target> Copy for Simd<T, N, Tg> {}

impl<T: Lane, const N: usize, Tg: Target> Default for Simd<T, N, Tg> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Lane, const N: usize, Tg: Target> fmt::Debug for Simd<T, N, Tg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Simd<{}, {}, {}>", T::NAME, N, Tg::VARIANT)
    }
}

impl<T: Lane, const N: usize, Tg: Target> Descriptor for Simd<T, N, Tg> {
    type Lane = T;
    type Target = Tg;
    type Vector = Vector<T, N>;

    const LANES: usize = N;

    #[inline(always)]
    fn new() -> Self {
        Simd::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{Avx2, Avx512, Neon, Scalar, Sse4};

    #[test]
    fn test_construction_ops() {
        let d = Simd::<i32, 4, Sse4>::new();
        assert_eq!(d.zero().to_array(), [0; 4]);
        assert_eq!(d.set(7).to_array(), [7; 4]);
        assert_eq!(d.iota(10).to_array(), [10, 11, 12, 13]);
        assert_eq!(d.undefined().to_array().len(), 4);
        assert_eq!(d.lanes(), 4);
    }

    #[test]
    fn test_first_n_and_mask_conversion() {
        let d = Simd::<u16, 8, Neon>::new();
        let m = d.first_n(3);
        assert_eq!(m.count_true(), 3);
        assert!(d.first_n(100).all());
        let v = d.vec_from_mask(m);
        assert_eq!(v.to_array(), [0xffff, 0xffff, 0xffff, 0, 0, 0, 0, 0]);
        assert_eq!(d.mask_from_vec(v), m);
    }

    #[test]
    fn test_masked_load_reads_short_tail() {
        let d = Simd::<f32, 8, Avx2>::new();
        let tail = [1.0, 2.0, 3.0];
        let v = d.masked_load(d.first_n(tail.len()), &tail);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_scalar_descriptor_has_one_lane() {
        let d = Simd::<f64, 1, Scalar>::new();
        assert_eq!(d.iota(2.0).sum_of_lanes().get_lane(), 2.0);
    }

    #[test]
    fn test_conversions_through_descriptor() {
        let wide = Simd::<i32, 8, Avx2>::new();
        let narrow = Simd::<i16, 8, Avx2>::new();
        let v = wide.iota(32_765);
        let n = narrow.demote_to(v);
        assert_eq!(n.extract_lane(2), i16::MAX);
        assert_eq!(n.extract_lane(3), i16::MAX);
        assert_eq!(wide.promote_to(n).extract_lane(0), 32_765);

        let f = Simd::<f32, 8, Avx2>::new();
        assert_eq!(f.convert_to(v).get_lane(), 32_765.0);
        let bits = Simd::<u32, 8, Avx2>::new().bit_cast(f.set(-0.0));
        assert_eq!(bits.get_lane(), 0x8000_0000);
    }

    #[test]
    fn test_debug_names_descriptor() {
        let d = Simd::<u8, 64, Avx512>::new();
        assert_eq!(format!("{:?}", d), "Simd<u8, 64, avx512>");
    }
}
