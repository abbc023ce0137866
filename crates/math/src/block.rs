//! Fixed-size buffers aligned for full-register loads and stores
//!
//! [`AlignedBlock`] is 64-byte aligned, enough for the widest register of
//! every target variant, so any chunk that starts at a multiple of the
//! vector width can use the aligned [`Descriptor::load`] and
//! [`Descriptor::store`].
//!
//! ```text
//! AlignedBlock<f32, 32> with Simd<f32, 8, Avx2>:
//! [0  1  2  3  4  5  6  7] [8 ... 15] [16 ... 23] [24 ... 31]
//!  └──────── chunk 0 ─────┘ └ chunk 1 ┘ └ chunk 2 ─┘ └ chunk 3 ─┘
//! ```
//!
//! Slice-processing code copies a partial tail into a zero-padded block so
//! the tail goes through the same vector code as full chunks.

use crate::descriptor::{Descriptor, VecOf};
use crate::lane::Lane;

/// `N` lanes of `T`, 64-byte aligned
///
/// # Example
///
/// ```rust
/// use lanekit_math::{AlignedBlock, Descriptor, Simd, SimdVector, target::Avx2};
///
/// let d = Simd::<f32, 8, Avx2>::new();
/// let mut block = AlignedBlock::<f32, 32>::from_slice(&[1.5; 32]);
/// block.map_chunks(d, |v| v.add(v));
/// assert!(block.as_slice().iter().all(|&x| x == 3.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C, align(64))]
pub struct AlignedBlock<T: Lane, const N: usize> {
    data: [T; N],
}

impl<T: Lane, const N: usize> AlignedBlock<T, N> {
    /// A block of zeros
    #[inline]
    pub fn new() -> Self {
        Self { data: [T::ZERO; N] }
    }

    /// Copy of `slice`
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() != N`.
    #[inline]
    pub fn from_slice(slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            N,
            "Slice length {} doesn't match block size {}",
            slice.len(),
            N
        );
        let mut data = [T::ZERO; N];
        data.copy_from_slice(slice);
        Self { data }
    }

    /// Copy of `slice` followed by zeros
    ///
    /// # Panics
    ///
    /// Panics if `slice.len() > N`.
    #[inline]
    pub fn from_prefix(slice: &[T]) -> Self {
        assert!(
            slice.len() <= N,
            "Prefix length {} exceeds block size {}",
            slice.len(),
            N
        );
        let mut block = Self::new();
        block.data[..slice.len()].copy_from_slice(slice);
        block
    }

    /// Number of lanes
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for `N == 0`
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The lanes as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The lanes as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Number of `d`-sized chunks
    ///
    /// # Panics
    ///
    /// Panics if `N` is not a multiple of the descriptor's lane count.
    #[inline]
    pub fn chunk_count<D: Descriptor<Lane = T>>(&self, d: D) -> usize {
        assert_eq!(
            N % d.lanes(),
            0,
            "Block size {} must be divisible by lane count {}",
            N,
            d.lanes()
        );
        N / d.lanes()
    }

    /// Aligned load of chunk `index`
    #[inline]
    pub fn load_chunk<D: Descriptor<Lane = T>>(&self, d: D, index: usize) -> VecOf<D> {
        let start = index * d.lanes();
        d.load(&self.data[start..start + d.lanes()])
    }

    /// Aligned store into chunk `index`
    #[inline]
    pub fn store_chunk<D: Descriptor<Lane = T>>(&mut self, d: D, index: usize, v: VecOf<D>) {
        let start = index * d.lanes();
        d.store(v, &mut self.data[start..start + d.lanes()]);
    }

    /// Vectors over the block, one per chunk
    #[inline]
    pub fn chunks<D: Descriptor<Lane = T>>(&self, d: D) -> impl Iterator<Item = VecOf<D>> + '_ {
        (0..self.chunk_count(d)).map(move |i| self.load_chunk(d, i))
    }

    /// Replace every chunk `v` with `f(v)`
    #[inline]
    pub fn map_chunks<D, F>(&mut self, d: D, mut f: F)
    where
        D: Descriptor<Lane = T>,
        F: FnMut(VecOf<D>) -> VecOf<D>,
    {
        for i in 0..self.chunk_count(d) {
            let v = self.load_chunk(d, i);
            self.store_chunk(d, i, f(v));
        }
    }
}

impl<T: Lane, const N: usize> Default for AlignedBlock<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Lane, const N: usize> core::ops::Index<usize> for AlignedBlock<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Lane, const N: usize> core::ops::IndexMut<usize> for AlignedBlock<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}
