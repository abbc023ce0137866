//! Backend implementations of the operation contract
//!
//! `portable` is the reference backend: it implements every trait in
//! [`crate::traits`] for all lane types and lane counts, and compiles to the
//! active target's vector instructions when monomorphized under
//! `#[target_feature]`. `convert` adds the lane-type conversions and
//! `reshape` the operations that change lane count or width.

pub mod convert;
pub mod portable;
pub mod reshape;

pub use convert::{ConvertFrom, DemoteFrom, PromoteFrom};
pub use portable::{LaneIndices, Mask, Vector};
