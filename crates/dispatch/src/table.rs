//! Per-function dispatch tables
//!
//! A [`DispatchTable`] holds one function pointer per compiled variant plus
//! the chooser, indexed by the shared slot in [`CHOSEN`](crate::targets::CHOSEN).
//! Tables are built in `const` context by [`export_dispatched!`](crate::export_dispatched)
//! and live in `static`s, so the only shared mutable state is the slot.

use crate::targets::{self, CHOOSER_SLOT, SLOTS};
use core::sync::atomic::Ordering;
use lanekit_math::TargetVariant;

/// Function pointers for one exported function, one per slot
///
/// `F` is the function pointer type, identical for every entry. Variants
/// missing from the table forward to the scalar entry.
pub struct DispatchTable<F: Copy + 'static> {
    entries: [Option<F>; SLOTS],
    scalar: F,
}

impl<F: Copy + 'static> DispatchTable<F> {
    /// Table with the chooser and the scalar entry
    pub const fn new(chooser: F, scalar: F) -> Self {
        let mut entries = [None; SLOTS];
        entries[CHOOSER_SLOT] = Some(chooser);
        entries[targets::slot_of(TargetVariant::Scalar)] = Some(scalar);
        Self { entries, scalar }
    }

    /// This table with `entry` for `variant`
    pub const fn with(mut self, variant: TargetVariant, entry: F) -> Self {
        self.entries[targets::slot_of(variant)] = Some(entry);
        self
    }

    /// True if `variant` has its own entry
    pub const fn has(&self, variant: TargetVariant) -> bool {
        self.entries[targets::slot_of(variant)].is_some()
    }

    /// Entry for `slot`, falling back to scalar
    #[inline]
    pub fn entry(&self, slot: usize) -> F {
        match self.entries.get(slot) {
            Some(Some(f)) => *f,
            _ => self.scalar,
        }
    }

    /// The scalar entry
    #[inline]
    pub fn scalar(&self) -> F {
        self.scalar
    }

    /// Entry for the current slot; the chooser until a variant is resolved
    #[inline]
    pub fn get(&self) -> F {
        self.entry(targets::CHOSEN.load(Ordering::Acquire))
    }
}
