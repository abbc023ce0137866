//! Target sets and the process-wide chosen target
//!
//! Every dispatch table indexes its entries by one shared slot number held
//! in [`CHOSEN`]. Slot 0 is the chooser; slot `v.index() + 1` is variant
//! `v`. The first dispatched call in a process (or after the permitted set
//! changes) lands in the chooser, which detects CPU features, picks a variant and
//! stores its slot. Every writer computes the same slot for the same
//! permitted set, so concurrent first calls race harmlessly and no lock is
//! taken.

use crate::detect::CpuFeatures;
use core::fmt;
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use lanekit_math::TargetVariant;

/// Ordered set of target variants, iterated most capable first
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TargetSet(u32);

impl TargetSet {
    /// No variants
    pub const EMPTY: Self = Self(0);

    /// Every variant
    pub const ALL: Self = Self((1 << TargetVariant::COUNT) - 1);

    /// Set holding only `variant`
    pub const fn single(variant: TargetVariant) -> Self {
        Self(1 << variant.index())
    }

    /// This set plus `variant`
    pub const fn with(self, variant: TargetVariant) -> Self {
        Self(self.0 | Self::single(variant).0)
    }

    /// This set minus `variant`
    pub const fn without(self, variant: TargetVariant) -> Self {
        Self(self.0 & !Self::single(variant).0)
    }

    /// Membership test
    pub const fn contains(self, variant: TargetVariant) -> bool {
        self.0 & Self::single(variant).0 != 0
    }

    /// Variants in both sets
    pub const fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Variants in either set
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if the set holds no variant
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of variants
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Raw bits, bit `i` standing for the variant with index `i`
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Set from raw bits; bits past the last variant are dropped
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Most capable variant in the set
    pub const fn best(self) -> Option<TargetVariant> {
        if self.0 == 0 {
            None
        } else {
            TargetVariant::from_index(self.0.trailing_zeros() as usize)
        }
    }

    /// Variants in preference order
    pub fn iter(self) -> impl Iterator<Item = TargetVariant> {
        TargetVariant::ALL.into_iter().filter(move |&v| self.contains(v))
    }
}

impl fmt::Debug for TargetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(TargetVariant::name)).finish()
    }
}

impl FromIterator<TargetVariant> for TargetSet {
    fn from_iter<I: IntoIterator<Item = TargetVariant>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Variants compiled into every dispatch table of this build
///
/// Decided by the crate features and the target architecture. `Scalar` is
/// always present.
pub const COMPILED: TargetSet = compiled_targets();

const fn compiled_targets() -> TargetSet {
    let mut set = TargetSet::single(TargetVariant::Scalar);
    if cfg!(all(feature = "sse4", any(target_arch = "x86", target_arch = "x86_64"))) {
        set = set.with(TargetVariant::Sse4);
    }
    if cfg!(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64"))) {
        set = set.with(TargetVariant::Avx2);
    }
    if cfg!(all(feature = "avx512", any(target_arch = "x86", target_arch = "x86_64"))) {
        set = set.with(TargetVariant::Avx512);
    }
    if cfg!(all(feature = "neon", target_arch = "aarch64")) {
        set = set.with(TargetVariant::Neon);
    }
    set
}

/// Table slot of the chooser entry
pub const CHOOSER_SLOT: usize = 0;

/// Number of entries in a dispatch table
pub const SLOTS: usize = TargetVariant::COUNT + 1;

/// Table slot of `variant`
#[inline]
pub const fn slot_of(variant: TargetVariant) -> usize {
    variant.index() + 1
}

/// Shared slot index; [`CHOOSER_SLOT`] until the first dispatched call resolves
pub static CHOSEN: AtomicUsize = AtomicUsize::new(CHOOSER_SLOT);

static PERMITTED: AtomicU32 = AtomicU32::new(TargetSet::ALL.bits());

/// Bumped on every permitted-set change, before [`CHOSEN`] is reset
static GENERATION: AtomicUsize = AtomicUsize::new(0);

/// Variants the running processor supports
pub fn supported_targets() -> TargetSet {
    let features = CpuFeatures::detect();
    log::trace!("detected cpu features: {:?}", features);
    features.supported_targets()
}

/// Variants the chooser is currently allowed to pick
pub fn permitted_targets() -> TargetSet {
    TargetSet::from_bits(PERMITTED.load(Ordering::SeqCst))
}

/// Restrict the chooser to `targets` (plus `Scalar`) and re-resolve every table
///
/// Tables pick their entry again on their next call. Meant for tests and
/// benches that exercise each compiled variant on capable hardware.
pub fn set_permitted_targets(targets: TargetSet) {
    let targets = targets.with(TargetVariant::Scalar);
    publish_permitted(targets);
    log::info!("permitted targets set to {:?}", targets);
}

/// Allow every variant again and re-resolve every table
pub fn reset_permitted_targets() {
    publish_permitted(TargetSet::ALL);
    log::info!("permitted targets reset");
}

fn publish_permitted(targets: TargetSet) {
    PERMITTED.store(targets.bits(), Ordering::SeqCst);
    GENERATION.fetch_add(1, Ordering::SeqCst);
    CHOSEN.store(CHOOSER_SLOT, Ordering::SeqCst);
}

/// Variant pinned by a `force-*` feature, if any
const fn forced_target() -> Option<TargetVariant> {
    if cfg!(feature = "force-scalar") {
        Some(TargetVariant::Scalar)
    } else if cfg!(feature = "force-avx512") {
        Some(TargetVariant::Avx512)
    } else if cfg!(feature = "force-avx2") {
        Some(TargetVariant::Avx2)
    } else if cfg!(feature = "force-sse4") {
        Some(TargetVariant::Sse4)
    } else if cfg!(feature = "force-neon") {
        Some(TargetVariant::Neon)
    } else {
        None
    }
}

/// Pick the variant for this process without storing it
///
/// The most capable variant that is supported, compiled and permitted. A
/// forced variant wins over the permitted set but still has to be supported
/// and compiled, else `Scalar` is used.
pub fn resolve() -> TargetVariant {
    let supported = supported_targets();
    let runnable = supported.intersect(COMPILED);

    let chosen = match forced_target() {
        Some(forced) if runnable.contains(forced) => forced,
        Some(_) => TargetVariant::Scalar,
        None => runnable
            .intersect(permitted_targets())
            .best()
            .unwrap_or(TargetVariant::Scalar),
    };

    log::debug!(
        "dispatch target {} (supported {:?}, compiled {:?}, permitted {:?})",
        chosen,
        supported,
        COMPILED,
        permitted_targets()
    );
    chosen
}

/// Resolve, publish and return the chosen slot
///
/// Returns the slot it computed rather than re-reading [`CHOSEN`], so a
/// caller racing with [`set_permitted_targets`] still gets a runnable entry.
/// If the permitted set changed while resolving, the stored slot may belong
/// to the old set, so resolution runs again until it completes within one
/// generation.
pub fn update() -> usize {
    loop {
        let generation = GENERATION.load(Ordering::SeqCst);
        let slot = slot_of(resolve());
        CHOSEN.store(slot, Ordering::SeqCst);
        if GENERATION.load(Ordering::SeqCst) == generation {
            return slot;
        }
    }
}

/// Current slot, resolving first if no table has been called yet
#[inline]
pub fn chosen_slot() -> usize {
    match CHOSEN.load(Ordering::Acquire) {
        CHOOSER_SLOT => update(),
        slot => slot,
    }
}

/// Variant every dispatch table currently forwards to
pub fn chosen_target() -> TargetVariant {
    TargetVariant::from_index(chosen_slot() - 1).unwrap_or(TargetVariant::Scalar)
}
