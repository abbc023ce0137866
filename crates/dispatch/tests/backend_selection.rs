//! Backend selection integration tests
//!
//! The chooser must land on a variant that is supported by the processor,
//! compiled into the tables and, unless a `force-*` feature pins it, the most
//! capable such variant.

use lanekit_dispatch::targets::{chosen_slot, resolve, slot_of, CHOOSER_SLOT};
use lanekit_dispatch::{
    chosen_target, exp_f32, supported_targets, CpuFeatures, TargetSet, TargetVariant, COMPILED,
};

#[test]
fn test_cpu_feature_detection() {
    let features = CpuFeatures::detect();
    println!("Detected CPU features: {:?}", features);
    println!("Supported targets: {:?}", features.supported_targets());

    #[cfg(target_arch = "aarch64")]
    {
        assert!(features.has_neon);
        assert!(!features.has_avx2);
        assert!(!features.has_avx512_full());
    }

    #[cfg(target_arch = "x86_64")]
    {
        assert!(!features.has_neon);
        if features.has_avx2_fma() {
            assert!(features.supported_targets().contains(TargetVariant::Avx2));
        }
    }
}

#[test]
fn test_chosen_target_is_runnable() {
    let chosen = chosen_target();
    println!("Chosen target: {}", chosen);
    assert!(COMPILED.contains(chosen));
    assert!(supported_targets().contains(chosen));
    assert_ne!(chosen_slot(), CHOOSER_SLOT);
    assert_eq!(chosen_slot(), slot_of(chosen));
}

#[test]
#[cfg(not(any(
    feature = "force-scalar",
    feature = "force-sse4",
    feature = "force-avx2",
    feature = "force-avx512",
    feature = "force-neon"
)))]
fn test_most_capable_variant_wins() {
    let best = supported_targets()
        .intersect(COMPILED)
        .best()
        .unwrap_or(TargetVariant::Scalar);
    assert_eq!(resolve(), best);
}

#[test]
#[cfg(feature = "force-scalar")]
fn test_force_scalar() {
    assert_eq!(chosen_target(), TargetVariant::Scalar);
}

#[test]
#[cfg(all(feature = "force-avx2", not(feature = "force-scalar"), not(feature = "force-avx512")))]
fn test_force_avx2() {
    let expected = if supported_targets().contains(TargetVariant::Avx2)
        && COMPILED.contains(TargetVariant::Avx2)
    {
        TargetVariant::Avx2
    } else {
        TargetVariant::Scalar
    };
    assert_eq!(chosen_target(), expected);
}

#[test]
fn test_scalar_is_always_available() {
    assert!(COMPILED.contains(TargetVariant::Scalar));
    assert!(supported_targets().contains(TargetVariant::Scalar));
    assert!(!TargetSet::ALL.intersect(COMPILED).is_empty());
}

#[test]
fn test_first_call_resolves_table() {
    let mut output = [0.0f32; 3];
    exp_f32(&[0.0, 0.0, 0.0], &mut output);
    assert_eq!(output, [1.0; 3]);
    assert_ne!(chosen_slot(), CHOOSER_SLOT);
}
