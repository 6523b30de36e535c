//! Property-based tests
//!
//! These use proptest to generate random triangle soups, file sizes and
//! currency amounts and verify the analyzer and pricing invariants hold
//! across a wide range of inputs.

mod common;

use common::{Tri, build_stl, reverse_winding, translate};
use printquote::analyzer::{estimate_from_size, parse_binary_stl};
use printquote::pricing::round_to_increment;
use proptest::prelude::*;

/// Generate a non-degenerate triangle with bounded coordinates
fn triangle_strategy() -> impl Strategy<Value = Tri> {
    prop::array::uniform3(prop::array::uniform3(-100.0f32..100.0)).prop_filter(
        "triangle must not be degenerate",
        |[a, b, c]| a != b && b != c && a != c,
    )
}

/// Generate a small triangle soup (not necessarily closed)
fn soup_strategy() -> impl Strategy<Value = Vec<Tri>> {
    prop::collection::vec(triangle_strategy(), 1..40)
}

fn tetra_volume(p: &[[f32; 3]; 4]) -> f64 {
    let v = |a: [f32; 3], b: [f32; 3]| {
        [
            (a[0] - b[0]) as f64,
            (a[1] - b[1]) as f64,
            (a[2] - b[2]) as f64,
        ]
    };
    let a = v(p[1], p[0]);
    let b = v(p[2], p[0]);
    let c = v(p[3], p[0]);
    let det = a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
        + a[2] * (b[0] * c[1] - b[1] * c[0]);
    det.abs() / 6.0
}

/// Generate a closed tetrahedron (consistent winding, non-degenerate)
fn tetra_strategy() -> impl Strategy<Value = [[f32; 3]; 4]> {
    prop::array::uniform4(prop::array::uniform3(-100.0f32..100.0))
        .prop_filter("tetrahedron must have volume", |p| tetra_volume(p) > 1.0)
}

fn tetra_faces(p: &[[f32; 3]; 4]) -> Vec<Tri> {
    vec![
        [p[0], p[1], p[2]],
        [p[0], p[3], p[1]],
        [p[1], p[3], p[2]],
        [p[2], p[3], p[0]],
    ]
}

proptest! {
    #[test]
    fn prop_closed_volume_invariant_under_translation(
        points in tetra_strategy(),
        offset in prop::array::uniform3(-50.0f32..50.0),
    ) {
        // Signed tetrahedron contributions depend on origin placement
        // triangle by triangle, but for a closed mesh the sum does not
        let faces = tetra_faces(&points);
        let base = parse_binary_stl(&build_stl(&faces)).unwrap();
        let moved = parse_binary_stl(&build_stl(&translate(&faces, offset))).unwrap();

        // f32 quantization of the shifted vertices costs some low bits;
        // allow an absolute floor plus a volume-scaled term
        let tolerance = 20.0 + 1e-3 * base.volume_mm3;
        prop_assert!((base.volume_mm3 - moved.volume_mm3).abs() < tolerance);
        prop_assert!((base.volume_mm3 - tetra_volume(&points)).abs() < tolerance);
    }

    #[test]
    fn prop_translation_preserves_area_and_count(
        soup in soup_strategy(),
        offset in prop::array::uniform3(-50.0f32..50.0),
    ) {
        let base = parse_binary_stl(&build_stl(&soup)).unwrap();
        let moved = parse_binary_stl(&build_stl(&translate(&soup, offset))).unwrap();

        prop_assert_eq!(base.triangle_count, moved.triangle_count);
        let tolerance = 1e-2 * (1.0 + base.surface_area_mm2);
        prop_assert!((base.surface_area_mm2 - moved.surface_area_mm2).abs() < tolerance);
    }

    #[test]
    fn prop_winding_reversal_preserves_absolute_volume(soup in soup_strategy()) {
        let forward = parse_binary_stl(&build_stl(&soup)).unwrap();
        let reversed = parse_binary_stl(&build_stl(&reverse_winding(&soup))).unwrap();

        prop_assert!((forward.volume_mm3 - reversed.volume_mm3).abs() < 1e-6);
        prop_assert!((forward.surface_area_mm2 - reversed.surface_area_mm2).abs() < 1e-6);
        prop_assert_eq!(forward.bounding_box_mm, reversed.bounding_box_mm);
    }

    #[test]
    fn prop_parsed_stats_are_finite_and_nonnegative(soup in soup_strategy()) {
        let stats = parse_binary_stl(&build_stl(&soup)).unwrap();

        prop_assert!(stats.volume_mm3.is_finite());
        prop_assert!(stats.volume_mm3 >= 0.0);
        prop_assert!(stats.surface_area_mm2.is_finite());
        prop_assert!(stats.surface_area_mm2 >= 0.0);
        for extent in stats.bounding_box_mm {
            prop_assert!(extent.is_finite());
            prop_assert!(extent >= 0.0);
        }
    }

    #[test]
    fn prop_heuristic_is_pure_and_clamped(
        size in 0usize..50_000_000,
        ext in prop::sample::select(vec!["3mf", "step", "stp", "obj", ""]),
    ) {
        let first = estimate_from_size(size, ext);
        let second = estimate_from_size(size, ext);
        prop_assert_eq!(&first, &second);

        prop_assert!(first.volume_mm3 >= 2000.0 && first.volume_mm3 <= 1_000_000.0);
        prop_assert!(first.bounding_box_mm[0] >= 10.0);
        prop_assert_eq!(first.bounding_box_mm[0], first.bounding_box_mm[1]);
        prop_assert_eq!(first.bounding_box_mm[1], first.bounding_box_mm[2]);
        prop_assert!(first.triangle_count >= 100 && first.triangle_count <= 500_000);
    }

    #[test]
    fn prop_rounded_amounts_sit_on_the_increment_grid(amount in 0.0f64..10_000.0) {
        let rounded = round_to_increment(amount, 0.05);

        // On the 0.05 grid, within floating-point residue
        let steps = rounded / 0.05;
        prop_assert!((steps - steps.round()).abs() < 1e-6);

        // At most 2 decimal places survive the final re-round
        prop_assert_eq!((rounded * 100.0).round() / 100.0, rounded);

        // Never further than half an increment from the input
        prop_assert!((rounded - amount).abs() <= 0.025 + 1e-9);
    }
}
