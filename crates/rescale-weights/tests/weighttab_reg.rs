//! Weight table regression test
//!
//! Exercises the builder end-to-end through the stock filter shapes and
//! checks the invariants the scaling pipeline relies on: exact
//! normalization at every fractional phase, bounds inside the clamp
//! range, and trimming only ever shrinking a table.

use rescale_filter::{
    BoxFilter, CatmullRom, Lanczos, MitchellNetravali, ParameterizedFilter, SampledFilter,
};
use rescale_weights::{WEIGHT_ONE, WeightTable};

fn table_sum(t: &WeightTable) -> i32 {
    t.weights().iter().sum()
}

#[test]
fn weighttab_reg() {
    // --- Test 1: Catmull-Rom magnification sweep, no brightness drift ---
    let catrom = ParameterizedFilter::new(CatmullRom, 2.0).expect("catmull-rom");
    let mut phases = 0;
    let mut center = 2.0;
    while center < 29.0 {
        let t = WeightTable::build(&catrom, WEIGHT_ONE, center, 0, 31, false);
        assert_eq!(table_sum(&t), WEIGHT_ONE, "center {center}");
        assert!(t.i0() >= 0 && t.i1() <= 31 && t.i1() >= t.i0());
        center += 0.37;
        phases += 1;
    }
    eprintln!("  catmull-rom sweep: {phases} phases, sum exact");

    // --- Test 2: Lanczos3 minification widens the support ---
    let l3_unit = ParameterizedFilter::new(Lanczos::default(), 1.0).expect("lanczos");
    let l3_half = ParameterizedFilter::new(Lanczos::default(), 0.5).expect("lanczos 0.5");
    let unit = WeightTable::build(&l3_unit, WEIGHT_ONE, 20.0, 0, 40, false);
    let half = WeightTable::build(&l3_half, WEIGHT_ONE, 20.0, 0, 40, false);
    assert!(half.len() > unit.len());
    assert_eq!(table_sum(&unit), WEIGHT_ONE);
    assert_eq!(table_sum(&half), WEIGHT_ONE);
    eprintln!("  lanczos3 taps: {} at 1.0, {} at 0.5", unit.len(), half.len());

    // --- Test 3: trimming never lengthens and keeps the sum ---
    for center in [5.0, 5.25, 5.5, 6.8] {
        let full = WeightTable::build(&l3_half, WEIGHT_ONE, center, 0, 40, false);
        let trimmed = WeightTable::build(&l3_half, WEIGHT_ONE, center, 0, 40, true);
        assert!(trimmed.len() <= full.len());
        assert_eq!(table_sum(&trimmed), WEIGHT_ONE);
    }

    // --- Test 4: box filter at an integer center is the identity ---
    let boxf = ParameterizedFilter::new(BoxFilter, 1.0).expect("box");
    let t = WeightTable::build(&boxf, WEIGHT_ONE, 7.0, 0, 15, false);
    assert_eq!(t.weights(), &[WEIGHT_ONE]);
    assert_eq!(t.i0(), 7);
    assert_eq!(t.i1(), 7);

    // exactly between two pixels neither neighbor wins: the symmetric
    // box is zero at both half-offsets and the fallback takes over
    let t = WeightTable::build(&boxf, WEIGHT_ONE, 7.5, 0, 15, false);
    assert_eq!(t.weights(), &[WEIGHT_ONE]);
    assert_eq!(t.i0(), 7);

    // --- Test 5: edge clamping keeps the range inside the image ---
    let mitchell =
        ParameterizedFilter::new(MitchellNetravali::default(), 1.0).expect("mitchell");
    let t = WeightTable::build(&mitchell, WEIGHT_ONE, 0.5, 0, 15, false);
    assert_eq!(t.i0(), 0);
    assert!(t.i1() <= 2);
    assert_eq!(table_sum(&t), WEIGHT_ONE);
    eprintln!("  left edge at center 0.5: taps {:?}", t.weights());

    // --- Test 6: degenerate filter collapses to a pass-through tap ---
    struct Dead;
    impl SampledFilter for Dead {
        fn min_index(&self, c: f64) -> i32 {
            c as i32 - 1
        }
        fn max_index(&self, c: f64) -> i32 {
            c as i32 + 1
        }
        fn eval(&self, _c: f64, _i: i32) -> f64 {
            0.0
        }
    }
    let t = WeightTable::build(&Dead, WEIGHT_ONE, 4.0, 0, 10, false);
    assert_eq!(t.weights(), &[WEIGHT_ONE]);
    assert_eq!(t.i0(), t.i1());

    // --- Test 7: identical inputs, identical tables ---
    let a = WeightTable::build(&catrom, WEIGHT_ONE, 13.31, 0, 31, true);
    let b = WeightTable::build(&catrom, WEIGHT_ONE, 13.31, 0, 31, true);
    assert_eq!(a, b);
}

#[test]
fn dyn_filter_reg() {
    // Per-axis filters held behind a trait object build identical tables
    let concrete = ParameterizedFilter::new(CatmullRom, 1.0).expect("catmull-rom");
    let boxed: Box<dyn SampledFilter> = Box::new(concrete);
    let a = WeightTable::build(&concrete, WEIGHT_ONE, 6.4, 0, 12, false);
    let b = WeightTable::build(boxed.as_ref(), WEIGHT_ONE, 6.4, 0, 12, false);
    assert_eq!(a, b);
}
