// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the dial's mapping, tick marking, and guard.

use std::cell::{Cell, RefCell};

use kurbo::Size;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use understory_dial::{Dial, DialScale, FnFeedback, GuardPhase, Scalar, TickStrip, is_segment};

/// Steps that show up in practice, including ones with no exact binary form.
fn step() -> impl Strategy<Value = f64> {
    prop::sample::select(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0])
}

/// A scale with a whole number of steps plus an optional partial step.
fn scale() -> impl Strategy<Value = (DialScale<f64>, usize)> {
    (-1_000_i32..1_000, 0_usize..3_000, step(), 0.0..0.9_f64).prop_map(
        |(lower, steps, step, extra)| {
            let lower = f64::from(lower);
            #[allow(clippy::cast_precision_loss, reason = "Small test counts")]
            let upper = lower + (steps as f64 + extra) * step;
            (DialScale::new(lower, upper, step), steps + 1)
        },
    )
}

/// The `f32` counterpart of [`scale`]. The partial step stays under half a
/// step, which single precision resolves at these magnitudes.
fn scale_f32() -> impl Strategy<Value = (DialScale<f32>, usize)> {
    (-1_000_i16..1_000, 0_u16..3_000, step(), 0.0..0.5_f32).prop_map(
        |(lower, steps, step, extra)| {
            let lower = f32::from(lower);
            #[allow(clippy::cast_possible_truncation, reason = "Steps are f32 literals")]
            let step = step as f32;
            let upper = lower + (f32::from(steps) + extra) * step;
            (DialScale::new(lower, upper, step), usize::from(steps) + 1)
        },
    )
}

fn check_tick_count<S: Scalar>(
    scale: &DialScale<S>,
    expected: usize,
) -> Result<(), TestCaseError> {
    prop_assert!(scale.total_ticks() >= 1);
    prop_assert_eq!(scale.total_ticks(), expected);
    // The last tick never lies past the upper bound.
    let last = scale.value_from_index(expected - 1);
    prop_assert!(last.to_f64() - scale.upper().to_f64() <= 1e-3 * scale.step().to_f64());
    Ok(())
}

fn check_round_trip<S: Scalar>(scale: &DialScale<S>) -> Result<(), TestCaseError> {
    for i in 0..scale.total_ticks() {
        let value = scale.value_from_index(i);
        prop_assert_eq!(scale.index_from_value(value), i as isize);
    }
    Ok(())
}

fn check_increasing<S: Scalar>(scale: &DialScale<S>) -> Result<(), TestCaseError> {
    for i in 1..scale.total_ticks() {
        prop_assert!(scale.value_from_index(i) > scale.value_from_index(i - 1));
    }
    Ok(())
}

fn check_clamped<S: Scalar>(scale: &DialScale<S>, value: S) -> Result<(), TestCaseError> {
    let index = scale.clamped_index_from_value(value).unwrap();
    prop_assert!(index < scale.total_ticks());
    Ok(())
}

proptest! {
    #[test]
    fn tick_count_matches_whole_steps((scale, expected) in scale()) {
        check_tick_count(&scale, expected)?;
    }

    #[test]
    fn tick_count_matches_whole_steps_f32((scale, expected) in scale_f32()) {
        check_tick_count(&scale, expected)?;
    }

    #[test]
    fn index_value_round_trip((scale, _) in scale()) {
        check_round_trip(&scale)?;
    }

    #[test]
    fn index_value_round_trip_f32((scale, _) in scale_f32()) {
        check_round_trip(&scale)?;
    }

    #[test]
    fn value_is_strictly_increasing((scale, _) in scale()) {
        check_increasing(&scale)?;
    }

    #[test]
    fn value_is_strictly_increasing_f32((scale, _) in scale_f32()) {
        check_increasing(&scale)?;
    }

    #[test]
    fn segment_marking(index in 0_usize..100_000, stride in 1_usize..50) {
        prop_assert_eq!(is_segment(index, stride), index % stride == 0);
    }

    #[test]
    fn any_value_maps_inside_the_strip((scale, _) in scale(), value in -1e6..1e6_f64) {
        check_clamped(&scale, value)?;
    }

    #[test]
    fn any_value_maps_inside_the_strip_f32((scale, _) in scale_f32(), value in -1e6..1e6_f32) {
        check_clamped(&scale, value)?;
    }

    #[test]
    fn centering_offsets_round_trip(len in 1_usize..5_000, spacing in 1.0..40.0_f64) {
        let mut strip = TickStrip::new(len, spacing);
        strip.set_viewport(Size::new(375.0, 44.0));
        for i in (0..len).step_by(37) {
            let offset = strip.offset_for_index(i);
            prop_assert_eq!(strip.nearest_index(offset), Some(i));
            // The centered tick sits at the middle of the viewport.
            prop_assert!((strip.tick_x(i) - offset - 187.5).abs() < 1e-6);
        }
    }

    #[test]
    fn feedback_only_after_settle(settles in prop::collection::vec(0_usize..200, 1..20)) {
        let value = Cell::new(0.0);
        let fired = RefCell::new(Vec::new());
        let mut dial = Dial::new(&value, DialScale::new(0.0, 100.0, 0.5))
            .with_feedback(FnFeedback(|i: usize| fired.borrow_mut().push(i)));

        let timer = dial.on_layout(Size::new(320.0, 48.0), 0).timer.unwrap();
        for &index in &settles {
            dial.on_scroll_settled(index);
            prop_assert!(dial.scroll_position().unwrap() < 201);
        }
        prop_assert!(fired.borrow().is_empty());

        dial.on_timer(timer.token);
        prop_assert_eq!(dial.phase(), GuardPhase::Initialized);
        let mut expected = Vec::new();
        let mut current = dial.scroll_position();
        for &index in &settles {
            dial.on_scroll_settled(index);
            let clamped = index.min(200);
            if current != Some(clamped) {
                expected.push(clamped);
                current = Some(clamped);
            }
            // The write-back never echoes as an external change.
            prop_assert_eq!(dial.sync(), None);
        }
        drop(dial);
        prop_assert_eq!(fired.into_inner(), expected);
    }
}

#[test]
fn picker_scenarios() {
    // Weight picker.
    let scale = DialScale::new(70.0, 234.0, 0.1);
    assert_eq!(scale.total_ticks(), 1641);
    assert_eq!(scale.index_from_value(74.0), 40);
    assert!((scale.value_from_index(40) - 74.0_f64).abs() < 1e-9);

    // Segment labels.
    let value = Cell::new(10.0);
    let mut dial = Dial::new(&value, DialScale::new(0.0, 800.0, 0.1));
    dial.on_layout(Size::new(320.0, 48.0), 0);
    let ticks: Vec<_> = dial.visible_ticks().collect();
    let segment = ticks.iter().find(|t| t.index == 100).unwrap();
    assert!(segment.is_segment());
    assert_eq!(segment.label.as_deref(), Some("10"));
    let minor = ticks.iter().find(|t| t.index == 105).unwrap();
    assert!(!minor.is_segment());
    assert_eq!(minor.label, None);

    // External write to the upper bound.
    value.set(800.0);
    let request = dial.sync().unwrap();
    assert_eq!(request.index, dial.scale().total_ticks() - 1);
    assert_eq!(dial.scroll_position(), Some(8000));
}
