//! Wellness score calculation.
//!
//! Maps four lifestyle inputs to a 0-100 score composed of four independent
//! sub-scores. Pure function; callers persist the result alongside the raw
//! inputs and recompute it on every create and update.

/// Points awarded for time slept, out of 30.
fn sleep_score(sleep_hours: f64) -> f64 {
    if (7.0..=9.0).contains(&sleep_hours) {
        30.0
    } else if (6.0..=10.0).contains(&sleep_hours) {
        25.0
    } else if (5.0..=11.0).contains(&sleep_hours) {
        15.0
    } else {
        5.0
    }
}

/// Points awarded for stress level, out of 30, inverse.
///
/// Each step on the 1-10 scale costs 30/9 points, so a stress level of 1
/// scores the full 30 and a level of 10 scores exactly 0.
fn stress_score(stress_level: i16) -> f64 {
    (30.0 - f64::from(stress_level - 1) * (30.0 / 9.0)).max(0.0)
}

/// Points awarded for caffeine intake in mg, out of 20.
fn caffeine_score(caffeine_intake: i32) -> f64 {
    if caffeine_intake <= 100 {
        20.0
    } else if caffeine_intake <= 200 {
        15.0
    } else if caffeine_intake <= 400 {
        10.0
    } else {
        0.0
    }
}

/// Points awarded for alcohol intake in standard units, out of 20.
fn alcohol_score(alcohol_intake: i32) -> f64 {
    if alcohol_intake == 0 {
        20.0
    } else if alcohol_intake <= 1 {
        15.0
    } else if alcohol_intake <= 2 {
        10.0
    } else {
        0.0
    }
}

/// Computes the 0-100 wellness score from the four lifestyle inputs,
/// rounded to 2 decimal places.
///
/// Total over its declared domain (`sleep_hours >= 0`, `stress_level` 1-10,
/// `caffeine_intake >= 0`, `alcohol_intake >= 0`); out-of-range values are
/// rejected by field validation before this function runs.
pub fn calculate_wellness_score(
    sleep_hours: f64,
    stress_level: i16,
    caffeine_intake: i32,
    alcohol_intake: i32,
) -> f64 {
    let total = sleep_score(sleep_hours)
        + stress_score(stress_level)
        + caffeine_score(caffeine_intake)
        + alcohol_score(alcohol_intake);

    (total * 100.0).round() / 100.0
}
