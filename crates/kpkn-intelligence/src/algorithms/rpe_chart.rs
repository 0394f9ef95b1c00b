// ABOUTME: RPE chart mapping reps-to-failure to percentage of one-rep max
// ABOUTME: RTS table at half-rep resolution with linear interpolation and Epley extension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! RPE chart (Tuchscherer, Reactive Training Systems).
//!
//! The chart is indexed by reps-to-failure (`reps + RIR`): a single at RPE 10
//! is one rep to failure and maps to 100%. Every additional rep to failure
//! costs roughly 2.5-3% of the one-rep max.

use kpkn_core::constants::physiological::one_rep_max::EPLEY_DIVISOR;

/// Reps-to-failure of the first table entry
const CHART_START: f64 = 1.0;

/// Spacing between table entries, in reps-to-failure
const CHART_STEP: f64 = 0.5;

/// %1RM for reps-to-failure 1.0, 1.5, 2.0, ... 12.5
const CHART: [f64; 24] = [
    100.0, 97.8, 95.5, 93.9, 92.2, 90.7, 89.2, 87.8, 86.3, 85.0, 83.7, 82.4, 81.1, 79.9, 78.6,
    77.4, 76.2, 75.1, 73.9, 72.3, 70.7, 69.4, 68.0, 66.7,
];

/// Highest reps-to-failure covered by the table
const CHART_END: f64 = 12.5;

/// Percentage of 1RM that can be lifted for `reps_to_failure` reps
///
/// Values at or below one rep return 100. Values between table entries are
/// interpolated linearly; values beyond the table follow the Epley ratio from
/// the last entry, so the curve stays continuous and decreasing.
#[must_use]
pub fn percent_of_1rm(reps_to_failure: f64) -> f64 {
    if !reps_to_failure.is_finite() || reps_to_failure <= CHART_START {
        return CHART[0];
    }
    if reps_to_failure >= CHART_END {
        let last = CHART[CHART.len() - 1];
        return last * (1.0 + CHART_END / EPLEY_DIVISOR) / (1.0 + reps_to_failure / EPLEY_DIVISOR);
    }

    let position = (reps_to_failure - CHART_START) / CHART_STEP;
    let lower = position.floor();
    let index = lower as usize;
    let fraction = position - lower;
    match CHART.get(index + 1) {
        Some(&upper) => fraction.mul_add(upper - CHART[index], CHART[index]),
        None => CHART[index],
    }
}

/// Percentage of 1RM for a rep target at a given RPE
#[must_use]
pub fn percent_for_rpe(reps: u32, rpe: f64) -> f64 {
    percent_of_1rm(f64::from(reps) + rpe_to_rir(rpe))
}

/// Reps in reserve implied by an RPE: `max(0, 10 - max(0, rpe))`
#[must_use]
pub fn rpe_to_rir(rpe: f64) -> f64 {
    (10.0 - rpe.max(0.0)).max(0.0)
}

/// RPE implied by reps in reserve: `max(0, 10 - max(0, rir))`
#[must_use]
pub fn rir_to_rpe(rir: f64) -> f64 {
    (10.0 - rir.max(0.0)).max(0.0)
}

/// Rough %1RM for a rep count, as shown in the app's rep-max table
///
/// Covers 1-15 reps (after rounding) from the table and extends above with
/// Epley. Returns `None` when the rounded count is below one or non-finite.
#[must_use]
pub fn estimate_percent_1rm(reps: f64) -> Option<f64> {
    let rounded = reps.round();
    if !rounded.is_finite() || rounded < 1.0 {
        return None;
    }
    let percent = match rounded as u32 {
        1 => 100.0,
        2 => 95.0,
        3 => 93.0,
        4 => 90.0,
        5 => 87.0,
        6 => 85.0,
        7 => 83.0,
        8 => 80.0,
        9 => 77.0,
        10 => 75.0,
        11 => 73.0,
        12 => 70.0,
        13 => 68.0,
        14 => 67.0,
        15 => 65.0,
        _ => (100.0 / (1.0 + reps / EPLEY_DIVISOR)).round(),
    };
    Some(percent)
}
