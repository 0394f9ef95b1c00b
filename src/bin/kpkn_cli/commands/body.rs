// ABOUTME: Body composition commands for kpkn-cli
// ABOUTME: FFMI with category and IPF GL points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use kpkn_engine::intelligence::body_composition::{
    calculate_ffmi, calculate_ipf_gl_points, IpfGlOptions,
};
use serde_json::json;
use tracing::warn;

use crate::helpers::io::print_json;

/// Fat-free mass index
pub fn ffmi(height_cm: f64, weight_kg: f64, body_fat_pct: Option<f64>) -> Result<()> {
    let result = calculate_ffmi(height_cm, weight_kg, body_fat_pct);
    if result.is_none() {
        warn!(height_cm, weight_kg, ?body_fat_pct, "FFMI needs height, weight, and body fat");
    }
    print_json(&result)
}

/// IPF GL points
pub fn ipf_gl(total: f64, bodyweight: f64, options: IpfGlOptions) -> Result<()> {
    let points = calculate_ipf_gl_points(total, bodyweight, &options);
    print_json(&json!({
        "total": total,
        "bodyweight": bodyweight,
        "options": options,
        "points": points,
    }))
}
