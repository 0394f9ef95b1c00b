// ABOUTME: Core types and constants for the KPKN training engine
// ABOUTME: Foundation crate with error handling, training domain models, and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # KPKN Core
//!
//! Foundation crate providing shared types and constants for the training
//! load and recovery engine. It changes infrequently, so the algorithm crate
//! and the facade compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Physiological constants organized by model
//! - **models**: Sets, sessions, logs, catalog, athlete profile, volume rows

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological constants organized by model
pub mod constants;

/// Core training data models
pub mod models;
