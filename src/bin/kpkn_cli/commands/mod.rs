// ABOUTME: Re-exports command modules for kpkn-cli
// ABOUTME: Provides strength, body composition, volume, and recovery commands

pub mod body;
pub mod recovery;
pub mod strength;
pub mod volume;
