// ABOUTME: Re-exports helper modules for kpkn-cli
// ABOUTME: Provides JSON input loading and output printing

pub mod io;
