//! Core library for the `rlprobe` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, configuration parsing, the concurrent request dispatcher,
//! latency statistics, and output sinks. The primary user-facing interface
//! is the `rlprobe` command-line application; library APIs may evolve as the
//! CLI grows.
pub mod args;
pub mod charts;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod sinks;
