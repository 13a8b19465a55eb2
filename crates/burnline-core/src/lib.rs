#![forbid(unsafe_code)]
//! Cross-cutting primitives shared by the burnline crates: canonical JSON
//! hashing for memoization keys, and the preference-store port.

pub mod canonical;
pub mod ports;

pub const CRATE_NAME: &str = "burnline-core";
