//! Shared types for the salon booking forms.
//!
//! Everything here is platform independent so it can be unit-tested on the
//! native target and reused by the WASM frontend.

pub mod domain;
pub mod shared;
