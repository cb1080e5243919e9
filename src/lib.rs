//! Lipi engine: Roman-to-Devanagari transliteration and bilingual search
//! keys, exported to the host UI through UniFFI.
//!
//! The algorithms live in `lipi-core`; the typing policy of transliterated
//! form fields lives in `lipi-session`. This crate only adapts them to the
//! FFI boundary.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use trace_init::init_tracing;
