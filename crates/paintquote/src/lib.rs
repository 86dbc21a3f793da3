//! Core library for the painting quote platform.
//!
//! The quoting module owns the deterministic pricing model: closed input
//! enums, the rate card, the engine that turns a [`quoting::QuoteRequest`]
//! into an itemized [`quoting::QuoteBreakdown`], room measurement
//! arithmetic, and CSV batch intake. Everything here is synchronous and
//! side-effect free; the HTTP/CLI surface lives in the `paintquote-api`
//! service crate.

pub mod config;
pub mod leads;
pub mod quoting;
pub mod telemetry;
