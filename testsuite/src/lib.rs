//! Fixture based conformance tests for the OSM XML to Turtle conversion.
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_qualifications
)]

pub mod evaluator;
pub mod manifest;
pub mod report;
