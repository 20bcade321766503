//! This crate provides basic interfaces and data structures for converting [OpenStreetMap](https://www.openstreetmap.org/) elements to RDF.
//!
//! It is currently used by the [`osmrdf_xml`](https://docs.rs/osmrdf_xml/) and [`osmrdf_turtle`](https://docs.rs/osmrdf_turtle/) crates.
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
#![doc(test(attr(deny(warnings))))]

pub mod formatter;
pub mod model;
pub mod parser;
