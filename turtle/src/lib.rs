//! Implementation of a [Turtle](https://www.w3.org/TR/turtle/) serializer for OSM element metadata.
//!
//! The output declares the namespaces listed in [`PREFIXES`](constant.PREFIXES.html) and one subject block per element.
//! Apart from `osmrdf_api` it only relies on the Rust standard library.
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

mod formatters;
mod utils;
mod vocab;

pub use formatters::TurtleFormatter;
pub use utils::Double;
pub use vocab::{Prefix, PREFIXES};
