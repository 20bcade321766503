//! Extraction of a single element from an [OSM API v0.6](https://wiki.openstreetmap.org/wiki/API_v0.6) XML document.
//!
//! Read the first element of a document:
//! ```
//! use osmrdf_api::model::ElementKind;
//! use osmrdf_api::parser::ElementParser;
//! use osmrdf_xml::OsmXmlParser;
//!
//! let xml = r#"<osm version="0.6"><node id="123" lat="1.5" lon="2.5" user="alice"/></osm>"#;
//! let node = OsmXmlParser::new(xml.as_bytes()).parse()?;
//! assert_eq!(ElementKind::Node, node.kind);
//! assert_eq!(Some(123), node.id);
//! assert_eq!(Some("alice"), node.user.as_deref());
//! # Result::<_, osmrdf_xml::OsmXmlError>::Ok(())
//! ```
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

mod error;
mod parser;
mod selector;

pub use error::{OsmXmlError, OsmXmlErrorKind};
pub use parser::OsmXmlParser;
pub use selector::ElementSelector;
