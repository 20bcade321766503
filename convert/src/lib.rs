//! Conversion of a single [OpenStreetMap](https://www.openstreetmap.org/) element from the
//! [OSM API v0.6](https://wiki.openstreetmap.org/wiki/API_v0.6) XML format to [RDF Turtle](https://www.w3.org/TR/turtle/).
//!
//! Only the element metadata (changeset, location, timestamp, user, user id and version) is converted.
//!
//! ```
//! let turtle = osmrdf::node_xml_to_turtle(r#"<osm><node id="1" lat="10.0" lon="20.0"/></osm>"#)?;
//! assert!(turtle.contains("\nosmnode:1\n    osmm:loc \"Point(10.0 20.0)\"^^geo:wktLiteral ;\n"));
//! # Result::<_, osmrdf::ConversionError>::Ok(())
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
mod options;

pub use error::{ConversionError, ConversionErrorKind};
pub use options::ConvertOptions;

use log::debug;
use osmrdf_api::formatter::ElementFormatter;
use osmrdf_api::parser::ElementParser;
use osmrdf_turtle::TurtleFormatter;
use osmrdf_xml::OsmXmlParser;
use std::io;

/// Converts the first element of an OSM XML document, expected to be a node, to Turtle.
///
/// The subject is built from the actual tag of the element, so a way given here is written as a way.
pub fn node_xml_to_turtle(xml: &str) -> Result<String, ConversionError> {
    xml_to_turtle(xml, &ConvertOptions::default())
}

/// Converts the first element of an OSM XML document, expected to be a way, to Turtle.
///
/// The `<nd>` and `<tag>` children of the way are not converted.
pub fn way_xml_to_turtle(xml: &str) -> Result<String, ConversionError> {
    xml_to_turtle(xml, &ConvertOptions::default())
}

/// Converts the first element of an OSM XML document, expected to be a relation, to Turtle.
///
/// The `<member>` and `<tag>` children of the relation are not converted.
pub fn relation_xml_to_turtle(xml: &str) -> Result<String, ConversionError> {
    xml_to_turtle(xml, &ConvertOptions::default())
}

/// Converts the element of `xml` picked by `options.selector` to Turtle.
///
/// Nothing is returned if the document is not well-formed or if there is no such element.
///
/// ```
/// use osmrdf::{xml_to_turtle, ConvertOptions};
/// use osmrdf_api::model::ElementKind;
/// use osmrdf_xml::ElementSelector;
///
/// let xml = r#"<osm><node id="1"/><way id="45" version="2"/></osm>"#;
/// let options = ConvertOptions::default()
///     .with_selector(ElementSelector::default().with_kind(ElementKind::Way));
/// let turtle = xml_to_turtle(xml, &options)?;
/// assert!(turtle.contains("\nosmway:45\n    osmm:version 2 ;\n"));
/// assert!(!turtle.contains("osmnode:1"));
/// # Result::<_, osmrdf::ConversionError>::Ok(())
/// ```
pub fn xml_to_turtle(xml: &str, options: &ConvertOptions) -> Result<String, ConversionError> {
    let element = OsmXmlParser::with_selector(xml.as_bytes(), options.selector).parse()?;
    debug!("Converting {} to Turtle", element.subject());

    let mut formatter = TurtleFormatter::new(Vec::default())?;
    formatter.format(&element)?;
    if options.source_comment {
        formatter.write_source_comment(xml)?;
    }
    let turtle = formatter.finish()?;
    String::from_utf8(turtle)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error).into())
}
