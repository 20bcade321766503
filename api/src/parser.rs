//! Interfaces for OSM element parsers.

use crate::model::OsmElement;
use std::error::Error;

/// A parser extracting a single [`OsmElement`](../model/struct.OsmElement.html) from a document.
pub trait ElementParser: Sized {
    type Error: Error;

    /// Consumes the complete document and returns the selected element.
    fn parse(self) -> Result<OsmElement, Self::Error>;
}
