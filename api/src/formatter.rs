//! Interfaces for OSM element formatters.

use crate::model::OsmElement;
use std::error::Error;

/// A formatter for [`OsmElement`](../model/struct.OsmElement.html).
pub trait ElementFormatter {
    type Error: Error;

    /// Writes an element
    fn format(&mut self, element: &OsmElement) -> Result<(), Self::Error>;
}
