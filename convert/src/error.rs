use osmrdf_xml::OsmXmlError;
use std::error::Error;
use std::fmt;
use std::io;

/// Error that might be returned during a conversion.
///
/// It wraps the extraction error or an IO error raised while writing the Turtle output.
#[derive(Debug)]
pub struct ConversionError {
    pub(crate) kind: ConversionErrorKind,
}

#[derive(Debug)]
pub enum ConversionErrorKind {
    Xml(OsmXmlError),
    IO(io::Error),
}

impl ConversionError {
    pub fn kind(&self) -> &ConversionErrorKind {
        &self.kind
    }

    /// `true` if the input is not well-formed XML
    pub fn is_parse_error(&self) -> bool {
        matches!(&self.kind, ConversionErrorKind::Xml(error) if error.is_parse_error())
    }

    /// `true` if no node, way or relation could be found in the input
    pub fn is_lookup_error(&self) -> bool {
        matches!(&self.kind, ConversionErrorKind::Xml(error) if error.is_lookup_error())
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ConversionErrorKind::Xml(error) => write!(f, "{}", error),
            ConversionErrorKind::IO(error) => write!(f, "{}", error),
        }
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ConversionErrorKind::Xml(error) => Some(error),
            ConversionErrorKind::IO(error) => Some(error),
        }
    }
}

impl From<OsmXmlError> for ConversionError {
    fn from(error: OsmXmlError) -> Self {
        Self {
            kind: ConversionErrorKind::Xml(error),
        }
    }
}

impl From<io::Error> for ConversionError {
    fn from(error: io::Error) -> Self {
        Self {
            kind: ConversionErrorKind::IO(error),
        }
    }
}
