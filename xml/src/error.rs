use osmrdf_api::model::UnknownElementKind;
use std::error::Error;
use std::fmt;

/// Error that might be returned while extracting an element.
///
/// It might wrap an XML well-formedness error or be a lookup error on the selected element.
#[derive(Debug)]
pub struct OsmXmlError {
    pub(crate) kind: OsmXmlErrorKind,
    pub(crate) position: Option<usize>,
}

/// `Xml` and `Syntax` are parse errors, `UnknownKind` and `MissingElement` are lookup errors.
///
/// `InvalidAttribute` is neither: the document is well-formed and the element is known,
/// but a numeric attribute does not fit its type. Ids, versions, changesets and user ids are `i64`,
/// so a larger value is an `InvalidAttribute`.
#[derive(Debug)]
pub enum OsmXmlErrorKind {
    Xml(quick_xml::Error),
    Syntax(String),
    InvalidAttribute { name: String, value: String },
    UnknownKind(UnknownElementKind),
    MissingElement,
}

impl OsmXmlError {
    pub(crate) fn syntax(message: impl Into<String>, position: usize) -> Self {
        Self {
            kind: OsmXmlErrorKind::Syntax(message.into()),
            position: Some(position),
        }
    }

    pub fn kind(&self) -> &OsmXmlErrorKind {
        &self.kind
    }

    /// Byte offset in the input where the error was detected, if known
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// `true` if the input is not well-formed XML
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self.kind,
            OsmXmlErrorKind::Xml(_) | OsmXmlErrorKind::Syntax(_)
        )
    }

    /// `true` if the document is well-formed but no known element could be selected
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self.kind,
            OsmXmlErrorKind::UnknownKind(_) | OsmXmlErrorKind::MissingElement
        )
    }
}

impl fmt::Display for OsmXmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            OsmXmlErrorKind::Xml(error) => write!(f, "{}", error),
            OsmXmlErrorKind::Syntax(message) => write!(f, "{}", message),
            OsmXmlErrorKind::InvalidAttribute { name, value } => {
                write!(f, "invalid value '{}' for attribute {}", value, name)
            }
            OsmXmlErrorKind::UnknownKind(error) => write!(f, "{}", error),
            OsmXmlErrorKind::MissingElement => {
                write!(f, "the root element has no element to convert")
            }
        }?;
        if let Some(position) = self.position {
            write!(f, " at byte {}", position)?;
        }
        Ok(())
    }
}

impl Error for OsmXmlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            OsmXmlErrorKind::Xml(quick_xml::Error::Io(error)) => Some(error),
            OsmXmlErrorKind::Xml(quick_xml::Error::Utf8(error)) => Some(error),
            OsmXmlErrorKind::UnknownKind(error) => Some(error),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for OsmXmlError {
    fn from(error: quick_xml::Error) -> Self {
        Self {
            kind: OsmXmlErrorKind::Xml(error),
            position: None,
        }
    }
}

impl From<UnknownElementKind> for OsmXmlError {
    fn from(error: UnknownElementKind) -> Self {
        Self {
            kind: OsmXmlErrorKind::UnknownKind(error),
            position: None,
        }
    }
}
