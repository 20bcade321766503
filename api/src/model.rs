//! Data structures for [OSM elements](https://wiki.openstreetmap.org/wiki/Elements) and their RDF subjects.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Prefix reserved for the future serialization of element tags.
pub const TAG_PREFIX: &str = "osmt:";

/// The kind of an OSM primitive.
///
/// ```
/// use osmrdf_api::model::ElementKind;
///
/// assert_eq!(ElementKind::Way, "way".parse().unwrap());
/// assert_eq!("osmway:", ElementKind::Way.prefix());
/// assert!("tag".parse::<ElementKind>().is_err());
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

impl ElementKind {
    /// The XML tag name of this kind in the OSM API v0.6 format.
    pub fn tag_name(self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
            ElementKind::Relation => "relation",
        }
    }

    /// The Turtle prefix the subjects of this kind live in.
    pub fn prefix(self) -> &'static str {
        match self {
            ElementKind::Node => "osmnode:",
            ElementKind::Way => "osmway:",
            ElementKind::Relation => "osmrel:",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

impl FromStr for ElementKind {
    type Err = UnknownElementKind;

    fn from_str(name: &str) -> Result<Self, UnknownElementKind> {
        match name {
            "node" => Ok(ElementKind::Node),
            "way" => Ok(ElementKind::Way),
            "relation" => Ok(ElementKind::Relation),
            _ => Err(UnknownElementKind {
                name: name.to_owned(),
            }),
        }
    }
}

/// Error returned when a tag name is not the name of an [`ElementKind`](enum.ElementKind.html).
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct UnknownElementKind {
    name: String,
}

impl UnknownElementKind {
    /// The tag name that failed the lookup
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not an OSM element kind (expected node, way or relation)",
            self.name
        )
    }
}

impl Error for UnknownElementKind {}

/// An OSM primitive with its metadata attributes.
///
/// Every optional field is `None` when the attribute was not in the source document.
/// A present but zero or empty value stays `Some`: deciding whether it is worth writing is up to the formatter.
#[derive(PartialEq, Debug, Clone)]
pub struct OsmElement {
    pub kind: ElementKind,
    pub id: Option<i64>,
    pub changeset: Option<i64>,
    pub timestamp: Option<String>,
    pub user: Option<String>,
    pub userid: Option<i64>,
    pub version: Option<i64>,
    /// Only meaningful for nodes.
    pub lat: Option<f64>,
    /// Only meaningful for nodes.
    pub lon: Option<f64>,
}

impl OsmElement {
    /// Builds an element of the given kind with all its attributes absent.
    pub fn new(kind: ElementKind, id: Option<i64>) -> Self {
        Self {
            kind,
            id,
            changeset: None,
            timestamp: None,
            user: None,
            userid: None,
            version: None,
            lat: None,
            lon: None,
        }
    }

    /// The RDF subject identifying this element.
    ///
    /// ```
    /// use osmrdf_api::model::{ElementKind, OsmElement};
    ///
    /// assert_eq!("osmrel:9", OsmElement::new(ElementKind::Relation, Some(9)).subject().to_string());
    /// ```
    pub fn subject(&self) -> SubjectId {
        SubjectId {
            kind: self.kind,
            id: self.id,
        }
    }
}

/// A prefixed name like `osmnode:123`.
///
/// An element without `id` gets an empty local name (`osmnode:`).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct SubjectId {
    pub kind: ElementKind,
    pub id: Option<i64>,
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.prefix())?;
        if let Some(id) = self.id {
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn subject_ids_use_kind_prefix() {
        assert_eq!(
            "osmnode:123",
            OsmElement::new(ElementKind::Node, Some(123))
                .subject()
                .to_string()
        );
        assert_eq!(
            "osmway:45",
            OsmElement::new(ElementKind::Way, Some(45))
                .subject()
                .to_string()
        );
        assert_eq!(
            "osmrel:9",
            OsmElement::new(ElementKind::Relation, Some(9))
                .subject()
                .to_string()
        );
    }

    #[test]
    fn subject_without_id_has_empty_local_name() {
        assert_eq!(
            "osmnode:",
            OsmElement::new(ElementKind::Node, None)
                .subject()
                .to_string()
        );
    }

    #[test]
    fn kind_lookup() {
        for kind in &[ElementKind::Node, ElementKind::Way, ElementKind::Relation] {
            assert_eq!(Ok(*kind), kind.tag_name().parse());
        }
        let error = "osm".parse::<ElementKind>().unwrap_err();
        assert_eq!("osm", error.name());
        assert!("Node".parse::<ElementKind>().is_err());
        assert!("tag".parse::<ElementKind>().is_err());
    }
}
