use std::fmt;

/// A `PREFIX` declaration.
///
/// ```
/// use osmrdf_turtle::Prefix;
///
/// assert_eq!(
///     "PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>",
///     Prefix { name: "xsd", iri: "http://www.w3.org/2001/XMLSchema#" }.to_string()
/// )
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct Prefix {
    pub name: &'static str,
    pub iri: &'static str,
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PREFIX {}: <{}>", self.name, self.iri)
    }
}

/// The namespaces declared at the top of every document, in output order.
///
/// See also <https://wiki.openstreetmap.org/wiki/Sophox#How_OSM_data_is_stored>.
pub const PREFIXES: [Prefix; 7] = [
    Prefix {
        name: "geo",
        iri: "http://www.opengis.net/ont/geosparql#",
    },
    Prefix {
        name: "osmnode",
        iri: "https://www.openstreetmap.org/node/",
    },
    Prefix {
        name: "osmrel",
        iri: "https://www.openstreetmap.org/relation/",
    },
    Prefix {
        name: "osmway",
        iri: "https://www.openstreetmap.org/way/",
    },
    Prefix {
        name: "osmm",
        iri: "https://example.org/todo-meta/",
    },
    Prefix {
        name: "osmt",
        iri: "https://example.org/todo-tag/",
    },
    Prefix {
        name: "xsd",
        iri: "http://www.w3.org/2001/XMLSchema#",
    },
];
