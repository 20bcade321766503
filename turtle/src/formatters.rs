use crate::utils::Double;
use crate::vocab::PREFIXES;
use osmrdf_api::formatter::ElementFormatter;
use osmrdf_api::model::OsmElement;
use std::io;
use std::io::Write;

/// A [Turtle](https://www.w3.org/TR/turtle/) formatter for OSM element metadata.
///
/// It implements the `ElementFormatter` trait.
/// The prefix declarations are written when the formatter is built.
///
/// Only the attributes holding a non-zero, non-empty value are written.
/// The location is written if both `lat` and `lon` are.
/// Strings are written as they are, without any escaping.
///
/// Write a node into a `Vec` buffer:
/// ```
/// use osmrdf_api::formatter::ElementFormatter;
/// use osmrdf_api::model::{ElementKind, OsmElement};
/// use osmrdf_turtle::TurtleFormatter;
///
/// let mut node = OsmElement::new(ElementKind::Node, Some(1));
/// node.lat = Some(10.);
/// node.lon = Some(20.);
///
/// let mut formatter = TurtleFormatter::new(Vec::default())?;
/// formatter.format(&node)?;
/// let turtle = String::from_utf8(formatter.finish()?).unwrap();
/// assert!(turtle.ends_with("\n\nosmnode:1\n    osmm:loc \"Point(10.0 20.0)\"^^geo:wktLiteral ;\n    # TODO implement the tags\n.\n"));
/// # std::io::Result::Ok(())
/// ```
pub struct TurtleFormatter<W: Write> {
    write: W,
}

impl<W: Write> TurtleFormatter<W> {
    /// Builds a new formatter from a `Write` implementation and writes the prefix declarations
    pub fn new(mut write: W) -> Result<Self, io::Error> {
        for prefix in PREFIXES.iter() {
            writeln!(write, "{}", prefix)?;
        }
        writeln!(write)?;
        Ok(Self { write })
    }

    /// Writes `source` as a comment block, each of its lines prefixed by `# `.
    ///
    /// The block is separated from the previous content by an empty line and is not terminated by a line jump.
    pub fn write_source_comment(&mut self, source: &str) -> Result<(), io::Error> {
        writeln!(self.write)?;
        write!(self.write, "# {}", source.replace('\n', "\n# "))
    }

    /// Finishes writing and returns the underlying `Write`
    pub fn finish(mut self) -> Result<W, io::Error> {
        self.write.flush()?;
        Ok(self.write)
    }
}

impl<W: Write> ElementFormatter for TurtleFormatter<W> {
    type Error = io::Error;

    fn format(&mut self, element: &OsmElement) -> Result<(), io::Error> {
        writeln!(self.write, "{}", element.subject())?;
        if let Some(changeset) = non_zero(element.changeset) {
            writeln!(self.write, "    osmm:changeset {} ;", changeset)?;
        }
        if let (Some(lat), Some(lon)) =
            (non_zero_double(element.lat), non_zero_double(element.lon))
        {
            writeln!(
                self.write,
                "    osmm:loc \"Point({} {})\"^^geo:wktLiteral ;",
                Double(lat),
                Double(lon)
            )?;
        }
        if let Some(timestamp) = non_empty(&element.timestamp) {
            writeln!(
                self.write,
                "    osmm:timestamp \"{}\"^^xsd:dateTime ;",
                timestamp
            )?;
        }
        if let Some(user) = non_empty(&element.user) {
            writeln!(self.write, "    osmm:user \"{}\" ;", user)?;
        }
        if let Some(userid) = non_zero(element.userid) {
            writeln!(self.write, "    osmm:userid {} ;", userid)?;
        }
        if let Some(version) = non_zero(element.version) {
            writeln!(self.write, "    osmm:version {} ;", version)?;
        }
        writeln!(self.write, "    # TODO implement the tags")?;
        writeln!(self.write, ".")
    }
}

// A zero value is not written, as if the attribute was missing.
fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|value| *value != 0)
}

fn non_zero_double(value: Option<f64>) -> Option<f64> {
    value.filter(|value| *value != 0.)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
