use crate::error::{OsmXmlError, OsmXmlErrorKind};
use crate::selector::ElementSelector;
use log::{debug, trace};
use osmrdf_api::model::{ElementKind, OsmElement};
use osmrdf_api::parser::ElementParser;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;
use std::str;
use std::str::FromStr;

/// An [OSM API v0.6](https://wiki.openstreetmap.org/wiki/API_v0.6) XML element extractor.
///
/// It implements the `ElementParser` trait.
/// The whole document is read to make sure it is well-formed, but only the attributes of the element
/// picked by the [`ElementSelector`](struct.ElementSelector.html) are kept in memory.
/// Only the direct children of the root element are considered, so the `<tag>`, `<nd>` and `<member>`
/// children of an element are never selected.
///
/// The siblings of the selected element are ignored:
/// ```
/// use osmrdf_api::model::ElementKind;
/// use osmrdf_api::parser::ElementParser;
/// use osmrdf_xml::{ElementSelector, OsmXmlParser};
///
/// let xml = br#"<osm>
///   <way id="45" version="2"><nd ref="1"/><nd ref="2"/></way>
///   <node id="1" lat="10.0" lon="20.0"/>
/// </osm>"#;
///
/// let way = OsmXmlParser::new(xml.as_ref()).parse()?;
/// assert_eq!(ElementKind::Way, way.kind);
/// assert_eq!(Some(45), way.id);
///
/// let node = OsmXmlParser::with_selector(xml.as_ref(), ElementSelector::default().with_kind(ElementKind::Node)).parse()?;
/// assert_eq!(Some(10.), node.lat);
/// # Result::<_, osmrdf_xml::OsmXmlError>::Ok(())
/// ```
pub struct OsmXmlParser<R: BufRead> {
    reader: OsmXmlReader<R>,
    reader_buffer: Vec<u8>,
}

impl<R: BufRead> OsmXmlParser<R> {
    /// Builds the parser from a `BufRead` implementation. The first child of the root element is selected.
    pub fn new(reader: R) -> Self {
        Self::with_selector(reader, ElementSelector::default())
    }

    /// Builds the parser from a `BufRead` implementation and an explicit selection rule.
    pub fn with_selector(reader: R, selector: ElementSelector) -> Self {
        let mut reader = Reader::from_reader(reader);
        reader.trim_text(true);
        reader.check_end_names(true);
        Self {
            reader: OsmXmlReader {
                reader,
                selector,
                depth: 0,
                has_root: false,
                candidates: 0,
                selected: None,
            },
            reader_buffer: Vec::default(),
        }
    }
}

impl<R: BufRead> ElementParser for OsmXmlParser<R> {
    type Error = OsmXmlError;

    fn parse(mut self) -> Result<OsmElement, OsmXmlError> {
        loop {
            let event = self.reader.reader.read_event(&mut self.reader_buffer)?;
            match event {
                Event::Start(event) => {
                    self.reader.parse_start_event(&event)?;
                    self.reader.depth += 1;
                }
                Event::Empty(event) => self.reader.parse_start_event(&event)?,
                Event::End(_) => self.reader.parse_end_event()?,
                Event::Text(event) => self.reader.parse_text_event(&event.unescaped()?)?,
                Event::CData(event) => self.reader.parse_text_event(event.escaped())?,
                Event::Eof => {
                    self.reader.parse_eof()?;
                    break;
                }
                _ => {}
            }
            self.reader_buffer.clear();
        }

        match self.reader.selected {
            Some(selected) => selected.into_element(),
            None => Err(OsmXmlError {
                kind: OsmXmlErrorKind::MissingElement,
                position: None,
            }),
        }
    }
}

/// Attributes of the selected element, decoded but not interpreted yet.
struct RawElement {
    tag_name: String,
    attributes: Vec<(String, String)>,
    position: usize,
}

impl RawElement {
    fn into_element(self) -> Result<OsmElement, OsmXmlError> {
        let kind = ElementKind::from_str(&self.tag_name).map_err(|error| OsmXmlError {
            kind: OsmXmlErrorKind::UnknownKind(error),
            position: Some(self.position),
        })?;
        let mut element = OsmElement::new(kind, None);
        for (name, value) in &self.attributes {
            match name.as_str() {
                "id" => element.id = Some(parse_attribute(name, value)?),
                "changeset" => element.changeset = Some(parse_attribute(name, value)?),
                "version" => element.version = Some(parse_attribute(name, value)?),
                "userid" => element.userid = Some(parse_attribute(name, value)?),
                "lat" => element.lat = Some(parse_attribute(name, value)?),
                "lon" => element.lon = Some(parse_attribute(name, value)?),
                "timestamp" => element.timestamp = Some(value.clone()),
                "user" => element.user = Some(value.clone()),
                _ => trace!("Ignoring attribute {} of <{}>", name, self.tag_name),
            }
        }
        debug!("Selected {} {}", kind, element.subject());
        Ok(element)
    }
}

fn parse_attribute<T: FromStr>(name: &str, value: &str) -> Result<T, OsmXmlError> {
    value.trim().parse().map_err(|_| OsmXmlError {
        kind: OsmXmlErrorKind::InvalidAttribute {
            name: name.to_owned(),
            value: value.to_owned(),
        },
        position: None,
    })
}

struct OsmXmlReader<R: BufRead> {
    reader: Reader<R>,
    selector: ElementSelector,
    depth: usize,
    has_root: bool,
    candidates: usize,
    selected: Option<RawElement>,
}

impl<R: BufRead> OsmXmlReader<R> {
    fn parse_start_event(&mut self, event: &BytesStart<'_>) -> Result<(), OsmXmlError> {
        let position = self.reader.buffer_position();
        let tag_name = decode(event.name())?;

        if self.depth == 0 {
            if self.has_root {
                return Err(OsmXmlError::syntax(
                    format!("junk after document element: <{}>", tag_name),
                    position,
                ));
            }
            self.has_root = true;
            let attribute_count = check_attributes(event, position)?;
            debug!(
                "Reading <{}> document with {} root attributes",
                tag_name, attribute_count
            );
        } else if self.depth == 1 && self.selected.is_none() && self.selector.is_candidate(tag_name)
        {
            if self.candidates == self.selector.index {
                let selected = self.read_raw_element(tag_name, event, position)?;
                self.selected = Some(selected);
            } else {
                check_attributes(event, position)?;
                trace!("Skipping <{}> candidate {}", tag_name, self.candidates);
            }
            self.candidates += 1;
        } else {
            check_attributes(event, position)?;
        }
        Ok(())
    }

    fn parse_end_event(&mut self) -> Result<(), OsmXmlError> {
        if self.depth == 0 {
            return Err(OsmXmlError::syntax(
                "closing tag without opening tag",
                self.reader.buffer_position(),
            ));
        }
        self.depth -= 1;
        Ok(())
    }

    fn parse_text_event(&mut self, text: &[u8]) -> Result<(), OsmXmlError> {
        if self.depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
            return Err(OsmXmlError::syntax(
                "text outside of the root element",
                self.reader.buffer_position(),
            ));
        }
        Ok(())
    }

    fn parse_eof(&self) -> Result<(), OsmXmlError> {
        let position = self.reader.buffer_position();
        if !self.has_root {
            Err(OsmXmlError::syntax("no element found", position))
        } else if self.depth > 0 {
            Err(OsmXmlError::syntax(
                format!("{} unclosed element(s) at end of document", self.depth),
                position,
            ))
        } else {
            Ok(())
        }
    }

    fn read_raw_element(
        &self,
        tag_name: &str,
        event: &BytesStart<'_>,
        position: usize,
    ) -> Result<RawElement, OsmXmlError> {
        let mut attributes = Vec::default();
        for attribute in event.attributes() {
            let attribute = attribute?;
            let name = decode(attribute.key)?.to_owned();
            check_attribute_value(&name, &attribute.value, position)?;
            let value = attribute.unescape_and_decode_value(&self.reader)?;
            attributes.push((name, value));
        }
        Ok(RawElement {
            tag_name: tag_name.to_owned(),
            attributes,
            position,
        })
    }
}

/// Validates the attributes of an element that is not converted, the same way as the converted one.
fn check_attributes(event: &BytesStart<'_>, position: usize) -> Result<usize, OsmXmlError> {
    let mut count = 0;
    for attribute in event.attributes() {
        let attribute = attribute?;
        let name = decode(attribute.key)?;
        check_attribute_value(name, &attribute.value, position)?;
        decode(&attribute.unescaped_value()?)?;
        count += 1;
    }
    Ok(count)
}

// quick-xml accepts `<` and control characters in attribute values, XML 1.0 does not.
fn check_attribute_value(name: &str, value: &[u8], position: usize) -> Result<(), OsmXmlError> {
    let is_forbidden =
        |b: &u8| *b == b'<' || (*b < 0x20 && !matches!(*b, b'\t' | b'\n' | b'\r'));
    if value.iter().any(is_forbidden) {
        return Err(OsmXmlError::syntax(
            format!("not well-formed value for attribute {}", name),
            position,
        ));
    }
    Ok(())
}

fn decode(bytes: &[u8]) -> Result<&str, OsmXmlError> {
    str::from_utf8(bytes).map_err(|error| quick_xml::Error::Utf8(error).into())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integer_attributes_are_trimmed() {
        assert_eq!(Ok(42), parse_attribute::<i64>("id", " 42 ").map_err(|_| ()));
        assert_eq!(Ok(-3), parse_attribute::<i64>("id", "-3").map_err(|_| ()));
    }

    #[test]
    fn invalid_attribute_reports_name_and_value() {
        let error = parse_attribute::<i64>("changeset", "12a").unwrap_err();
        assert_eq!(
            "invalid value '12a' for attribute changeset",
            error.to_string()
        );
        assert!(!error.is_parse_error());
        assert!(!error.is_lookup_error());
    }
}
