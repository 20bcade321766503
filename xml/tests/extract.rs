use osmrdf_api::model::ElementKind;
use osmrdf_api::parser::ElementParser;
use osmrdf_xml::*;

fn parse(xml: &str) -> Result<osmrdf_api::model::OsmElement, OsmXmlError> {
    OsmXmlParser::new(xml.as_bytes()).parse()
}

#[test]
fn node_with_all_attributes() -> Result<(), OsmXmlError> {
    let node = parse(
        r#"<osm><node id="123" lat="1.5" lon="2.5" version="3" changeset="100" user="alice" userid="7" timestamp="2022-01-01T00:00:00Z"/></osm>"#,
    )?;
    assert_eq!(ElementKind::Node, node.kind);
    assert_eq!(Some(123), node.id);
    assert_eq!(Some(1.5), node.lat);
    assert_eq!(Some(2.5), node.lon);
    assert_eq!(Some(3), node.version);
    assert_eq!(Some(100), node.changeset);
    assert_eq!(Some("alice"), node.user.as_deref());
    assert_eq!(Some(7), node.userid);
    assert_eq!(Some("2022-01-01T00:00:00Z"), node.timestamp.as_deref());
    Ok(())
}

#[test]
fn absent_attributes_stay_absent() -> Result<(), OsmXmlError> {
    let way = parse(r#"<osm version="0.6" generator="test"><way id="45"/></osm>"#)?;
    assert_eq!(ElementKind::Way, way.kind);
    assert_eq!(Some(45), way.id);
    assert_eq!(None, way.changeset);
    assert_eq!(None, way.timestamp);
    assert_eq!(None, way.user);
    assert_eq!(None, way.userid);
    assert_eq!(None, way.version);
    assert_eq!(None, way.lat);
    assert_eq!(None, way.lon);
    Ok(())
}

#[test]
fn zero_values_are_kept_as_present() -> Result<(), OsmXmlError> {
    let node = parse(r#"<osm><node id="1" changeset="0" userid="0" lat="0.0" lon="0"/></osm>"#)?;
    assert_eq!(Some(0), node.changeset);
    assert_eq!(Some(0), node.userid);
    assert_eq!(Some(0.), node.lat);
    assert_eq!(Some(0.), node.lon);
    Ok(())
}

#[test]
fn attribute_values_are_unescaped() -> Result<(), OsmXmlError> {
    let node = parse(r#"<osm><node id="1" user="Tom &amp; &quot;Jerry&quot;"/></osm>"#)?;
    assert_eq!(Some(r#"Tom & "Jerry""#), node.user.as_deref());
    Ok(())
}

#[test]
fn only_the_first_child_is_extracted() -> Result<(), OsmXmlError> {
    let relation = parse(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <relation id="9" version="4">
    <member type="way" ref="45" role="outer"/>
    <tag k="type" v="multipolygon"/>
  </relation>
  <node id="1"/>
  <way id="2"/>
</osm>"#,
    )?;
    assert_eq!(ElementKind::Relation, relation.kind);
    assert_eq!(Some(9), relation.id);
    assert_eq!(Some(4), relation.version);
    Ok(())
}

#[test]
fn grandchildren_are_not_candidates() -> Result<(), OsmXmlError> {
    let xml = r#"<osm><way id="45"><nd ref="1"/></way><way id="46"/></osm>"#;
    let way = OsmXmlParser::with_selector(xml.as_bytes(), ElementSelector::default().with_index(1))
        .parse()?;
    assert_eq!(Some(46), way.id);
    Ok(())
}

#[test]
fn selector_with_kind_filter() -> Result<(), OsmXmlError> {
    let xml = r#"<osm><bounds minlat="0" minlon="0" maxlat="1" maxlon="1"/><node id="1"/><way id="2"/><node id="3"/></osm>"#;
    let first_node = OsmXmlParser::with_selector(
        xml.as_bytes(),
        ElementSelector::default().with_kind(ElementKind::Node),
    )
    .parse()?;
    assert_eq!(Some(1), first_node.id);

    let second_node = OsmXmlParser::with_selector(
        xml.as_bytes(),
        ElementSelector::default()
            .with_kind(ElementKind::Node)
            .with_index(1),
    )
    .parse()?;
    assert_eq!(Some(3), second_node.id);

    let way = OsmXmlParser::with_selector(
        xml.as_bytes(),
        ElementSelector::default().with_kind(ElementKind::Way),
    )
    .parse()?;
    assert_eq!(ElementKind::Way, way.kind);
    Ok(())
}

#[test]
fn selector_out_of_range() {
    let xml = r#"<osm><node id="1"/></osm>"#;
    let error = OsmXmlParser::with_selector(xml.as_bytes(), ElementSelector::default().with_index(1))
        .parse()
        .unwrap_err();
    assert!(error.is_lookup_error());
    assert!(matches!(error.kind(), OsmXmlErrorKind::MissingElement));
}

#[test]
fn root_without_child_is_a_lookup_error() {
    for xml in &["<osm/>", "<osm version=\"0.6\"></osm>", "<osm>  </osm>"] {
        let error = parse(xml).unwrap_err();
        assert!(error.is_lookup_error(), "{}: {}", xml, error);
        assert!(!error.is_parse_error());
    }
}

#[test]
fn unknown_kind_is_a_lookup_error() {
    let error = parse(r#"<osm><bounds minlat="0"/></osm>"#).unwrap_err();
    assert!(error.is_lookup_error());
    match error.kind() {
        OsmXmlErrorKind::UnknownKind(kind) => assert_eq!("bounds", kind.name()),
        kind => panic!("unexpected error {:?}", kind),
    }

    let error = parse(r#"<osm><tag k="name" v="x"/></osm>"#).unwrap_err();
    assert!(error.is_lookup_error());
}

#[test]
fn malformed_xml_is_a_parse_error() {
    for xml in &[
        "",
        "<osm><node id=\"1\"",
        "<osm><node id=\"1\"/>",
        "<osm><node id=\"1\"></way></osm>",
        "<osm><node id=\"1\"/></osm><osm/>",
        "<osm><node id=\"1\"/></osm>trailing",
        "<osm><node id=\"1\" id=\"2\"/></osm>",
        "<osm generator=\"&bogus;\"><node id=\"1\"/></osm>",
        "<osm><node id=\"1\"/><way id=\"2\" user=\"&bogus;\"/></osm>",
        "<osm><node id=\"1\"><tag k=\"name\" v=\"&bogus;\"/></node></osm>",
        "<osm><node id='1' user=\"<\"/></osm>",
        "<osm><node id=\"1\" user=\"\u{0}\"/></osm>",
        "<osm><way id=\"2\"/><node id=\"1\" user=\"a<b\"/></osm>",
    ] {
        let error = parse(xml).unwrap_err();
        assert!(error.is_parse_error(), "{:?} gave {}", xml, error);
    }
}

#[test]
fn parse_errors_win_over_lookup_errors() {
    let error = parse("<osm><bounds/>").unwrap_err();
    assert!(error.is_parse_error());
}

#[test]
fn invalid_numbers_are_reported() {
    let error = parse(r#"<osm><node id="1" lat="north"/></osm>"#).unwrap_err();
    match error.kind() {
        OsmXmlErrorKind::InvalidAttribute { name, value } => {
            assert_eq!("lat", name.as_str());
            assert_eq!("north", value.as_str());
        }
        kind => panic!("unexpected error {:?}", kind),
    }
}

#[test]
fn ids_beyond_i64_are_invalid_attributes() {
    let error = parse(r#"<osm><node id="92233720368547758070"/></osm>"#).unwrap_err();
    assert!(matches!(
        error.kind(),
        OsmXmlErrorKind::InvalidAttribute { name, .. } if name == "id"
    ));
    assert!(!error.is_parse_error());
    assert!(!error.is_lookup_error());
}

#[test]
fn whitespace_controls_are_allowed_in_attributes() -> Result<(), OsmXmlError> {
    let node = parse("<osm><node id=\"1\" user=\"a\tb\"/></osm>")?;
    assert_eq!(Some("a\tb"), node.user.as_deref());
    Ok(())
}
