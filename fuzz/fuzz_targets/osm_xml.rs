#![no_main]
use libfuzzer_sys::fuzz_target;
use osmrdf_api::parser::ElementParser;
use osmrdf_xml::OsmXmlParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(element) = OsmXmlParser::new(data).parse() {
        let _ = element.subject().to_string();
    }
    if let Ok(xml) = std::str::from_utf8(data) {
        let _ = osmrdf::node_xml_to_turtle(xml);
    }
});
