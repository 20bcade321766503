use osmrdf_api::model::ElementKind;

/// Which child of the root element [`OsmXmlParser`](struct.OsmXmlParser.html) extracts.
///
/// The default selects the first child, whatever its tag.
///
/// Select the second way of a document:
/// ```
/// use osmrdf_api::model::ElementKind;
/// use osmrdf_xml::ElementSelector;
///
/// let selector = ElementSelector::default().with_kind(ElementKind::Way).with_index(1);
/// assert_eq!(1, selector.index);
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Hash)]
pub struct ElementSelector {
    /// Position among the candidate children, starting at 0.
    pub index: usize,
    /// If set, only the children with this tag are candidates.
    pub kind: Option<ElementKind>,
}

impl ElementSelector {
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub(crate) fn is_candidate(&self, tag_name: &str) -> bool {
        self.kind.map_or(true, |kind| kind.tag_name() == tag_name)
    }
}
