use osmrdf_xml::ElementSelector;

/// Options of [`xml_to_turtle`](fn.xml_to_turtle.html).
///
/// ```
/// use osmrdf::ConvertOptions;
/// use osmrdf_api::model::ElementKind;
/// use osmrdf_xml::ElementSelector;
///
/// let options = ConvertOptions::default()
///     .with_selector(ElementSelector::default().with_kind(ElementKind::Relation))
///     .with_source_comment(true);
/// assert!(options.source_comment);
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Hash)]
pub struct ConvertOptions {
    /// The element to convert. Defaults to the first child of the root element.
    pub selector: ElementSelector,
    /// Appends the input document as a comment after the Turtle block.
    pub source_comment: bool,
}

impl ConvertOptions {
    pub fn with_selector(mut self, selector: ElementSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_source_comment(mut self, source_comment: bool) -> Self {
        self.source_comment = source_comment;
        self
    }
}
