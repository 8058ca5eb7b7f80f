//! Element tree value objects

/// An XML element with its attributes, leading text and child elements.
///
/// `text` follows the ElementTree convention: it holds only the character
/// data that appears before the first child element or comment. Text that
/// follows either is not retained. `None` means the element had no character
/// data at all, which is distinct from whitespace-only text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.append_text(text.as_ref());
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.push_child(child);
        self
    }

    /// Set an attribute, replacing an existing value with the same name
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Append character data.
    ///
    /// Ignored once the element has a child: that data would be the tail of
    /// the child, which the extractors never read.
    pub fn append_text(&mut self, text: &str) {
        if !self.children.is_empty() {
            return;
        }
        self.text.get_or_insert_with(String::new).push_str(text);
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Direct children with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// This element and all its descendants in document (pre-)order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// This element and its descendants with the given name, in document order
    pub fn descendants_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a XmlElement> {
        self.descendants().filter(move |e| e.name == name)
    }
}

/// Pre-order iterator over an element subtree
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// A parsed XML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Every element with the given name, root included, in document order
    pub fn elements_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a XmlElement> {
        self.root.descendants_named(name)
    }
}

impl From<XmlElement> for XmlDocument {
    fn from(root: XmlElement) -> Self {
        Self::new(root)
    }
}
