// Floor-plan diagram document - a parsed SVG tree, mutable in place and
// addressable by element id.

use thiserror::Error;
use xmltree::{Element, EmitterConfig, XMLNode};

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("diagram is not well-formed SVG: {0}")]
    Parse(String),

    #[error("diagram root element is <{0}>, expected <svg>")]
    NotSvg(String),

    #[error("diagram serialization failed: {0}")]
    Write(String),
}

/// A floor-plan SVG document.
#[derive(Debug, Clone)]
pub struct DiagramDocument {
    root: Element,
}

impl DiagramDocument {
    pub fn parse(text: &str) -> Result<Self, DiagramError> {
        let root =
            Element::parse(text.as_bytes()).map_err(|e| DiagramError::Parse(e.to_string()))?;
        if root.name != "svg" {
            return Err(DiagramError::NotSvg(root.name.clone()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Forces the outer width to fill the container and drops the fixed
    /// height so the diagram scales proportionally.
    pub fn make_responsive(&mut self) {
        self.root
            .attributes
            .insert("width".to_string(), "100%".to_string());
        self.root.attributes.remove("height");
    }

    pub fn find_feature(&self, id: &str) -> Option<&Element> {
        find_by_id(&self.root, id)
    }

    pub(crate) fn find_feature_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_by_id_mut(&mut self.root, id)
    }

    /// Appends an element to the SVG root, tagging it with the root's
    /// namespace so serialization keeps it in the SVG vocabulary.
    pub(crate) fn append_element(&mut self, mut element: Element) {
        element.namespace = self.root.namespace.clone();
        self.root.children.push(XMLNode::Element(element));
    }

    pub fn to_svg_string(&self) -> Result<String, DiagramError> {
        let mut buffer = Vec::new();
        let config = EmitterConfig::new()
            .write_document_declaration(false)
            .perform_indent(false);
        self.root
            .write_with_config(&mut buffer, config)
            .map_err(|e| DiagramError::Write(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| DiagramError::Write(e.to_string()))
    }
}

fn find_by_id<'a>(element: &'a Element, id: &str) -> Option<&'a Element> {
    if element.attributes.get("id").is_some_and(|value| value == id) {
        return Some(element);
    }
    element.children.iter().find_map(|node| match node {
        XMLNode::Element(child) => find_by_id(child, id),
        _ => None,
    })
}

fn find_by_id_mut<'a>(element: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if element.attributes.get("id").is_some_and(|value| value == id) {
        return Some(element);
    }
    element.children.iter_mut().find_map(|node| match node {
        XMLNode::Element(child) => find_by_id_mut(child, id),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600"><g id="outer"><rect id="f-a1" x="1" y="2" width="3" height="4"/></g></svg>"##;

    #[test]
    fn finds_nested_elements_by_id() {
        let document = DiagramDocument::parse(SVG).unwrap();
        assert!(document.find_feature("f-a1").is_some());
        assert!(document.find_feature("outer").is_some());
        assert!(document.find_feature("f-zz").is_none());
    }

    #[test]
    fn responsive_sizing_rewrites_the_root() {
        let mut document = DiagramDocument::parse(SVG).unwrap();
        document.make_responsive();
        assert_eq!(
            document.root().attributes.get("width").map(String::as_str),
            Some("100%")
        );
        assert!(!document.root().attributes.contains_key("height"));
    }

    #[test]
    fn rejects_non_svg_documents() {
        assert!(matches!(
            DiagramDocument::parse("<html><body/></html>"),
            Err(DiagramError::NotSvg(_))
        ));
        assert!(matches!(
            DiagramDocument::parse("not xml at all"),
            Err(DiagramError::Parse(_))
        ));
    }
}
