//! Parsed-markup capability used by the check modules
//!
//! Checks never touch the HTML parser directly; they query this narrow
//! accessor (first-match text, first-match attribute, all matching inner
//! texts, meta-tag enumeration). The accessor is implemented once over the
//! `scraper` crate, which tolerates arbitrarily malformed markup.

use scraper::{Html, Selector};

/// A parsed HTML document scoped to a single analysis request.
pub struct PageDocument {
    doc: Html,
}

/// One `<meta>` element's identifying attributes.
#[derive(Debug, Clone)]
pub struct MetaTag {
    /// `name` attribute, if any
    pub name: Option<String>,
    /// `property` attribute, if any
    pub property: Option<String>,
    /// `content` attribute, if any
    pub content: Option<String>,
}

impl PageDocument {
    /// Parse markup into a queryable document. Malformed HTML is repaired by
    /// the parser rather than rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// Text content of the first element matching `selector`.
    ///
    /// Returns `None` when no element matches or the matched element has no
    /// text; an all-whitespace title is still "present" and returned as-is.
    pub fn element_text(&self, selector: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        let element = self.doc.select(&sel).next()?;
        let text: String = element.text().collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Value of `attribute` on the first element matching `selector`.
    ///
    /// Empty attribute values count as absent, matching how the reference
    /// behavior treats them.
    pub fn attribute(&self, selector: &str, attribute: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        let element = self.doc.select(&sel).next()?;
        element
            .value()
            .attr(attribute)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Whether any element matches `selector`.
    pub fn has_element(&self, selector: &str) -> bool {
        match Selector::parse(selector) {
            Ok(sel) => self.doc.select(&sel).next().is_some(),
            Err(_) => false,
        }
    }

    /// Inner text of every element matching `selector`, in document order.
    pub fn all_inner_texts(&self, selector: &str) -> Vec<String> {
        match Selector::parse(selector) {
            Ok(sel) => self
                .doc
                .select(&sel)
                .map(|element| element.text().collect())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Every `<meta>` element's name/property/content attributes, in
    /// document order.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        let sel = match Selector::parse("meta") {
            Ok(sel) => sel,
            Err(_) => return Vec::new(),
        };
        self.doc
            .select(&sel)
            .map(|element| {
                let value = element.value();
                MetaTag {
                    name: value.attr("name").map(str::to_string),
                    property: value.attr("property").map(str::to_string),
                    content: value.attr("content").map(str::to_string),
                }
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
