//! Minimal HTML builder.
//!
//! Markup is assembled as a tree of [`HtmlNode`]s and serialized by a single
//! writer. Text content and attribute values are escaped as they are written,
//! so callers hand in raw user strings and never escape themselves.

use std::fmt::Write;

/// Escape text for inclusion in HTML content or a quoted attribute value.
///
/// Maps `&`, `<`, `>`, `"` and `'` to entities; every other character is
/// copied unchanged.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attr {
    name: &'static str,
    /// `None` writes a bare boolean attribute such as `checked`.
    value: Option<String>,
}

/// An HTML element under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<Attr>,
    children: Vec<HtmlNode>,
    void: bool,
}

impl Element {
    /// Element with content and a closing tag.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            void: false,
        }
    }

    /// Void element (`<input ... />`); children are ignored.
    #[must_use]
    pub fn void(tag: &'static str) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    /// Add an attribute with a value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name,
            value: Some(value.into()),
        });
        self
    }

    /// Add a boolean attribute when `on` is true.
    #[must_use]
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push(Attr { name, value: None });
        }
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<HtmlNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<HtmlNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append an escaped text child.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(HtmlNode::Text(content.into()))
    }
}

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// An element.
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Markup owned by the exporter itself (doctype, stylesheet), written verbatim.
    Raw(String),
}

impl From<Element> for HtmlNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl HtmlNode {
    /// Serialize the tree to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(1024);
        self.write_to(&mut out);
        out
    }

    /// Serialize the tree, appending to `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Raw(markup) => out.push_str(markup),
            Self::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for attr in &element.attrs {
                    match &attr.value {
                        Some(value) => {
                            let _ = write!(out, " {}=\"{}\"", attr.name, escape_html(value));
                        }
                        None => {
                            let _ = write!(out, " {}", attr.name);
                        }
                    }
                }
                if element.void {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for child in &element.children {
                    child.write_to(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text, ünïcode ✓"), "plain text, ünïcode ✓");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        // Escaping twice double-encodes, so the writer must only escape once.
        assert_eq!(escape_html(&escape_html("&")), "&amp;amp;");
    }

    #[test]
    fn test_render_nested_elements() {
        let node: HtmlNode = Element::new("div")
            .attr("class", "row")
            .child(Element::new("label").text("Name *"))
            .child(Element::void("input").attr("type", "text").attr("placeholder", ""))
            .into();
        assert_eq!(
            node.render(),
            r#"<div class="row"><label>Name *</label><input type="text" placeholder="" /></div>"#
        );
    }

    #[test]
    fn test_text_and_attributes_escaped_once() {
        let node: HtmlNode = Element::new("p")
            .attr("title", "\"quoted\"")
            .text("1 < 2 & 3 > 2")
            .into();
        assert_eq!(
            node.render(),
            "<p title=\"&quot;quoted&quot;\">1 &lt; 2 &amp; 3 &gt; 2</p>"
        );
    }

    #[test]
    fn test_flag_attributes() {
        let on: HtmlNode = Element::void("input")
            .attr("type", "checkbox")
            .flag("checked", true)
            .into();
        let off: HtmlNode = Element::void("input")
            .attr("type", "checkbox")
            .flag("checked", false)
            .into();
        assert_eq!(on.render(), r#"<input type="checkbox" checked />"#);
        assert_eq!(off.render(), r#"<input type="checkbox" />"#);
    }

    #[test]
    fn test_raw_is_verbatim() {
        let node: HtmlNode = Element::new("style")
            .child(HtmlNode::Raw("a>b{color:red}".to_string()))
            .into();
        assert_eq!(node.render(), "<style>a>b{color:red}</style>");
    }
}
