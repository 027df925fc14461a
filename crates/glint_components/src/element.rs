//! Renderable element tree
//!
//! Components resolve their props into an [`Element`]: a container carrying
//! class tokens and style variables, wrapping arbitrary caller content. A
//! host can inspect the tree directly (class list, style variables,
//! children) or serialize it to HTML for server-side rendering.

use glint_core::{StyleVar, StyleVars};
use smallvec::SmallVec;

/// A node in the rendered tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    /// Plain text, escaped on serialization.
    Text(String),
    /// Pre-rendered markup, emitted verbatim.
    Raw(String),
}

impl Node {
    /// Pre-rendered markup that bypasses escaping.
    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// A styled container element.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: SmallVec<[String; 4]>,
    vars: StyleVars,
    inline_style: Option<String>,
    children: Vec<Node>,
}

impl Element {
    /// A `div` container, the shape every component renders.
    pub fn div() -> Self {
        Self::with_tag("div")
    }

    pub fn with_tag(tag: &'static str) -> Self {
        Self {
            tag,
            classes: SmallVec::new(),
            vars: StyleVars::new(),
            inline_style: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Append a class token. Empty strings are dropped so optional caller
    /// classes compose without leaving stray whitespace.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn var(mut self, var: StyleVar, value: impl Into<String>) -> Self {
        self.vars.set(var, value);
        self
    }

    pub fn with_vars(mut self, vars: StyleVars) -> Self {
        self.vars = vars;
        self
    }

    pub fn style_vars(&self) -> &StyleVars {
        &self.vars
    }

    /// Caller-supplied inline declarations, appended after the variables.
    pub fn inline_style(mut self, style: impl Into<String>) -> Self {
        self.inline_style = Some(style.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The full inline `style` attribute value: resolved variables first,
    /// caller passthrough last.
    pub fn style_attr(&self) -> String {
        let mut style = self.vars.to_inline_css();
        if let Some(extra) = &self.inline_style {
            let extra = extra.trim().trim_end_matches(';');
            if !extra.is_empty() {
                if !style.is_empty() {
                    style.push_str("; ");
                }
                style.push_str(extra);
            }
        }
        style
    }

    /// Serialize the tree to HTML. Text children are escaped; attribute
    /// values are quoted and escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&html_escape::encode_double_quoted_attribute(class));
            }
            out.push('"');
        }
        let style = self.style_attr();
        if !style.is_empty() {
            out.push_str(" style=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(&style));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
                Node::Raw(markup) => out.push_str(markup),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::div()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_div() {
        assert_eq!(Element::div().to_html(), "<div></div>");
    }

    #[test]
    fn test_classes_join_in_insertion_order() {
        let element = Element::div().class("a").class("").class("b c");
        assert_eq!(element.to_html(), "<div class=\"a b c\"></div>");
    }

    #[test]
    fn test_vars_render_into_style_attribute() {
        let element = Element::div().var(StyleVar::GradientStart, "#3b82f6");
        assert_eq!(
            element.to_html(),
            "<div style=\"--gradient-start: #3b82f6\"></div>"
        );
    }

    #[test]
    fn test_passthrough_style_appends_after_vars() {
        let element = Element::div()
            .var(StyleVar::GradientStart, "#111111")
            .inline_style("min-height: 100vh;");
        assert_eq!(
            element.style_attr(),
            "--gradient-start: #111111; min-height: 100vh"
        );
    }

    #[test]
    fn test_text_children_are_escaped() {
        let element = Element::div().child("<script>alert(1)</script>");
        let html = element.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_raw_children_pass_through() {
        let element = Element::div().child(Node::raw("<span>hi</span>"));
        assert_eq!(element.to_html(), "<div><span>hi</span></div>");
    }

    #[test]
    fn test_nested_elements() {
        let inner = Element::div().class("inner").child("content");
        let outer = Element::div().class("outer").child(inner);
        assert_eq!(
            outer.to_html(),
            "<div class=\"outer\"><div class=\"inner\">content</div></div>"
        );
    }
}
