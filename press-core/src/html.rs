use std::fmt;

#[derive(Debug)]
pub enum HtmlError {
    InvalidLeaf,
    MissingTag,
    NoChildren,
}

impl fmt::Display for HtmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlError::InvalidLeaf => write!(f, "invalid leaf: non-image leaves need a value"),
            HtmlError::MissingTag => write!(f, "invalid parent: tag required"),
            HtmlError::NoChildren => write!(f, "invalid parent: children required"),
        }
    }
}

impl std::error::Error for HtmlError {}

/// A renderable HTML tree. Leaves hold text, parents hold children, and
/// either can carry attributes. Attribute order is preserved so output
/// is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// A raw text node, emitted without any surrounding tag.
    pub fn text<S: Into<String>>(value: S) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf<S: Into<String>>(tag: &str, value: S) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs<S: Into<String>>(
        tag: &str,
        value: S,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attrs,
        }
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: Vec::new(),
        }
    }

    pub fn serialize(&self) -> Result<String, HtmlError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                let tag = tag.as_deref().filter(|t| !t.is_empty());
                // An img carries everything in its attributes, so an empty
                // value is fine there and nowhere else.
                if value.is_empty() && tag != Some("img") {
                    return Err(HtmlError::InvalidLeaf);
                }
                match tag {
                    Some(tag) => Ok(format!("<{}{}>{}</{}>", tag, render_attrs(attrs), value, tag)),
                    None => Ok(value.clone()),
                }
            }
            HtmlNode::Parent { tag, children, attrs } => {
                if tag.is_empty() {
                    return Err(HtmlError::MissingTag);
                }
                if children.is_empty() {
                    return Err(HtmlError::NoChildren);
                }
                let mut html = format!("<{}{}>", tag, render_attrs(attrs));
                for child in children {
                    html.push_str(&child.serialize()?);
                }
                html.push_str(&format!("</{}>", tag));
                Ok(html)
            }
        }
    }
}

fn render_attrs(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, value))
        .collect()
}
