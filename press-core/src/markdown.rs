use std::fmt;

use crate::block::{BlockType, classify, split_blocks};
use crate::html::{HtmlError, HtmlNode};
use crate::inline::{InlineError, TextSpan, text_to_spans};

#[derive(Debug)]
pub enum ConvertError {
    Inline(InlineError),
    Html(HtmlError),
    MissingTitle,
}

impl From<InlineError> for ConvertError {
    fn from(err: InlineError) -> Self {
        ConvertError::Inline(err)
    }
}

impl From<HtmlError> for ConvertError {
    fn from(err: HtmlError) -> Self {
        ConvertError::Html(err)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Inline(e) => write!(f, "inline parse error: {}", e),
            ConvertError::Html(e) => write!(f, "serialize error: {}", e),
            ConvertError::MissingTitle => {
                write!(f, "missing title: page must start with an h1 heading")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Convert a whole markdown document into one HTML tree: a `div` holding
/// one node per block, in source order.
pub fn markdown_to_html(document: &str) -> Result<HtmlNode, ConvertError> {
    let mut children = Vec::new();
    for block in split_blocks(document) {
        children.push(block_to_html(block, classify(block))?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Convert one block of the given type into its HTML node.
pub fn block_to_html(block: &str, block_type: BlockType) -> Result<HtmlNode, ConvertError> {
    match block_type {
        BlockType::Paragraph => Ok(HtmlNode::parent("p", block_to_nodes(block)?)),
        BlockType::Heading(level) => {
            // Splitting on "# " once strips any heading prefix in one go;
            // the hashes before the space land in the discarded half. A
            // line without the prefix contributes nothing.
            let mut nodes = Vec::new();
            for line in block.lines() {
                if let Some(text) = line.splitn(2, "# ").nth(1) {
                    nodes.extend(block_to_nodes(text)?);
                }
            }
            Ok(HtmlNode::parent(&format!("h{}", level), nodes))
        }
        BlockType::UnorderedList => Ok(HtmlNode::parent("ul", list_items(block)?)),
        BlockType::OrderedList => Ok(HtmlNode::parent("ol", list_items(block)?)),
        BlockType::Quote => {
            let lines: Vec<&str> = block.lines().collect();
            let mut nodes = Vec::new();
            for (i, line) in lines.iter().enumerate() {
                let text = line
                    .strip_prefix("> ")
                    .or_else(|| line.strip_prefix('>'))
                    .unwrap_or(line);
                let mut text = text.to_string();
                if i < lines.len() - 1 {
                    text.push('\n');
                }
                nodes.extend(block_to_nodes(&text)?);
            }
            let paragraph = HtmlNode::parent("p", nodes);
            Ok(HtmlNode::parent("blockquote", vec![paragraph]))
        }
        // The fence backticks are left in place here; the inline code
        // pass consumes them as an ordinary delimiter.
        BlockType::Code => Ok(HtmlNode::parent("pre", block_to_nodes(block)?)),
    }
}

/// Pull the page title out of an assembled tree: the first child must be
/// an `h1`, and the title is its first leaf's text.
pub fn extract_title(page: &HtmlNode) -> Result<&str, ConvertError> {
    let HtmlNode::Parent { children, .. } = page else {
        return Err(ConvertError::MissingTitle);
    };
    match children.first() {
        Some(HtmlNode::Parent { tag, children, .. }) if tag == "h1" => match children.first() {
            Some(HtmlNode::Leaf { value, .. }) => Ok(value),
            _ => Err(ConvertError::MissingTitle),
        },
        _ => Err(ConvertError::MissingTitle),
    }
}

fn block_to_nodes(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    // Empty input would parse to an empty span, which no leaf can serialize.
    if text.is_empty() {
        return Ok(Vec::new());
    }
    spans_to_nodes(&text_to_spans(text)?)
}

fn spans_to_nodes(spans: &[TextSpan]) -> Result<Vec<HtmlNode>, ConvertError> {
    spans
        .iter()
        .map(|span| span.to_html_node().map_err(ConvertError::from))
        .collect()
}

// One list item per physical line, holding everything parsed from the
// text after the marker.
fn list_items(block: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    let mut items = Vec::new();
    for line in block.lines() {
        let text = line.splitn(2, ' ').nth(1).unwrap_or("");
        items.push(HtmlNode::parent("li", block_to_nodes(text)?));
    }
    Ok(items)
}
