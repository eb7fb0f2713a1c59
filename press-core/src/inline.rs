use std::fmt;

use crate::html::HtmlNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        };
        write!(f, "{}", name)
    }
}

/// A run of inline-formatted text, produced by [`text_to_spans`] and
/// consumed by [`TextSpan::to_html_node`]. Link and image spans carry
/// their target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new<S: Into<String>>(text: S, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url<S: Into<String>, U: Into<String>>(text: S, kind: SpanKind, url: U) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn to_html_node(&self) -> Result<HtmlNode, InlineError> {
        match self.kind {
            SpanKind::Plain => Ok(HtmlNode::text(self.text.clone())),
            SpanKind::Bold => Ok(HtmlNode::leaf("b", self.text.clone())),
            SpanKind::Italic => Ok(HtmlNode::leaf("i", self.text.clone())),
            SpanKind::Code => {
                // Fenced content starts with the newline that followed the
                // opening fence; dropping it keeps <pre><code> output clean.
                let text = self.text.strip_prefix('\n').unwrap_or(&self.text);
                Ok(HtmlNode::leaf("code", text))
            }
            SpanKind::Link => {
                let url = self.require_url()?;
                Ok(HtmlNode::leaf_with_attrs(
                    "a",
                    self.text.clone(),
                    vec![("href".to_string(), url.to_string())],
                ))
            }
            SpanKind::Image => {
                let url = self.require_url()?;
                Ok(HtmlNode::leaf_with_attrs(
                    "img",
                    "",
                    vec![
                        ("src".to_string(), url.to_string()),
                        ("alt".to_string(), self.text.clone()),
                    ],
                ))
            }
        }
    }

    fn require_url(&self) -> Result<&str, InlineError> {
        self.url
            .as_deref()
            .ok_or(InlineError::MissingUrl(self.kind))
    }
}

#[derive(Debug)]
pub enum InlineError {
    UnbalancedDelimiter {
        delimiter: &'static str,
        kind: SpanKind,
    },
    MissingUrl(SpanKind),
}

impl fmt::Display for InlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InlineError::UnbalancedDelimiter { delimiter, kind } => {
                write!(f, "unbalanced {} delimiter for {} text", delimiter, kind)
            }
            InlineError::MissingUrl(kind) => write!(f, "{} span has no url", kind),
        }
    }
}

impl std::error::Error for InlineError {}

/// Parse one run of text into inline spans. Passes run in a fixed order:
/// bold before italic so the `*` inside `**` is never misread, and
/// image extraction before links so image syntax is never matched twice.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let mut spans = vec![TextSpan::new(text, SpanKind::Plain)];
    spans = split_spans_delimiter(spans, "**", SpanKind::Bold)?;
    spans = split_spans_delimiter(spans, "`", SpanKind::Code)?;
    spans = split_spans_delimiter(spans, "*", SpanKind::Italic)?;
    spans = split_spans_image(spans);
    spans = split_spans_link(spans);
    Ok(spans)
}

/// Split every span on `delimiter`, alternating outside pieces (which keep
/// the span's kind) with inside pieces (which take `kind`). A delimiter
/// that opens without closing leaves an even piece count and is an error.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::new();
    for span in spans {
        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() == 1 {
            out.push(span);
            continue;
        }
        if pieces.len() % 2 == 0 {
            return Err(InlineError::UnbalancedDelimiter { delimiter, kind });
        }
        let mut inside = false;
        for piece in pieces {
            if !piece.is_empty() {
                if inside {
                    out.push(TextSpan::new(piece, kind));
                } else {
                    out.push(TextSpan::new(piece, span.kind));
                }
            }
            inside = !inside;
        }
    }
    Ok(out)
}

/// Cut `![alt](url)` matches out of every span, left to right.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    spans
        .into_iter()
        .flat_map(|span| {
            split_url_spans(span, SpanKind::Image, extract_images, |(alt, url)| {
                format!("![{}]({})", alt, url)
            })
        })
        .collect()
}

/// Cut `[text](url)` matches out of every span, left to right. Image
/// syntax was extracted by the previous pass and a `[` right after a `!`
/// never starts a link, so images are not matched again here.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    spans
        .into_iter()
        .flat_map(|span| {
            split_url_spans(span, SpanKind::Link, extract_links, |(text, url)| {
                format!("[{}]({})", text, url)
            })
        })
        .collect()
}

fn split_url_spans<E, T>(span: TextSpan, kind: SpanKind, extract: E, make_token: T) -> Vec<TextSpan>
where
    E: Fn(&str) -> Vec<(String, String)>,
    T: Fn(&(String, String)) -> String,
{
    let targets = extract(&span.text);
    if targets.is_empty() {
        return vec![span];
    }
    let mut out = Vec::new();
    let mut current = span.text.clone();
    for target in &targets {
        let token = make_token(target);
        let (before, after) = match current.split_once(&token) {
            Some((before, after)) => (before.to_string(), after.to_string()),
            None => (current.clone(), String::new()),
        };
        if !before.is_empty() {
            out.push(TextSpan::new(before, span.kind));
        }
        out.push(TextSpan::with_url(
            target.0.clone(),
            kind,
            target.1.clone(),
        ));
        current = after;
    }
    if !current.is_empty() {
        out.push(TextSpan::new(current, span.kind));
    }
    out
}

/// All `![alt](url)` pairs in `text`, in order of appearance.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract_targets(text, true)
}

/// All `[text](url)` pairs in `text`, in order of appearance, skipping
/// any `[` immediately preceded by `!`.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract_targets(text, false)
}

// An explicit scanner instead of a regex pair, so the "a bang means image,
// not link" rule is an ordinary branch. Labels and urls match non-greedily
// and never cross a newline.
fn extract_targets(text: &str, image: bool) -> Vec<(String, String)> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('[') {
        let open = pos + offset;
        let after_bang = open > 0 && bytes[open - 1] == b'!';
        if after_bang != image {
            pos = open + 1;
            continue;
        }
        match match_bracket_pair(&text[open..]) {
            Some((label, url, len)) => {
                found.push((label, url));
                pos = open + len;
            }
            None => pos = open + 1,
        }
    }
    found
}

// `text` starts at the opening bracket. Returns the label, the url, and
// the number of bytes consumed through the closing paren.
fn match_bracket_pair(text: &str) -> Option<(String, String, usize)> {
    let rest = &text[1..];
    let close = rest.find("](")?;
    let label = &rest[..close];
    if label.contains('\n') {
        return None;
    }
    let after = &rest[close + 2..];
    let end = after.find(')')?;
    let url = &after[..end];
    if url.contains('\n') {
        return None;
    }
    Some((label.to_string(), url.to_string(), 1 + close + 2 + end + 1))
}
