pub mod assets;
pub mod block;
pub mod builder;
pub mod config;
pub mod html;
pub mod inline;
pub mod markdown;
pub mod site;
pub mod template;

// Re-export main types
pub use assets::copy_assets;
pub use block::{BlockType, classify, split_blocks};
pub use builder::{BuildError, BuildSummary, SiteBuilder};
pub use html::{HtmlError, HtmlNode};
pub use inline::{InlineError, SpanKind, TextSpan, text_to_spans};
pub use markdown::{ConvertError, block_to_html, extract_title, markdown_to_html};
pub use site::{Page, ScanError, SiteScanner};
pub use template::render_page;
