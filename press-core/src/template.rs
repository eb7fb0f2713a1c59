use crate::markdown::{ConvertError, extract_title, markdown_to_html};

pub const TITLE_TOKEN: &str = "{{ Title }}";
pub const CONTENT_TOKEN: &str = "{{ Content }}";

/// Fill a page template from a markdown document. The first `{{ Title }}`
/// becomes the document's h1 text, the first `{{ Content }}` becomes the
/// rendered body; later occurrences are left alone.
pub fn render_page(markdown: &str, template: &str) -> Result<String, ConvertError> {
    let tree = markdown_to_html(markdown)?;
    let title = extract_title(&tree)?;
    let content = tree.serialize()?;
    let page = template.replacen(TITLE_TOKEN, title, 1);
    let page = page.replacen(CONTENT_TOKEN, &content, 1);
    Ok(page)
}
