/// The structural shape of one block, decided purely from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading(u8),
    Code,
    UnorderedList,
    OrderedList,
    Quote,
}

/// Split a document on blank lines. Blocks are trimmed of surrounding
/// whitespace and keep their internal newlines; anything empty after
/// trimming is dropped.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify one block. Checks run in precedence order; paragraph is the
/// fallback for anything that matches no other shape.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }
    if block.starts_with("```") && block.ends_with("```") {
        return BlockType::Code;
    }
    let lines: Vec<&str> = block.lines().collect();
    if lines.iter().all(|line| {
        let line = line.trim_start();
        line.starts_with("* ") || line.starts_with("- ")
    }) {
        return BlockType::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.trim_start().starts_with(&format!("{}. ", i + 1)))
    {
        return BlockType::OrderedList;
    }
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    BlockType::Paragraph
}

// Counting the hash run keeps the test exact: three hashes can only ever
// be heading 3, never a longer prefix of heading 1.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_string_has_no_blocks() {
        assert_eq!(split_blocks(""), Vec::<&str>::new());
    }

    #[test]
    fn single_block() {
        assert_eq!(split_blocks("some text"), vec!["some text"]);
    }

    #[test]
    fn excessive_blank_lines_are_ignored() {
        assert_eq!(
            split_blocks("\n\nparagraph 1\n\n\n\n\nparagraph 2\n\n"),
            vec!["paragraph 1", "paragraph 2"],
        );
    }

    #[test]
    fn blocks_keep_internal_newlines() {
        let text = "\nThis is a **bolded** paragraph\n\nThis is another paragraph with *italic* text and `code` here\nThis is the same paragraph on a new line\n\n* This is a list\n* with items\n";
        assert_eq!(
            split_blocks(text),
            vec![
                "This is a **bolded** paragraph",
                "This is another paragraph with *italic* text and `code` here\nThis is the same paragraph on a new line",
                "* This is a list\n* with items",
            ],
        );
    }

    #[test]
    fn segmentation_is_idempotent() {
        let text = "# title\n\npara one\nstill para one\n\n\n\n* a\n* b\n";
        let once = split_blocks(text);
        let rejoined = once.join("\n\n");
        assert_eq!(split_blocks(&rejoined), once);
    }

    #[test]
    fn plain_text_is_a_paragraph() {
        assert_eq!(classify("regular text"), BlockType::Paragraph);
    }

    #[test]
    fn headings_classify_by_hash_count() {
        assert_eq!(classify("# heading"), BlockType::Heading(1));
        assert_eq!(classify("## heading"), BlockType::Heading(2));
        assert_eq!(classify("### heading"), BlockType::Heading(3));
        assert_eq!(classify("#### heading"), BlockType::Heading(4));
        assert_eq!(classify("##### heading"), BlockType::Heading(5));
        assert_eq!(classify("###### heading"), BlockType::Heading(6));
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert_eq!(classify("####### heading"), BlockType::Paragraph);
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        assert_eq!(classify("#heading"), BlockType::Paragraph);
    }

    #[test]
    fn code_fences() {
        assert_eq!(classify("```\ncode\n```"), BlockType::Code);
        assert_eq!(classify("```code```"), BlockType::Code);
        assert_eq!(classify("```code`````"), BlockType::Code);
        assert_eq!(classify("`````code```"), BlockType::Code);
        assert_eq!(classify("`````code`````"), BlockType::Code);
    }

    #[test]
    fn partial_fences_are_not_code() {
        assert_eq!(classify("```code"), BlockType::Paragraph);
        assert_eq!(classify("code```"), BlockType::Paragraph);
        assert_eq!(classify("``code``"), BlockType::Paragraph);
    }

    #[test]
    fn unordered_list_allows_both_markers() {
        assert_eq!(classify("* foo\n- bar"), BlockType::UnorderedList);
    }

    #[test]
    fn unordered_list_allows_leading_whitespace() {
        assert_eq!(classify("* foo\n - bar"), BlockType::UnorderedList);
    }

    #[test]
    fn one_unmarked_line_breaks_a_list() {
        assert_eq!(classify("* foo\nbar"), BlockType::Paragraph);
    }

    #[test]
    fn ordered_list_counts_from_one() {
        assert_eq!(classify("1. foo\n2. bar"), BlockType::OrderedList);
    }

    #[test]
    fn ordered_list_allows_leading_whitespace() {
        assert_eq!(classify("1. foo\n 2. bar"), BlockType::OrderedList);
    }

    #[test]
    fn out_of_sequence_numbering_is_a_paragraph() {
        assert_eq!(classify("2. foo\n1. bar"), BlockType::Paragraph);
        assert_eq!(classify("1. foo\n3. bar"), BlockType::Paragraph);
        assert_eq!(classify("2. foo\n3. bar"), BlockType::Paragraph);
    }

    #[test]
    fn quote_lines_all_start_with_angle() {
        assert_eq!(classify(">foo\n>bar"), BlockType::Quote);
    }

    #[test]
    fn one_unquoted_line_breaks_a_quote() {
        assert_eq!(classify(">foo\nbar"), BlockType::Paragraph);
        assert_eq!(classify("foo\n>bar"), BlockType::Paragraph);
    }
}
