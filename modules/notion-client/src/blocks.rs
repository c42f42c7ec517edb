// Markdown-to-block segmentation for page bodies.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Block, RICH_TEXT_LIMIT};

/// Notion rejects page creation with more than 100 children; extra blocks
/// are dropped rather than failing the save.
pub const MAX_BLOCKS: usize = 100;

static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("valid regex"));

/// Segment markdown-ish text into an ordered block sequence.
///
/// Classification is per trimmed line, first rule wins: "## " heading,
/// "### " heading, "- "/"• " bullet, "1. " numbered item, "---" divider,
/// anything else a paragraph split into 2000-character chunks. Blank lines
/// produce nothing. Total: worst case everything becomes paragraphs.
pub fn markdown_to_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Heading prefixes carry their trailing space, so the two-hash check
        // cannot fire on a three-hash heading.
        if let Some(rest) = trimmed.strip_prefix("## ") {
            blocks.push(Block::Heading2(rest.to_string()));
        } else if let Some(rest) = trimmed.strip_prefix("### ") {
            blocks.push(Block::Heading3(rest.to_string()));
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("• "))
        {
            blocks.push(Block::BulletItem(rest.to_string()));
        } else if NUMBERED_RE.is_match(trimmed) {
            blocks.push(Block::NumberedItem(
                NUMBERED_RE.replace(trimmed, "").into_owned(),
            ));
        } else if trimmed == "---" {
            blocks.push(Block::Divider);
        } else {
            let chars: Vec<char> = trimmed.chars().collect();
            for chunk in chars.chunks(RICH_TEXT_LIMIT) {
                blocks.push(Block::Paragraph(chunk.iter().collect()));
            }
        }
    }

    blocks.truncate(MAX_BLOCKS);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_body_divider() {
        let blocks = markdown_to_blocks("## Summary\n\nHello\n\n---\n");
        assert_eq!(
            blocks,
            vec![
                Block::Heading2("Summary".to_string()),
                Block::Paragraph("Hello".to_string()),
                Block::Divider,
            ]
        );
    }

    #[test]
    fn heading3_never_misread_as_heading2() {
        assert_eq!(
            markdown_to_blocks("### Deep"),
            vec![Block::Heading3("Deep".to_string())]
        );
    }

    #[test]
    fn hashes_without_space_are_paragraph() {
        assert_eq!(
            markdown_to_blocks("##NoSpace"),
            vec![Block::Paragraph("##NoSpace".to_string())]
        );
    }

    #[test]
    fn both_bullet_markers_accepted() {
        let blocks = markdown_to_blocks("- dash\n• dot");
        assert_eq!(
            blocks,
            vec![
                Block::BulletItem("dash".to_string()),
                Block::BulletItem("dot".to_string()),
            ]
        );
    }

    #[test]
    fn numbered_items_strip_their_prefix() {
        let blocks = markdown_to_blocks("1. first\n12. twelfth");
        assert_eq!(
            blocks,
            vec![
                Block::NumberedItem("first".to_string()),
                Block::NumberedItem("twelfth".to_string()),
            ]
        );
    }

    #[test]
    fn divider_requires_exact_match() {
        assert_eq!(markdown_to_blocks("---"), vec![Block::Divider]);
        assert_eq!(
            markdown_to_blocks("----"),
            vec![Block::Paragraph("----".to_string())]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let blocks = markdown_to_blocks("a\n\n   \nb");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("a".to_string()),
                Block::Paragraph("b".to_string()),
            ]
        );
    }

    #[test]
    fn lines_are_trimmed_before_classification() {
        assert_eq!(
            markdown_to_blocks("   ## Padded  "),
            vec![Block::Heading2("Padded".to_string())]
        );
    }

    #[test]
    fn long_paragraph_chunks_in_order() {
        let text: String = ('a'..='z').cycle().take(4500).collect();
        let blocks = markdown_to_blocks(&text);

        let chunks: Vec<&String> = blocks
            .iter()
            .map(|b| match b {
                Block::Paragraph(t) => t,
                other => panic!("expected Paragraph, got {:?}", other),
            })
            .collect();
        let lengths: Vec<usize> = chunks.iter().map(|t| t.chars().count()).collect();
        assert_eq!(lengths, vec![2000, 2000, 500]);

        let rejoined: String = chunks.iter().map(|t| t.as_str()).collect();
        assert_eq!(rejoined, text);
    }

    #[test]
    fn multibyte_paragraph_chunks_on_char_boundaries() {
        let text: String = std::iter::repeat('한').take(2500).collect();
        let blocks = markdown_to_blocks(&text);
        match &blocks[..] {
            [Block::Paragraph(first), Block::Paragraph(second)] => {
                assert_eq!(first.chars().count(), 2000);
                assert_eq!(second.chars().count(), 500);
            }
            other => panic!("expected two paragraphs, got {:?}", other),
        }
    }

    #[test]
    fn output_capped_at_first_hundred_blocks() {
        let text: String = (0..150).map(|i| format!("line {i}\n")).collect();
        let blocks = markdown_to_blocks(&text);
        assert_eq!(blocks.len(), MAX_BLOCKS);
        assert_eq!(blocks[0], Block::Paragraph("line 0".to_string()));
        assert_eq!(blocks[99], Block::Paragraph("line 99".to_string()));
    }
}
