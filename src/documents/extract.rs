//! Text extraction for generated documents.
//!
//! Decodes the content streams written by the render engine back into
//! positioned lines. Used to verify output without a full PDF text
//! extraction pipeline: every `Tj` becomes one line at the last `Td`
//! position on its page.

use lopdf::content::Content;
use lopdf::{Document, Object};

use super::common::decode_win_ansi;

/// A line of text recovered from a page content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedLine {
    /// 1-based page number.
    pub page: u32,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

impl ExtractedLine {
    /// Reading order: earlier page first, then higher on the page.
    pub fn is_before(&self, other: &ExtractedLine) -> bool {
        self.page < other.page || (self.page == other.page && self.y > other.y)
    }
}

/// Extract all lines in content-stream order.
pub fn extract_lines(pdf: &[u8]) -> Result<Vec<ExtractedLine>, lopdf::Error> {
    let doc = Document::load_mem(pdf)?;
    let mut lines = Vec::new();

    for (page, page_id) in doc.get_pages() {
        let content = Content::decode(&doc.get_page_content(page_id)?)?;
        let (mut x, mut y) = (0.0_f32, 0.0_f32);

        for op in &content.operations {
            match op.operator.as_str() {
                "BT" => {
                    x = 0.0;
                    y = 0.0;
                }
                "Td" => {
                    if let [dx, dy] = op.operands.as_slice() {
                        x += dx.as_float()?;
                        y += dy.as_float()?;
                    }
                }
                "Tj" => {
                    if let Some(Object::String(bytes, _)) = op.operands.first() {
                        lines.push(ExtractedLine {
                            page,
                            x,
                            y,
                            text: decode_win_ansi(bytes),
                        });
                    }
                }
                _ => {}
            }
        }
    }

    Ok(lines)
}

/// All text joined with newlines.
pub fn extract_text(pdf: &[u8]) -> Result<String, lopdf::Error> {
    let lines = extract_lines(pdf)?;
    Ok(lines
        .into_iter()
        .map(|l| l.text)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Number of pages in the document.
pub fn page_count(pdf: &[u8]) -> Result<usize, lopdf::Error> {
    Ok(Document::load_mem(pdf)?.get_pages().len())
}
