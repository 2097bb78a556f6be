//! PDF rendering engine.
//!
//! Rendering happens in two passes. [`PdfRenderEngine::layout`] resolves
//! every draw instruction to concrete pages and coordinates, tracking a
//! running vertical cursor so sections after a variable-length list move
//! with it. [`PdfRenderEngine::render`] then writes those lines into an
//! in-memory PDF with `lopdf`.

use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use super::common::{encode_win_ansi, format_day, format_month_year, format_pdf_date, today};
use super::fonts::Font;
use super::layout::{
    Align, DocumentLayout, DrawInstruction, Placement, TextSource, BOTTOM_MARGIN_Y, PAGE_HEIGHT,
    PAGE_WIDTH, TOP_MARGIN_Y,
};
use super::traits::FieldSource;
use super::GeneratorError;

/// Render-time values that do not come from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub date: NaiveDate,
}

impl RenderContext {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Context dated today on the local clock.
    pub fn today() -> Self {
        Self::new(today())
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "day" => Some(format_day(self.date)),
            "month_year" => Some(format_month_year(self.date)),
            _ => None,
        }
    }
}

/// A line resolved to its final position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub font: Font,
    pub size: f32,
    pub text: String,
}

/// Lines grouped by page, in drawing order.
pub type PlacedPages = Vec<Vec<PlacedLine>>;

/// Stateless engine for rendering layouts to PDF.
pub struct PdfRenderEngine;

impl PdfRenderEngine {
    /// Render `layout` filled from `source` to PDF bytes.
    pub fn render(
        layout: &DocumentLayout,
        source: &dyn FieldSource,
        context: &RenderContext,
    ) -> Result<Vec<u8>, GeneratorError> {
        let pages = Self::layout(layout, source, context)?;
        log::debug!(
            "Laid out '{}' on {} page(s)",
            layout.name,
            pages.len()
        );
        write_pdf(layout.title, &pages, context)
    }

    /// Resolve placeholders, lists and positions without producing a PDF.
    pub fn layout(
        layout: &DocumentLayout,
        source: &dyn FieldSource,
        context: &RenderContext,
    ) -> Result<PlacedPages, GeneratorError> {
        let mut cursor = Cursor::new();

        for instruction in layout.instructions {
            match instruction.source {
                TextSource::Template(template) => {
                    let text = substitute(template, source, context)?;
                    cursor.place(instruction, instruction.placement, text);
                }
                TextSource::List { field, prefix, step } => {
                    let items = source
                        .list(field)
                        .ok_or_else(|| GeneratorError::UnknownList(field.to_string()))?;
                    for (i, item) in items.iter().enumerate() {
                        let placement = if i == 0 {
                            instruction.placement
                        } else {
                            Placement::Below {
                                x: instruction.placement.x(),
                                gap: step,
                            }
                        };
                        cursor.place(instruction, placement, format!("{}{}", prefix, item));
                    }
                }
            }
        }

        Ok(cursor.pages)
    }
}

/// Running vertical position plus the pages laid out so far.
struct Cursor {
    pages: PlacedPages,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: TOP_MARGIN_Y,
        }
    }

    fn place(&mut self, instruction: &DrawInstruction, placement: Placement, text: String) {
        let y = match placement {
            Placement::At { y, .. } => y,
            Placement::Below { gap, .. } => {
                let y = self.y - gap;
                if y < BOTTOM_MARGIN_Y {
                    self.pages.push(Vec::new());
                    TOP_MARGIN_Y
                } else {
                    y
                }
            }
        };
        self.y = y;

        let anchor = placement.x();
        let x = match instruction.align {
            Align::Left => anchor,
            Align::Center => anchor - instruction.font.text_width(&text, instruction.size) / 2.0,
        };

        if let Some(page) = self.pages.last_mut() {
            page.push(PlacedLine {
                x,
                y,
                font: instruction.font,
                size: instruction.size,
                text,
            });
        }
    }
}

/// Replace `{name}` placeholders. Substituted values are not rescanned.
fn substitute(
    template: &str,
    source: &dyn FieldSource,
    context: &RenderContext,
) -> Result<String, GeneratorError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        out.push_str(&rest[..open]);
        let name = &rest[open + 1..close];
        let value = context
            .field(name)
            .or_else(|| source.field(name))
            .ok_or_else(|| GeneratorError::UnknownPlaceholder(name.to_string()))?;
        out.push_str(&value);
        rest = &rest[close + 1..];
    }
    out.push_str(rest);

    Ok(out)
}

fn text_operations(line: &PlacedLine) -> [Operation; 5] {
    [
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(line.font.resource_name().as_bytes().to_vec()),
                Object::Real(line.size),
            ],
        ),
        Operation::new("Td", vec![Object::Real(line.x), Object::Real(line.y)]),
        Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(&line.text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

fn write_pdf(
    title: &str,
    pages: &[Vec<PlacedLine>],
    context: &RenderContext,
) -> Result<Vec<u8>, GeneratorError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in Font::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids = Vec::with_capacity(pages.len());
    for lines in pages {
        let content = Content {
            operations: lines.iter().flat_map(text_operations).collect::<Vec<_>>(),
        };
        let encoded = content
            .encode()
            .map_err(|e| GeneratorError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(PAGE_WIDTH),
                Object::Real(PAGE_HEIGHT),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
        "Producer" => Object::string_literal(concat!(
            env!("CARGO_PKG_NAME"),
            " ",
            env!("CARGO_PKG_VERSION")
        )),
        "CreationDate" => Object::string_literal(format_pdf_date(context.date)),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| GeneratorError::Pdf(e.to_string()))?;

    Ok(buffer)
}
