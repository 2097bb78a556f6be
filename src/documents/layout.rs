//! Layout model: static, ordered draw instructions for one document.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner of a
//! US-Letter page. Text templates use `{name}` placeholders that the renderer
//! resolves against the record and the render context.

use super::fonts::Font;

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
/// Anchor for centered text.
pub const PAGE_CENTER_X: f32 = PAGE_WIDTH / 2.0;
/// Baseline of the first flowing line on a continuation page.
pub const TOP_MARGIN_Y: f32 = 720.0;
/// Flowing lines never go below this baseline; they move to a new page.
pub const BOTTOM_MARGIN_Y: f32 = 72.0;

pub const BODY_SIZE: f32 = 12.0;
pub const HEADING_SIZE: f32 = 14.0;
pub const TITLE_SIZE: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    /// `x` is the midpoint of the drawn string.
    Center,
}

/// Where a line's baseline goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Fixed page coordinates.
    At { x: f32, y: f32 },
    /// `gap` points below the previously drawn line.
    Below { x: f32, gap: f32 },
}

impl Placement {
    pub fn x(&self) -> f32 {
        match *self {
            Placement::At { x, .. } | Placement::Below { x, .. } => x,
        }
    }
}

/// What a single instruction draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSource {
    /// One line, with placeholders substituted.
    Template(&'static str),
    /// One line per element of a record list, each `step` points below the last.
    List {
        field: &'static str,
        prefix: &'static str,
        step: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInstruction {
    pub source: TextSource,
    pub placement: Placement,
    pub font: Font,
    pub size: f32,
    pub align: Align,
}

impl DrawInstruction {
    /// Body text at fixed coordinates.
    pub const fn text(x: f32, y: f32, template: &'static str) -> Self {
        Self {
            source: TextSource::Template(template),
            placement: Placement::At { x, y },
            font: Font::Helvetica,
            size: BODY_SIZE,
            align: Align::Left,
        }
    }

    /// Body text relative to the previous line.
    pub const fn text_below(x: f32, gap: f32, template: &'static str) -> Self {
        Self {
            source: TextSource::Template(template),
            placement: Placement::Below { x, gap },
            font: Font::Helvetica,
            size: BODY_SIZE,
            align: Align::Left,
        }
    }

    /// Section heading at fixed coordinates.
    pub const fn heading(x: f32, y: f32, template: &'static str) -> Self {
        Self {
            source: TextSource::Template(template),
            placement: Placement::At { x, y },
            font: Font::HelveticaBold,
            size: HEADING_SIZE,
            align: Align::Left,
        }
    }

    /// Section heading relative to the previous line.
    pub const fn heading_below(x: f32, gap: f32, template: &'static str) -> Self {
        Self {
            source: TextSource::Template(template),
            placement: Placement::Below { x, gap },
            font: Font::HelveticaBold,
            size: HEADING_SIZE,
            align: Align::Left,
        }
    }

    /// Document title, centered on the page.
    pub const fn title(y: f32, template: &'static str) -> Self {
        Self {
            source: TextSource::Template(template),
            placement: Placement::At { x: PAGE_CENTER_X, y },
            font: Font::HelveticaBold,
            size: TITLE_SIZE,
            align: Align::Center,
        }
    }

    /// Bulleted list, first entry `step` below the previous line.
    pub const fn list(x: f32, step: f32, field: &'static str, prefix: &'static str) -> Self {
        Self {
            source: TextSource::List { field, prefix, step },
            placement: Placement::Below { x, gap: step },
            font: Font::Helvetica,
            size: BODY_SIZE,
            align: Align::Left,
        }
    }
}

/// A named, ordered sequence of draw instructions.
#[derive(Debug)]
pub struct DocumentLayout {
    pub name: &'static str,
    /// Written to the PDF `/Title`.
    pub title: &'static str,
    pub instructions: &'static [DrawInstruction],
}

impl DocumentLayout {
    /// Literal template strings in drawing order, without list expansions.
    pub fn templates(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.instructions.iter().filter_map(|i| match i.source {
            TextSource::Template(t) => Some(t),
            TextSource::List { .. } => None,
        })
    }
}
