//! Minimal PDF page writer on top of `lopdf`.
//!
//! Positions are given top-down in points (y = distance from the top edge) and
//! flipped to PDF's bottom-up space when emitted. Text must already be
//! WinAnsi-safe; see [`sanitize_text`].

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::render::font_metrics::{get_metrics, FontFace};
use crate::render::RenderError;

/// A4, in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// 1 mm in points.
pub const MM: f32 = 72.0 / 25.4;

const FACES: [FontFace; 2] = [FontFace::Helvetica, FontFace::HelveticaBold];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn operands(self) -> Vec<Object> {
        [self.0, self.1, self.2]
            .iter()
            .map(|&c| (f32::from(c) / 255.0).into())
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Accumulates drawing operations page by page, with a top-down cursor.
pub struct PdfWriter {
    margins: Margins,
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    cursor_y: f32,
}

impl PdfWriter {
    pub fn new(margins: Margins) -> Self {
        Self {
            margins,
            pages: Vec::new(),
            current: Vec::new(),
            cursor_y: margins.top,
        }
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Usable width between the side margins.
    pub fn content_width(&self) -> f32 {
        PAGE_WIDTH - self.margins.left - self.margins.right
    }

    pub fn y(&self) -> f32 {
        self.cursor_y
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Starts a new page when fewer than `height` points remain above the bottom margin.
    pub fn ensure_room(&mut self, height: f32) {
        if self.cursor_y + height > PAGE_HEIGHT - self.margins.bottom
            && self.cursor_y > self.margins.top
        {
            self.new_page();
        }
    }

    pub fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor_y = self.margins.top;
    }

    /// Draws one line of text with its baseline at `baseline_y` (top-down).
    pub fn text(
        &mut self,
        x: f32,
        baseline_y: f32,
        face: FontFace,
        size_pt: f32,
        color: Rgb,
        text: &str,
    ) {
        if text.is_empty() {
            return;
        }
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new("rg", color.operands()),
            Operation::new("Tf", vec![face.resource_name().into(), size_pt.into()]),
            Operation::new("Td", vec![x.into(), (PAGE_HEIGHT - baseline_y).into()]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Horizontal rule at `y` (top-down) between `x1` and `x2`.
    pub fn hline(&mut self, x1: f32, x2: f32, y: f32, color: Rgb, width: f32) {
        let pdf_y = PAGE_HEIGHT - y;
        self.current.extend([
            Operation::new("RG", color.operands()),
            Operation::new("w", vec![width.into()]),
            Operation::new("m", vec![x1.into(), pdf_y.into()]),
            Operation::new("l", vec![x2.into(), pdf_y.into()]),
            Operation::new("S", vec![]),
        ]);
    }

    /// Width of `text` in points for the given face and size.
    pub fn measure(&self, text: &str, face: FontFace, size_pt: f32) -> f32 {
        get_metrics(face).width_pt(text, size_pt)
    }

    /// Serializes all pages into a PDF file.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        self.pages.push(std::mem::take(&mut self.current));

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = lopdf::Dictionary::new();
        for face in FACES {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0_i64.into(), 0_i64.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

/// Replaces typographic punctuation with ASCII and anything outside Latin-1 with `?`.
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2013}' | '\u{2014}' | '\u{2022}' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            '\t' => out.push(' '),
            c if (c as u32) < 0x20 && c != '\n' => {}
            c if (0x80..=0x9f).contains(&(c as u32)) || (c as u32) > 0xff => out.push('?'),
            c => out.push(c),
        }
    }
    out
}

/// Latin-1 code points map 1:1 onto WinAnsi bytes outside 0x80..=0x9F.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(c as u32) {
            Ok(byte) if !(0x80..=0x9f).contains(&byte) => byte,
            _ => b'?',
        })
        .collect()
}
