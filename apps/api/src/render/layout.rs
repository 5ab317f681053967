//! Resume page layout: one-column, A4, Helvetica.
//!
//! Vertical sizes are "cell" heights in millimetres; text sits vertically
//! centred in its cell and the cursor moves down by the cell height.

use tracing::debug;

use crate::render::font_metrics::{get_metrics, FontFace};
use crate::render::pdf::{sanitize_text, Margins, PdfWriter, Rgb, MM};
use crate::render::RenderError;
use crate::tailoring::resume::{Education, ExperienceEntry, SkillGroup, TailoredResume};

const BLUE: Rgb = Rgb(44, 95, 138);
const DARK: Rgb = Rgb(26, 26, 26);
const BODY: Rgb = Rgb(51, 51, 51);
const GRAY: Rgb = Rgb(102, 102, 102);

const BULLET_INDENT_MM: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

struct ResumeLayout {
    pdf: PdfWriter,
}

impl ResumeLayout {
    fn new() -> Self {
        Self {
            pdf: PdfWriter::new(Margins {
                left: 18.0 * MM,
                right: 18.0 * MM,
                top: 15.0 * MM,
                bottom: 15.0 * MM,
            }),
        }
    }

    fn left(&self) -> f32 {
        self.pdf.margins().left
    }

    fn right(&self) -> f32 {
        self.left() + self.pdf.content_width()
    }

    fn gap(&mut self, mm: f32) {
        self.pdf.advance(mm * MM);
    }

    /// Draws `text` at `x` in a cell of `height_mm` starting at the cursor, without moving it.
    fn inline(&mut self, x: f32, height_mm: f32, face: FontFace, size: f32, color: Rgb, text: &str) {
        let baseline = self.pdf.y() + height_mm * MM / 2.0 + size * 0.35;
        self.pdf.text(x, baseline, face, size, color, text);
    }

    /// One line of text in a full-width cell, then moves the cursor below it.
    fn cell(&mut self, height_mm: f32, face: FontFace, size: f32, color: Rgb, text: &str, align: Align) {
        let text = sanitize_text(text).replace('\n', " ");
        self.pdf.ensure_room(height_mm * MM);
        let x = match align {
            Align::Left => self.left(),
            Align::Center => {
                let width = self.pdf.measure(&text, face, size);
                self.left() + ((self.right() - self.left() - width) / 2.0).max(0.0)
            }
        };
        self.inline(x, height_mm, face, size, color, &text);
        self.gap(height_mm);
    }

    /// Word-wrapped text starting at `x`, one cell per line.
    fn multi_cell(&mut self, x: f32, line_mm: f32, face: FontFace, size: f32, color: Rgb, text: &str) {
        let text = sanitize_text(text);
        let width = self.right() - x;
        for line in get_metrics(face).wrap(&text, size, width) {
            self.pdf.ensure_room(line_mm * MM);
            self.inline(x, line_mm, face, size, color, &line);
            self.gap(line_mm);
        }
    }

    fn section_header(&mut self, title: &str) {
        // Keep the header together with at least one line of its content.
        self.pdf.ensure_room(16.0 * MM);
        self.cell(8.0, FontFace::HelveticaBold, 12.0, BLUE, &title.to_uppercase(), Align::Left);
        let y = self.pdf.y();
        let (left, right) = (self.left(), self.right());
        self.pdf.hline(left, right, y, BLUE, 0.6);
        self.gap(3.0);
    }

    fn header(&mut self, resume: &TailoredResume) {
        self.cell(10.0, FontFace::HelveticaBold, 20.0, DARK, &resume.name, Align::Center);
        self.cell(7.0, FontFace::Helvetica, 13.0, BLUE, &resume.title, Align::Center);
        self.cell(6.0, FontFace::Helvetica, 9.5, GRAY, &resume.contact, Align::Center);
        self.gap(4.0);
    }

    fn summary(&mut self, summary: &str) {
        self.section_header("Summary");
        let x = self.left();
        self.multi_cell(x, 5.0, FontFace::Helvetica, 10.0, BODY, summary);
        self.gap(3.0);
    }

    fn skills(&mut self, skills: &[SkillGroup]) {
        self.section_header("Skills");
        for skill in skills {
            let label = sanitize_text(&format!("{}: ", skill.category));
            self.pdf.ensure_room(5.0 * MM);
            let x = self.left();
            self.inline(x, 5.0, FontFace::HelveticaBold, 9.5, BODY, &label);
            let items_x = x + self.pdf.measure(&label, FontFace::HelveticaBold, 9.5) + 1.0;
            self.multi_cell(items_x, 4.5, FontFace::Helvetica, 9.5, BODY, &skill.items);
            self.gap(1.0);
        }
        self.gap(2.0);
    }

    fn experience(&mut self, jobs: &[ExperienceEntry]) {
        self.section_header("Experience");
        for job in jobs {
            self.pdf.ensure_room(16.0 * MM);
            self.cell(6.0, FontFace::HelveticaBold, 11.0, DARK, &job.job_title, Align::Left);

            let company = sanitize_text(&join_non_empty(&[&job.company, &job.context], " -- "));
            let meta = sanitize_text(&join_non_empty(&[&job.dates, &job.location], "  |  "));
            let x = self.left();
            self.inline(x, 5.0, FontFace::Helvetica, 9.5, BLUE, &company);
            if !meta.is_empty() {
                let separator = if company.is_empty() { "" } else { "  |  " };
                let meta_x = x + self.pdf.measure(&company, FontFace::Helvetica, 9.5);
                self.inline(meta_x, 5.0, FontFace::Helvetica, 9.5, GRAY, &format!("{separator}{meta}"));
            }
            self.gap(6.0);

            for bullet in &job.bullets {
                let x = self.left() + BULLET_INDENT_MM * MM;
                self.multi_cell(x, 4.5, FontFace::Helvetica, 9.5, BODY, &format!("- {bullet}"));
                self.gap(0.5);
            }
            self.gap(3.0);
        }
    }

    fn education(&mut self, edu: &Education) {
        self.section_header("Education");
        self.cell(6.0, FontFace::HelveticaBold, 10.5, BODY, &edu.degree, Align::Left);
        let meta = join_non_empty(&[&edu.school, &edu.dates, &edu.location], "  |  ");
        self.cell(5.0, FontFace::Helvetica, 10.0, GRAY, &meta, Align::Left);
    }
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Lays out the resume and returns the PDF bytes.
pub fn render_resume(resume: &TailoredResume) -> Result<Vec<u8>, RenderError> {
    let mut layout = ResumeLayout::new();
    layout.header(resume);
    layout.summary(&resume.summary);
    layout.skills(&resume.skills);
    layout.experience(&resume.experience);
    if let Some(edu) = resume.education() {
        layout.education(edu);
    }
    debug!("Resume laid out on {} page(s)", layout.pdf.page_count());
    layout.pdf.finish()
}
