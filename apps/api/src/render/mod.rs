pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod pdf;

use thiserror::Error;

pub use layout::render_resume;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Download file name for a resume: `<name with spaces as _>.pdf`, `resume.pdf` when blank.
///
/// Characters that would break a quoted `Content-Disposition` value are replaced with `_`.
pub fn pdf_filename(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.trim_matches('_').is_empty() {
        "resume.pdf".to_string()
    } else {
        format!("{stem}.pdf")
    }
}
