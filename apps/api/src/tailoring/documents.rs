//! Resume / prompt file decoding: plain text, PDF and DOCX uploads to text.

use std::io::{Cursor, Read};
use std::path::Path;

use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use thiserror::Error;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file type: {0}. Use .docx, .pdf, or .txt")]
    Unsupported(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),
}

/// File formats accepted for resumes and tailoring prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves the format from the file extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, DocumentError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();

        match extension.as_str() {
            ".txt" => Ok(Self::Text),
            ".pdf" => Ok(Self::Pdf),
            ".docx" => Ok(Self::Docx),
            _ => Err(DocumentError::Unsupported(extension)),
        }
    }
}

/// A file received in a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn kind(&self) -> Result<DocumentKind, DocumentError> {
        DocumentKind::from_file_name(&self.file_name)
    }
}

/// Extracts plain text from an uploaded file. CPU-bound for PDFs; call from a blocking task.
pub fn extract_text(file: &UploadedFile) -> Result<String, DocumentError> {
    match file.kind()? {
        DocumentKind::Text => Ok(String::from_utf8_lossy(&file.data).into_owned()),
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&file.data)
            .map_err(|e| DocumentError::Pdf(e.to_string())),
        DocumentKind::Docx => extract_docx_text(&file.data),
    }
}

/// Collects the runs of each paragraph in `word/document.xml`, one non-blank paragraph per line.
fn extract_docx_text(data: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| DocumentError::Docx(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| DocumentError::Docx(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::Docx(e.to_string()))?;

    Ok(docx_paragraphs(&xml)?.join("\n"))
}

/// Run text in document order. Inside a run, `w:tab` becomes a tab and
/// `w:br` / `w:cr` a line break; tab stops in paragraph properties are not runs.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut run_depth = 0_usize;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(docx_error)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) if run_depth > 0 => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text => current.push_str(&e.unescape().map_err(docx_error)?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs
        .into_iter()
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect())
}

fn docx_error(e: quick_xml::Error) -> DocumentError {
    DocumentError::Docx(e.to_string())
}
