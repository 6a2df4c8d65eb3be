//! Text extraction from uploaded résumé documents.
//!
//! Dispatch is purely by filename suffix; every format handler funnels its
//! output through [`clean_text`]. Extraction never fails: corrupt or
//! unsupported content degrades to [`Extraction::Empty`], which downstream
//! layers treat as a data condition, not a fault.

mod clean;
mod docx;
mod ocr;
mod pdf;

pub use clean::clean_text;
pub use ocr::OcrEngine;

use std::path::Path;

use bytes::Bytes;

/// Image suffixes routed to the OCR handler.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff", "bmp", "gif"];

/// An uploaded document: a plain value, fully in memory. The filename is
/// used only to select a format handler.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub name: String,
    pub bytes: Bytes,
}

impl RawDocument {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Outcome of an extraction pass. `Empty` is the normal terminal state for
/// unreadable content — expected, logged upstream, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text(String),
    Empty,
}

impl Extraction {
    /// Wraps raw handler output, cleaning it and collapsing blank results.
    fn from_raw(raw: Option<String>) -> Self {
        match raw {
            Some(text) => {
                let cleaned = clean_text(&text);
                if cleaned.is_empty() {
                    Extraction::Empty
                } else {
                    Extraction::Text(cleaned)
                }
            }
            None => Extraction::Empty,
        }
    }

    /// The cleaned text, if any was extracted.
    pub fn text(&self) -> Option<&str> {
        match self {
            Extraction::Text(text) => Some(text),
            Extraction::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Extraction::Empty)
    }
}

/// Format-dispatching extractor. Holds the OCR engine so image handling is
/// configured once at startup rather than per call.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    ocr: OcrEngine,
}

impl TextExtractor {
    pub fn new(ocr: OcrEngine) -> Self {
        Self { ocr }
    }

    /// Extracts cleaned text from an uploaded document.
    ///
    /// Suffix match is case-insensitive: `.pdf` → PDF, `.docx` → DOCX, any
    /// of [`IMAGE_EXTENSIONS`] → OCR. Anything else is decoded as UTF-8 with
    /// invalid bytes dropped.
    pub fn extract(&self, document: &RawDocument) -> Extraction {
        let extension = extension_of(&document.name);
        match extension.as_str() {
            "pdf" => Extraction::from_raw(pdf::extract(&document.bytes)),
            "docx" => Extraction::from_raw(docx::extract(&document.bytes)),
            ext if IMAGE_EXTENSIONS.contains(&ext) => {
                Extraction::from_raw(self.ocr.recognize(&document.bytes, ext))
            }
            _ => {
                // Best-effort decode: invalid byte sequences are ignored,
                // not surfaced as replacement characters.
                let decoded: String = String::from_utf8_lossy(&document.bytes)
                    .chars()
                    .filter(|&c| c != char::REPLACEMENT_CHARACTER)
                    .collect();
                Extraction::from_raw(Some(decoded))
            }
        }
    }
}

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}
