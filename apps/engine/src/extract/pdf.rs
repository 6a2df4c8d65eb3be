//! PDF text extraction.
//!
//! Primary pass walks the document page by page so a single corrupt page
//! cannot sink the whole résumé; if that yields nothing, a whole-document
//! pass through `pdf-extract` gets a second chance at the bytes.

use lopdf::Document;
use tracing::{debug, warn};

pub fn extract(bytes: &[u8]) -> Option<String> {
    if let Some(text) = per_page(bytes) {
        if !text.trim().is_empty() {
            return Some(text);
        }
    }
    whole_document(bytes)
}

/// Extracts each page independently, skipping pages that fail.
fn per_page(bytes: &[u8]) -> Option<String> {
    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("PDF load failed: {e}");
            return None;
        }
    };

    let mut pages = Vec::new();
    for &number in doc.get_pages().keys() {
        match doc.extract_text(&[number]) {
            Ok(text) => pages.push(text),
            Err(e) => debug!("PDF page {number} skipped: {e}"),
        }
    }

    if pages.is_empty() {
        None
    } else {
        Some(pages.join("\n"))
    }
}

fn whole_document(bytes: &[u8]) -> Option<String> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("PDF fallback extraction failed: {e}");
            None
        }
    }
}
