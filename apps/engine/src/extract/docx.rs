//! DOCX text extraction — paragraph text in document order, one per line.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use tracing::warn;

pub fn extract(bytes: &[u8]) -> Option<String> {
    let docx = match read_docx(bytes) {
        Ok(docx) => docx,
        Err(e) => {
            warn!("DOCX parse failed: {e}");
            return None;
        }
    };

    let mut lines = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for paragraph_child in paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            lines.push(line);
        }
    }

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_extracted_in_order() {
        let bytes = build_docx(&["Jane Doe", "Senior Engineer"]);
        let text = extract(&bytes).expect("extraction should succeed");
        assert!(text.contains("Jane Doe"), "got: {text:?}");
        assert!(text.contains("Senior Engineer"));
        let jane = text.find("Jane Doe").unwrap();
        let title = text.find("Senior Engineer").unwrap();
        assert!(jane < title, "paragraph order not preserved: {text:?}");
    }

    #[test]
    fn test_corrupt_bytes_yield_none() {
        assert_eq!(extract(b"not a zip archive"), None);
    }
}
