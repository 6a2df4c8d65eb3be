//! Optical character recognition for image uploads.
//!
//! Shells out to a Tesseract binary. The engine path comes from deployment
//! configuration; a missing or failing binary yields an empty extraction.

use std::io::Write;
use std::process::Command;
use tracing::warn;

const DEFAULT_COMMAND: &str = "tesseract";

/// Tesseract invocation wrapper. Construct with an explicit binary path or
/// rely on `tesseract` being on PATH.
#[derive(Debug, Clone)]
pub struct OcrEngine {
    command: String,
}

impl Default for OcrEngine {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl OcrEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Runs OCR over raw image bytes. `extension` is the upload's original
    /// suffix, kept so the temp file matches what the user actually sent.
    pub fn recognize(&self, bytes: &[u8], extension: &str) -> Option<String> {
        let mut file = match tempfile::Builder::new()
            .prefix("vitae-ocr-")
            .suffix(&format!(".{extension}"))
            .tempfile()
        {
            Ok(file) => file,
            Err(e) => {
                warn!("OCR temp file creation failed: {e}");
                return None;
            }
        };
        if let Err(e) = file.write_all(bytes) {
            warn!("OCR temp file write failed: {e}");
            return None;
        }

        let output = match Command::new(&self.command)
            .arg(file.path())
            .arg("stdout")
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!("OCR engine '{}' unavailable: {e}", self.command);
                return None;
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("OCR exited with {}: {}", output.status, stderr.trim());
            return None;
        }

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
