use tracing::warn;

use super::docx::extract_docx_text;
use super::errors::ScreenError;
use super::pdf::PdfTextExtractor;

/// Dispatches raw document bytes to the right text extractor based on the
/// file-name extension. Extraction trouble inside a supported format
/// degrades to an empty string; only an unsupported extension is an error.
pub struct DocumentTextExtractor {
    pdf: PdfTextExtractor,
}

impl DocumentTextExtractor {
    pub fn new() -> Self {
        Self {
            pdf: PdfTextExtractor,
        }
    }

    pub fn extract_text(&self, file_name: &str, data: &[u8]) -> Result<String, ScreenError> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(self.pdf.extract_text(data)),
            "docx" | "doc" => Ok(extract_docx_text(data).unwrap_or_else(|err| {
                warn!("DOCX extraction failed for {file_name}: {err}");
                String::new()
            })),
            _ => Err(ScreenError::UnsupportedFormat(extension)),
        }
    }
}

impl Default for DocumentTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
