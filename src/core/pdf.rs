use tracing::{debug, warn};

/// PDF text extraction with a two-method fallback chain.
///
/// The primary method walks pages in order and keeps page boundaries as
/// newlines. Malformed documents (encryption, damaged xref tables) fail the
/// primary pass; the fallback hands the same bytes to `pdf-extract`, which
/// tolerates a different class of damage. Both failing is not fatal: the
/// caller receives an empty string and downstream stages treat it as the
/// insufficient-text case.
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn extract_text(&self, data: &[u8]) -> String {
        match extract_by_page(data) {
            Ok(text) => text,
            Err(err) => {
                debug!("primary PDF extraction failed, trying fallback: {err}");
                match pdf_extract::extract_text_from_mem(data) {
                    Ok(text) => text,
                    Err(fallback_err) => {
                        warn!("fallback PDF extraction also failed: {fallback_err}");
                        String::new()
                    }
                }
            }
        }
    }
}

/// Page-ordered extraction. Pages that yield no text contribute nothing;
/// every page that does yield text is terminated with a newline so page
/// breaks survive as extraction boundaries.
fn extract_by_page(data: &[u8]) -> anyhow::Result<String> {
    let document = lopdf::Document::load_mem(data)?;

    let mut text = String::new();
    for (page_number, _page_id) in document.get_pages() {
        let page_text = document.extract_text(&[page_number])?;
        if !page_text.is_empty() {
            text.push_str(&page_text);
            text.push('\n');
        }
    }

    Ok(text)
}
