use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

/// Extract visible paragraph text from a DOCX archive, one line per
/// paragraph, then append any LinkedIn hyperlink targets found in the
/// document relationships. Many resumes carry the profile link only as a
/// hyperlink, invisible in the paragraph text.
pub fn extract_docx_text(data: &[u8]) -> anyhow::Result<String> {
    let cursor = Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut document_file = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    document_file.read_to_string(&mut xml)?;
    drop(document_file);

    let mut text = extract_paragraphs(&xml)?;

    match read_hyperlink_targets(&mut archive) {
        Ok(links) => {
            for link in links {
                text.push('\n');
                text.push_str(&link);
            }
        }
        Err(err) => debug!("skipping DOCX relationship scan: {err}"),
    }

    Ok(text)
}

fn extract_paragraphs(xml: &str) -> anyhow::Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut current = String::new();
    let mut lines = Vec::new();
    let mut in_paragraph = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:p" {
                    in_paragraph = true;
                    current.clear();
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"w:p" {
                    if !current.trim().is_empty() {
                        lines.push(current.trim().to_string());
                    }
                    current.clear();
                    in_paragraph = false;
                }
            }
            Ok(Event::Text(e)) => {
                if in_paragraph {
                    let value = e.xml_content()?.into_owned();
                    current.push_str(&value);
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.into()),
            _ => {}
        }

        buf.clear();
    }

    Ok(lines.join("\n"))
}

/// Hyperlink targets live in `word/_rels/document.xml.rels`, not in the
/// document body. Only professional-network targets are recovered.
fn read_hyperlink_targets(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
) -> anyhow::Result<Vec<String>> {
    let mut rels_file = archive.by_name("word/_rels/document.xml.rels")?;
    let mut xml = String::new();
    rels_file.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut buf = Vec::new();
    let mut links = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"Relationship" {
                    let mut is_hyperlink = false;
                    let mut target: Option<String> = None;

                    for attribute in e.attributes() {
                        let attribute = attribute?;
                        match attribute.key.as_ref() {
                            b"Type" => {
                                is_hyperlink =
                                    attribute.unescape_value()?.ends_with("/hyperlink");
                            }
                            b"Target" => {
                                target = Some(attribute.unescape_value()?.into_owned());
                            }
                            _ => {}
                        }
                    }

                    if is_hyperlink {
                        if let Some(url) = target {
                            if url.to_ascii_lowercase().contains("linkedin") {
                                links.push(url);
                            }
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.into()),
            _ => {}
        }

        buf.clear();
    }

    Ok(links)
}
