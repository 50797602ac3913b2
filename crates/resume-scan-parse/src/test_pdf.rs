//! lopdf-built PDFs for tests.
//!
//! Compiled for this crate's own tests and, with the `test-pdf` feature, for
//! downstream integration tests.

use std::io;

use lopdf::{Document, Object, Stream, dictionary};

/// Content stream drawing `lines` top to bottom in 12pt Helvetica.
fn content_for(lines: &[&str]) -> Vec<u8> {
    if lines.iter().all(|l| l.is_empty()) {
        return Vec::new();
    }
    let mut content = String::from("BT /F1 12 Tf 72 720 Td 14 TL\n");
    for line in lines {
        content.push_str(&format!("({line}) Tj T*\n"));
    }
    content.push_str("ET");
    content.into_bytes()
}

/// Build a PDF with one page per entry of `pages`, each holding `pages[i]`
/// split into lines on `\n`. An empty entry yields a page with no text.
///
/// # Errors
///
/// Returns an error if lopdf fails to serialize the document.
pub fn pdf_with_pages(pages: &[&str]) -> io::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut page_ids = Vec::new();
    for page in pages {
        let lines: Vec<&str> = page.split('\n').collect();
        let content_id = doc.add_object(Stream::new(dictionary! {}, content_for(&lines)));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(pages.len() as i64),
    });

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).map_err(io::Error::other)?;
    Ok(buf)
}

/// Build a single-page PDF with one text line per entry of `lines`.
///
/// # Errors
///
/// Returns an error if lopdf fails to serialize the document.
pub fn pdf_with_lines(lines: &[&str]) -> io::Result<Vec<u8>> {
    pdf_with_pages(&[lines.join("\n").as_str()])
}
