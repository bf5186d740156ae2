//! Reads a written workbook back for tests.
//!
//! Understands only what [`crate::xlsx::render_workbook`] emits: one sheet,
//! shared strings, plain numbers and an optional style index per cell.

use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

/// One `<c>` element of the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetCell {
    pub reference: String,
    pub bold: bool,
    /// Resolved text or number literal; `None` for a blank cell.
    pub value: Option<String>,
}

#[derive(Debug)]
pub struct WrittenWorkbook {
    pub sheet_names: Vec<String>,
    pub cells: Vec<SheetCell>,
}

impl WrittenWorkbook {
    pub fn open(path: &Path) -> Self {
        Self::from_bytes(&std::fs::read(path).expect("read workbook"))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("xlsx is a zip");

        let workbook = entry(&mut archive, "xl/workbook.xml");
        let sheet_names = tags(&workbook, "sheet")
            .filter_map(|(open, _)| attr(open, "name").map(unescape))
            .collect();

        let shared: Vec<String> = tags(&entry(&mut archive, "xl/sharedStrings.xml"), "si")
            .map(|(_, body)| unescape(inner_text(body.unwrap_or_default(), "t").unwrap_or_default()))
            .collect();

        let sheet = entry(&mut archive, "xl/worksheets/sheet1.xml");
        let cells = tags(&sheet, "c")
            .map(|(open, body)| {
                let raw = body.and_then(|b| inner_text(b, "v"));
                let value = match (attr(open, "t"), raw) {
                    (Some("s"), Some(idx)) => {
                        let idx: usize = idx.parse().expect("shared string index");
                        Some(shared[idx].clone())
                    }
                    (_, raw) => raw.map(unescape),
                };
                SheetCell {
                    reference: attr(open, "r").expect("cell reference").to_string(),
                    bold: attr(open, "s").is_some_and(|s| s != "0"),
                    value,
                }
            })
            .collect();

        Self { sheet_names, cells }
    }

    pub fn cell(&self, reference: &str) -> Option<&SheetCell> {
        self.cells.iter().find(|c| c.reference == reference)
    }

    /// Cells of the 1-based sheet row `row`, left to right.
    pub fn row(&self, row: u32) -> Vec<&SheetCell> {
        self.cells
            .iter()
            .filter(|c| row_of(&c.reference) == row)
            .collect()
    }

    /// Values of the 1-based sheet row `row`; blanks read as `""`.
    pub fn row_values(&self, row: u32) -> Vec<String> {
        self.row(row)
            .into_iter()
            .map(|c| c.value.clone().unwrap_or_default())
            .collect()
    }
}

fn entry(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> String {
    let mut xml = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing {name}"))
        .read_to_string(&mut xml)
        .expect("utf-8 entry");
    xml
}

/// Every `<name ...>` element as (opening tag, body). Self-closing elements
/// have no body.
fn tags<'a>(xml: &'a str, name: &str) -> impl Iterator<Item = (&'a str, Option<&'a str>)> {
    let open = format!("<{name}");
    let close = format!("</{name}>");
    let mut rest = xml;
    std::iter::from_fn(move || loop {
        let start = rest.find(&open)?;
        let after = &rest[start + open.len()..];
        // Skip longer names sharing the prefix, e.g. `<cols>` for `<c`.
        if !after.starts_with([' ', '>', '/']) {
            rest = after;
            continue;
        }
        let end = after.find('>')?;
        let tag = &after[..end];
        if let Some(tag) = tag.strip_suffix('/') {
            rest = &after[end + 1..];
            return Some((tag, None));
        }
        let body_start = &after[end + 1..];
        let body_end = body_start.find(&close)?;
        rest = &body_start[body_end + close.len()..];
        return Some((tag, Some(&body_start[..body_end])));
    })
}

fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {name}=\"");
    let start = tag.find(&key)? + key.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

fn inner_text<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    tags(body, name).next().and_then(|(_, text)| text)
}

fn row_of(reference: &str) -> u32 {
    reference
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .parse()
        .expect("row number")
}

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
