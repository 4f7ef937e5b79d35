// src/csv.rs
use std::io::{self, Write};

use url::Url;

use crate::types::{Developer, Language, Project};

/* ---------------- Record → row ---------------- */

/// Flat, tabular view of a record for CSV/TSV export.
pub trait Row {
    fn headers() -> Vec<String>;
    fn to_row(&self) -> Vec<String>;
}

fn opt_url(u: &Option<Url>) -> String {
    u.as_ref().map(|u| s!(u.as_str())).unwrap_or_default()
}

impl Row for Project {
    fn headers() -> Vec<String> {
        ["Name", "Owner", "Repository", "Description", "Language", "Stars", "URL", "Contributors URL", "Contributors"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn to_row(&self) -> Vec<String> {
        // Contributors collapse into one cell: "alice bob carol"
        let contributors = self
            .contributors
            .iter()
            .map(|d| d.display_name.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        vec![
            self.name.clone(),
            self.owner.clone(),
            self.repository_name.clone(),
            self.description.clone(),
            self.language.clone(),
            self.stars.to_string(),
            opt_url(&self.url),
            opt_url(&self.contributor_url),
            contributors,
        ]
    }
}

impl Row for Developer {
    fn headers() -> Vec<String> {
        ["Id", "Name", "Full name", "URL", "Avatar"].into_iter().map(String::from).collect()
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.display_name.clone(),
            self.full_name.clone(),
            opt_url(&self.url),
            opt_url(&self.avatar),
        ]
    }
}

impl Row for Language {
    fn headers() -> Vec<String> {
        ["Name", "Token", "URL"].into_iter().map(String::from).collect()
    }

    fn to_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.url_name.clone(), opt_url(&self.url)]
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write a batch of records, optionally preceded by the header line.
pub fn write_records<W: Write, R: Row>(
    mut w: W,
    records: &[R],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &R::headers(), sep)?;
    }
    for r in records {
        write_row(&mut w, &r.to_row(), sep)?;
    }
    Ok(())
}

/// Convenience for Copy/preview: the export as one String.
pub fn to_export_string<R: Row>(records: &[R], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_records(&mut buf, records, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
