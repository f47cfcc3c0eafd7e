//! Output formatting for CLI commands.
//!
//! Every printer has a `*_to` variant taking a writer so output can be
//! captured in tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{Document, File, TransUnit};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// One row of the `languages` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    pub language: String,
    pub entries: usize,
    pub is_base: bool,
}

/// Right-pad `text` to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

pub fn print_languages(rows: &[LanguageRow], dir: &str) {
    print_languages_to(rows, dir, &mut io::stdout().lock());
}

pub fn print_languages_to<W: Write>(rows: &[LanguageRow], dir: &str, writer: &mut W) {
    if rows.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.yellow(),
            format!("No translation files found in {}", dir).yellow()
        );
        return;
    }

    let width = rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.language.as_str()))
        .max()
        .unwrap_or(0);

    for row in rows {
        let marker = if row.is_base {
            format!(" {}", "(base)".cyan())
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "  {}  {}{}",
            pad(&row.language, width).bold(),
            plural(row.entries, "entry", "entries"),
            marker
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Loaded {} from {}",
            plural(rows.len(), "language", "languages"),
            dir
        )
        .green()
    );
}

pub fn print_document(doc: &Document) {
    print_document_to(doc, &mut io::stdout().lock());
}

pub fn print_document_to<W: Write>(doc: &Document, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        "xliff".bold(),
        doc.version,
        doc.xmlns.dimmed()
    );

    for file in &doc.files {
        print_file(file, writer);
    }

    let unit_count = doc.trans_units().count();
    let _ = writeln!(
        writer,
        "{} {}, {}",
        SUCCESS_MARK.green(),
        plural(doc.files.len(), "file", "files"),
        plural(unit_count, "translation unit", "translation units")
    );
}

fn print_file<W: Write>(file: &File, writer: &mut W) {
    let mut details = Vec::new();
    if !file.source_language.is_empty() || !file.target_language.is_empty() {
        details.push(format!(
            "{} -> {}",
            file.source_language, file.target_language
        ));
    }
    if !file.datatype.is_empty() {
        details.push(file.datatype.clone());
    }

    if details.is_empty() {
        let _ = writeln!(writer, "{} {}", "file:".bold(), file.original);
    } else {
        let _ = writeln!(
            writer,
            "{} {} ({})",
            "file:".bold(),
            file.original,
            details.join(", ")
        );
    }

    let tool = &file.header.tool;
    if !tool.name.is_empty() || !tool.id.is_empty() {
        let name = if tool.name.is_empty() {
            &tool.id
        } else {
            &tool.name
        };
        let mut line = format!("  {} {}", "tool:".dimmed(), name);
        if !tool.version.is_empty() {
            line.push_str(&format!(" {}", tool.version));
        }
        if !tool.build_num.is_empty() {
            line.push_str(&format!(" (build {})", tool.build_num));
        }
        let _ = writeln!(writer, "{}", line);
    }

    let width = file
        .body
        .trans_units
        .iter()
        .map(|unit| UnicodeWidthStr::width(unit.id.as_str()))
        .max()
        .unwrap_or(0);

    for unit in &file.body.trans_units {
        print_unit(unit, width, writer);
    }
}

fn print_unit<W: Write>(unit: &TransUnit, width: usize, writer: &mut W) {
    let mark = if unit.is_approved() {
        SUCCESS_MARK.green().to_string()
    } else {
        " ".to_string()
    };
    let _ = writeln!(
        writer,
        "  {} {}  {} {} {}",
        mark,
        pad(&unit.id, width).bold(),
        unit.source.text,
        "=>".blue(),
        unit.target.text
    );
}
