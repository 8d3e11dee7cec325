//! Output rendering
//!
//! Every command result is printed in one of three modes:
//! - `human` (default) - aligned tables and key/value blocks
//! - `plain` - tab-separated rows without headers, for shell pipelines
//! - `json` - the API objects as pretty-printed JSON

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

/// Output mode selected with `--output`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Pretty-printed JSON
    Json,
    /// Tab-separated values
    Plain,
    /// Aligned, human-readable text
    #[default]
    Human,
}

/// A value that can be shown as a table row or a key/value block.
pub trait Tabular {
    /// Column headers, in the order [`row`](Tabular::row) returns cells.
    const COLUMNS: &'static [&'static str];

    /// Cells of the summary row.
    fn row(&self) -> Vec<String>;

    /// Labelled fields for the detail view. Defaults to the summary row.
    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::COLUMNS.iter().copied().zip(self.row()).collect()
    }
}

/// Print a single value.
pub fn emit<T, W>(mode: OutputMode, value: &T, out: &mut W) -> io::Result<()>
where
    T: Tabular + Serialize,
    W: Write,
{
    match mode {
        OutputMode::Json => write_json(value, out),
        OutputMode::Plain => writeln!(out, "{}", value.row().join("\t")),
        OutputMode::Human => {
            let fields: Vec<_> = value
                .fields()
                .into_iter()
                .filter(|(_, v)| !v.is_empty())
                .collect();
            let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (key, field) in fields {
                writeln!(out, "{:<width$}  {}", format!("{key}:"), field, width = width + 1)?;
            }
            Ok(())
        }
    }
}

/// Print a list of values.
pub fn emit_list<T, W>(mode: OutputMode, items: &[T], out: &mut W) -> io::Result<()>
where
    T: Tabular + Serialize,
    W: Write,
{
    match mode {
        OutputMode::Json => write_json(&items, out),
        OutputMode::Plain => {
            for item in items {
                writeln!(out, "{}", item.row().join("\t"))?;
            }
            Ok(())
        }
        OutputMode::Human => {
            if items.is_empty() {
                return writeln!(out, "No results.");
            }
            let rows: Vec<Vec<String>> = items.iter().map(Tabular::row).collect();
            let headers: Vec<String> = T::COLUMNS.iter().map(|c| c.to_uppercase()).collect();
            write_table(&headers, &rows, out)
        }
    }
}

/// Print a value that may be absent, e.g. the running timer.
pub fn emit_optional<T, W>(
    mode: OutputMode,
    value: Option<&T>,
    empty: &str,
    out: &mut W,
) -> io::Result<()>
where
    T: Tabular + Serialize,
    W: Write,
{
    match (value, mode) {
        (Some(value), _) => emit(mode, value, out),
        (None, OutputMode::Json) => writeln!(out, "null"),
        (None, OutputMode::Plain) => Ok(()),
        (None, OutputMode::Human) => writeln!(out, "{empty}"),
    }
}

/// Result of a command whose API call returns no object.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    /// Always `true`; failures never reach the renderer
    pub ok: bool,
    /// Past-tense description, e.g. `Deleted task`
    pub action: String,
    /// Identifier the action applied to
    pub id: String,
}

impl Confirmation {
    pub fn new(action: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            ok: true,
            action: action.into(),
            id: id.into(),
        }
    }
}

/// Print a confirmation: a sentence for humans, the ID for pipelines.
pub fn emit_confirmation<W: Write>(
    mode: OutputMode,
    confirmation: &Confirmation,
    out: &mut W,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(confirmation, out),
        OutputMode::Plain => writeln!(out, "{}", confirmation.id),
        OutputMode::Human => writeln!(out, "{} {}", confirmation.action, confirmation.id),
    }
}

fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_table<W: Write>(headers: &[String], rows: &[Vec<String>], out: &mut W) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(headers, &widths, out)?;
    for row in rows {
        write_row(row, &widths, out)?;
    }
    Ok(())
}

fn write_row<W: Write>(cells: &[String], widths: &[usize], out: &mut W) -> io::Result<()> {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            line.push_str(cell);
        } else {
            let pad = width - cell.chars().count();
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 2));
        }
    }
    writeln!(out, "{}", line.trim_end())
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
