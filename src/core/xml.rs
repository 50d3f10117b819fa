//! Append-only XML text builder shared by every renderer.
//!
//! All values pass through [`escape`] before being written, so element text
//! and attribute values are always well formed.
use std::borrow::Cow;
use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};

const INDENT: &str = "  ";

/// Escape `<`, `>`, `&`, `'` and `"` for element text or attribute values.
pub fn escape(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

/// Render a timestamp the way every document field and attribute does.
pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Debug, Default)]
pub struct XmlWriter {
    buf: String,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.buf.push_str(INDENT);
        }
    }

    /// Write a raw, already-escaped line at the given level.
    pub fn line(&mut self, level: usize, text: &str) {
        self.indent(level);
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    pub fn open(&mut self, level: usize, tag: &str) {
        self.indent(level);
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    pub fn close(&mut self, level: usize, tag: &str) {
        self.indent(level);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    /// `<label>value</label>` with the value escaped.
    pub fn labeled(&mut self, level: usize, label: &str, value: &str) {
        self.indent(level);
        self.buf.push('<');
        self.buf.push_str(label);
        self.buf.push('>');
        self.buf.push_str(&escape(value));
        self.buf.push_str("</");
        self.buf.push_str(label);
        self.buf.push_str(">\n");
    }

    /// Numeric and other `Display` values are stringified, then escaped.
    pub fn labeled_display<T: Display>(&mut self, level: usize, label: &str, value: T) {
        self.labeled(level, label, &value.to_string());
    }

    pub fn labeled_date(&mut self, level: usize, label: &str, value: &DateTime<Utc>) {
        self.labeled(level, label, &format_date_time(value));
    }

    /// Absent values are skipped; no element is written.
    pub fn labeled_opt<T: Display>(&mut self, level: usize, label: &str, value: Option<T>) {
        if let Some(value) = value {
            self.labeled_display(level, label, value);
        }
    }

    pub fn labeled_date_opt(&mut self, level: usize, label: &str, value: Option<&DateTime<Utc>>) {
        if let Some(value) = value {
            self.labeled_date(level, label, value);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
