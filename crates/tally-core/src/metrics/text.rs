//! Text exposition helpers.

use std::fmt::Write;

use crate::error::{Result, TallyError};

/// Media type served with rendered metrics.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Escape a label value.
pub fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escape help text (quotes are legal there).
pub fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Write the `# HELP` / `# TYPE` preamble of one metric block.
pub fn write_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

/// Write one sample line. Labels are emitted in the order given.
pub fn write_sample(out: &mut String, name: &str, labels: &[(&str, &str)], value: u64) {
    if labels.is_empty() {
        let _ = writeln!(out, "{} {}", name, value);
        return;
    }
    let label_str = labels
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",");
    let _ = writeln!(out, "{}{{{}}} {}", name, label_str, value);
}

/// Metric names: `[a-zA-Z_:][a-zA-Z0-9_:]*`.
pub fn validate_metric_name(name: &str) -> Result<()> {
    if is_valid_ident(name, true) {
        Ok(())
    } else {
        Err(TallyError::Config(format!("invalid metric name: {name:?}")))
    }
}

/// Label names: `[a-zA-Z_][a-zA-Z0-9_]*`, `__` prefix reserved.
pub fn validate_label_name(name: &str) -> Result<()> {
    if is_valid_ident(name, false) && !name.starts_with("__") {
        Ok(())
    } else {
        Err(TallyError::Config(format!("invalid label name: {name:?}")))
    }
}

fn is_valid_ident(s: &str, allow_colon: bool) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let ok = |c: char, lead: bool| {
        c.is_ascii_alphabetic() || c == '_' || (allow_colon && c == ':') || (!lead && c.is_ascii_digit())
    };
    ok(first, true) && chars.all(|c| ok(c, false))
}
