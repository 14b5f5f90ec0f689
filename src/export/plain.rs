use super::ExportBackend;
use super::document::DocValue;
use crate::error::ExportError;
use crate::flow::Flow;

/// Hand-rolled block renderer producing the canonical text: two-space
/// indentation, list items one level deeper than their key, bare scalars.
/// It carries no formatting engine behind it and cannot fail, which makes
/// it the byte-stable reference output for diffing and version control.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl ExportBackend for PlainRenderer {
    fn render(&self, _flow: &Flow, document: &DocValue) -> Result<String, ExportError> {
        Ok(render_document(document))
    }
}

pub(super) fn render_document(document: &DocValue) -> String {
    let entries = match document {
        DocValue::Map(entries) => entries,
        _ => return String::new(),
    };
    let mut lines: Vec<String> = Vec::new();
    write_map(&mut lines, entries, 0);
    if lines.is_empty() {
        String::new()
    } else {
        lines.join("\n") + "\n"
    }
}

fn write_map(lines: &mut Vec<String>, entries: &[(String, DocValue)], indent: usize) {
    let prefix = "  ".repeat(indent);
    for (key, value) in entries {
        match value {
            DocValue::Map(inner) if inner.is_empty() => {
                lines.push(format!("{prefix}{key}: {{}}"));
            }
            DocValue::Map(inner) => {
                lines.push(format!("{prefix}{key}:"));
                write_map(lines, inner, indent + 1);
            }
            DocValue::Seq(items) if items.is_empty() => {
                lines.push(format!("{prefix}{key}: []"));
            }
            DocValue::Seq(items) => {
                lines.push(format!("{prefix}{key}:"));
                write_items(lines, items, indent + 1);
            }
            scalar => lines.push(format!("{prefix}{key}: {}", scalar_text(scalar))),
        }
    }
}

fn write_items(lines: &mut Vec<String>, items: &[DocValue], indent: usize) {
    let prefix = "  ".repeat(indent);
    for item in items {
        match item {
            DocValue::Map(inner) => {
                lines.push(format!("{prefix}-"));
                write_map(lines, inner, indent + 1);
            }
            DocValue::Seq(inner) => {
                lines.push(format!("{prefix}-"));
                write_items(lines, inner, indent + 1);
            }
            scalar => lines.push(format!("{prefix}- {}", scalar_text(scalar))),
        }
    }
}

fn scalar_text(value: &DocValue) -> String {
    match value {
        DocValue::Null => "null".to_string(),
        DocValue::Bool(flag) => flag.to_string(),
        DocValue::Number(number) => number.to_string(),
        DocValue::Text(text) => text.clone(),
        // Composites never reach here; the callers branch on them first.
        DocValue::Seq(_) | DocValue::Map(_) => String::new(),
    }
}
