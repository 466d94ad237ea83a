use std::fmt::Write;

use crate::report::entry::ReportEntry;

/// Renders a report as an indented plain-text tree.
///
/// Each entry becomes one line, `label: value  (description)`, with the value
/// and description parts omitted when absent. Children are indented two
/// spaces per nesting level.
pub fn render_text(entries: &[ReportEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        render_entry(&mut out, entry, 0);
    }
    out
}

fn render_entry(out: &mut String, entry: &ReportEntry, depth: usize) {
    let _ = write!(out, "{:indent$}{}", "", entry.label, indent = depth * 2);
    if let Some(value) = &entry.value {
        let _ = write!(out, ": {value}");
    }
    if let Some(description) = &entry.description {
        let _ = write!(out, "  ({description})");
    }
    out.push('\n');

    for child in entry.children() {
        render_entry(out, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::sink::ReportSink;
    use crate::scalar::ScalarValue;

    #[test]
    fn renders_nested_rows() {
        let mut sink = ReportSink::new();
        sink.append_row("Inputs", Some(ScalarValue::Unsigned(2)), Some("Number of inputs neurons"));
        let weights = sink.append_row("Hidden Weights", None, None);
        sink.with_details(&weights, |s| {
            s.append_row("0-0", Some(ScalarValue::Float(0.5)), None);
        });

        let text = render_text(sink.entries());
        assert_eq!(
            text,
            "Inputs: 2  (Number of inputs neurons)\nHidden Weights\n  0-0: 0.5\n"
        );
    }
}
