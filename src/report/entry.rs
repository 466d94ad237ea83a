use serde::Serialize;

use crate::scalar::ScalarValue;

/// One labeled line of a report, optionally carrying nested detail rows.
///
/// `children` is `None` for plain rows and `Some` once a details block has
/// been opened under the entry, even if that block stayed empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ScalarValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ReportEntry>>,
}

impl ReportEntry {
    /// Children of this entry, empty if no details block was opened.
    pub fn children(&self) -> &[ReportEntry] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// First direct child with the given label.
    pub fn child(&self, label: &str) -> Option<&ReportEntry> {
        self.children().iter().find(|c| c.label == label)
    }
}
