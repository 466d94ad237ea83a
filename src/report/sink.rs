use std::ops::{Deref, DerefMut};

use crate::report::entry::ReportEntry;
use crate::scalar::ScalarValue;

/// Position of an appended entry inside the report tree.
///
/// Only `ReportSink::append_row` hands these out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHandle {
    scope: Vec<usize>,
    index: usize,
}

/// Append-only ordered tree of report entries.
///
/// The sink keeps its own stack of open detail scopes; rows are appended to
/// whichever scope is innermost. Nothing here is global, so independent
/// decoders each own a sink and never see each other's scopes.
#[derive(Debug, Default)]
pub struct ReportSink {
    roots: Vec<ReportEntry>,
    scopes: Vec<Vec<usize>>,
}

impl ReportSink {
    pub fn new() -> ReportSink {
        ReportSink::default()
    }

    /// Appends a row to the current scope and returns a handle to it.
    pub fn append_row(
        &mut self,
        label: impl Into<String>,
        value: Option<ScalarValue>,
        description: Option<&str>,
    ) -> EntryHandle {
        let entry = ReportEntry {
            label: label.into(),
            value,
            description: description.map(str::to_owned),
            children: None,
        };

        let scope = self.scopes.last().cloned().unwrap_or_default();
        let siblings = Self::siblings_mut(&mut self.roots, &scope);
        siblings.push(entry);
        EntryHandle { index: siblings.len() - 1, scope }
    }

    /// Opens a details block under `parent`; rows appended through the
    /// returned scope become its children. The block closes when the scope
    /// is dropped.
    ///
    /// # Panics
    /// Panics if `parent` is not the most recently appended entry of the
    /// current scope.
    pub fn details(&mut self, parent: &EntryHandle) -> DetailsScope<'_> {
        let current = self.scopes.last().map(Vec::as_slice).unwrap_or(&[]);
        let open_len = Self::siblings_mut(&mut self.roots, current).len();
        assert!(
            parent.scope == current && parent.index + 1 == open_len,
            "details can only be opened under the most recently appended row"
        );

        Self::siblings_mut(&mut self.roots, &parent.scope)[parent.index]
            .children
            .get_or_insert_with(Vec::new);

        let mut path = parent.scope.clone();
        path.push(parent.index);
        self.scopes.push(path);
        DetailsScope { sink: self }
    }

    /// Runs `body` inside a details block under `parent`.
    ///
    /// The scope is popped when `body` returns, whether it returns `Ok`,
    /// `Err`, or unwinds.
    pub fn with_details<T, F>(&mut self, parent: &EntryHandle, body: F) -> T
    where
        F: FnOnce(&mut ReportSink) -> T,
    {
        let mut scope = self.details(parent);
        body(&mut *scope)
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.roots
    }

    pub fn into_entries(self) -> Vec<ReportEntry> {
        self.roots
    }

    fn siblings_mut<'r>(
        roots: &'r mut Vec<ReportEntry>,
        scope: &[usize],
    ) -> &'r mut Vec<ReportEntry> {
        let mut list = roots;
        for &i in scope {
            list = list[i].children.get_or_insert_with(Vec::new);
        }
        list
    }
}

/// An open details block. Dereferences to the sink; closes on drop.
#[derive(Debug)]
pub struct DetailsScope<'s> {
    sink: &'s mut ReportSink,
}

impl Deref for DetailsScope<'_> {
    type Target = ReportSink;

    fn deref(&self) -> &ReportSink {
        self.sink
    }
}

impl DerefMut for DetailsScope<'_> {
    fn deref_mut(&mut self) -> &mut ReportSink {
        self.sink
    }
}

impl Drop for DetailsScope<'_> {
    fn drop(&mut self) {
        self.sink.scopes.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_append_in_order() {
        let mut sink = ReportSink::new();
        sink.append_row("a", Some(ScalarValue::Unsigned(1)), Some("first"));
        sink.append_row("b", None, None);
        let entries = sink.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "a");
        assert_eq!(entries[0].description.as_deref(), Some("first"));
        assert_eq!(entries[1].value, None);
    }

    #[test]
    fn details_nest_then_return_to_enclosing_scope() {
        let mut sink = ReportSink::new();
        let parent = sink.append_row("Weights", None, None);
        sink.with_details(&parent, |s| {
            s.append_row("0-0", Some(ScalarValue::Float(1.5)), None);
            s.append_row("0-1", Some(ScalarValue::Float(2.5)), None);
        });
        sink.append_row("After", None, None);

        let entries = sink.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].children().len(), 2);
        assert_eq!(entries[0].children()[1].label, "0-1");
        assert_eq!(entries[1].children, None);
    }

    #[test]
    fn nested_details_build_a_tree() {
        let mut sink = ReportSink::new();
        let outer = sink.append_row("outer", None, None);
        sink.with_details(&outer, |s| {
            let inner = s.append_row("inner", None, None);
            s.with_details(&inner, |s| {
                s.append_row("leaf", None, None);
            });
            s.append_row("sibling", None, None);
        });
        let entries = sink.into_entries();
        let outer = &entries[0];
        assert_eq!(outer.children().len(), 2);
        assert_eq!(outer.children()[0].children()[0].label, "leaf");
        assert_eq!(outer.children()[1].label, "sibling");
    }

    #[test]
    fn scope_is_popped_when_body_fails() {
        let mut sink = ReportSink::new();
        let parent = sink.append_row("Weights", None, None);
        let result: Result<(), &str> = sink.with_details(&parent, |s| {
            s.append_row("0-0", None, None);
            Err("truncated")
        });
        assert!(result.is_err());
        sink.append_row("next", None, None);
        assert_eq!(sink.entries().len(), 2);
    }

    #[test]
    fn empty_details_block_is_recorded() {
        let mut sink = ReportSink::new();
        let parent = sink.append_row("Weights", None, None);
        sink.with_details(&parent, |_| {});
        assert_eq!(sink.entries()[0].children, Some(vec![]));
    }

    #[test]
    #[should_panic(expected = "most recently appended")]
    fn cannot_reopen_earlier_sibling() {
        let mut sink = ReportSink::new();
        let first = sink.append_row("first", None, None);
        sink.append_row("second", None, None);
        sink.with_details(&first, |_| {});
    }
}
