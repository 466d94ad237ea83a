use crate::report::ReportSink;
use crate::scalar::ScalarValue;

/// Rows emitted once at the top of a report, before any decoded field.
pub trait Preamble {
    fn emit(&self, sink: &mut ReportSink);
}

/// Emits nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreamble;

impl Preamble for NoPreamble {
    fn emit(&self, _sink: &mut ReportSink) {}
}

/// File name and size rows, as shown by the inspector binary.
#[derive(Debug, Clone)]
pub struct StandardHeader {
    pub file_name: String,
    pub file_size: u64,
}

impl StandardHeader {
    pub fn new(file_name: impl Into<String>, file_size: u64) -> StandardHeader {
        StandardHeader { file_name: file_name.into(), file_size }
    }
}

impl Preamble for StandardHeader {
    fn emit(&self, sink: &mut ReportSink) {
        sink.append_row("File Name", None, Some(self.file_name.as_str()));
        sink.append_row(
            "File Size",
            Some(ScalarValue::Unsigned(self.file_size)),
            Some("Size of the file in bytes"),
        );
    }
}
