pub mod entry;
pub mod render;
pub mod sink;

pub use entry::ReportEntry;
pub use render::render_text;
pub use sink::{DetailsScope, EntryHandle, ReportSink};
