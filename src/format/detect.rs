use std::path::Path;

/// Extension (without the dot) that identifies a net-bin file.
pub const FILE_EXTENSION: &str = "net-bin";

/// Returns true when a file should be routed to the net-bin decoder.
///
/// Only the extension is consulted; `path` and `data` are part of the
/// routing signature but the format has no magic number to sniff.
pub fn detect_file_type(extension: &str, _path: &Path, _data: &[u8]) -> bool {
    extension == FILE_EXTENSION
}
