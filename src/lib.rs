pub mod config;
pub mod cursor;
pub mod error;
pub mod format;
pub mod math;
pub mod network;
pub mod report;
pub mod scalar;

// Convenience re-exports
pub use config::{DecodeConfig, DimensionWidth};
pub use cursor::ByteCursor;
pub use error::{DecodeError, DecodeErrorKind, Result};
pub use format::{detect_file_type, Preamble, StandardHeader};
pub use math::matrix::WeightMatrix;
pub use network::{encode_network, DecodedReport, NetworkFile, NetworkFormatDecoder, NetworkHeader};
pub use report::{render_text, ReportEntry, ReportSink};
pub use scalar::{as_float32, as_unsigned_int, ScalarValue};
