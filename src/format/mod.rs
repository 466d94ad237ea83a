pub mod detect;
pub mod preamble;

pub use detect::{detect_file_type, FILE_EXTENSION};
pub use preamble::{NoPreamble, Preamble, StandardHeader};
