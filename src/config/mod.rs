pub mod decode_config;

pub use decode_config::{DecodeConfig, DimensionWidth};
