pub mod decoder;
pub mod value;

pub use decoder::{as_float32, as_unsigned_int, as_unsigned_long, ByteOrder, BYTE_ORDER};
pub use value::ScalarValue;
