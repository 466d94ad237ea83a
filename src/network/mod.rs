pub mod decoder;
pub mod encoder;
pub mod header;
pub mod layout;
pub mod network;

pub use decoder::{DecodedReport, NetworkFormatDecoder};
pub use encoder::encode_network;
pub use header::NetworkHeader;
pub use network::NetworkFile;
