use serde::{Deserialize, Serialize};

/// Width of the `cols` / `rows` fields that precede each weight matrix.
///
/// - `U32` — 4-byte fields; the layout the net-bin parser reads.
/// - `U64` — 8-byte fields; the layout written by tools that dump `size_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionWidth {
    #[default]
    U32,
    U64,
}

impl DimensionWidth {
    /// Number of bytes a single dimension field occupies.
    pub fn bytes(self) -> usize {
        match self {
            DimensionWidth::U32 => 4,
            DimensionWidth::U64 => 8,
        }
    }
}

/// Configuration for a decode or encode run.
///
/// Byte order is fixed by the format and therefore not configurable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeConfig {
    pub dimension_width: DimensionWidth,
}

impl DecodeConfig {
    pub fn new(dimension_width: DimensionWidth) -> Self {
        DecodeConfig { dimension_width }
    }
}
