use serde::{Deserialize, Serialize};

/// Fixed-size fields at the start of a net-bin file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkHeader {
    pub input_count: u32,
    pub hidden_count: u32,
    pub output_count: u32,
    pub learning_rate: f64,
}
