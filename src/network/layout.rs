//! Report labels and descriptions for each field of a net-bin file.
//!
//! The output layer is spelled "Outout" throughout; existing tooling keys on
//! these exact strings.

pub const INPUTS: (&str, &str) = ("Inputs", "Number of inputs neurons");
pub const HIDDEN: (&str, &str) = ("Hidden", "Number of hidden neurons on the first hidden layer");
pub const OUTPUT: (&str, &str) = ("Output", "Number of output neurons");
pub const LEARNING_RATE: (&str, &str) = ("Learning Rate", "Value of the Learning Rate");

/// Labels for one weight matrix block.
#[derive(Debug, Clone, Copy)]
pub struct MatrixLabels {
    pub cols: (&'static str, &'static str),
    pub rows: (&'static str, &'static str),
    pub block: &'static str,
}

pub const HIDDEN_WEIGHTS: MatrixLabels = MatrixLabels {
    cols: ("Cols Hidden Weights", "Number of cols on hidden weights"),
    rows: ("Rows Hidden Weights", "Number of rows on hidden weights"),
    block: "Hidden Weights",
};

pub const OUTPUT_WEIGHTS: MatrixLabels = MatrixLabels {
    cols: ("Cols Outout Weights", "Number of cols on Outout weights"),
    rows: ("Rows Outout Weights", "Number of rows on Outout weights"),
    block: "Outout Weights",
};

/// Label of a weight cell inside a matrix block.
pub fn cell_label(row: u64, col: u64) -> String {
    format!("{row}-{col}")
}
