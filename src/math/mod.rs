pub mod activation;
pub mod matrix;

pub use activation::{sigmoid, softmax};
pub use matrix::WeightMatrix;
