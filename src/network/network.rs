use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::DecodeConfig;
use crate::error::Result;
use crate::math::activation::{sigmoid, softmax};
use crate::math::matrix::WeightMatrix;
use crate::network::decoder::NetworkFormatDecoder;
use crate::network::encoder::encode_network;
use crate::network::header::NetworkHeader;

/// The typed contents of a net-bin file.
///
/// `hidden_weights` is `hidden x inputs` and `output_weights` is
/// `outputs x hidden` for files produced by `NetworkFile::random`; decoded
/// files carry whatever shapes their dimension fields declare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    pub header: NetworkHeader,
    pub hidden_weights: WeightMatrix,
    pub output_weights: WeightMatrix,
}

impl NetworkFile {
    /// Builds a freshly initialised single-hidden-layer network.
    pub fn random(inputs: u32, hidden: u32, outputs: u32, learning_rate: f64) -> NetworkFile {
        let (i, h, o) = (inputs as usize, hidden as usize, outputs as usize);
        NetworkFile {
            header: NetworkHeader {
                input_count: inputs,
                hidden_count: hidden,
                output_count: outputs,
                learning_rate,
            },
            hidden_weights: WeightMatrix::random(h, i, h),
            output_weights: WeightMatrix::random(o, h, o),
        }
    }

    /// Decodes a net-bin buffer, discarding the report rows.
    pub fn from_bytes(buf: &[u8], config: DecodeConfig) -> Result<NetworkFile> {
        NetworkFormatDecoder::new(config)
            .decode(buf)
            .map(|decoded| decoded.network)
    }

    pub fn to_bytes(&self, config: DecodeConfig) -> Result<Vec<u8>> {
        encode_network(self, &config)
    }

    /// Writes the network to a net-bin file.
    pub fn save_bin(&self, path: impl AsRef<Path>, config: DecodeConfig) -> Result<()> {
        let bytes = self.to_bytes(config)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Reads a net-bin file previously written by `save_bin`.
    pub fn load_bin(path: impl AsRef<Path>, config: DecodeConfig) -> Result<NetworkFile> {
        let bytes = std::fs::read(path)?;
        NetworkFile::from_bytes(&bytes, config)
    }

    /// Feed-forward pass: sigmoid after each weight matrix, then softmax.
    ///
    /// `input` must have `hidden_weights.cols` values and the output matrix
    /// must take as many columns as the hidden matrix has rows.
    pub fn classify(&self, input: &[f64]) -> Result<Vec<f64>> {
        let hidden: Vec<f64> = self
            .hidden_weights
            .mul_vec(input)?
            .into_iter()
            .map(sigmoid)
            .collect();
        let outputs: Vec<f64> = self
            .output_weights
            .mul_vec(&hidden)?
            .into_iter()
            .map(sigmoid)
            .collect();
        Ok(softmax(&outputs))
    }

    /// Serializes the network to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: impl AsRef<Path>) -> std::io::Result<NetworkFile> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
