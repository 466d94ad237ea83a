use crate::config::{DecodeConfig, DimensionWidth};
use crate::error::{DecodeError, Result};
use crate::math::matrix::WeightMatrix;
use crate::network::network::NetworkFile;
use crate::scalar::decoder::{unsigned_int_bytes, unsigned_long_bytes};

/// Serializes `network` in the layout `NetworkFormatDecoder` reads.
///
/// Weights and the learning rate are narrowed to `f32`. Each weight block is
/// written twice so the decoder's pre-check region and cell region both hold
/// the same values. Fails with `DimensionOverflow` when a dimension does not
/// fit the configured field width.
pub fn encode_network(network: &NetworkFile, config: &DecodeConfig) -> Result<Vec<u8>> {
    let header = &network.header;
    let mut out = Vec::with_capacity(encoded_len(network, config));

    out.extend_from_slice(&unsigned_int_bytes(header.input_count));
    out.extend_from_slice(&unsigned_int_bytes(header.hidden_count));
    out.extend_from_slice(&unsigned_int_bytes(header.output_count));
    write_float(&mut out, header.learning_rate);

    write_matrix(&mut out, &network.hidden_weights, config.dimension_width)?;
    write_matrix(&mut out, &network.output_weights, config.dimension_width)?;

    Ok(out)
}

fn encoded_len(network: &NetworkFile, config: &DecodeConfig) -> usize {
    let dims = 2 * config.dimension_width.bytes();
    let block = |m: &WeightMatrix| dims + 2 * 4 * m.len();
    16 + block(&network.hidden_weights) + block(&network.output_weights)
}

fn write_float(out: &mut Vec<u8>, v: f64) {
    out.extend_from_slice(&unsigned_int_bytes((v as f32).to_bits()));
}

fn write_matrix(out: &mut Vec<u8>, m: &WeightMatrix, width: DimensionWidth) -> Result<()> {
    let overflow = || DecodeError::DimensionOverflow {
        offset: out.len(),
        rows: m.rows as u64,
        cols: m.cols as u64,
    };
    match width {
        DimensionWidth::U32 => {
            let cols = u32::try_from(m.cols).map_err(|_| overflow())?;
            let rows = u32::try_from(m.rows).map_err(|_| overflow())?;
            out.extend_from_slice(&unsigned_int_bytes(cols));
            out.extend_from_slice(&unsigned_int_bytes(rows));
        }
        DimensionWidth::U64 => {
            out.extend_from_slice(&unsigned_long_bytes(m.cols as u64));
            out.extend_from_slice(&unsigned_long_bytes(m.rows as u64));
        }
    }

    for _ in 0..2 {
        for &w in &m.data {
            write_float(out, w);
        }
    }
    Ok(())
}
