use log::{debug, trace, warn};

use crate::config::{DecodeConfig, DimensionWidth};
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, Result};
use crate::format::{NoPreamble, Preamble};
use crate::math::matrix::WeightMatrix;
use crate::network::header::NetworkHeader;
use crate::network::layout::{self, MatrixLabels};
use crate::network::network::NetworkFile;
use crate::report::{ReportEntry, ReportSink};
use crate::scalar::{as_float32, as_unsigned_int, as_unsigned_long, ScalarValue};

/// Bytes per encoded weight.
const WEIGHT_SIZE: u64 = 4;

/// Result of a successful decode: the report rows and the typed network
/// they were built from.
#[derive(Debug, Clone)]
pub struct DecodedReport {
    pub entries: Vec<ReportEntry>,
    pub network: NetworkFile,
}

/// Walks a net-bin buffer front to back and turns it into a report.
///
/// Layout, all little-endian:
/// ```text
/// u32  inputs
/// u32  hidden
/// u32  output
/// f32  learning rate
/// dim  cols, dim rows          (hidden weights; dim is u32 or u64)
/// f32  x rows*cols             pre-check region
/// f32  x rows*cols             cells, row-major
/// dim  cols, dim rows          (output weights)
/// f32  x rows*cols             pre-check region
/// f32  x rows*cols             cells, row-major
/// ```
///
/// Each matrix is read in two phases. The whole block length is first taken
/// from the cursor in one read, which fails before any cell row is emitted
/// if the file is too short. The cells are then read one at a time from the
/// bytes that follow. Both phases advance the cursor.
///
/// Trailing bytes after the output matrix are ignored.
#[derive(Debug, Clone)]
pub struct NetworkFormatDecoder<P = NoPreamble> {
    config: DecodeConfig,
    preamble: P,
}

impl NetworkFormatDecoder<NoPreamble> {
    pub fn new(config: DecodeConfig) -> Self {
        NetworkFormatDecoder { config, preamble: NoPreamble }
    }
}

impl Default for NetworkFormatDecoder<NoPreamble> {
    fn default() -> Self {
        NetworkFormatDecoder::new(DecodeConfig::default())
    }
}

impl<P: Preamble> NetworkFormatDecoder<P> {
    /// Replaces the rows emitted ahead of the decoded fields.
    pub fn with_preamble<Q: Preamble>(self, preamble: Q) -> NetworkFormatDecoder<Q> {
        NetworkFormatDecoder { config: self.config, preamble }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decodes `buf` from offset 0.
    ///
    /// Any error aborts the whole decode; no partial report is returned.
    pub fn decode(&self, buf: &[u8]) -> Result<DecodedReport> {
        let mut cursor = ByteCursor::new(buf);
        let mut sink = ReportSink::new();

        self.preamble.emit(&mut sink);

        let header = decode_header(&mut cursor, &mut sink)?;
        debug!(
            "net-bin header: inputs={} hidden={} output={} learning_rate={}",
            header.input_count, header.hidden_count, header.output_count, header.learning_rate
        );

        let hidden_weights = self.decode_matrix(&mut cursor, &mut sink, &layout::HIDDEN_WEIGHTS)?;
        let output_weights = self.decode_matrix(&mut cursor, &mut sink, &layout::OUTPUT_WEIGHTS)?;

        if cursor.remaining() > 0 {
            warn!(
                "ignoring {} trailing bytes after offset {}",
                cursor.remaining(),
                cursor.position()
            );
        }

        Ok(DecodedReport {
            entries: sink.into_entries(),
            network: NetworkFile { header, hidden_weights, output_weights },
        })
    }

    fn read_dimension(&self, cursor: &mut ByteCursor<'_>) -> Result<u64> {
        Ok(match self.config.dimension_width {
            DimensionWidth::U32 => as_unsigned_int(cursor.advance_array()?) as u64,
            DimensionWidth::U64 => as_unsigned_long(cursor.advance_array()?),
        })
    }

    fn decode_matrix(
        &self,
        cursor: &mut ByteCursor<'_>,
        sink: &mut ReportSink,
        labels: &MatrixLabels,
    ) -> Result<WeightMatrix> {
        let cols = self.read_dimension(cursor)?;
        sink.append_row(labels.cols.0, Some(ScalarValue::Unsigned(cols)), Some(labels.cols.1));
        let rows = self.read_dimension(cursor)?;
        sink.append_row(labels.rows.0, Some(ScalarValue::Unsigned(rows)), Some(labels.rows.1));

        let offset = cursor.position();
        let overflow = || DecodeError::DimensionOverflow { offset, rows, cols };
        let size = rows.checked_mul(cols).ok_or_else(overflow)?;
        let block_len = size
            .checked_mul(WEIGHT_SIZE)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(overflow)?;
        let (rows_usize, cols_usize) = match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(r), Ok(c)) => (r, c),
            _ => return Err(overflow()),
        };
        debug!("{}: {rows} x {cols} ({block_len} bytes) at offset {offset}", labels.block);

        // Phase one: the whole block must be present before any cell is read.
        cursor.advance(block_len)?;

        // Phase two: re-traverse cell by cell from the current position.
        let block = sink.append_row(labels.block, None, None);
        let data = sink.with_details(&block, |sink| -> Result<Vec<f64>> {
            let mut data = Vec::with_capacity(block_len / WEIGHT_SIZE as usize);
            if cols == 0 {
                return Ok(data);
            }
            for row in 0..rows {
                for col in 0..cols {
                    let weight = as_float32(cursor.advance_array()?);
                    trace!("{} [{row}, {col}] = {weight}", labels.block);
                    sink.append_row(
                        layout::cell_label(row, col),
                        Some(ScalarValue::Float(weight)),
                        None,
                    );
                    data.push(weight);
                }
            }
            Ok(data)
        })?;

        Ok(WeightMatrix { rows: rows_usize, cols: cols_usize, data })
    }
}

fn decode_header(cursor: &mut ByteCursor<'_>, sink: &mut ReportSink) -> Result<NetworkHeader> {
    let mut count = |(label, description): (&str, &str)| -> Result<u32> {
        let v = as_unsigned_int(cursor.advance_array()?);
        sink.append_row(label, Some(ScalarValue::from(v)), Some(description));
        Ok(v)
    };
    let input_count = count(layout::INPUTS)?;
    let hidden_count = count(layout::HIDDEN)?;
    let output_count = count(layout::OUTPUT)?;

    let learning_rate = as_float32(cursor.advance_array()?);
    let (label, description) = layout::LEARNING_RATE;
    sink.append_row(label, Some(ScalarValue::Float(learning_rate)), Some(description));

    Ok(NetworkHeader { input_count, hidden_count, output_count, learning_rate })
}
