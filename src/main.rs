//! netbin: inspect, generate and evaluate net-bin network files.
//!
//! Set `RUST_LOG=debug` to see header fields and matrix offsets as they are read.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;
use netbin::{
    detect_file_type, render_text, DecodeConfig, DimensionWidth, NetworkFile,
    NetworkFormatDecoder, StandardHeader,
};

#[derive(Parser)]
#[command(name = "netbin")]
#[command(about = "Inspect and generate net-bin feed-forward network files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a .net-bin file and print its report
    Inspect {
        /// File to decode
        file: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Matrix dimensions are 8-byte fields
        #[arg(long)]
        wide_dims: bool,

        /// Also write the decoded network to this JSON file
        #[arg(long)]
        export_json: Option<PathBuf>,
    },

    /// Write a randomly initialised network
    Sample {
        /// Output file
        file: PathBuf,

        /// Number of input neurons
        inputs: u32,

        /// Number of hidden neurons
        hidden: u32,

        /// Number of output neurons
        outputs: u32,

        /// Learning rate stored in the header
        #[arg(allow_negative_numbers = true)]
        learning_rate: f64,

        /// Write 8-byte matrix dimensions
        #[arg(long)]
        wide_dims: bool,
    },

    /// Run a feed-forward pass and print class probabilities
    Classify {
        /// Network file
        file: PathBuf,

        /// Comma-separated input values
        #[arg(long, required = true, value_delimiter = ',', allow_negative_numbers = true)]
        input: Vec<f64>,

        /// Matrix dimensions are 8-byte fields
        #[arg(long)]
        wide_dims: bool,
    },
}

fn config_for(wide_dims: bool) -> DecodeConfig {
    DecodeConfig::new(if wide_dims { DimensionWidth::U64 } else { DimensionWidth::U32 })
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            file,
            json,
            wide_dims,
            export_json,
        } => cmd_inspect(&file, config_for(wide_dims), json, export_json.as_deref()),
        Commands::Sample {
            file,
            inputs,
            hidden,
            outputs,
            learning_rate,
            wide_dims,
        } => cmd_sample(&file, config_for(wide_dims), inputs, hidden, outputs, learning_rate),
        Commands::Classify {
            file,
            input,
            wide_dims,
        } => cmd_classify(&file, config_for(wide_dims), &input),
    }
}

/// Reads `path` after checking it carries the net-bin extension.
///
/// Errors are already reported; the caller only returns the exit code.
fn read_net_bin(path: &Path) -> Result<Vec<u8>, ExitCode> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let data = std::fs::read(path).map_err(|e| {
        eprintln!("cannot read '{}': {}", path.display(), e);
        ExitCode::from(1)
    })?;

    if !detect_file_type(extension, path, &data) {
        eprintln!("'{}' is not a .net-bin file", path.display());
        return Err(ExitCode::from(2));
    }
    Ok(data)
}

fn cmd_inspect(path: &Path, config: DecodeConfig, json: bool, export: Option<&Path>) -> ExitCode {
    let data = match read_net_bin(path) {
        Ok(data) => data,
        Err(code) => return code,
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let decoder = NetworkFormatDecoder::new(config)
        .with_preamble(StandardHeader::new(file_name, data.len() as u64));

    let decoded = match decoder.decode(&data) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("failed to decode '{}': {}", path.display(), e);
            return ExitCode::from(1);
        }
    };
    info!(
        "decoded '{}': {} hidden and {} output weights",
        path.display(),
        decoded.network.hidden_weights.len(),
        decoded.network.output_weights.len()
    );

    if let Some(export) = export {
        if let Err(e) = decoded.network.save_json(export) {
            eprintln!("failed to write '{}': {}", export.display(), e);
            return ExitCode::from(1);
        }
        info!("exported network to '{}'", export.display());
    }

    if json {
        match serde_json::to_string_pretty(&decoded.entries) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("failed to serialize report: {e}");
                return ExitCode::from(1);
            }
        }
    } else {
        print!("{}", render_text(&decoded.entries));
    }
    ExitCode::SUCCESS
}

fn cmd_sample(
    path: &Path,
    config: DecodeConfig,
    inputs: u32,
    hidden: u32,
    outputs: u32,
    learning_rate: f64,
) -> ExitCode {
    let network = NetworkFile::random(inputs, hidden, outputs, learning_rate);
    match network.save_bin(path, config) {
        Ok(()) => {
            println!("Successfully written to '{}'", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to write '{}': {}", path.display(), e);
            ExitCode::from(1)
        }
    }
}

fn cmd_classify(path: &Path, config: DecodeConfig, input: &[f64]) -> ExitCode {
    let data = match read_net_bin(path) {
        Ok(data) => data,
        Err(code) => return code,
    };

    let probs = match NetworkFile::from_bytes(&data, config).and_then(|net| net.classify(input)) {
        Ok(probs) => probs,
        Err(e) => {
            eprintln!("failed to classify with '{}': {}", path.display(), e);
            return ExitCode::from(1);
        }
    };

    for (class, p) in probs.iter().enumerate() {
        println!("{class}: {p:.6}");
    }
    if let Some((best, _)) = probs
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
    {
        println!("predicted: {best}");
    }
    ExitCode::SUCCESS
}
