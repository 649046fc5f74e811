use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rust_qr_encoder::encoder::{
    ErrorCorrector, QrEncoder, select_encoder_raw, split_lines, strip_line_ending,
};
use rust_qr_encoder::pipeline::{encode_batch_raw, finish};
use rust_qr_encoder::{ECLevel, EncodedData};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR data payload encoder")]
struct Cli {
    /// Log at debug level, overriding RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Input {
    /// Text string to be encoded
    #[arg(short, long, conflicts_with = "file_path")]
    text: Option<String>,

    /// File path for text to be encoded; one trailing line ending is ignored
    #[arg(short, long)]
    file_path: Option<PathBuf>,

    /// Error correction level (L, M, Q, H); defaults to QR_EC_LEVEL or L
    #[arg(short, long, env = "QR_EC_LEVEL", default_value = "L")]
    correction_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the interleaved codeword stream as bits
    Encode {
        #[command(flatten)]
        input: Input,
        /// Print only prefix + payload + suffix, before error correction
        #[arg(long)]
        data_only: bool,
    },
    /// Print mode, version and bit budget for a message
    Inspect {
        #[command(flatten)]
        input: Input,
    },
    /// Encode every line of a file as its own message
    Batch {
        /// File with one message per line
        #[arg(short, long)]
        file_path: PathBuf,
        #[arg(short, long, env = "QR_EC_LEVEL", default_value = "L")]
        correction_level: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    match cli.command {
        Command::Encode { input, data_only } => encode_cmd(&input, data_only),
        Command::Inspect { input } => inspect_cmd(&input),
        Command::Batch {
            file_path,
            correction_level,
        } => batch_cmd(&file_path, &correction_level),
    }
}

fn init_logging(verbose: bool, json: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(verbose, rust_log.as_deref());

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// `--verbose` forces debug; otherwise RUST_LOG directives apply, falling back to warn
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim) {
        _ if verbose => EnvFilter::new("debug"),
        Some(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new("warn"),
    }
}

fn build_encoder(input: &Input) -> Result<QrEncoder> {
    let encoder = match (&input.text, &input.file_path) {
        (Some(text), _) => select_encoder_raw(Some(text.as_bytes()), &input.correction_level)?,
        (None, Some(path)) => {
            let raw = fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            select_encoder_raw(Some(strip_line_ending(&raw)), &input.correction_level)?
        }
        (None, None) => bail!("either --text or --file-path is required"),
    };
    Ok(encoder)
}

fn encode_cmd(input: &Input, data_only: bool) -> Result<()> {
    let encoder = build_encoder(input)?;
    if data_only {
        println!("{}", encoder.data_bits());
    } else {
        let encoded: EncodedData = finish(&encoder)?;
        println!("{}", encoded.bits());
    }
    Ok(())
}

fn inspect_cmd(input: &Input) -> Result<()> {
    let encoder = build_encoder(input)?;
    let corrector = ErrorCorrector::new(encoder.block_info());
    let info = corrector.block_info();

    println!("mode:             {}", encoder.mode());
    println!("correction level: {}", encoder.correction_level());
    println!(
        "version:          {} ({}x{} modules)",
        encoder.version().number(),
        encoder.version().size(),
        encoder.version().size()
    );
    println!("char count:       {}", encoder.char_count());
    println!("bit cap:          {}", encoder.bit_cap());
    println!("required bits:    {}", encoder.get_num_bits());
    println!("prefix:           {}", encoder.get_prefix());
    println!("payload bits:     {}", encoder.encode().len());
    print!(
        "blocks:           {} x {} data",
        info.group1.blocks, info.group1.data_codewords
    );
    if let Some(g2) = info.group2 {
        print!(" + {} x {} data", g2.blocks, g2.data_codewords);
    }
    println!(", {} EC each", info.ec_per_block);
    println!("message bytes:    {}", corrector.num_message_bytes());
    println!("correction bytes: {}", corrector.num_correction_bytes());
    Ok(())
}

fn batch_cmd(path: &Path, correction_level: &str) -> Result<()> {
    let level: ECLevel = correction_level.parse()?;
    let raw = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let lines = split_lines(&raw);

    for (line, result) in lines.iter().zip(encode_batch_raw(&lines, level)) {
        match result {
            Ok(encoded) => println!(
                "{}{} {} {}",
                encoded.version.number(),
                encoded.ec_level,
                encoded.mode,
                encoded.bits()
            ),
            Err(err) => println!("error: {} (\"{}\")", err, line.escape_ascii()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(false, Some("  ")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_follows_rust_log() {
        assert_eq!(
            log_filter(false, Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(false, Some("trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(
            log_filter(true, Some("error")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
