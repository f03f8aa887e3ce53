use clap::Parser;
use html2txt::{PipelineBuilder, PipelineError};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Renders an XHTML document as fixed-width plain text.
#[derive(Parser, Debug)]
#[command(name = "html2txt", version, about, long_about = None)]
struct Args {
    /// Total output width in columns [default: $COLUMNS, else 80]
    #[arg(long, value_name = "N")]
    page_width: Option<usize>,

    /// Columns left blank at the start of every line [default: 0]
    #[arg(long, value_name = "N")]
    left_margin: Option<usize>,

    /// Columns kept free at the end of every line [default: 1]
    #[arg(long, value_name = "N")]
    right_margin: Option<usize>,

    /// JSON configuration file (page-width, left-margin, right-margin, lenient)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log HTML problems and keep going instead of stopping at the first one
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// The XHTML document to convert
    input: PathBuf,

    /// Where to write the text; standard output when omitted
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), PipelineError> {
    let mut builder = PipelineBuilder::new();
    if let Some(path) = &args.config {
        builder = builder.with_config_file(path)?;
    }
    if let Some(width) = args.page_width {
        builder = builder.with_page_width(width);
    }
    if let Some(margin) = args.left_margin {
        builder = builder.with_left_margin(margin);
    }
    if let Some(margin) = args.right_margin {
        builder = builder.with_right_margin(margin);
    }
    if args.lenient {
        builder = builder.with_lenient(true);
    }
    let converter = builder.build()?;

    match &args.output {
        Some(output) => converter.convert_file(&args.input, output),
        None => {
            let input = std::fs::File::open(&args.input).map_err(|e| {
                PipelineError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to read '{}': {}", args.input.display(), e),
                ))
            })?;
            converter.convert_stream(input, io::stdout().lock())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
