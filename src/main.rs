use clap::{Parser, ValueEnum};
use discount_engine::application::engine::{CapPolicy, DiscountEngine};
use discount_engine::interfaces::json::request_reader::RequestReader;
use discount_engine::interfaces::json::result_writer::ResultWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input pricing request JSON file. Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Which cap to enforce when a request contains several cap rules.
    #[arg(long, value_enum, default_value_t = CapPolicyArg::LastWins)]
    cap_policy: CapPolicyArg,

    /// Print the result on a single line instead of indented JSON.
    #[arg(long)]
    compact: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CapPolicyArg {
    LastWins,
    Strictest,
}

impl From<CapPolicyArg> for CapPolicy {
    fn from(arg: CapPolicyArg) -> Self {
        match arg {
            CapPolicyArg::LastWins => CapPolicy::LastWins,
            CapPolicyArg::Strictest => CapPolicy::Strictest,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let request = match cli.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(&path).into_diagnostic()?;
            RequestReader::new(file).read().into_diagnostic()?
        }
        _ => RequestReader::new(io::stdin().lock())
            .read()
            .into_diagnostic()?,
    };
    debug!(
        original_price = %request.original_price,
        rules = request.discounts.len(),
        "pricing request loaded"
    );

    let engine = DiscountEngine::with_cap_policy(cli.cap_policy.into());
    let result = engine.apply(&request);

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock()).pretty(!cli.compact);
    writer.write(&result).into_diagnostic()?;

    Ok(())
}
