use clap::Parser;
use cli::person;
use json::{AdapterKind, Stringifier, Value};
use std::error::Error;
use tokio::time::{timeout, Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Stringify a sample record whose fields resolve asynchronously.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Indentation: a number of spaces or a literal indent string.
    #[arg(short, long, default_value = "")]
    space: String,

    /// concurrent, sequential or buffered:<limit>
    #[arg(short, long, default_value = "concurrent")]
    adapter: AdapterKind,

    /// Upper bound of the random delay of each lookup.
    #[arg(long, default_value = "250")]
    max_delay_ms: u64,

    /// Comma separated list of member names to keep.
    #[arg(short, long)]
    keys: Option<String>,

    /// Make one of the lookups fail.
    #[arg(short, long, default_value = "false")]
    reject: bool,

    /// Give up after this many milliseconds.
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = Args::parse();
    let space = match options.space.parse::<usize>() {
        Ok(count) => Value::from(count),
        Err(_) => Value::from(options.space),
    };
    let replacer = match options.keys {
        Some(keys) => Value::from(keys.split(',').map(str::trim).collect::<Vec<_>>()),
        None => Value::Undefined,
    };

    tracing::info!(adapter = %options.adapter, max_delay_ms = options.max_delay_ms, "stringifying sample record");
    let stringifier = Stringifier::new(options.adapter);
    let pending = stringifier.stringify(person(options.max_delay_ms, options.reject), replacer, space)?;

    match timeout(Duration::from_millis(options.timeout_ms), pending).await {
        Ok(Ok(Some(text))) => println!("{}", text),
        Ok(Ok(None)) => println!("undefined"),
        Ok(Err(err)) => {
            tracing::error!(error = %err, "stringify failed");
            return Err(err.into());
        }
        Err(_) => {
            tracing::error!(timeout_ms = options.timeout_ms, "stringify timed out");
            return Err("stringify timed out".into());
        }
    }
    Ok(())
}
