mod config;

use basexx::{Base, BaseRegistry, DynBase, convert_bytes};
use clap::Parser;
use std::io::{self, BufRead, Write};

use config::{Direction, create_base, preview};

#[derive(Parser)]
#[command(name = "basexx")]
#[command(version)]
#[command(about = "Convert numbers between bases 2 through 256", long_about = None)]
struct Cli {
    /// Base of the input (e.g. a10, hex, 30, 50, 62, 94, bin)
    #[arg(short = 'f', long, value_name = "NAME")]
    from: Option<String>,

    /// Base of the output
    #[arg(short = 't', long, value_name = "NAME")]
    to: Option<String>,

    /// Values to convert (if none are given, reads one per line from stdin)
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// List available bases
    #[arg(short, long)]
    list: bool,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Load bases configuration with user overrides
    let config = BaseRegistry::load_with_overrides()?;

    if cli.list {
        return list_bases(&config);
    }

    let from = create_base(&config, cli.from.as_deref(), Direction::From)?;
    let to = create_base(&config, cli.to.as_deref(), Direction::To)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.inputs.is_empty() {
        for line in io::stdin().lock().split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            write_converted(&mut out, &line, &from, &to)?;
        }
    } else {
        for input in &cli.inputs {
            write_converted(&mut out, input.as_bytes(), &from, &to)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Convert one input and write it followed by a newline
fn write_converted(
    out: &mut impl Write,
    input: &[u8],
    from: &DynBase,
    to: &DynBase,
) -> Result<(), Box<dyn std::error::Error>> {
    let converted = convert_bytes(input, from, to).map_err(|e| {
        format!(
            "error: cannot convert '{}': {}",
            String::from_utf8_lossy(input),
            e
        )
    })?;

    out.write_all(&converted)?;
    out.write_all(b"\n")?;
    Ok(())
}

fn list_bases(config: &BaseRegistry) -> Result<(), Box<dyn std::error::Error>> {
    println!("Available bases:\n");

    for name in config.names() {
        let base = config.base(&name)?;
        let radix = base.radix();
        let digits = match preview(&base, 20) {
            Some(digits) if radix > 20 => format!("{}...", digits),
            Some(digits) => digits,
            None => String::from("(raw bytes)"),
        };
        let description = config
            .get_base(&name)
            .and_then(|c| c.description.as_deref())
            .unwrap_or("");
        println!("  {:<5} base-{:<3}  {:<24} {}", name, radix, digits, description);
    }
    Ok(())
}
