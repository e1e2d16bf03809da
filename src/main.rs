//! Interactive terminal front end.
//!
//! Each input line is a sequence of whitespace-separated keys. Digit keys,
//! `.` and `+ - * / ^` behave as on the keypad, `Enter` (or an empty line)
//! calculates and `Escape` clears. After every line the display is printed.

use anyhow::{Context, Result};
use clap::Parser;
use scicalc::config::CalculatorConfig;
use scicalc::core::AngleMode;
use scicalc::engine::{Calculator, Event, Snapshot};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scicalc", version, about = "Interactive scientific calculator")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in radian mode
    #[arg(long)]
    rad: bool,

    /// Number of history entries to keep
    #[arg(long)]
    history: Option<usize>,

    /// Print the full render state as JSON after each line
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = build_config(&args)?;
    info!(?config, "starting calculator");
    let mut calc = Calculator::with_config(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    render(&mut stdout, &calc.snapshot(), args.json)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        match line.trim() {
            "quit" | "exit" => break,
            "history" => {
                print_history(&mut stdout, &calc.snapshot())?;
                continue;
            }
            _ => {}
        }

        match Event::parse_line(&line) {
            Ok(events) => {
                for event in events {
                    let outcome = calc.dispatch(event);
                    debug!(?outcome, "handled event");
                }
            }
            Err(err) => eprintln!("{err}"),
        }
        render(&mut stdout, &calc.snapshot(), args.json)?;
    }

    Ok(())
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_config(args: &Args) -> Result<CalculatorConfig> {
    let mut config = match &args.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    if args.rad {
        config.angle_mode = AngleMode::Rad;
    }
    if let Some(capacity) = args.history {
        config.history_capacity = capacity;
    }
    config.validate()?;
    Ok(config)
}

fn render(out: &mut impl Write, snapshot: &Snapshot, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(snapshot)?)?;
        return Ok(());
    }

    let mut status = vec![snapshot.angle_mode.label().to_string()];
    if snapshot.shift {
        status.push("SHIFT".to_string());
    }
    if let Some(memory) = &snapshot.memory {
        status.push(memory.clone());
    }
    if let Some(op) = snapshot.pending_operator {
        status.push(op.symbol().to_string());
    }

    writeln!(out, "[{}] {}", status.join(" "), snapshot.display)?;
    out.flush()?;
    Ok(())
}

fn print_history(out: &mut impl Write, snapshot: &Snapshot) -> Result<()> {
    if snapshot.history.is_empty() {
        writeln!(out, "No calculations yet")?;
    }
    for line in &snapshot.history {
        writeln!(out, "{}  {} = {}", line.time, line.expression, line.result)?;
    }
    Ok(())
}
