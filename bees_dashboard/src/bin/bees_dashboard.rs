use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use bees_dashboard::{
    config::{DashboardConfig, MAX_HISTORY_YEARS, MIN_HISTORY_YEARS, load_config_path},
    pipeline::run_dashboard,
    sink::{JsonDirSink, PanelSink},
};
use weekly_ingestor::providers::yahoo_chart::YahooChartProvider;

#[derive(Parser)]
#[command(version, about = "Weekly ETF dashboard core")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,

    /// Path to the dashboard TOML config; built-in defaults apply when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Sets the level of tracing
    #[arg(long, default_value = "info")]
    trace: TraceLevel,
}

#[derive(Subcommand)]
enum Cmd {
    /// Fetch every watchlist symbol, derive its trend, and write panels.
    Run {
        /// Directory the panel JSON files are written into.
        #[arg(long, value_name = "DIR", default_value = "panels")]
        out: String,

        /// Override the configured years of trailing history.
        #[arg(long)]
        years: Option<u32>,
    },
    /// Print the effective label -> symbol mapping and exit.
    Watchlist,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum TraceLevel {
    Debug,
    Info,
    Warn,
    Error,
}

fn init_tracing(level: TraceLevel) {
    let level = match level {
        TraceLevel::Debug => Level::DEBUG,
        TraceLevel::Info => Level::INFO,
        TraceLevel::Warn => Level::WARN,
        TraceLevel::Error => Level::ERROR,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Set subscriber");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let mut config = match &cli.config {
        Some(path) => load_config_path(path)?,
        None => DashboardConfig::default(),
    };

    match cli.cmd {
        Cmd::Watchlist => {
            for (label, symbol) in &config.watchlist.instruments {
                println!("{label} = {symbol}");
            }
        }
        Cmd::Run { out, years } => {
            if let Some(years) = years {
                config.history_years = years.clamp(MIN_HISTORY_YEARS, MAX_HISTORY_YEARS);
            }

            let provider = YahooChartProvider::new()?;
            let run = run_dashboard(&provider, &config).await;

            let sink = JsonDirSink::new(&out);
            let paths = sink.write(&run.succeeded()).await?;
            for path in &paths {
                println!("{}", path.display());
            }

            for (label, error) in run.failed() {
                eprintln!("ERROR: {} - {}", label, error);
            }
            eprintln!("SUMMARY: {}", run.summary());
        }
    }

    Ok(())
}
