use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt::MakeWriter, prelude::*};
use url::Url;

mod addresses;
mod backend;
mod client;
mod config;
mod custody;
mod dispatch;
mod error;
mod fabricators;
mod market;
mod menu;
mod network;
mod output;
mod overseer;
mod parse;
mod queries;
mod signer;
mod tx;
mod types;

use addresses::AddressSource;
use backend::{Backend, Terra};
use types::Coins;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        short,
        long,
        global = true,
        help = "config file path [default: ~/.anchorcli.toml]",
        env = "ANCHORCLI_CONFIG"
    )]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "chain id, e.g. columbus-4", env = "ANCHORCLI_CHAIN_ID")]
    chain_id: Option<String>,

    #[arg(long, global = true, help = "LCD endpoint", env = "ANCHORCLI_LCD")]
    lcd: Option<Url>,

    #[arg(long, global = true, help = "name of the signing key", env = "ANCHORCLI_FROM")]
    from: Option<String>,

    #[arg(long, global = true, help = "tendermint node passed to terracli")]
    node: Option<String>,

    #[arg(long, global = true, help = "terracli binary", env = "ANCHORCLI_TERRACLI")]
    terracli: Option<String>,

    #[arg(long, global = true, help = "where contract addresses come from")]
    address_source: Option<AddressSource>,

    #[arg(long, global = true, help = "JSON file of contract addresses per network")]
    address_file: Option<PathBuf>,

    #[arg(long, global = true, value_parser = parse::int::<u64>, help = "gas limit [default: 1000000]")]
    gas: Option<u64>,

    #[arg(long, global = true, value_parser = parse::coins, help = "fee amount [default: 150000uusd]")]
    fees: Option<Coins>,

    #[arg(long, global = true, help = "transaction memo")]
    memo: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        help = "output format for command response",
        env = "ANCHORCLI_OUTPUT_FORMAT"
    )]
    output_format: Option<output::OutputFormat>,

    #[arg(
        long,
        help = "Control the verbosity of anchorcli logging",
        env = "ANCHORCLI_LOG",
        global = true
    )]
    log_level: Option<LogLevel>,
}

impl Cli {
    fn overrides(&self) -> config::Config {
        config::Config {
            chain_id: self.chain_id.clone(),
            lcd: self.lcd.clone(),
            node: self.node.clone(),
            from: self.from.clone(),
            terracli: self.terracli.clone(),
            address_source: self.address_source,
            address_file: self.address_file.clone(),
            gas: self.gas,
            fees: self.fees.clone(),
            output_format: self.output_format,
        }
    }

    /// Installs the global subscriber. Runs before anything else logs.
    fn with_tracing(&self) {
        let level = self.log_level.clone().unwrap_or(LogLevel::Info);
        level.subscriber(std::io::stderr).init();
    }
}

#[derive(Subcommand)]
enum Commands {
    /// bAsset custody: deposit and withdraw collateral
    Custody(custody::Args),

    /// Money market: deposit, redeem, borrow and repay stablecoins
    Market(market::Args),

    /// Overseer: lock and unlock collateral
    Overseer(overseer::Args),
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<&LogLevel> for LevelFilter {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl LogLevel {
    /// Formats `anchorcli` events at this level or above into `writer`.
    fn subscriber<W>(&self, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let level_filter: LevelFilter = self.into();
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .with(
                tracing_subscriber::filter::Targets::default()
                    .with_target("anchorcli", level_filter),
            )
    }
}

pub struct Context<B = Terra> {
    pub invocation: menu::Invocation,
    pub backend: B,
    pub output_format: output::OutputFormat,
}

impl Context {
    async fn from_cli(cli: &Cli) -> miette::Result<Self> {
        let file = config::Config::open(cli.config.clone()).await?;
        let settings = file.overlay(cli.overrides());

        let invocation = menu::Invocation {
            chain_id: settings.chain_id,
            address_source: settings.address_source.unwrap_or_default(),
            address_file: settings.address_file,
            from: settings.from,
            fee: tx::Fee {
                gas: settings.gas.unwrap_or(tx::DEFAULT_GAS),
                amount: settings
                    .fees
                    .unwrap_or_else(|| tx::Fee::default().amount),
            },
            memo: cli.memo.clone().unwrap_or_default(),
        };
        let backend = Terra {
            lcd: settings.lcd,
            terracli: settings
                .terracli
                .unwrap_or_else(|| signer::DEFAULT_TERRACLI.to_string()),
            node: settings.node,
        };
        let output_format = settings.output_format.unwrap_or_default();

        Ok(Context {
            invocation,
            backend,
            output_format,
        })
    }
}

async fn execute<B: Backend>(command: Commands, ctx: &Context<B>) -> miette::Result<()> {
    match command {
        Commands::Custody(args) => custody::run(args, ctx).await,
        Commands::Market(args) => market::run(args, ctx).await,
        Commands::Overseer(args) => overseer::run(args, ctx).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    cli.with_tracing();

    let ctx = Context::from_cli(&cli).await?;
    execute(cli.command, &ctx).await
}
