//! CLI definition and the interactive command loop.

use std::fmt;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;

use crate::adapters::builtin_catalog::BuiltinCatalog;
use crate::adapters::csv_catalog_adapter::CsvCatalogAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::error::BevexError;
use crate::domain::ledger::Ledger;
use crate::domain::metrics;
use crate::domain::registry::Registry;
use crate::domain::trade::{Side, Trade};
use crate::ports::catalog_port::CatalogPort;
use crate::ports::config_port::ConfigPort;

const DEFAULT_PRECISION: i64 = 2;

const HELP: &str = "Available commands:
  help                              show this help
  dividend_yield SYMBOL PRICE       dividend yield for a stock at a price
  p_to_e_ratio SYMBOL PRICE         price/earnings ratio (not yet implemented)
  buy SYMBOL QUANTITY PRICE         record a buy trade
  sell SYMBOL QUANTITY PRICE        record a sell trade
  volume_weighted_price SYMBOL      volume-weighted price over the last 5 minutes
  gbce                              all-share index over all traded stocks
  show_stocks                       list the security catalog
  show_trades                       list all recorded trades
  exit | quit                       leave the simulator";

#[derive(Parser, Debug)]
#[command(name = "bevex", about = "Global Beverage Corporation Exchange simulator")]
pub struct Cli {
    /// INI configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CSV security catalog (overrides the config file)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// One parsed line of user input. Argument marshaling happens in
/// [`parse_command`]; each variant has exactly one handler in [`execute`].
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    DividendYield { symbol: String, price: f64 },
    PeRatio { symbol: String, price: f64 },
    Trade { side: Side, symbol: String, quantity: i64, price: f64 },
    VolumeWeightedPrice { symbol: String },
    AllShareIndex,
    ShowStocks,
    ShowTrades,
    Quit,
}

pub fn run(cli: Cli) -> ExitCode {
    let config = match &cli.config {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match FileConfigAdapter::from_file(path) {
                Ok(adapter) => Some(adapter),
                Err(e) => {
                    eprintln!("error: {e}");
                    return (&e).into();
                }
            }
        }
        None => None,
    };

    let precision = config
        .as_ref()
        .map(|c| c.get_int("display", "precision", DEFAULT_PRECISION))
        .unwrap_or(DEFAULT_PRECISION)
        .max(0) as usize;

    let registry = match build_registry(cli.catalog.as_deref(), config.as_ref()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let mut ledger = Ledger::new();
    print_banner(&registry);

    let stdin = io::stdin();
    loop {
        println!("What would you like to do?");
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_command(line) {
            Ok(Command::Quit) => {
                println!("Exiting ...");
                break;
            }
            Ok(command) => match execute(command, &registry, &mut ledger, precision) {
                Ok(output) => println!("{output}"),
                Err(e) => println!("{e}"),
            },
            Err(e) => println!("{e}"),
        }
    }
    ExitCode::SUCCESS
}

fn build_registry(
    catalog_flag: Option<&Path>,
    config: Option<&FileConfigAdapter>,
) -> Result<Registry, BevexError> {
    let catalog = match catalog_flag {
        Some(path) => {
            eprintln!("Loading catalog from {}", path.display());
            CsvCatalogAdapter::new(path.to_path_buf()).load_catalog()?
        }
        None => match config.and_then(|c| c.get_string("catalog", "path")) {
            Some(path) => {
                eprintln!("Loading catalog from {path}");
                CsvCatalogAdapter::new(PathBuf::from(path)).load_catalog()?
            }
            None => BuiltinCatalog.load_catalog()?,
        },
    };
    Registry::new(catalog)
}

fn print_banner(registry: &Registry) {
    println!("Global Beverage Corporation Exchange simulator");
    println!("{}", "#".repeat(46));
    println!("Available stocks are:");
    println!("{}", render_list(registry.iter()));
    println!("{}", "#".repeat(46));
    println!("{HELP}");
    println!("{}", "#".repeat(46));
}

fn parse_command(line: &str) -> Result<Command, BevexError> {
    let mut parts = line.split_whitespace();
    let action = parts
        .next()
        .ok_or_else(|| BevexError::Validation {
            reason: "empty command".into(),
        })?
        .to_lowercase();
    let args: Vec<&str> = parts.collect();

    match action.as_str() {
        "help" => {
            expect_args(&args, 0, "help")?;
            Ok(Command::Help)
        }
        "dividend_yield" => {
            expect_args(&args, 2, "dividend_yield SYMBOL PRICE")?;
            Ok(Command::DividendYield {
                symbol: args[0].to_string(),
                price: parse_f64(args[1], "price")?,
            })
        }
        "p_to_e_ratio" => {
            expect_args(&args, 2, "p_to_e_ratio SYMBOL PRICE")?;
            Ok(Command::PeRatio {
                symbol: args[0].to_string(),
                price: parse_f64(args[1], "price")?,
            })
        }
        "buy" | "sell" => {
            let side = Side::parse(&action)?;
            expect_args(&args, 3, "buy|sell SYMBOL QUANTITY PRICE")?;
            Ok(Command::Trade {
                side,
                symbol: args[0].to_string(),
                quantity: parse_i64(args[1], "quantity")?,
                price: parse_f64(args[2], "price")?,
            })
        }
        "volume_weighted_price" => {
            expect_args(&args, 1, "volume_weighted_price SYMBOL")?;
            Ok(Command::VolumeWeightedPrice {
                symbol: args[0].to_string(),
            })
        }
        "gbce" => {
            expect_args(&args, 0, "gbce")?;
            Ok(Command::AllShareIndex)
        }
        "show_stocks" => {
            expect_args(&args, 0, "show_stocks")?;
            Ok(Command::ShowStocks)
        }
        "show_trades" => {
            expect_args(&args, 0, "show_trades")?;
            Ok(Command::ShowTrades)
        }
        "exit" | "quit" => Ok(Command::Quit),
        other => Err(BevexError::Validation {
            reason: format!("unknown command '{other}', type 'help' for the list"),
        }),
    }
}

fn execute(
    command: Command,
    registry: &Registry,
    ledger: &mut Ledger,
    precision: usize,
) -> Result<String, BevexError> {
    match command {
        Command::Help => Ok(HELP.to_string()),
        Command::DividendYield { symbol, price } => {
            let security = registry.lookup(&symbol)?;
            let value = metrics::dividend_yield(security, price)?;
            Ok(format!("Result: {value:.precision$}"))
        }
        Command::PeRatio { symbol, price } => {
            let security = registry.lookup(&symbol)?;
            let value = metrics::pe_ratio(security, price);
            Ok(format!(
                "Result: {value:.precision$} (price/earnings ratio is not yet implemented)"
            ))
        }
        Command::Trade {
            side,
            symbol,
            quantity,
            price,
        } => {
            let security = registry.lookup(&symbol)?;
            let trade = Trade::execute(security, side, quantity, price)?;
            let rendered = trade.to_string();
            ledger.append(trade);
            Ok(format!("Result: {rendered}"))
        }
        Command::VolumeWeightedPrice { symbol } => {
            let security = registry.lookup(&symbol)?;
            let value = metrics::volume_weighted_price(security, ledger.all(), Utc::now())?;
            Ok(format!("Result: {value:.precision$}"))
        }
        Command::AllShareIndex => {
            let value = metrics::all_share_index(registry, ledger.all(), Utc::now())?;
            Ok(format!("Result: {value:.precision$}"))
        }
        Command::ShowStocks => Ok(render_list(registry.iter())),
        Command::ShowTrades => Ok(render_list(ledger.all().iter())),
        Command::Quit => Ok("Exiting ...".to_string()),
    }
}

fn render_list<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    let lines: Vec<String> = items.map(|item| item.to_string()).collect();
    if lines.is_empty() {
        "No items to show!".to_string()
    } else {
        lines.join("\n")
    }
}

fn expect_args(args: &[&str], want: usize, usage: &str) -> Result<(), BevexError> {
    if args.len() != want {
        return Err(BevexError::Validation {
            reason: format!("usage: {usage}"),
        });
    }
    Ok(())
}

fn parse_f64(value: &str, name: &str) -> Result<f64, BevexError> {
    value.parse().map_err(|_| BevexError::Validation {
        reason: format!("invalid {name} '{value}'"),
    })
}

fn parse_i64(value: &str, name: &str) -> Result<i64, BevexError> {
    value.parse().map_err(|_| BevexError::Validation {
        reason: format!("invalid {name} '{value}'"),
    })
}
