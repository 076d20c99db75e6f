//! # Calcademy CLI Application
//!
//! Terminal front end for the calculation engine: unit and currency
//! conversion, the right-triangle solver, trig ratio tables, and a practice
//! drill. `--json` prints machine-readable output for scripts and LLM tools.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (or `-v`).

use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_core::conversion::{self, format_value, Category, Currency, ExchangeRates};
use calc_core::trig::{self, SolveRule, TrigValues, PRACTICE_PROBLEMS};
use calc_core::{load_exchange_rates, load_settings, CalcError, CalcResult, CalculationRequest, Settings};

/// Unit conversion and trigonometry tutor
#[derive(Parser, Debug)]
#[command(name = "calc_cli")]
#[command(about = "Calcademy - unit conversion and trigonometry tutor", long_about = None)]
struct Args {
    /// Settings file (JSON); defaults are used when omitted
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a value between units, e.g. `convert length miles kilometers 26.2`
    Convert {
        category: String,
        from: String,
        to: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// List categories, or the units of one category
    Units { category: Option<String> },

    /// Convert money using an exchange-rate snapshot file
    Currency {
        amount: f64,
        from: String,
        to: String,
        /// Exchange-rate JSON file ({"base": "USD", "rates": {...}})
        #[arg(short, long)]
        rates: PathBuf,
    },

    /// Solve a right triangle from two sides (or check all three)
    Solve {
        #[arg(short, long)]
        opposite: Option<f64>,
        #[arg(short, long)]
        adjacent: Option<f64>,
        #[arg(long)]
        hypotenuse: Option<f64>,
    },

    /// Show sin, cos, tan, csc, sec and cot of an angle in degrees
    Trig {
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },

    /// Evaluate a JSON calculation request from a file, or stdin when omitted
    Eval {
        file: Option<PathBuf>,
        /// Exchange-rate JSON file for currency requests
        #[arg(short, long)]
        rates: Option<PathBuf>,
    },

    /// Interactive SOH-CAH-TOA practice drill
    Practice,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if args.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CalcResult<()> {
    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    debug!(?settings, "settings resolved");

    match &args.command {
        Command::Convert {
            category,
            from,
            to,
            value,
        } => run_convert(&settings, args.json, category, from, to, *value),
        Command::Units { category } => run_units(args.json, category.as_deref()),
        Command::Currency {
            amount,
            from,
            to,
            rates,
        } => run_currency(&settings, args.json, *amount, from, to, rates),
        Command::Solve {
            opposite,
            adjacent,
            hypotenuse,
        } => run_solve(&settings, args.json, *opposite, *adjacent, *hypotenuse),
        Command::Trig { angle } => run_trig(&settings, args.json, *angle),
        Command::Eval { file, rates } => run_eval(&settings, file.as_deref(), rates.as_deref()),
        Command::Practice => run_practice(&settings),
    }
}

fn print_json<T: Serialize>(value: &T) -> CalcResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_convert(settings: &Settings, json: bool, category: &str, from: &str, to: &str, value: f64) -> CalcResult<()> {
    let category: Category = category.parse()?;
    let from = category.unit(from)?;
    let to = category.unit(to)?;

    let mut history = settings.new_history();
    history.convert_and_record(value, from, to, settings.display_precision)?;
    let record = history
        .latest()
        .ok_or_else(|| CalcError::invalid_input("history_capacity", "0", "History must keep at least one entry"))?;

    if json {
        return print_json(record);
    }
    println!("{}", record.summary());
    Ok(())
}

fn run_units(json: bool, category: Option<&str>) -> CalcResult<()> {
    let categories: Vec<Category> = match category {
        Some(id) => vec![id.parse()?],
        None => Category::ALL.to_vec(),
    };

    if json {
        #[derive(Serialize)]
        struct UnitRow {
            id: &'static str,
            name: &'static str,
            symbol: &'static str,
            scale: Option<f64>,
        }
        let listing: Vec<(Category, Vec<UnitRow>)> = categories
            .iter()
            .map(|c| {
                let rows = c
                    .units()
                    .iter()
                    .map(|u| UnitRow {
                        id: u.id(),
                        name: u.name(),
                        symbol: u.symbol(),
                        scale: u.scale(),
                    })
                    .collect();
                (*c, rows)
            })
            .collect();
        return print_json(&listing);
    }

    for category in categories {
        println!("{} ({})", category.name(), category.id());
        for unit in category.units() {
            let scale = unit
                .scale()
                .map(|s| format!("= {} {}", s, category.base_unit().symbol()))
                .unwrap_or_else(|| "(affine)".to_string());
            println!("  {:<14} {:<6} {}", unit.id(), unit.symbol(), scale);
        }
    }
    Ok(())
}

fn run_currency(settings: &Settings, json: bool, amount: f64, from: &str, to: &str, rates_path: &Path) -> CalcResult<()> {
    let from: Currency = from.parse()?;
    let to: Currency = to.parse()?;
    let rates: ExchangeRates = load_exchange_rates(rates_path)?;

    let result = conversion::convert_currency(amount, from, to, &rates)?;
    let formatted = format_value(result, settings.currency_precision);

    if json {
        return print_json(&serde_json::json!({
            "amount": amount,
            "from": from,
            "to": to,
            "result": result,
            "formatted": formatted,
        }));
    }

    println!(
        "{}{} {} = {}{} {}",
        from.symbol(),
        format_value(amount, settings.currency_precision),
        from.code(),
        to.symbol(),
        formatted,
        to.code()
    );
    if let Some(updated) = rates.last_updated() {
        println!("Rates as of {}", updated.format("%Y-%m-%d %H:%M UTC"));
    }
    Ok(())
}

fn run_solve(
    settings: &Settings,
    json: bool,
    opposite: Option<f64>,
    adjacent: Option<f64>,
    hypotenuse: Option<f64>,
) -> CalcResult<()> {
    let result = trig::solve(opposite, adjacent, hypotenuse)?;

    if json {
        return print_json(&result);
    }

    println!("═══════════════════════════════════════");
    println!("  RIGHT TRIANGLE: {}", result.rule);
    println!("═══════════════════════════════════════");
    for line in &result.trail {
        println!("  {}", line);
    }

    if let Some(values) = result.trig_values() {
        println!();
        print_trig_values(&values, settings.angle_precision + 2);
    }

    if result.rule == SolveRule::InsufficientInput {
        println!();
        println!("  SOH CAH TOA applies when you know 2 sides and want the angle.");
    }
    Ok(())
}

fn run_trig(settings: &Settings, json: bool, angle: f64) -> CalcResult<()> {
    let values = trig::all_trig_values(angle)?;
    if json {
        return print_json(&values.to_table());
    }
    print_trig_values(&values, settings.angle_precision + 2);
    Ok(())
}

fn print_trig_values(values: &TrigValues, precision: usize) {
    let show = |r: CalcResult<f64>| match r {
        Ok(v) => format_value(v, precision),
        Err(_) => "undefined".to_string(),
    };
    println!("  Ratios at θ = {}°", values.angle().0);
    println!("  sin(θ) = {:<12} csc(θ) = {}", format_value(values.sin(), precision), show(values.csc()));
    println!("  cos(θ) = {:<12} sec(θ) = {}", format_value(values.cos(), precision), show(values.sec()));
    println!("  tan(θ) = {:<12} cot(θ) = {}", show(values.tan()), show(values.cot()));
}

fn run_eval(settings: &Settings, file: Option<&Path>, rates_path: Option<&Path>) -> CalcResult<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
            buf
        }
    };

    let request: CalculationRequest = serde_json::from_str(&input)?;
    let rates = rates_path.map(load_exchange_rates).transpose()?;
    let outcome = request.evaluate(settings, rates.as_ref())?;
    print_json(&outcome)
}

fn prompt_f64(prompt: &str) -> Option<f64> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).ok()? == 0 {
        return None;
    }
    input.trim().parse().ok()
}

fn run_practice(settings: &Settings) -> CalcResult<()> {
    println!("SOH-CAH-TOA Practice");
    println!("====================");
    println!("Enter θ in degrees (within ±0.5°). Blank or invalid input ends the drill.");
    println!();

    let mut correct = 0;
    let mut attempted = 0;
    for (i, problem) in PRACTICE_PROBLEMS.iter().enumerate() {
        println!("Problem {}: {}", i + 1, problem.prompt());
        let Some(answer) = prompt_f64("θ = ") else {
            break;
        };
        attempted += 1;
        if problem.check(answer) {
            correct += 1;
        }
        println!("{}", problem.feedback(answer));

        let worked = problem.solve()?;
        if let Some(theta) = worked.angle_degrees {
            println!(
                "  {} rule, θ = {}°",
                worked.rule.mnemonic().unwrap_or_default(),
                format_value(theta, settings.angle_precision)
            );
        }
        println!();
    }

    println!("Score: {}/{}", correct, attempted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_temperature() {
        let args = Args::parse_from(["calc_cli", "convert", "temperature", "celsius", "kelvin", "-40"]);
        match args.command {
            Command::Convert { value, .. } => assert_eq!(value, -40.0),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_solve_flags() {
        let args = Args::parse_from(["calc_cli", "solve", "--opposite", "3", "--hypotenuse", "5", "--json"]);
        assert!(args.json);
        match args.command {
            Command::Solve {
                opposite,
                adjacent,
                hypotenuse,
            } => {
                assert_eq!(opposite, Some(3.0));
                assert_eq!(adjacent, None);
                assert_eq!(hypotenuse, Some(5.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
