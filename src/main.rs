use clap::{Parser, Subcommand};
use rand::Rng;
use serde::Serialize;
use sk_iban::logging::init_logging;
use sk_iban::models::IbanRecord;
use sk_iban::{
    all_banks, generate_records, validate_csv, GeneratorConfig, Language, ValidationResult,
    Validator,
};
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sk-iban")]
#[command(about = "Slovak IBAN validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate IBANs given on the command line
    Check(CheckArgs),
    /// Validate the `iban` column of a CSV file
    Batch(BatchArgs),
    /// Generate Slovak IBANs for test data
    Generate(GenerateArgs),
    /// List known Slovak bank codes
    Banks(BanksArgs),
}

#[derive(Parser)]
struct CheckArgs {
    #[arg(required = true)]
    ibans: Vec<String>,
    #[arg(long, default_value = "sk")]
    lang: Language,
    #[arg(long, default_value_t = false)]
    all_errors: bool,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser)]
struct BatchArgs {
    #[arg(long, default_value = "data/ibans.csv")]
    input: PathBuf,
    #[arg(long, default_value = "data/output/iban_report.csv")]
    output: PathBuf,
    #[arg(long, default_value = "sk")]
    lang: Language,
    #[arg(long, default_value_t = false)]
    all_errors: bool,
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(long, default_value_t = 10)]
    count: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    bank: Option<String>,
    #[arg(long, default_value_t = 0.0)]
    invalid_ratio: f64,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct BanksArgs {
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: ValidationResult,
}

#[derive(Serialize)]
struct BankOutput {
    code: &'static str,
    name: &'static str,
    swift: &'static str,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    init_logging("sk-iban")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Batch(args) => run_batch(args),
        Command::Generate(args) => run_generate(args),
        Command::Banks(args) => run_banks(args),
    }
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let validator = Validator::new(args.lang);
    let outputs: Vec<CheckOutput> = args
        .ibans
        .iter()
        .map(|input| CheckOutput {
            input,
            result: validator.validate(input, args.all_errors),
        })
        .collect();
    let invalid = outputs.iter().filter(|output| !output.result.valid).count();

    if args.json {
        let json = serde_json::to_string_pretty(&outputs).map_err(|err| err.to_string())?;
        println!("{json}");
    } else {
        for output in &outputs {
            println!("{}", describe_result(output.input, &output.result));
        }
    }

    if invalid > 0 {
        return Err(format!("{} of {} IBAN(s) invalid", invalid, outputs.len()));
    }
    Ok(())
}

fn describe_result(input: &str, result: &ValidationResult) -> String {
    let shown = result.formatted.as_deref().unwrap_or(input);
    if result.valid {
        format!(
            "{}: valid ({}, {})",
            shown,
            result.bank_name.as_deref().unwrap_or("-"),
            result.bank_swift.as_deref().unwrap_or("-")
        )
    } else {
        format!("{}: invalid: {}", shown, result.errors.join("; "))
    }
}

fn run_batch(args: BatchArgs) -> Result<(), String> {
    if let Some(parent) = args.output.parent() {
        create_dir_all(parent).map_err(|err| err.to_string())?;
    }
    let start = Instant::now();
    let summary = validate_csv(&args.input, &args.output, args.lang, args.all_errors)?;
    let elapsed = start.elapsed();

    emit_info_line(&format!(
        "Batch: input={} output={} records={} valid={} invalid={}",
        args.input.display(),
        args.output.display(),
        summary.total_records,
        summary.valid_records,
        summary.invalid_records
    ));
    for (kind, count) in &summary.error_counts {
        emit_info_line(&format!("Batch errors: {} = {}", kind, count));
    }
    emit_info_line(&format!("Batch time: {} ms", elapsed.as_millis()));
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let seed = args.seed.unwrap_or_else(random_seed);
    let config = GeneratorConfig {
        count: args.count,
        bank_code: args.bank,
        invalid_ratio: args.invalid_ratio,
    };
    let records = generate_records(&config, seed)?;

    match args.output {
        Some(output) => {
            write_csv(&output, &records)?;
            emit_info_line(&format!(
                "Generated {} IBAN(s) (seed {}) to {}",
                records.len(),
                seed,
                output.display()
            ));
        }
        None => {
            for record in &records {
                println!("{}", record.iban);
            }
            log::info!("generated {} IBAN(s), seed {}", records.len(), seed);
        }
    }
    Ok(())
}

fn run_banks(args: BanksArgs) -> Result<(), String> {
    if args.json {
        let banks: Vec<BankOutput> = all_banks()
            .map(|(code, info)| BankOutput {
                code,
                name: info.name,
                swift: info.swift,
            })
            .collect();
        let json = serde_json::to_string_pretty(&banks).map_err(|err| err.to_string())?;
        println!("{json}");
    } else {
        for (code, info) in all_banks() {
            println!("{}  {}  {}", code, info.swift, info.name);
        }
    }
    Ok(())
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn write_csv(output: &Path, records: &[IbanRecord]) -> Result<(), String> {
    if let Some(parent) = output.parent() {
        create_dir_all(parent).map_err(|err| err.to_string())?;
    }
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;
    for record in records {
        writer.serialize(record).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        println!("{message}");
    }
}
