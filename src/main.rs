mod logging;

use std::io::BufRead;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use iban_validator::{CountryFormat, IbanDetails, ValidationResult};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "iban")]
#[command(about = "Validate and format International Bank Account Numbers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate IBANs given as arguments, or one per line on stdin.
    Validate(ValidateArgs),
    /// Print the input grouped in blocks of four.
    Format { input: String },
    /// Print the input without spaces, upper-cased.
    Normalize { input: String },
    /// List supported countries and their IBAN lengths.
    Countries {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Build a complete IBAN from a country code and BBAN.
    CheckDigits { country: String, bban: String },
}

#[derive(Parser)]
struct ValidateArgs {
    ibans: Vec<String>,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a IbanDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Serialize)]
struct ErrorReport {
    kind: iban_validator::ErrorKind,
    message: String,
}

#[derive(Serialize)]
struct CountryRow<'a> {
    code: &'a str,
    name: &'a str,
    length: usize,
    flag: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, String> {
    logging::init_logging("iban")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Format { input } => {
            println!("{}", iban_validator::format(&input));
            Ok(ExitCode::SUCCESS)
        }
        Command::Normalize { input } => {
            println!("{}", iban_validator::normalize(&input));
            Ok(ExitCode::SUCCESS)
        }
        Command::Countries { json } => run_countries(json),
        Command::CheckDigits { country, bban } => run_check_digits(&country, &bban),
    }
}

fn run_validate(args: ValidateArgs) -> Result<ExitCode, String> {
    let inputs = if args.ibans.is_empty() {
        read_stdin_lines()?
    } else {
        args.ibans
    };

    let mut invalid = 0usize;
    for input in &inputs {
        let result = iban_validator::validate(input);
        if result.is_err() {
            invalid += 1;
        }
        let line = if args.json {
            render_json(input, &result)?
        } else {
            render_text(input, &result)
        };
        println!("{line}");
    }

    log::info!("validated {} inputs, {} invalid", inputs.len(), invalid);
    Ok(if invalid == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_countries(json: bool) -> Result<ExitCode, String> {
    let countries = iban_validator::supported_countries();
    if json {
        let rows: Vec<CountryRow<'_>> = countries.iter().map(country_row).collect();
        let out = serde_json::to_string_pretty(&rows).map_err(|err| err.to_string())?;
        println!("{out}");
    } else {
        for country in countries {
            println!(
                "{} {}  {:>2}  {}",
                country.flag(),
                country.code,
                country.length,
                country.name
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_check_digits(country: &str, bban: &str) -> Result<ExitCode, String> {
    let digits =
        iban_validator::compute_check_digits(country, bban).map_err(|err| err.to_string())?;
    let iban = format!(
        "{}{}{}",
        iban_validator::normalize(country),
        digits,
        iban_validator::normalize(bban)
    );
    if let Err(err) = iban_validator::validate_structure(&iban) {
        log::warn!("generated IBAN fails structural checks: {err}");
    }
    println!("{}", iban_validator::format(&iban));
    Ok(ExitCode::SUCCESS)
}

fn read_stdin_lines() -> Result<Vec<String>, String> {
    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.map_err(|err| err.to_string())?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn country_row(country: &CountryFormat) -> CountryRow<'_> {
    CountryRow {
        code: country.code,
        name: country.name,
        length: country.length,
        flag: country.flag(),
    }
}

fn render_text(input: &str, result: &ValidationResult) -> String {
    match result {
        Ok(details) => format!(
            "{}  valid  {} {} ({}, check digits {}, {} characters)",
            details.formatted_iban,
            details.country_flag,
            details.country_name,
            details.country_code,
            details.check_digits,
            details.length
        ),
        Err(err) => format!("{}  invalid  {}: {}", input.trim(), err.kind(), err),
    }
}

fn render_json(input: &str, result: &ValidationResult) -> Result<String, String> {
    let report = Report {
        input,
        valid: result.is_ok(),
        details: result.as_ref().ok(),
        error: result.as_ref().err().map(|err| ErrorReport {
            kind: err.kind(),
            message: err.message(),
        }),
    };
    serde_json::to_string(&report).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_for_valid_iban() {
        let input = "de89370400440532013000";
        let line = render_text(input, &iban_validator::validate(input));
        assert!(line.starts_with("DE89 3704 0044 0532 0130 00  valid"));
        assert!(line.contains("Germany (DE, check digits 89, 22 characters)"));
    }

    #[test]
    fn text_for_invalid_iban() {
        let input = " DE8937040044053201300 ";
        let line = render_text(input, &iban_validator::validate(input));
        assert_eq!(
            line,
            "DE8937040044053201300  invalid  INVALID_LENGTH: invalid length: expected 22 characters, got 21"
        );
    }

    #[test]
    fn json_for_invalid_iban() {
        let input = "ZZ02TEST0000000000";
        let line = render_json(input, &iban_validator::validate(input)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["error"]["kind"], "INVALID_COUNTRY");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn json_for_valid_iban() {
        let input = "DE89370400440532013000";
        let line = render_json(input, &iban_validator::validate(input)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["details"]["countryCode"], "DE");
        assert_eq!(value["details"]["formattedIban"], "DE89 3704 0044 0532 0130 00");
    }
}
