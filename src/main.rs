//! pricing-engine CLI
//!
//! Run fee quotes and analyses from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Quote a scenario from a JSON file
//! pricing-engine quote --input scenario.json
//!
//! # Output as JSON
//! pricing-engine quote --input scenario.json --format json
//!
//! # Quote plus every enabled analysis
//! pricing-engine analyze --input scenario.json
//!
//! # Write a default scenario file to edit
//! pricing-engine template --output scenario.json
//!
//! # List registered providers and their rate tables
//! pricing-engine providers
//! ```

use pricing_engine::analysis::run_analyses;
use pricing_engine::core::normalize::normalize_state;
use pricing_engine::core::region::{pricing_tiers, Region};
use pricing_engine::core::state::{CalcState, ProviderId};
use pricing_engine::engine;
use pricing_engine::providers::all_models;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"pricing-engine — open payment pricing and fee quoting engine

USAGE:
    pricing-engine <COMMAND> [OPTIONS]

COMMANDS:
    quote       Compute one quote from a scenario file
    analyze     Compute the quote plus every enabled analysis
    providers   List registered providers, products and rate tables
    template    Write a default scenario file
    help        Show this message

OPTIONS (quote, analyze):
    --input <FILE>        Path to a JSON scenario file
    --provider <ID>       Override the scenario's provider
    --region <REGION>     Override the scenario's region (uk, eu, us)
    --format <FORMAT>     Output format: text (default) or json

OPTIONS (template):
    --output <FILE>       Write to file instead of stdout

EXAMPLES:
    pricing-engine quote --input scenario.json
    pricing-engine quote --input scenario.json --provider paypal --format json
    pricing-engine analyze --input scenario.json
    pricing-engine template --output scenario.json"#
    );
}

struct ScenarioOptions {
    input_path: Option<String>,
    provider: Option<ProviderId>,
    region: Option<Region>,
    format: String,
}

fn parse_scenario_options(args: &[String]) -> ScenarioOptions {
    let mut options = ScenarioOptions {
        input_path: None,
        provider: None,
        region: None,
        format: "text".to_string(),
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                options.input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--provider" => {
                i += 1;
                let raw = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--provider requires a provider id");
                    process::exit(1);
                });
                options.provider = Some(raw.parse().unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    process::exit(1);
                }));
            }
            "--region" => {
                i += 1;
                let raw = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--region requires a region id");
                    process::exit(1);
                });
                options.region = Some(raw.parse().unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                options.format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }
    options
}

fn load_scenario(options: &ScenarioOptions) -> CalcState {
    let path = options.input_path.clone().unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let content = fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let mut state: CalcState = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing scenario JSON: {}", e);
        eprintln!("Expected format (all fields optional):");
        eprintln!(
            r#"{{
  "provider": "stripe",
  "product": "standard",
  "region": "uk",
  "mode": "forward",
  "amount": "25.00",
  "vat_percent": "20"
}}"#
        );
        process::exit(1);
    });

    if let Some(provider) = options.provider {
        state.provider = provider;
    }
    if let Some(region) = options.region {
        state.region = region;
    }
    normalize_state(&state)
}

fn cmd_quote(args: &[String]) {
    let options = parse_scenario_options(args);
    let state = load_scenario(&options);
    let result = engine::quote(&state);

    if options.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else {
        println!("{}", result);
    }

    if !result.denom_ok {
        process::exit(2);
    }
}

fn cmd_analyze(args: &[String]) {
    let options = parse_scenario_options(args);
    let state = load_scenario(&options);
    let report = run_analyses(&state);

    if options.format == "json" {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        println!("{}", report);
    }

    if !report.quote.denom_ok {
        process::exit(2);
    }
}

fn cmd_providers() {
    for model in all_models() {
        println!("{} ({})", model.label(), model.id());
        for product in model.products() {
            println!("  product: {:<16} {}", product.id, product.label);
            for region in [Region::Uk, Region::Eu, Region::Us] {
                let rate = model.default_rate(region, product.id);
                println!("    {}: {}", region, rate);
            }
        }
        println!();
    }
    println!("Built-in card provider tiers by region:");
    for region in [Region::Uk, Region::Eu, Region::Us] {
        println!("  {}:", region);
        for tier in pricing_tiers(region) {
            println!("    {:<14} {:<24} {}", tier.id, tier.label, tier.rate);
        }
    }
}

fn cmd_template(args: &[String]) {
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let json = serde_json::to_string_pretty(&CalcState::default()).unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Wrote default scenario → {}", path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "quote" => cmd_quote(rest),
        "analyze" => cmd_analyze(rest),
        "providers" => cmd_providers(),
        "template" => cmd_template(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
