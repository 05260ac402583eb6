//! Checkout extension CLI
//!
//! Entry point for the `checkout-ext` command-line tool.

use checkout_ext::config::{StaticBaseConfig, YamlManifest};
use checkout_ext::locales::inspect_locales;
use checkout_ext::{CheckoutUiExtension, Context, LocaleLimits};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkout-ext")]
#[command(about = "Build checkout UI extension configs", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged extension config as JSON
    Config {
        /// Project root (default: current directory)
        #[arg(long, short = 'r', default_value = ".")]
        root: PathBuf,

        /// JSON file holding the base config produced by the scaffolding step
        #[arg(long, short = 'b')]
        base: Option<PathBuf>,

        /// Locale limits file (default: <root>/.checkout-ext.toml)
        #[arg(long, short = 'l')]
        limits: Option<PathBuf>,
    },

    /// Validate and list the project's locale files
    Locales {
        /// Project root (default: current directory)
        #[arg(long, short = 'r', default_value = ".")]
        root: PathBuf,

        /// Locale limits file (default: <root>/.checkout-ext.toml)
        #[arg(long, short = 'l')]
        limits: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the GraphQL identifier for this extension type
    Identifier,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { root, base, limits } => {
            run_config(&root, base, limits);
        }
        Commands::Locales { root, limits, json } => {
            run_locales(&root, limits, json);
        }
        Commands::Identifier => {
            println!("{}", CheckoutUiExtension::new().graphql_identifier());
        }
    }
}

fn run_config(root: &Path, base_path: Option<PathBuf>, limits_path: Option<PathBuf>) {
    let limits = load_limits(root, limits_path);

    let base = match base_path {
        Some(path) => match StaticBaseConfig::from_file(&path) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Error loading base config: {}", e);
                process::exit(1);
            }
        },
        None => StaticBaseConfig::default(),
    };

    let context = Context::new(root);
    let extension = CheckoutUiExtension::new().with_limits(limits);

    let config = match extension.config(&context, &base, &YamlManifest::new()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn run_locales(root: &Path, limits_path: Option<PathBuf>, json_output: bool) {
    let limits = load_limits(root, limits_path);

    let report = match inspect_locales(root, &limits) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if json_output {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", report.to_human().trim_end());
    }
}

fn load_limits(root: &Path, limits_path: Option<PathBuf>) -> LocaleLimits {
    let result = match limits_path {
        Some(path) => LocaleLimits::from_file(&path),
        None => LocaleLimits::for_project(root),
    };

    match result {
        Ok(limits) => limits,
        Err(e) => {
            eprintln!("Error loading locale limits: {}", e);
            process::exit(1);
        }
    }
}
