use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use formgen_core::analyzer::{Lexicon, RuleTagger};
use formgen_core::{generate_form, Error, ProductDescriptor, StubEnricher};

/// Formgen: product form generator
///
/// Derives a stable type id from a product type and prints the suggested
/// form fields for it as JSON.
#[derive(Parser)]
#[command(name = "formgen", version, about, long_about = None)]
struct Cli {
    /// Product category (e.g. "Electronics")
    #[arg(long)]
    category: String,

    /// Free-text product type (e.g. "Wireless Bluetooth Headphones")
    #[arg(long = "productType", visible_alias = "product-type")]
    product_type: String,

    /// Brand name
    #[arg(long)]
    brand: String,

    /// Product name
    #[arg(long)]
    name: String,

    /// Product description
    #[arg(long)]
    description: String,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// JSON lexicon merged into the built-in English lexicon
    #[arg(long, env = "FORMGEN_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Log filter for stderr (e.g. "debug", "formgen_core=trace")
    #[arg(long, env = "FORMGEN_LOG", default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    // The model must load before any product data is looked at.
    let tagger = match load_tagger(cli.lexicon.as_deref()) {
        Ok(tagger) => tagger,
        Err(e) => {
            report(&e);
            process::exit(exit_code(&e));
        }
    };

    let product = ProductDescriptor {
        category: cli.category,
        product_type: cli.product_type,
        brand: cli.brand,
        name: cli.name,
        description: cli.description,
    };

    let result = generate_form(&tagger, &StubEnricher, &product).and_then(|schema| {
        if cli.pretty {
            schema.to_json_pretty()
        } else {
            schema.to_json()
        }
    });

    let code = match result {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            report(&e);
            exit_code(&e)
        }
    };

    process::exit(code);
}

fn init_logging(directives: &str) {
    let (filter, rejected) = match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("warn"), Some(e)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = rejected {
        tracing::warn!(filter = directives, error = %e, "invalid log filter, using warn");
    }
}

fn load_tagger(path: Option<&Path>) -> formgen_core::Result<RuleTagger> {
    let mut lexicon = Lexicon::english();
    if let Some(path) = path {
        lexicon.extend(Lexicon::load(path)?);
    }
    tracing::debug!(entries = lexicon.len(), "lexicon ready");
    Ok(RuleTagger::new(lexicon))
}

fn report(e: &Error) {
    eprintln!("{} {}", "error:".red().bold(), e);
}

/// 1 = bad product input, 2 = anything that is not the caller's data
fn exit_code(e: &Error) -> i32 {
    match e {
        Error::InvalidInput(_) => 1,
        Error::ModelUnavailable(_) | Error::Serialization(_) => 2,
    }
}
