use anyhow::{bail, Context, Result};
use rcatalog::{CatalogWriter, VirtualCatalogProvider};
use std::env;
use tracing_subscriber::EnvFilter;

struct Config {
    count: usize,
    seed: u64,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: 1000,
            seed: 42,
            output_file: None,
            use_brotli: false,
        }
    }
}

impl Config {
    fn output_path(&self) -> String {
        self.output_file.clone().unwrap_or_else(|| {
            if self.use_brotli {
                "products.json.br".to_string()
            } else {
                "products.json".to_string()
            }
        })
    }
}

enum Command {
    Generate(Config),
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-count" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("-count requires an argument");
                };
                config.count = value
                    .parse()
                    .with_context(|| format!("Invalid product count: {}", value))?;
                if config.count == 0 {
                    bail!("-count must be at least 1");
                }
            }
            "-seed" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("-seed requires an argument");
                };
                config.seed = value
                    .parse()
                    .with_context(|| format!("Invalid seed: {}", value))?;
            }
            "-out" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("-out requires a file path argument");
                };
                config.output_file = Some(value.clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => return Ok(Command::Help),
            other => {
                tracing::warn!(argument = other, "unknown argument ignored");
            }
        }
        i += 1;
    }

    Ok(Command::Generate(config))
}

fn print_help() {
    println!("Synthetic product catalog generator");
    println!("Usage: catalog-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -count <N>             Number of products (default: 1000)");
    println!("  -seed <S>              Random seed (default: 42)");
    println!("  -out <FILE>            Output file path (default: products.json)");
    println!("                         A .br suffix writes Brotli-compressed JSON");
    println!("  -brotli                Default output becomes products.json.br");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args)? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Generate(config) => config,
    };

    let output_path = config.output_path();
    let written = generate_catalog(&output_path, &config)?;
    println!("{} products written to: {}", written, output_path);

    Ok(())
}

fn generate_catalog(output_path: &str, config: &Config) -> Result<usize> {
    let provider = VirtualCatalogProvider::with_config(config.count, config.seed);
    let mut writer = CatalogWriter::new(output_path)?;

    for product in provider.generate() {
        writer.write_product(&product)?;
    }

    let written = writer.finish()?;
    tracing::info!(path = output_path, products = written, seed = config.seed, "catalog generated");
    Ok(written)
}
