//! Data-zoom option CLI
//!
//! Entry point for the `datazoom` command-line tool, which prints the
//! registered component defaults and resolves user options against them.

use clap::{Parser, Subcommand};
use datazoom_model::logging::{init_logging, LogFormat, LoggingConfig};
use datazoom_model::options::OptionsSource;
use datazoom_model::{registry, OptionMap, OptionsFile, Rect, Size};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "datazoom")]
#[command(about = "Inspect and resolve data-zoom component options", version)]
struct Cli {
    /// Log filter (e.g. "info", "datazoom_model=debug"); DATAZOOM_LOG overrides it
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Disable colored log output (also off when stderr is not a terminal)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered component types
    Types {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved default option of a component type
    Defaults {
        /// Component type tag
        #[arg(long = "type", short = 't', default_value = "dataZoom.slider")]
        type_tag: String,
    },

    /// Layer user options over the defaults and resolve the box layout
    Resolve {
        /// Component type tag
        #[arg(long = "type", short = 't', default_value = "dataZoom.slider")]
        type_tag: String,

        /// User options file (.json or .toml)
        #[arg(long, short = 'o')]
        options: Option<PathBuf>,

        /// Chart container width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f64,

        /// Chart container height in pixels
        #[arg(long, default_value_t = 600.0)]
        height: f64,

        /// Plotting-area rectangle as x,y,width,height
        #[arg(long, value_parser = parse_rect)]
        grid: Option<Rect>,
    },
}

fn main() {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: cli.log_level,
        format: cli.log_format,
        ..LoggingConfig::default()
    }
    .without_color(cli.no_color);
    if let Err(e) = init_logging(&logging) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    match cli.command {
        Commands::Types { json } => run_types(json),
        Commands::Defaults { type_tag } => run_defaults(&type_tag),
        Commands::Resolve {
            type_tag,
            options,
            width,
            height,
            grid,
        } => run_resolve(&type_tag, options, Size::new(width, height), grid),
    }
}

fn run_types(json_output: bool) {
    let registry = registry::global();

    if json_output {
        let output: Vec<serde_json::Value> = registry
            .components()
            .map(|c| {
                serde_json::json!({
                    "type": c.type_tag(),
                    "layout_mode": c.layout_mode(),
                    "keys": c.default_option().len(),
                })
            })
            .collect();
        print_json(&serde_json::Value::Array(output));
        return;
    }

    if registry.is_empty() {
        println!("No component types registered.");
        return;
    }

    println!("Registered component types ({} total):\n", registry.len());
    for component in registry.components() {
        println!("  {}", component.type_tag());
        println!("    Layout mode: {}", component.layout_mode());
        println!("    Default keys: {}", component.default_option().len());
    }
}

fn run_defaults(type_tag: &str) {
    match registry::global().default_option(type_tag) {
        Ok(option) => print_json(&option.to_json()),
        Err(e) => exit_with_types(&e.to_string()),
    }
}

fn run_resolve(type_tag: &str, options_path: Option<PathBuf>, container: Size, grid: Option<Rect>) {
    let (user_option, source): (OptionMap, Option<OptionsSource>) = match options_path {
        Some(path) => match OptionsFile::load(&path) {
            Ok(file) => (file.option, Some(file.source)),
            Err(e) => {
                eprintln!("Error loading options from {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => (OptionMap::new(), None),
    };

    let instance = match registry::global().instantiate(type_tag, &user_option) {
        Ok(instance) => instance,
        Err(e) => exit_with_types(&e.to_string()),
    };

    let rect = instance.layout(container, grid);

    print_json(&serde_json::json!({
        "type": instance.type_tag(),
        "layout_mode": instance.layout_mode(),
        "source": source,
        "container": container,
        "rect": rect,
        "option": instance.option(),
    }));
}

fn exit_with_types(message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!(
        "Available types: {}",
        registry::global().types().collect::<Vec<_>>().join(", ")
    );
    process::exit(1);
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in rectangle: {}", e))?;

    match parts.as_slice() {
        [x, y, width, height] => Ok(Rect::new(*x, *y, *width, *height)),
        _ => Err(format!("expected x,y,width,height but got {} values", parts.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["datazoom", "types", "--no-color"]).unwrap();
        assert!(cli.no_color);

        let cli = Cli::try_parse_from(["datazoom", "types"]).unwrap();
        assert!(!cli.no_color);
    }

    #[test]
    fn test_parse_rect() {
        assert_eq!(parse_rect("80, 60,640,420"), Ok(Rect::new(80.0, 60.0, 640.0, 420.0)));
        assert!(parse_rect("1,2,3").is_err());
        assert!(parse_rect("a,2,3,4").is_err());
    }
}
