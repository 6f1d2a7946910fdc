mod cli;
mod commands;

use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use yled_common::Result;
use yled_config::{StyleRegistry, StylerSettings};

use cli::{Args, Command};

fn main() -> ExitCode {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "warn".parse().unwrap()),
            ),
        )
        .init();

    match run(args) {
        Ok(out) => {
            if !out.is_empty() {
                println!("{out}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<String> {
    let custom;
    let registry = match &args.styles {
        Some(path) => {
            custom = StyleRegistry::load_from_path(path)?;
            &custom
        }
        None => StyleRegistry::bundled(),
    };
    let settings = StylerSettings::from_env();
    debug!(elements = registry.len(), ?settings, "Style table ready");

    match args.command {
        Command::Compile {
            element,
            kwargs,
            key,
            strict,
            global,
        } => commands::compile(
            registry,
            settings.with_strict(settings.strict || strict),
            &element,
            &kwargs,
            key,
            global,
        ),
        Command::Set {
            element,
            property,
            value,
        } => commands::set(registry, settings, &element, &property, &value),
        Command::Validate {
            element,
            kwargs,
            strict,
        } => commands::validate(
            registry,
            settings
                .with_strict(settings.strict || strict)
                .with_warnings(false),
            &element,
            &kwargs,
        ),
        Command::Elements { element } => commands::elements(registry, element.as_deref()),
    }
}
