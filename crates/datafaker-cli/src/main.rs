mod config;
mod generate;
mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use config::{ConfigError, SETTINGS_KEYS, Settings, load_or_create_settings, save_settings};
use datafaker_core::{Catalog, Error as CoreError, OutputKind, file_extension_types};
use datafaker_generate::{
    FakeProducer, GenerationError, GenerationRequest, OutputFormat, ValueProducer, adapt_column,
    preview_regex,
};
use logging::{LoggingError, init_logging};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("catalog error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generate(#[from] GenerationError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "datafaker", version, about = "Fake data generator CLI")]
struct Cli {
    /// Settings file (defaults to ./datafaker.toml).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Write JSON logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query the generator catalog.
    #[command(subcommand)]
    Catalog(CatalogCommand),
    /// List output kinds or the suffixes of one kind.
    Extensions {
        #[arg(value_parser = parse_kind)]
        kind: Option<OutputKind>,
    },
    /// Suggest catalog generators for database columns.
    Adapt(AdaptArgs),
    /// Preview strings produced by a regex.
    Regex(RegexArgs),
    /// Generate a table from a request file.
    Generate(generate::GenerateArgs),
    /// Print the JSON schema of a generation request.
    Schema,
    /// Read or change persisted settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    List(CatalogListArgs),
    Groups,
    Show { name: String },
}

#[derive(Args, Debug)]
struct CatalogListArgs {
    /// Exact, case-sensitive group tag.
    #[arg(long)]
    group: Option<String>,
    /// Case-insensitive substring of the name.
    #[arg(long)]
    search: Option<String>,
    /// Only generators the built-in producer can run.
    #[arg(long, default_value_t = false)]
    supported: bool,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct AdaptArgs {
    #[arg(
        long = "column",
        value_name = "NAME:TYPE",
        required = true,
        value_parser = parse_column
    )]
    columns: Vec<(String, String)>,
}

#[derive(Args, Debug)]
struct RegexArgs {
    pattern: String,
    #[arg(long, default_value_t = 5)]
    count: usize,
    #[arg(long, default_value_t = 16)]
    max_repeat: u32,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    Show,
    Get { key: String },
    Set { key: String, value: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    let settings_path = config::settings_path(cli.config);

    match cli.command {
        Command::Catalog(command) => run_catalog(command),
        Command::Extensions { kind } => run_extensions(kind),
        Command::Adapt(args) => {
            for (name, column_type) in &args.columns {
                println!("{name}\t{column_type}\t{}", adapt_column(name, column_type));
            }
            Ok(())
        }
        Command::Regex(args) => {
            for sample in preview_regex(&args.pattern, args.count, args.max_repeat, args.seed)? {
                println!("{sample}");
            }
            Ok(())
        }
        Command::Generate(args) => {
            let settings = load_or_create_settings(&settings_path)?;
            generate::run_generate(args, &settings).await
        }
        Command::Schema => {
            let schema = schemars::schema_for!(GenerationRequest);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
        Command::Config(command) => run_config(command, &settings_path),
    }
}

fn run_catalog(command: CatalogCommand) -> Result<(), CliError> {
    let catalog = Catalog::builtin();
    let producer = FakeProducer::default();
    match command {
        CatalogCommand::List(args) => {
            let mut descriptors = match &args.search {
                Some(query) => catalog.search(query),
                None => catalog.list_all().iter().collect(),
            };
            if let Some(group) = &args.group {
                descriptors.retain(|descriptor| descriptor.group == group.as_str());
            }
            if args.supported {
                descriptors.retain(|descriptor| producer.supports(descriptor.name));
            }
            tracing::info!(event = "catalog_listed", count = descriptors.len());
            if args.json {
                println!("{}", serde_json::to_string_pretty(&descriptors)?);
            } else {
                for descriptor in descriptors {
                    println!(
                        "{}\t{}\t{}",
                        descriptor.name, descriptor.group, descriptor.description
                    );
                }
            }
        }
        CatalogCommand::Groups => {
            for group in catalog.groups() {
                println!("{group}\t{}", catalog.list_by_group(group).len());
            }
        }
        CatalogCommand::Show { name } => {
            let descriptor = catalog.find_by_name(&name)?;
            let view = serde_json::json!({
                "name": descriptor.name,
                "description": descriptor.description,
                "group": descriptor.group,
                "supported": producer.supports(descriptor.name),
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}

fn run_extensions(kind: Option<OutputKind>) -> Result<(), CliError> {
    match kind {
        Some(kind) if kind.is_custom() => println!("(caller supplies the suffix)"),
        Some(kind) => {
            for suffix in kind.extensions() {
                println!("{suffix}");
            }
        }
        None => {
            for entry in file_extension_types() {
                println!("{}\t{}\t{}", entry.value, entry.label, entry.data.join(" "));
            }
        }
    }
    Ok(())
}

fn run_config(command: ConfigCommand, path: &std::path::Path) -> Result<(), CliError> {
    let mut settings: Settings = load_or_create_settings(path)?;
    match command {
        ConfigCommand::Show => {
            for key in SETTINGS_KEYS {
                println!("{key}={}", settings.get(key)?);
            }
        }
        ConfigCommand::Get { key } => println!("{}", settings.get(&key)?),
        ConfigCommand::Set { key, value } => {
            settings.set(&key, &value)?;
            save_settings(path, &settings)?;
            tracing::info!(event = "settings_saved", key = %key, path = %path.display());
            println!("{key}={}", settings.get(&key)?);
        }
    }
    Ok(())
}

fn parse_kind(value: &str) -> Result<OutputKind, String> {
    value.parse().map_err(|err: CoreError| err.to_string())
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value.parse().map_err(|err: GenerationError| err.to_string())
}

fn parse_column(value: &str) -> Result<(String, String), String> {
    let (name, column_type) = value
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:TYPE, got '{value}'"))?;
    if name.trim().is_empty() {
        return Err(format!("missing column name in '{value}'"));
    }
    Ok((name.trim().to_string(), column_type.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "datafaker",
            "generate",
            "--request",
            "users.json",
            "--format",
            "sql",
            "--kind",
            "document",
            "--suffix",
            ".xlsx",
            "--seed",
            "7",
        ])
        .expect("parse");
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.format, Some(OutputFormat::Sql));
        assert_eq!(args.kind, Some(OutputKind::Document));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn rejects_unknown_kind_and_bad_columns() {
        assert!(Cli::try_parse_from(["datafaker", "extensions", "Image"]).is_err());
        assert!(Cli::try_parse_from(["datafaker", "adapt", "--column", "email"]).is_err());
        let cli = Cli::try_parse_from(["datafaker", "adapt", "--column", "email:text"])
            .expect("parse");
        let Command::Adapt(args) = cli.command else {
            panic!("expected adapt");
        };
        assert_eq!(args.columns, vec![("email".to_string(), "text".to_string())]);
    }

    #[test]
    fn config_commands_round_trip_through_the_file() {
        let path = std::env::temp_dir()
            .join(format!("datafaker_cli_{}", uuid::Uuid::new_v4()))
            .join("datafaker.toml");
        run_config(
            ConfigCommand::Set {
                key: "theme".to_string(),
                value: "dark".to_string(),
            },
            &path,
        )
        .expect("set theme");
        run_config(ConfigCommand::Show, &path).expect("show settings");
        let saved = load_or_create_settings(&path).expect("reload");
        assert_eq!(saved.get("theme").expect("theme"), "dark");
        assert!(run_config(ConfigCommand::Get { key: "colour".to_string() }, &path).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["datafaker", "config", "show", "--config", "alt.toml"])
            .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }
}
