#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;
use std::process;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator as CompletionGenerator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use super::ui::help_text;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GeneratedSpecification;
use crate::domain::models::GenerationRequest;
use crate::domain::models::HealthLevel;
use crate::domain::models::StatusSnapshot;
use crate::domain::models::Template;
use crate::domain::services::record;
use crate::domain::services::FileHistoryStore;
use crate::domain::services::HistoryStore;
use crate::domain::services::Themes;
use crate::infrastructure::backends::BackendManager;

fn print_completions<G: CompletionGenerator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    process::exit(0);
}

fn format_entry(entry: &GeneratedSpecification) -> String {
    let mut line = entry.goal.split('\n').next().unwrap_or_default().to_string();
    if line.chars().count() >= 70 {
        line = format!("{}...", line.chars().take(67).collect::<String>());
    }

    return format!(
        "- (ID: {}) {}, Template: {}, Users: {}, {line}",
        entry.id,
        entry.display_timestamp(),
        entry.request().template_label(),
        entry.users.split('\n').next().unwrap_or_default(),
    );
}

fn format_status(snapshot: &StatusSnapshot) -> String {
    return snapshot
        .rows()
        .iter()
        .map(|row| {
            let marker = match row.level {
                HealthLevel::Healthy => Paint::green("●"),
                HealthLevel::Warning => Paint::yellow("●"),
                HealthLevel::Error => Paint::red("●"),
            };
            return format!("{marker} {:<16}{}", row.title, row.value);
        })
        .collect::<Vec<String>>()
        .join("\n");
}

async fn print_history_list() -> Result<()> {
    let entries = FileHistoryStore::default()
        .load()
        .await
        .iter()
        .map(|entry| {
            return format_entry(entry);
        })
        .collect::<Vec<String>>();

    if entries.is_empty() {
        println!("There is no history yet. Generate your first tasks!");
    } else {
        println!("{}", entries.join("\n"));
    }

    return Ok(());
}

async fn print_history_entry(entry_id: &str) -> Result<()> {
    match FileHistoryStore::default().find(entry_id).await {
        Some(entry) => println!("{}", entry.result),
        None => bail!(format!("History entry {entry_id} does not exist")),
    }

    return Ok(());
}

async fn load_config_from_entry(entry_id: &str) -> Result<()> {
    if FileHistoryStore::default().find(entry_id).await.is_none() {
        bail!(format!("History entry {entry_id} does not exist"));
    }
    Config::set(ConfigKey::EntryID, entry_id);

    return Ok(());
}

async fn load_config_from_entry_interactive() -> Result<bool> {
    let entries = FileHistoryStore::default().load().await;
    if entries.is_empty() {
        println!("There is no history yet. Generate your first tasks!");
        return Ok(false);
    }

    let entry_options = entries
        .iter()
        .map(|entry| {
            return format_entry(entry);
        })
        .collect::<Vec<String>>();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which entry would you like to open?")
        .default(0)
        .items(&entry_options)
        .interact_opt()?;

    match selection {
        Some(idx) => {
            Config::set(ConfigKey::EntryID, &entries[idx].id);
            return Ok(true);
        }
        None => return Ok(false),
    }
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn request_from_matches(matches: &ArgMatches) -> GenerationRequest {
    let get = |name: &str| {
        return matches
            .get_one::<String>(name)
            .map(|e| return e.to_string())
            .unwrap_or_default();
    };

    let mut request = GenerationRequest {
        goal: get("goal"),
        users: get("users"),
        constraints: get("constraints"),
        risks: get("risks"),
        ..GenerationRequest::default()
    };

    let template = get("template");
    if !template.is_empty() {
        request.template = template;
    }

    return request;
}

async fn generate_headless(matches: &ArgMatches) -> Result<()> {
    let request = request_from_matches(matches);
    if request.goal.trim().is_empty() {
        bail!("Feature goal is required");
    }
    if request.users.trim().is_empty() {
        bail!("Target users are required");
    }

    let res = BackendManager::generator().generate(request.clone()).await;
    let response = match res {
        Ok(response) => response,
        Err(err) => {
            eprintln!("{}", Paint::red(err.to_string()));
            process::exit(1);
        }
    };

    let store = FileHistoryStore::default();
    let entries = store.load().await;
    let entry = GeneratedSpecification::new(&request, &response.result);
    if let Err(err) = store.save(&record(&entries, entry)).await {
        tracing::warn!(error = ?err, "Failed to save history");
    }

    if let Some(output) = matches.get_one::<String>("output") {
        let output_path = path::PathBuf::from(output);
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(&output_path, response.result.as_bytes()).await?;
        println!("Saved to {}", output_path.to_string_lossy());
    } else {
        println!("{}", response.result);
    }

    return Ok(());
}

async fn check_status_headless() -> Result<()> {
    match BackendManager::status_probe().check().await {
        Ok(snapshot) => {
            println!("{}", format_status(&snapshot));
            return Ok(());
        }
        Err(err) => {
            eprintln!("{}", Paint::red(format!("Connection Error: {err}")));
            process::exit(1);
        }
    }
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_generate() -> Command {
    return Command::new("generate")
        .about("Generates tasks without starting the UI, prints the result, and records it in history.")
        .arg(
            Arg::new("goal")
                .short('g')
                .long("goal")
                .help("What the feature should achieve.")
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new("users")
                .short('u')
                .long("users")
                .help("Who the feature is for.")
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new("constraints")
                .long("constraints")
                .help("Technical or business constraints.")
                .num_args(1),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .help(format!(
                    "Product type to generate tasks for. [default: {}]",
                    Template::default()
                ))
                .num_args(1)
                .value_parser(PossibleValuesParser::new(Template::VARIANTS)),
        )
        .arg(
            Arg::new("risks")
                .long("risks")
                .help("Known risks or open unknowns.")
                .num_args(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the result to a file instead of stdout.")
                .num_args(1),
        );
}

fn subcommand_history() -> Command {
    return Command::new("history")
        .about("Manage previously generated tasks.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List recent generations with their ids."))
        .subcommand(
            Command::new("show")
                .about("Print the generated tasks of a history entry.")
                .arg(
                    clap::Arg::new("entry-id")
                        .short('i')
                        .long("id")
                        .help("History entry ID")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("open")
                .about("Open the form with a history entry loaded. Omit passing any ID to load an interactive selection.")
                .arg(
                    clap::Arg::new("entry-id")
                        .short('i')
                        .long("id")
                        .help("History entry ID")
                        .required(false),
                ),
        )
        .subcommand(Command::new("path").about("Print the history file path."));
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.ends_with("HOTKEYS:") {
                return Paint::new(line.to_string()).underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    let themes = Themes::list();

    return Command::new("taskgen")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(Command::new("form").about("Open the task generation form. This is the default."))
        .subcommand(subcommand_generate())
        .subcommand(subcommand_history())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .subcommand(Command::new("status").about("Check the health of the generation service once and exit."))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("TASKGEN_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("TASKGEN_API_URL")
                .num_args(1)
                .help(format!("Base URL of the task generation service. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::StatusURL.to_string())
                .long(ConfigKey::StatusURL.to_string())
                .env("TASKGEN_STATUS_URL")
                .num_args(1)
                .help("Base URL serving the health endpoint. Defaults to the API URL when unset.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::StatusPollInterval.to_string())
                .long(ConfigKey::StatusPollInterval.to_string())
                .env("TASKGEN_STATUS_POLL_INTERVAL")
                .num_args(1)
                .help(format!("Seconds between health checks on the status page. [default: {}]", Config::default(ConfigKey::StatusPollInterval)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::HistoryFile.to_string())
                .long(ConfigKey::HistoryFile.to_string())
                .env("TASKGEN_HISTORY_FILE")
                .num_args(1)
                .help(format!("Where recent generations are stored. [default: {}]", Config::default(ConfigKey::HistoryFile)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::DownloadDir.to_string())
                .long(ConfigKey::DownloadDir.to_string())
                .env("TASKGEN_DOWNLOAD_DIR")
                .num_args(1)
                .help(format!("Directory downloaded markdown files are written to. [default: {}]", Config::default(ConfigKey::DownloadDir)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Theme.to_string())
                .short('t')
                .long(ConfigKey::Theme.to_string())
                .env("TASKGEN_THEME")
                .num_args(1)
                .help(format!("Sets markdown highlighting theme for the result preview. [default: {}]", Config::default(ConfigKey::Theme)))
                .value_parser(PossibleValuesParser::new(themes))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("form", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("generate", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            generate_headless(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("history", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("list", list_matches)) => {
                Config::load(build(), vec![&matches, subcmd_matches, list_matches]).await?;
                print_history_list().await?;
                return Ok(false);
            }
            Some(("show", show_matches)) => {
                Config::load(build(), vec![&matches, subcmd_matches, show_matches]).await?;
                if let Some(entry_id) = show_matches.get_one::<String>("entry-id") {
                    print_history_entry(entry_id).await?;
                }
                return Ok(false);
            }
            Some(("open", open_matches)) => {
                Config::load(build(), vec![&matches, subcmd_matches, open_matches]).await?;
                if let Some(entry_id) = open_matches.get_one::<String>("entry-id") {
                    load_config_from_entry(entry_id).await?;
                } else if !load_config_from_entry_interactive().await? {
                    return Ok(false);
                }
            }
            Some(("path", path_matches)) => {
                Config::load(build(), vec![&matches, subcmd_matches, path_matches]).await?;
                println!("{}", Config::get(ConfigKey::HistoryFile));
                return Ok(false);
            }
            _ => {
                subcommand_history().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("status", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            check_status_headless().await?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
