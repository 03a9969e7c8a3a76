use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use ygorate_client::CardApi;
use ygorate_runtime::{FillPackOptions, PasscodeOptions, UpdateIdsOptions};

const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(10);

/// Dispatch a parsed command line. Returns the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let data_dir = expand_tilde(&cli.data_dir);
    let config = Config::load_from(&data_dir.join("config.toml"))?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(0);
    };

    match command {
        Commands::Browse => {
            let api = build_api(&config, cli.api_url.as_deref())?;
            handlers::browse::handle(&data_dir, api)?;
            Ok(0)
        }

        Commands::Card { id, pack } => {
            let api = build_api(&config, cli.api_url.as_deref())?;
            handlers::card::handle(&data_dir, &api, id, pack, cli.format)?;
            Ok(0)
        }

        Commands::Packs => {
            handlers::packs::handle(&data_dir, cli.format)?;
            Ok(0)
        }

        Commands::List { pack } => {
            handlers::list::handle(&data_dir, pack, cli.format)?;
            Ok(0)
        }

        Commands::FillPack {
            folder,
            pack_name,
            rating,
            review_text,
            dry_run,
        } => {
            let api = build_api(&config, cli.api_url.as_deref())?;
            handlers::fill_pack::handle(
                &data_dir,
                &api,
                FillPackOptions {
                    folder,
                    pack_name,
                    default_rating: rating,
                    default_review_text: review_text,
                    dry_run,
                },
            )?;
            Ok(0)
        }

        Commands::UpdateIds {
            dry_run,
            all,
            min_digits,
            pack,
        } => {
            let api = build_api(&config, cli.api_url.as_deref())?;
            handlers::update_ids::handle(
                &data_dir,
                &api,
                UpdateIdsOptions {
                    dry_run,
                    force_all: all,
                    min_digits,
                    only_pack: pack,
                },
            )?;
            Ok(0)
        }

        Commands::Passcode { name, fuzzy, local } => {
            let api = build_api(&config, cli.api_url.as_deref())?;
            handlers::passcode::handle(
                &data_dir,
                &api,
                &name,
                PasscodeOptions {
                    fuzzy,
                    local_only: local,
                },
            )
        }
    }
}

fn build_api(config: &Config, override_url: Option<&str>) -> Result<CardApi> {
    let base_url = config.api_base_url(override_url);
    let timeout = config.api_timeout().unwrap_or(DEFAULT_API_TIMEOUT);
    Ok(CardApi::with_options(base_url, timeout)?)
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

fn show_guidance(data_dir: &std::path::Path) {
    println!("ygorate - Yu-Gi-Oh! card rating catalog\n");

    if data_dir.exists() {
        println!("Quick commands:");
        println!("  ygorate browse                    # Interactive viewer");
        println!("  ygorate packs                     # Packs with card counts");
        println!("  ygorate list --pack <LABEL>       # Cards in one pack");
        println!("  ygorate card <PASSCODE>           # One card with details\n");
    } else {
        println!("No data directory at {}.", data_dir.display());
        println!("Create pack folders with a cards.json each, then:");
        println!("  ygorate fill-pack <FOLDER> --pack-name <NAME>\n");
    }

    println!("For more commands:");
    println!("  ygorate --help");
}
