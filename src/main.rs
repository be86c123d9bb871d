use clap::Parser;
use portfolio_common::{FilterState, Gallery};
use portfolio_gallery::{cli, commands, config, error, store};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Generate { count, seed, output } => {
            let catalog = commands::build_catalog(count, seed, &config)?;

            match output {
                Some(path) => {
                    store::save_catalog(&catalog, &path)?;
                    println!("✔ {}件のプロジェクトを保存: {}", catalog.len(), path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&catalog)?),
            }
        }

        Commands::Filter { source, category, search, json } => {
            let catalog = commands::resolve_catalog(&source, &config)?;
            let gallery = Gallery::with_state(catalog, FilterState::new(category, search));

            if json {
                println!("{}", commands::render_filter_json(&gallery)?);
            } else {
                println!("{}", commands::render_filter(&gallery));
            }
        }

        Commands::Categories { source } => {
            let catalog = commands::resolve_catalog(&source, &config)?;
            let gallery = Gallery::new(catalog);
            println!("{}", commands::render_categories(&gallery));
        }

        Commands::Config { set_count, set_seed, clear_seed, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(count) = set_count {
                config.set_catalog_count(count)?;
                changed = true;
                println!("✔ 生成件数を設定しました: {}", count);
            }

            if let Some(seed) = set_seed {
                config.seed = Some(seed);
                changed = true;
                println!("✔ シードを設定しました: {}", seed);
            }

            if clear_seed {
                config.seed = None;
                changed = true;
                println!("✔ シードを解除しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("{}", commands::render_config(&config)?);
            }
        }
    }

    Ok(())
}

/// `--verbose` ならdebug、それ以外はRUST_LOG（未設定ならwarn）
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
