use bankwala::presentation::{self, OutputFormat};
use bankwala::utils::{logger, validation::Validate};
use bankwala::{
    AppConfig, CliConfig, ConfigProvider, FixtureSource, HolidayFetcher, HolidaySnapshot,
    HolidaySource, HolidayStore, HolidayViewModel,
};
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.logging.json {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting bankwala");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let source: Arc<dyn HolidaySource> = if config.source.offline {
        tracing::info!("Offline mode: serving bundled holidays");
        Arc::new(FixtureSource::bank_holidays_2025())
    } else {
        Arc::new(HolidayFetcher::from_config(&config)?)
    };
    let store = Arc::new(HolidayStore::new(config.publish_policy()));
    let view_model = HolidayViewModel::with_selection(source, store, config.initial_selection());

    if cli.interactive {
        run_interactive(&view_model, &config, cli.format).await
    } else {
        view_model.load().await?;

        let snapshot = view_model.store().snapshot();
        if snapshot.selection.is_none() {
            tracing::warn!("No holidays were loaded; showing an empty list");
        }
        print_snapshot(&snapshot, &view_model.selection(), cli.format)?;
        Ok(())
    }
}

async fn run_interactive(
    view_model: &HolidayViewModel<dyn HolidaySource>,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut receiver = view_model.subscribe();
    let renderer = tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let snapshot = Arc::clone(&receiver.borrow_and_update());
            if let Some(selection) = snapshot.selection.clone() {
                if let Err(e) = print_snapshot(&snapshot, &selection, format) {
                    tracing::error!("Failed to render holidays: {}", e);
                }
            }
        }
    });

    print_help();
    view_model.load();

    let years = config.years();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("year"), Some(year)) if years.iter().any(|y| y == year) => {
                view_model.select_year(year);
            }
            (Some("year"), Some(year)) => {
                println!("Unknown year '{}'. Choose one of: {}", year, years.join(", "));
            }
            (Some("month"), Some(month)) => match presentation::parse_month(month) {
                Some(key) => {
                    view_model.select_month(key);
                }
                None => println!("Unknown month '{}'", month),
            },
            (Some("years"), None) => println!("{}", years.join(", ")),
            (Some("months"), None) => {
                for (key, name) in presentation::MONTHS {
                    println!("{}  {}", key, name);
                }
            }
            (Some("quit"), None) | (Some("exit"), None) => break,
            (None, _) => {}
            _ => print_help(),
        }
    }

    renderer.abort();
    Ok(())
}

fn print_help() {
    println!("Commands: year <YYYY> | month <MM|name> | years | months | quit");
}

fn print_snapshot(
    snapshot: &HolidaySnapshot,
    selection: &bankwala::Selection,
    format: OutputFormat,
) -> bankwala::Result<()> {
    let output = presentation::render(&snapshot.records, format)?;
    if format == OutputFormat::Table {
        println!("{}\n", presentation::render_heading(selection));
    }
    println!("{}", output);
    Ok(())
}
