use anyhow::Context;
use clap::Parser;
use kicks::catalog::{Catalog, RestoreOutcome};
use kicks::cli::{Cli, Command};
use kicks::config::Config;
use kicks::form;
use kicks::host::{Host, TerminalHost};
use kicks::logging;
use kicks::photo;
use kicks::report;
use kicks::storage::{SnapshotStore, SqliteStore};

fn format_timestamp(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(database) = &cli.database {
        config.database = Some(database.clone());
    }
    config.verbose = cli.verbose;
    Ok(config)
}

fn open_catalog(config: &Config) -> anyhow::Result<Catalog<SqliteStore>> {
    let path = config
        .database_path()
        .context("could not locate the snapshot database")?;

    let store = SqliteStore::open(&path)
        .with_context(|| format!("could not open {}", path.display()))?
        .with_quota(config.quota_bytes);

    let mut catalog = Catalog::with_seed(store)
        .with_snapshot_key(&config.snapshot_key)
        .with_placeholder_image(&config.placeholder_image);

    if let RestoreOutcome::Restored(count) = catalog.restore() {
        tracing::debug!(records = count, path = %path.display(), "collection loaded");
    }

    Ok(catalog)
}

/// Run one command against an open catalog.
fn execute<S: SnapshotStore>(
    command: Command,
    config: &Config,
    catalog: &mut Catalog<S>,
    host: &mut dyn Host,
) -> anyhow::Result<()> {
    match command {
        Command::List(args) => {
            report::print_records(catalog.list(), args.json)?;
        }
        Command::Brands => {
            print!("{}", report::table::render_brands(&catalog.list_brands()));
        }
        Command::Search(args) => {
            let filters = args.filters();
            form::check_search(&args.query, &filters)?;

            let results = catalog.search(&args.query, &filters);
            report::print_records(&results, args.json)?;
        }
        Command::Recent(args) => {
            let limit = args.limit.unwrap_or(config.recent_limit);
            print!("{}", report::table::render_recent(&catalog.recent(limit)));
        }
        Command::Collabs(args) => {
            let groups = catalog.collaborations();
            if args.json {
                println!("{}", report::json::render_groups(&groups)?);
            } else {
                print!("{}", report::table::render_collaborations(&groups));
            }
        }
        Command::Add(args) => {
            let mut new = args.to_new_sneaker();
            form::check_new_sneaker(&new)?;
            new.image = args
                .photo_source()
                .and_then(|source| photo::acquire(source, config.max_image_bytes, host));

            let added = catalog.add(new)?;
            if args.json {
                println!("{}", report::json::render([&added])?);
            } else {
                println!(
                    "Added #{} {} {} ({})",
                    added.id,
                    added.brand,
                    added.display_name(),
                    added.article
                );
                println!();
                let recent = catalog.recent(config.recent_limit);
                print!("{}", report::table::render_recent(&recent));
            }
        }
        Command::Info => {
            let path = config.database_path()?;
            println!("database:  {}", path.display());
            println!("key:       {}", catalog.snapshot_key());
            println!("pairs:     {}", catalog.len());
            println!("brands:    {}", catalog.list_brands().len());

            match catalog.last_saved()? {
                Some(ts) => println!("saved at:  {}", format_timestamp(ts)),
                None => println!("saved at:  never (showing the built-in collection)"),
            }
        }
    }

    Ok(())
}

/// Run a command and collect the diagnostics it left behind, whether or
/// not it succeeded.
fn execute_collecting<S: SnapshotStore>(
    command: Command,
    config: &Config,
    catalog: &mut Catalog<S>,
    host: &mut dyn Host,
) -> (anyhow::Result<()>, Vec<String>) {
    let result = execute(command, config, catalog, host);
    (result, catalog.take_diagnostics())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let mut catalog = open_catalog(&config)?;
    let mut host = TerminalHost;

    let (result, diagnostics) =
        execute_collecting(cli.command, &config, &mut catalog, &mut host);
    report::print_diagnostics(&diagnostics, config.verbose);
    result
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
