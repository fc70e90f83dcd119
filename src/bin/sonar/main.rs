//! Sonar: staging-system jump-range tracker CLI
//!
//! Builds the catalog on first run, keeps the staging registry in the same
//! store, and reports which declared stagings can reach the current system.

mod cli;

use std::io::Read;

use anyhow::{bail, Context};
use clap::Parser;

use staging_sonar::query::report_by_range_class;
use staging_sonar::{CatalogStore, RangeClass, SonarDb, StagingRegistry};

use cli::{CheckArgs, Cli, Commands, StagingsCommands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let db = SonarDb::open(&cli.db)
        .with_context(|| format!("failed to open store at {:?}", cli.db))?;
    let catalog = CatalogStore::open(&db, &cli.dataset)
        .with_context(|| format!("failed to build catalog from {:?}", cli.dataset))?;
    let registry = StagingRegistry::new(&db);

    match &cli.command {
        Commands::Info => {
            println!("Store: {:?}", cli.db);
            println!("Systems in catalog: {}", catalog.len());
            println!("Staging entries: {}", registry.get_all()?.len());
        }
        Commands::Check(args) => run_check(args, &catalog, &registry)?,
        Commands::Stagings(args) => match &args.command {
            StagingsCommands::Show => {
                print!("{}", registry.export_to_text()?);
            }
            StagingsCommands::Import { input } => {
                let text = read_input(input)?;
                let accepted = registry.import_from_text(&text, &catalog)?;
                println!("Imported {} staging entries", accepted.len());
            }
        },
    }

    Ok(())
}

fn run_check(
    args: &CheckArgs,
    catalog: &CatalogStore,
    registry: &StagingRegistry<'_>,
) -> anyhow::Result<()> {
    let Some(reference) = catalog.get_by_name(&args.system) else {
        // Unknown name is a soft miss: no catalog match means no query,
        // never a scan against the coordinate origin.
        println!(
            "No system named '{}' in the catalog. Check the spelling.",
            args.system
        );
        return Ok(());
    };

    if reference.is_highsec() {
        println!(
            "{} is highsec (sec {:.2}); nothing can cyno to you there.",
            reference.name, reference.security
        );
        return Ok(());
    }

    let enabled = parse_ranges(&args.ranges)?;
    print!(
        "{}",
        report_by_range_class(&enabled, reference, catalog, registry)?
    );
    Ok(())
}

fn parse_ranges(spec: &str) -> anyhow::Result<Vec<RangeClass>> {
    let mut enabled = Vec::new();
    for label in spec.split(',').filter(|s| !s.trim().is_empty()) {
        match RangeClass::from_label(label) {
            Some(class) => enabled.push(class),
            None => bail!(
                "unknown range class '{}' (expected blops, super, capital, or industry)",
                label.trim()
            ),
        }
    }
    Ok(enabled)
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {:?}", input))
    }
}
