use clap::{Arg, ArgMatches, Command};
use localesync::fetch::HttpFetcher;
use localesync::reconcile::{statistics, to_document, untranslated_keys};
use localesync::store::{load_catalog_from_file, save_catalog_to_file};
use localesync::sync::reconcile;
use regex::Regex;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("warn".parse().unwrap()),
        )
        .init();

    let matches = Command::new("localesync")
        .version("0.1.0")
        .about("Translation catalog manager for hierarchical locale data")
        .subcommand_required(true)
        .subcommand(
            Command::new("pull")
                .about("Fetch the upstream locale file and reconcile it with a catalog")
                .arg(
                    Arg::new("url")
                        .help("URL of the upstream locale document")
                        .required(true)
                        .index(1),
                )
                .arg(catalog_arg())
                .arg(
                    Arg::new("apply")
                        .long("apply")
                        .short('a')
                        .help("Write the reconciled catalog back to the catalog file")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Show translation-completeness statistics for a catalog")
                .arg(catalog_arg()),
        )
        .subcommand(
            Command::new("todo")
                .about("List catalog keys still waiting for a translation")
                .arg(catalog_arg())
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .short('f')
                        .help("Only show keys whose dotted path matches this regex"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export a catalog as an upstream-format locale document")
                .arg(catalog_arg())
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Destination file (default: stdout)"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("pull", sub)) => run_pull(sub).await,
        Some(("stats", sub)) => run_stats(sub),
        Some(("todo", sub)) => run_todo(sub),
        Some(("export", sub)) => run_export(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .short('c')
        .help("Path to the local catalog file")
        .required(true)
}

fn catalog_path(matches: &ArgMatches) -> &Path {
    Path::new(matches.get_one::<String>("catalog").unwrap())
}

async fn run_pull(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let url = matches.get_one::<String>("url").unwrap();
    let path = catalog_path(matches);
    let apply = matches.get_flag("apply");

    let existing = if path.exists() {
        Some(load_catalog_from_file(path)?)
    } else {
        println!("📄 No catalog at {} yet, starting fresh", path.display());
        None
    };

    let fetcher = HttpFetcher::new()?;
    let outcome = reconcile(&fetcher, url, existing.as_ref()).await?;

    let stats = statistics(&outcome.merged);
    println!("🔄 Reconciled against {}", url);
    println!("   New untranslated keys:    {}", outcome.new_untranslated_count);
    println!("   Unused translations:      {}", outcome.unused_translated_count);
    println!(
        "   Overall progress:         {}/{}",
        stats.translated_count, stats.overall_count
    );

    if apply {
        save_catalog_to_file(path, &outcome.merged)?;
        println!("✅ Catalog written to {}", path.display());
    } else {
        println!("ℹ️  Dry run; pass --apply to update the catalog");
    }

    Ok(())
}

fn run_stats(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let path = catalog_path(matches);
    let catalog = load_catalog_from_file(path)?;

    let stats = statistics(&catalog);
    let percent = if stats.overall_count == 0 {
        100.0
    } else {
        100.0 * stats.translated_count as f64 / stats.overall_count as f64
    };

    println!("📊 {}", path.display());
    println!(
        "   {}/{} translated ({:.1}%)",
        stats.translated_count, stats.overall_count, percent
    );

    Ok(())
}

fn run_todo(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let path = catalog_path(matches);
    let catalog = load_catalog_from_file(path)?;

    let filter = matches
        .get_one::<String>("filter")
        .map(|pattern| Regex::new(pattern))
        .transpose()?;

    let mut shown = 0;
    for item in untranslated_keys(&catalog) {
        let dotted = item.dotted_path();
        if let Some(regex) = &filter {
            if !regex.is_match(&dotted) {
                continue;
            }
        }
        println!("{}  \"{}\"", dotted, item.leaf.original);
        shown += 1;
    }

    if shown == 0 {
        println!("✅ Nothing left to translate");
    }

    Ok(())
}

fn run_export(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let path = catalog_path(matches);
    let catalog = load_catalog_from_file(path)?;

    let document = to_document(&catalog)?;
    match matches.get_one::<String>("out") {
        Some(out) => {
            std::fs::write(out, &document)
                .map_err(|e| format!("Failed to write file '{}': {}", out, e))?;
            println!("✅ Exported to {}", out);
        }
        None => println!("{}", document),
    }

    Ok(())
}
