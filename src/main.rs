use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use degrees::{lookup, report, search_with, Database, QueueFrontier, SearchConfig, StackFrontier};

/// Degrees of separation between two actors, through the movies they starred in.
#[derive(Parser, Debug)]
#[command(name = "degrees", version, about)]
struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(default_value = "large")]
    directory: PathBuf,

    /// Name of the first actor (prompted when omitted)
    #[arg(short, long)]
    source: Option<String>,

    /// Name of the second actor (prompted when omitted)
    #[arg(short, long)]
    target: Option<String>,

    /// Explore depth-first; the path found is not necessarily the shortest
    #[arg(long)]
    dfs: bool,

    /// Give up after expanding this many actors
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn ask_person(db: &Database, given: Option<String>) -> Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let name = match given {
        Some(name) => name,
        None => {
            write!(stdout, "Name: ")?;
            stdout.flush()?;
            let mut line = String::new();
            input.read_line(&mut line).context("reading name")?;
            line.trim().to_string()
        }
    };

    match lookup::resolve(db, &name, &mut input, &mut stdout)? {
        Some(id) => Ok(id),
        None => bail!("Person not found."),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("Loading data...");
    let db = Database::load_dir(&cli.directory)
        .with_context(|| format!("loading data from {}", cli.directory.display()))?;
    println!("Data loaded.");

    let source = ask_person(&db, cli.source)?;
    let target = ask_person(&db, cli.target)?;

    let config = SearchConfig {
        max_expansions: cli.max_expansions,
        ..SearchConfig::default()
    };
    let outcome = if cli.dfs {
        search_with::<StackFrontier, _>(db.memberships(), &source, &target, &config)
    } else {
        search_with::<QueueFrontier, _>(db.memberships(), &source, &target, &config)
    };

    match outcome.path {
        Some(path) => print!("{}", report::render(&db, &source, &path)),
        None if outcome.exhausted_budget => {
            println!("Not connected within {} expanded actors.", outcome.explored)
        }
        None => println!("Not connected."),
    }
    Ok(())
}
