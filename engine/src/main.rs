use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use dsa_kg::store::{self, DEFAULT_CATALOGUE_PATH};
use dsa_kg::{build, seed, CompositeSearchResult, KgError, SearchConfig, SearchEngine, Tutor};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dsa-kg", about = "DSA knowledge graph search and tutor")]
struct Cli {
    /// Path or http(s) URL of the built catalogue
    #[arg(long, default_value = DEFAULT_CATALOGUE_PATH)]
    catalogue: String,

    /// JSON file with search settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of fuzzy matches (overrides config)
    #[arg(long)]
    limit: Option<usize>,

    /// Minimum fuzzy similarity (overrides config)
    #[arg(long)]
    cutoff: Option<f64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the catalogue from the built-in seed concepts
    Build {
        /// Output path (defaults to --catalogue)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show exact, fuzzy, relation and keyword matches
    Search { query: String },
    /// Explain the concept that best matches a question
    Explain { question: String },
    /// Show catalogue statistics
    Stats,
    /// Print the relation neighborhood of a concept as JSON
    Graph { key: String },
    /// Interactive prompt (default)
    Repl,
}

fn load_config(cli: &Cli) -> anyhow::Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    if let Some(limit) = cli.limit {
        config.fuzzy_limit = limit;
    }
    if let Some(cutoff) = cli.cutoff {
        config.fuzzy_cutoff = cutoff;
    }
    Ok(config)
}

fn open_engine(cli: &Cli) -> anyhow::Result<SearchEngine> {
    let config = load_config(cli)?;
    match store::initialize(&cli.catalogue) {
        Ok(handle) => Ok(SearchEngine::new(handle, config)),
        Err(KgError::NotFound(path)) => bail!(
            "{} not found. Build the catalogue first with `dsa-kg build`.",
            path.display()
        ),
        Err(e) => Err(e.into()),
    }
}

fn print_header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

fn print_results(results: &CompositeSearchResult) {
    match &results.exact {
        Some(hit) => {
            let record = &hit.record;
            print_header(&format!("CONCEPT: {}", record.display_name().to_uppercase()));
            println!("ID:            {}", record.id);
            println!("Type:          {}", record.kind);
            println!("Category:      {}", record.category);
            for (title, items) in [
                ("Basic Operations", &record.basic_ops),
                ("Use Cases", &record.use_cases),
                ("Relations", &record.relations),
            ] {
                if !items.is_empty() {
                    println!("\n{title}:");
                    for item in items {
                        println!("  - {item}");
                    }
                }
            }
            if !record.description.is_empty() {
                println!("\nDescription:\n  {}", record.description);
            }
        }
        None => println!("\nNo exact match found."),
    }

    if !results.fuzzy.is_empty() {
        println!("\nPossible matches:");
        for hit in &results.fuzzy {
            println!("  - {} (score={:.2})", hit.name, hit.match_score);
        }
    }
    if !results.related.is_empty() {
        println!("\nRelated concepts:");
        for hit in &results.related {
            println!("  - {} ({})", hit.name, hit.category);
        }
    }
    if !results.keyword.is_empty() {
        println!("\nKeyword matches:");
        for hit in &results.keyword {
            println!("  - {}: {}", hit.name, hit.snippet);
        }
    }
}

fn print_stats(engine: &SearchEngine) {
    let stats = engine.stats();
    print_header("GRAPH STATISTICS");
    println!("Concepts:       {}", stats.concept_count);
    println!("Relations:      {}", stats.relation_tag_count);
    println!("Source:         {}", stats.source);
}

fn print_help() {
    print_header("HELP - AVAILABLE COMMANDS");
    println!(
        "Ask about any concept, e.g.:\n    \
         explain stack\n    \
         what is binary search\n    \
         define adjacency list\n\n\
         Special commands:\n    \
         help    -> Show this help\n    \
         stats   -> Display graph statistics\n    \
         quit    -> Exit the program"
    );
}

fn repl(engine: &SearchEngine) -> anyhow::Result<()> {
    print_header("DSA Knowledge Graph - Tutor");
    println!("Type 'help' to see available commands.\n");

    let tutor = Tutor::new(engine);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        match query.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => print_help(),
            "stats" => print_stats(engine),
            _ => {
                let answer = tutor.answer(query);
                println!("\n[match: {}]\n{}\n", answer.match_source.as_str(), answer.answer_text);
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Commands::Repl) {
        Commands::Build { out } => {
            let path = match out {
                Some(out) => out.clone(),
                None if store::is_url(&cli.catalogue) => {
                    bail!("cannot build into a URL catalogue; pass --out")
                }
                None => PathBuf::from(&cli.catalogue),
            };
            let records = build::build_catalogue(seed::BASE_CONCEPTS);
            build::write_catalogue(&records, &path)?;
            println!("Saved {} concepts to {}", records.len(), path.display());
        }
        Commands::Search { query } => print_results(&open_engine(&cli)?.search_all(query)),
        Commands::Explain { question } => {
            let engine = open_engine(&cli)?;
            let answer = Tutor::new(&engine).answer(question);
            println!("{}", answer.answer_text);
        }
        Commands::Stats => print_stats(&open_engine(&cli)?),
        Commands::Graph { key } => {
            let graph = open_engine(&cli)?.neighborhood(key)?;
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
        Commands::Repl => repl(&open_engine(&cli)?)?,
    }

    Ok(())
}
