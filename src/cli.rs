// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    chart::CATEGORIES,
    config::AppOptions,
    corpus,
    freq::TokenFrequencyTable,
    logging::{self, LogTarget},
    nlp::Analyzer,
    progress::LogProgress,
    scrape,
    server::{self, ServerContext},
    store,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Scrape wiki dialogue tables and chart their words")]
pub struct Cli {
    /// TOML config file (default: ./wiki_dialogue.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (default info, -v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one character's dialogue page and save it as CSV
    Scrape(ScrapeArgs),
    /// Serve the interactive chart page
    Serve(ServeArgs),
    /// List stored dialogue files as `label,file`
    List {
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Print the top words per category for one stored file
    Stats {
        file: PathBuf,
        #[arg(long)]
        top: Option<usize>,
    },
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Character name, e.g. "Piper Wright"
    pub character: Option<String>,

    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub store: Option<PathBuf>,

    /// File selected when the page opens
    #[arg(long = "default")]
    pub default_file: Option<String>,

    #[arg(long)]
    pub no_browser: bool,
}

pub fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for_verbosity(cli.verbose), LogTarget::Stderr);

    let mut opts = AppOptions::load_or_default(cli.config.as_deref())?;
    apply(&mut opts, &cli.command);

    match cli.command {
        Command::Scrape(args) => {
            let character = args.character.unwrap_or_else(|| opts.scrape.character.clone());
            run_scrape(&character, &opts);
            Ok(())
        }
        Command::Serve(_) => server::run(ServerContext::from_options(&opts)?),
        Command::List { .. } => {
            for f in store::list_stored(&opts.serve.store_dir)? {
                println!("{},{}", f.label, f.file_name);
            }
            Ok(())
        }
        Command::Stats { file, .. } => {
            let c = corpus::build_corpus(&file, &opts.analyze, &Analyzer::default())?;
            print!("{}", format_stats(&c, opts.analyze.top_n));
            Ok(())
        }
    }
}

/// CLI flags win over the config file.
pub fn apply(opts: &mut AppOptions, cmd: &Command) {
    match cmd {
        Command::Scrape(a) => {
            if let Some(d) = &a.out_dir { opts.scrape.out_dir = d.clone(); }
        }
        Command::Serve(a) => {
            if let Some(p) = a.port { opts.serve.port = p; }
            if let Some(s) = &a.store { opts.serve.store_dir = s.clone(); }
            if let Some(f) = &a.default_file { opts.serve.default_file = f.clone(); }
            if a.no_browser { opts.serve.open_browser = false; }
        }
        Command::List { store } => {
            if let Some(s) = store { opts.serve.store_dir = s.clone(); }
        }
        Command::Stats { top, .. } => {
            if let Some(n) = top { opts.analyze.top_n = *n; }
        }
    }
}

/// Success and failure both end normally; the error goes to the log.
fn run_scrape(character: &str, opts: &AppOptions) {
    let mut prog = LogProgress::new();
    match scrape::scrape_to_file(character, &opts.scrape, Some(&mut prog)) {
        Ok(path) => {
            log::info!("Scrape: wrote {}", path.display());
            println!("{}", scrape::CREATED_MSG);
        }
        Err(e) => {
            log::error!("Scrape: {character}: {e}");
            println!("{}", scrape::FAILED_MSG);
        }
    }
}

pub fn format_stats(c: &corpus::CharacterCorpus, top_n: usize) -> String {
    let mut out = format!("{}\n", c.name);
    let sections = CATEGORIES
        .iter()
        .enumerate()
        .map(|(ix, (_, label, _))| (*label, c.category(ix)))
        .chain(std::iter::once(("Sentiments", c.sentiment.as_slice())));

    for (label, tokens) in sections {
        out.push_str(&format!("\n[{label}]\n"));
        for (word, n) in TokenFrequencyTable::from_tokens(tokens).top(top_n) {
            out.push_str(&format!("{n:>5}  {word}\n"));
        }
    }
    out
}
