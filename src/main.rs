use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use landing_styles::{generate, split, LandingSettings, Manifest, RenderMode};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};

#[derive(Parser)]
#[command(
    name = "landing-styles",
    version,
    about = "Generate per-category and per-tag landing page selectors"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the landing page stylesheet from theme settings
    Generate(GenerateArgs),
    /// Split a string the way list settings are tokenized
    Split(SplitArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Theme settings JSON file
    #[arg(short, long)]
    settings: PathBuf,

    /// Output flavor: extend (SCSS), grouped or inline (CSS)
    #[arg(short, long, default_value = "extend")]
    mode: RenderMode,

    /// Write the stylesheet here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a JSON manifest of the run
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Override the comma-delimited category list
    #[arg(long)]
    categories: Option<String>,

    /// Override the pipe-delimited tag list
    #[arg(long)]
    tags: Option<String>,

    /// Force generation on
    #[arg(long, conflicts_with = "disable")]
    enable: bool,

    /// Force generation off
    #[arg(long)]
    disable: bool,
}

#[derive(Args)]
struct SplitArgs {
    /// Text to split
    input: String,

    /// Literal separator; empty splits per character, omitted disables splitting
    #[arg(short, long)]
    separator: Option<String>,

    /// Maximum number of tokens
    #[arg(short, long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Print tokens as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Split(args) => run_split(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let start_time = Instant::now();

    let mut settings = LandingSettings::from_path(&args.settings).with_context(|| {
        format!("Failed to load settings from {}", args.settings.display())
    })?;

    if let Some(categories) = args.categories {
        settings = settings.with_categories(categories);
    }
    if let Some(tags) = args.tags {
        settings = settings.with_tags(tags);
    }
    if args.enable {
        settings = settings.with_enabled(true);
    }
    if args.disable {
        settings = settings.with_enabled(false);
    }

    let generation = generate(&settings).context("Failed to generate landing page bindings")?;
    let stylesheet = generation.render(args.mode);

    match &args.output {
        Some(path) => {
            fs::write(path, &stylesheet)
                .with_context(|| format!("Failed to write stylesheet: {}", path.display()))?;
            info!(path = %path.display(), bytes = stylesheet.len(), "wrote stylesheet");
        }
        None => io::stdout()
            .write_all(stylesheet.as_bytes())
            .context("Failed to write stylesheet to stdout")?,
    }

    if let Some(path) = &args.manifest {
        Manifest::new(&generation, args.mode, &stylesheet).write_to(path)?;
    }

    info!(
        bindings = generation.bindings.len(),
        mode = %args.mode,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "generation complete"
    );

    Ok(())
}

fn run_split(args: SplitArgs) -> Result<()> {
    let tokens = split(&args.input, args.separator.as_deref(), args.limit);

    let mut stdout = io::stdout().lock();
    if args.json {
        let json = serde_json::to_string(&tokens).context("Failed to serialize tokens")?;
        writeln!(stdout, "{}", json)?;
    } else {
        for token in tokens {
            writeln!(stdout, "{}", token)?;
        }
    }

    Ok(())
}
