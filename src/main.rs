use anyhow::Result;
use clap::{Parser, Subcommand};
use gitstamp::OutputFormat;
use gitstamp::areas::repository::Repository;
use gitstamp::artifacts::tags::pattern::MATCH_ALL_TAGS;
use is_terminal::IsTerminal;

#[derive(Parser)]
#[command(
    name = "gitstamp",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Describe where a git repository stands",
    long_about = "This tool reports the commit, timestamp, branch, tags and working tree state \
    of a git repository, along with the nearest matching tag on the first-parent history. \
    It is meant to stamp build artifacts with their provenance.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "repository",
        global = true,
        env = "GITSTAMP_REPOSITORY",
        help = "Start repository discovery at this directory instead of the current one"
    )]
    repository: Option<String>,
    #[arg(long, global = true, help = "Print a JSON document instead of text")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct DescribeArgs {
    #[arg(
        long = "match",
        env = "GITSTAMP_TAG_PATTERN",
        default_value = MATCH_ALL_TAGS,
        help = "Only consider tags whose short name fully matches this regular expression"
    )]
    pattern: String,
    #[arg(
        long,
        env = "GITSTAMP_MAX_DEPTH",
        help = "Give up after walking this many first-parent steps"
    )]
    max_depth: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "situation",
        about = "Show hash, timestamp, branch, tags and cleanliness of a revision",
        long_about = "This command resolves a revision (HEAD by default) and reports its commit, \
        committer timestamp, branch, the tags pointing at it and whether the working tree is clean. \
        A repository without commits is reported with an all-zero hash."
    )]
    Situation {
        #[arg(index = 1, help = "The revision to inspect")]
        revision: Option<String>,
    },
    #[command(
        name = "describe",
        about = "Name a revision after its nearest first-parent tag",
        long_about = "This command walks the first-parent history of a revision (HEAD by default) \
        until it finds a commit carrying a matching tag, and prints the tag and the distance to it."
    )]
    Describe {
        #[arg(index = 1, help = "The revision to describe")]
        revision: Option<String>,
        #[command(flatten)]
        args: DescribeArgs,
    },
    #[command(
        name = "tags",
        about = "List the tags pointing at a revision",
        long_about = "This command lists the short names of the tags pointing at a revision \
        (HEAD by default), newest first."
    )]
    Tags {
        #[arg(index = 1, help = "The revision whose tags to list")]
        revision: Option<String>,
    },
    #[command(
        name = "stamp",
        about = "Show the situation and description of a revision together",
        long_about = "This command combines the situation and describe reports of a revision \
        (HEAD by default), reading the tags of the repository only once."
    )]
    Stamp {
        #[arg(index = 1, help = "The revision to stamp")]
        revision: Option<String>,
        #[command(flatten)]
        args: DescribeArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    colored::control::set_override(std::io::stdout().is_terminal());

    let path = match &cli.repository {
        Some(path) => path.clone(),
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };
    let repository = Repository::new(&path, Box::new(std::io::stdout()))?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match &cli.command {
        Commands::Situation { revision } => repository.situation(revision.as_deref(), format)?,
        Commands::Describe { revision, args } => repository.describe(
            revision.as_deref(),
            &args.pattern,
            args.max_depth,
            format,
        )?,
        Commands::Tags { revision } => repository.tags(revision.as_deref(), format)?,
        Commands::Stamp { revision, args } => {
            repository.stamp(revision.as_deref(), &args.pattern, args.max_depth, format)?
        }
    }

    Ok(())
}
