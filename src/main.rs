use anyhow::Context;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tvc::areas::repository::Repository;
use tvc::artifacts::core::PagerWriter;

#[derive(Parser)]
#[command(
    name = "tvc",
    version = "0.1.0",
    about = "A tiny local version control tool",
    long_about = "tvc snapshots tracked files into content-addressed commits \
    and restores earlier snapshots by replaying the commit log.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .tvc directory in the current directory."
    )]
    Init,
    #[command(
        name = "add",
        about = "Start tracking files",
        long_about = "This command adds files, or every file under a directory, to the index."
    )]
    Add {
        #[arg(index = 1, help = "Files or directories to track")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Snapshot every tracked file",
        long_about = "This command records a new commit containing every tracked file. \
        It requires at least one tracked file to have changed since the last commit."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "log", about = "Show commit history, newest first")]
    Log,
    #[command(
        name = "checkout",
        about = "Restore the working tree to a commit",
        long_about = "This command restores the files changed between HEAD and the target commit. \
        The target is a commit hash, a unique hash prefix, or 'latest'."
    )]
    Checkout {
        #[arg(index = 1, help = "Commit hash or 'latest'")]
        target: Option<String>,
    },
    #[command(name = "status", about = "Show staged and tracked files")]
    Status,
    #[command(
        name = "config",
        about = "Read or set a configuration value",
        long_about = "This command prints the value of a key, or sets it when a value is given. \
        The author recorded in commits is read from the 'name' key."
    )]
    Config {
        #[arg(index = 1, help = "The configuration key")]
        key: Option<String>,
        #[arg(index = 2, help = "The value to set")]
        value: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            if let Some(hint) = err.downcast_ref::<tvc::Error>().and_then(tvc::Error::hint) {
                eprintln!("hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_env("TVC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn should_page() -> bool {
    std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal()
}

fn open_repository(writer: Box<dyn std::io::Write>) -> anyhow::Result<Repository> {
    let pwd = std::env::current_dir().context("failed to read the current directory")?;

    Ok(Repository::new(&pwd, writer)?)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init => {
            open_repository(Box::new(std::io::stdout()))?.init().await?;
        }
        Commands::Add { paths } => {
            open_repository(Box::new(std::io::stdout()))?
                .add(&paths)
                .await?;
        }
        Commands::Commit { message } => {
            open_repository(Box::new(std::io::stdout()))?
                .commit(message.as_deref().unwrap_or_default())
                .await?;
        }
        Commands::Log => {
            if should_page() {
                let pager = minus::Pager::new();
                let repository = open_repository(Box::new(PagerWriter::new(pager.clone())))?;
                repository.log()?;
                minus::page_all(pager).context("failed to page log output")?;
            } else {
                open_repository(Box::new(std::io::stdout()))?.log()?;
            }
        }
        Commands::Checkout { target } => {
            open_repository(Box::new(std::io::stdout()))?
                .checkout(target.as_deref().unwrap_or_default())
                .await?;
        }
        Commands::Status => {
            open_repository(Box::new(std::io::stdout()))?
                .status()
                .await?;
        }
        Commands::Config { key, value } => {
            let key = key.ok_or_else(|| tvc::Error::Usage("config needs a key".to_string()))?;
            open_repository(Box::new(std::io::stdout()))?
                .configure(&key, value.as_deref())
                .await?;
        }
    }

    Ok(())
}
