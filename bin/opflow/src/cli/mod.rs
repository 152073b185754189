use clap::{value_parser, Parser, Subcommand};

pub mod args;
pub mod commands;

/// The main Opflow CLI interface
#[derive(Debug, Parser)]
#[command(author, version, about = "Opflow", long_about = None)]
pub struct Cli {
    /// The command to execute
    #[clap(subcommand)]
    command: Commands,

    /// The verbosity level
    #[clap(long, short, global = true, default_value_t = 2, value_parser = value_parser!(u8).range(..=4))]
    verbosity: u8,
}

impl Cli {
    /// Get the log level based on the verbosity level
    pub fn get_log_level(&self) -> String {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
        .into()
    }
}

/// Commands to be executed
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in with a social auth provider and run the contextual account
    /// action (deploy the smart account or execute the demonstration user
    /// operation)
    #[command(name = "session")]
    Session(commands::SessionCommand),
}

pub fn run() -> eyre::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let rust_log = match std::env::var("RUST_LOG") {
        Ok(val) => format!("{val},opflow={}", cli.get_log_level()),
        Err(_) => format!("opflow={}", cli.get_log_level()),
    };
    std::env::set_var("RUST_LOG", rust_log);
    tracing_subscriber::fmt::init();

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    rt.block_on(async move {
        match cli.command {
            Commands::Session(command) => command.execute().await,
        }
    })
}
