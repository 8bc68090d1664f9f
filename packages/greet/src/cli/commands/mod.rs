use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::style::help_styles;

pub mod bye;
pub mod hello;
pub mod hi;
pub mod version;

const AFTER_HELP: &str = "\
Examples:
  $ greet
  Hello, World!

  $ greet Alice
  Hello, Alice!

  $ greet hi Bob
  Hi, Bob!

  $ greet bye \"Rust Developer\"
  Goodbye, Rust Developer!";

#[derive(Parser)]
#[command(
    name = "greet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A minimal Rust CLI monorepo template",
    long_about = "Greet composes one trivial greeting crate per subcommand into a single \
                  CLI surface, as a template for structuring Rust tools as a workspace \
                  of small packages.",
    after_help = AFTER_HELP,
    args_conflicts_with_subcommands = true,
    styles = help_styles()
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Name to greet when no subcommand is given
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Say hello to someone
    Hello(hello::HelloArgs),
    /// Say hi to someone
    Hi(hi::HiArgs),
    /// Say goodbye to someone
    Bye(bye::ByeArgs),
    /// Show version information
    Version(version::VersionArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        setup_logging(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Hello(args)) => hello::execute(args),
            Some(Commands::Hi(args)) => hi::execute(args),
            Some(Commands::Bye(args)) => bye::execute(args),
            Some(Commands::Version(args)) => version::execute(args),
            // Default behavior - greet like `hello` with the top-level name
            None => hello::execute(hello::HelloArgs { name: self.name }),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // Diagnostics go to stderr so the greeting stays the only stdout line
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
