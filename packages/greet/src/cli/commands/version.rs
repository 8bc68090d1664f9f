use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct VersionArgs {
    /// Show detailed version information
    #[arg(long)]
    pub detailed: bool,
}

pub fn execute(args: VersionArgs) -> Result<()> {
    // Git SHA comes from build time, "unknown" outside a checkout
    let git_sha = option_env!("GIT_SHA").unwrap_or("unknown");

    println!("greet {} ({})", env!("CARGO_PKG_VERSION"), git_sha);
    if args.detailed {
        println!("Rust Edition: 2024");
        println!("Repository: {}", env!("CARGO_PKG_REPOSITORY"));
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Description: {}", env!("CARGO_PKG_DESCRIPTION"));
    }
    Ok(())
}
