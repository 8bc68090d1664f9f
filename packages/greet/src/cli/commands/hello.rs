use anyhow::Result;
use clap::Args;
use greet_hello::say_hello;

#[derive(Args, Default)]
pub struct HelloArgs {
    /// Name to greet
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}

pub fn execute(args: HelloArgs) -> Result<()> {
    tracing::debug!("formatting hello greeting");
    println!("{}", say_hello(args.name.as_deref()));
    Ok(())
}
