use anyhow::Result;
use clap::Args;
use greet_bye::say_bye;

#[derive(Args, Default)]
pub struct ByeArgs {
    /// Name to bid farewell
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}

pub fn execute(args: ByeArgs) -> Result<()> {
    println!("{}", say_bye(args.name.as_deref()));
    Ok(())
}
