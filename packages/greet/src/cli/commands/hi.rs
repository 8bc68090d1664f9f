use anyhow::Result;
use clap::Args;
use greet_hi::say_hi;

#[derive(Args, Default)]
pub struct HiArgs {
    /// Name to greet
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}

pub fn execute(args: HiArgs) -> Result<()> {
    println!("{}", say_hi(args.name.as_deref()));
    Ok(())
}
