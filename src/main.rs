use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use travel_icons::IconSet;

#[derive(Debug, Parser)]
#[clap(
    name = "travel-icons",
    about = "Draw the travel app icon and export it for iOS, Android and Expo"
)]
struct Args {
    /// Root directory the icon layouts are written under.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Which icon set to generate.
    #[clap(long, value_enum, default_value_t = IconSet::All)]
    set: IconSet,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let total = travel_icons::generate(args.set, &args.output)?;
    println!("✓ Total: {total} icons generated");

    Ok(())
}
