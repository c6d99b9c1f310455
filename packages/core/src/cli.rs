use clap::Parser;

/// Vanguard store watcher CLI arguments
///
/// Every flag falls back to an environment variable (see `Config`), so all
/// of them are optional at parse time.
#[derive(Debug, Default, Parser)]
#[command(
    name = "vanguard-store",
    version,
    about = "Poll the CR Vanguard store locator and report stores near a position"
)]
pub struct Cli {
    /// Longitude of the search position
    #[arg(short = 'l', long = "long", allow_hyphen_values = true)]
    pub longitude: Option<String>,

    /// Latitude of the search position
    #[arg(short = 't', long = "lat", allow_hyphen_values = true)]
    pub latitude: Option<String>,

    /// Only report stores whose name or address contains this text
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Bark device key; enables push notifications for matches
    #[arg(short = 'b', long)]
    pub bark: Option<String>,

    /// Poll interval in seconds (default 60; zero or negative means 60)
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub sleep: Option<i64>,
}
