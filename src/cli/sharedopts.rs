pub const INPUT_HELP: &str = "Station records file, or '-' for standard input";
pub const INPUT_HELP_LONG: &str = "Station records file, or '-' for standard input

Each line holds one record. By default lines are comma separated with the station identifier in the first column, capacity in the seventh and consumption in the eighth, and '-' marks a missing quantity. The layout can be changed in the 'input' section of the config file.";

pub const FULLMATCH_HELP: &str = "Match station patterns against whole identifiers";
pub const FULLMATCH_HELP_LONG: &str = "Match station patterns against whole identifiers

By default, a pattern 'P' is treated as '*P*', so it matches any identifier containing 'P'. With this flag, patterns are used as given.";

#[derive(clap::Args)]
pub struct StationsOpts {
    /// Wildcard patterns to match stations of interest
    ///
    /// Use commas to separate multiple patterns. A station is included if its
    /// identifier matches any pattern.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub stations: Vec<String>,

    /// Wildcard patterns to match stations to exclude
    ///
    /// Use commas to separate multiple patterns. A station is excluded if its
    /// identifier matches any pattern. Takes precedence over '--stations'.
    #[arg(
        short = 'x',
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "",
        hide_default_value = true
    )]
    pub not_stations: Vec<String>,

    #[arg(long, help = FULLMATCH_HELP, long_help = FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,
}
