use anyhow::Context;

use crate::base;
use crate::cli;

/// Aggregate station records into a CSV report
#[derive(clap::Parser)]
pub struct Sum {
    #[arg(
        help = cli::sharedopts::INPUT_HELP,
        long_help = cli::sharedopts::INPUT_HELP_LONG,
    )]
    input: std::path::PathBuf,

    /// Write the report to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<std::path::PathBuf>,

    #[command(flatten)]
    stations_opts: cli::sharedopts::StationsOpts,
}

impl Sum {
    pub fn run(&self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let stations = cli::util::read_stations(&self.input, &config.input, fs)?;
        let patterns = cli::util::preprocess_patterns(
            &self.stations_opts.stations,
            self.stations_opts.fullmatch,
        );
        let not_patterns = cli::util::preprocess_patterns(
            &self.stations_opts.not_stations,
            self.stations_opts.fullmatch,
        );
        let csv = cli::util::filter_stations(&stations, &patterns, &not_patterns)
            .collect::<base::Csv>();
        log::debug!("released {} stations", stations.dispose());

        let Some(output) = &self.output else {
            return Ok(cli::Output::Csv(csv));
        };
        let path = fs.resolve(output);
        std::fs::write(&path, csv.to_string())
            .with_context(|| format!("failed to write '{}'", output.display()))?;
        let n = csv.rows.len();
        Ok(cli::Output::Str(format!(
            "Wrote {} station{} to '{}'",
            n,
            if n == 1 { "" } else { "s" },
            output.display()
        )))
    }
}
