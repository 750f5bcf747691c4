use crate::base;
use crate::cli;

/// View station totals as an aligned table
#[derive(clap::Parser)]
pub struct View {
    #[arg(
        help = cli::sharedopts::INPUT_HELP,
        long_help = cli::sharedopts::INPUT_HELP_LONG,
    )]
    input: std::path::PathBuf,

    #[command(flatten)]
    stations_opts: cli::sharedopts::StationsOpts,
}

impl View {
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
        let rows = cli::util::filter_stations(&stations, &patterns, &not_patterns)
            .map(|(s, c, d)| (s.to_string(), base::Totals::new(c, d)))
            .collect::<Vec<_>>();
        log::debug!("released {} stations", stations.dispose());

        Ok(cli::Output::Table(base::table::Config {
            charset: cli::util::charset_from_config(config),
            rows,
        }))
    }
}
