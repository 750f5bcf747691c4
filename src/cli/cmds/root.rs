use anyhow::Context;

use crate::base;
use crate::cli;

/// Per-station electricity totals
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Sum(cli::cmds::sum::Sum),
    View(cli::cmds::view::View),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Sum(cmd) => cmd.run(&config, fs),
            Commands::View(cmd) => cmd.run(&config, fs),
        }
    }
}
