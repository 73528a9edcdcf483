mod commands;
mod terminal;

use anagrm_common::config::Config;
use commands::{CommandLine, Commands, count, generate, info};
use terminal::{print, spinner};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    spinner::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info()
        }
        Commands::Count { letters } => {
            print::header("counting arrangements", cfg.quiet);
            count::count(letters, &cfg)
        }
        Commands::Generate { letters } => {
            print::header("rearranging letters", cfg.quiet);
            generate::generate(letters, &cfg)
        }
    }
}
