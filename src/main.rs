use anyhow::Result;
use clap::Parser;
use dddmap::cli::{configure_thread_pool, init_logging, Cli, Commands, RunArgs};
use dddmap::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    apply_color(&cli);

    match cli.command {
        Commands::Analyze { run } => {
            setup_run(&run);
            dddmap::commands::handle_analyze(run)
        }
        Commands::Validate { run, min_fitness } => {
            setup_run(&run);
            dddmap::commands::validate_model(run, min_fitness)
        }
        Commands::Init { force } => dddmap::commands::init_config(force),
    }
}

fn setup_run(run: &RunArgs) {
    configure_thread_pool(run.jobs);
}

// An explicit --color wins over the environment
fn apply_color(cli: &Cli) {
    let formatting = match cli.color {
        dddmap::formatting::ColorMode::Auto => FormattingConfig::from_env(),
        mode => FormattingConfig::new(mode),
    };
    formatting.apply();
}
