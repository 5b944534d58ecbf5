use crate::cli::RunArgs;
use crate::config::{self, DddmapConfig};
use crate::io::output::create_writer;
use crate::model::load_model;
use crate::pipeline::{Analysis, Analyzer};
use anyhow::{Context, Result};

/// Configuration from `--config`, or discovered from the working directory
pub fn resolve_config(run: &RunArgs) -> Result<DddmapConfig> {
    match &run.config {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Load, classify and score the model named by `run`
pub fn run_analysis(run: &RunArgs, config: &DddmapConfig) -> Result<Analysis> {
    let mut classification = config.classification();
    if run.no_structural_tagging {
        classification.structural_tagging = false;
    }

    let mut model = load_model(&run.model)
        .with_context(|| format!("Failed to load model {}", run.model.display()))?;
    Analyzer::new(classification)
        .run(&mut model)
        .with_context(|| format!("Failed to analyze {}", run.model.display()))
}

/// Write the report in the requested or configured format
pub fn print_analysis(run: &RunArgs, config: &DddmapConfig, analysis: &Analysis) -> Result<()> {
    let format = run.format.unwrap_or_else(|| config.default_format());
    let max_hotspots = run.top.or_else(|| config.max_hotspots());
    create_writer(format, max_hotspots).write_report(&analysis.report)
}

pub fn handle_analyze(run: RunArgs) -> Result<()> {
    let config = resolve_config(&run)?;
    let analysis = run_analysis(&run, &config)?;
    print_analysis(&run, &config, &analysis)
}
