use super::analyze::{print_analysis, resolve_config, run_analysis};
use crate::cli::RunArgs;
use anyhow::Result;

/// Whether the global fitness meets the threshold
pub fn meets_threshold(fitness: f64, min_fitness: f64) -> bool {
    fitness >= min_fitness
}

pub fn validate_model(run: RunArgs, min_fitness: Option<f64>) -> Result<()> {
    let config = resolve_config(&run)?;
    let threshold = min_fitness.unwrap_or_else(|| config.thresholds().min_fitness);
    let analysis = run_analysis(&run, &config)?;
    print_analysis(&run, &config, &analysis)?;

    let fitness = analysis.report.fitness();
    if meets_threshold(fitness, threshold) {
        eprintln!("Validation passed: fitness {fitness:.2}% >= {threshold:.2}%");
        Ok(())
    } else {
        eprintln!("Validation failed: fitness {fitness:.2}% < {threshold:.2}%");
        anyhow::bail!("Validation failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert!(meets_threshold(80.0, 80.0));
        assert!(!meets_threshold(79.99, 80.0));
    }
}
