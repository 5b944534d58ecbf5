use crate::core::DddType;
use crate::formatting::{paint_percentage, paint_rating};
use crate::metrics::{ArtifactSummary, OodModuleMetrics, Report};
use colored::*;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    max_hotspots: Option<usize>,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, max_hotspots: Option<usize>) -> Self {
        Self {
            writer,
            max_hotspots,
        }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_summary(report)?;
        self.write_counts(report)?;
        self.write_hotspots(report)?;
        self.write_ood(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_summary(&mut self, report: &Report) -> anyhow::Result<()> {
        let fitness = &report.ddd.fitness;
        writeln!(self.writer, "# DDD Fitness Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Score | {} |", fitness.score)?;
        writeln!(self.writer, "| Fitness | {:.2}% |", fitness.fitness)?;
        writeln!(
            self.writer,
            "| Criteria fulfilled | {} / {} |",
            fitness.criteria.fulfilled, fitness.criteria.total
        )?;
        writeln!(self.writer, "| Issues | {} |", fitness.issue_count)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_counts(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "## Artifacts by Role")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Role | Count |")?;
        writeln!(self.writer, "|------|-------|")?;
        for (ddd_type, count) in &report.ddd.artifact_counts {
            writeln!(self.writer, "| {ddd_type} | {count} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_hotspots(&mut self, report: &Report) -> anyhow::Result<()> {
        if report.ddd.hotspots.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Hotspots")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Artifact | Role | Fitness | Issues |")?;
        writeln!(self.writer, "|----------|------|---------|--------|")?;
        for spot in limit(&report.ddd.hotspots, self.max_hotspots) {
            writeln!(
                self.writer,
                "| `{}` | {} | {:.2}% | {} |",
                spot.path,
                role_label(spot.ddd_type),
                spot.percentage,
                spot.issue_count
            )?;
        }
        let hidden = hidden_count(&report.ddd.hotspots, self.max_hotspots);
        if hidden > 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "_{hidden} more hotspots not shown_")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ood(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "## Module Coupling")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Module | Files | Ca | Ce | Abstractness | Instability | Distance |"
        )?;
        writeln!(
            self.writer,
            "|--------|-------|----|----|--------------|-------------|----------|"
        )?;
        for (path, metrics) in &report.ood.per_module {
            writeln!(
                self.writer,
                "| `{path}` | {} | {} | {} | {} | {} | {} |",
                metrics.files,
                metrics.afferent,
                metrics.efferent,
                ratio(metrics.abstractness),
                ratio(metrics.instability),
                ratio(metrics.distance)
            )?;
        }
        writeln!(self.writer)?;
        if let Some(distance) = report.ood.distance {
            writeln!(
                self.writer,
                "Distance from main sequence: avg {:.2}, min {:.2}, max {:.2}",
                distance.avg, distance.min, distance.max
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    max_hotspots: Option<usize>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, max_hotspots: Option<usize>) -> Self {
        Self {
            writer,
            max_hotspots,
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.print_header()?;
        self.print_summary(report)?;
        self.print_hotspots(report)?;
        self.print_ood(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "DDD Fitness Report".bold().blue())?;
        writeln!(self.writer, "{}", "==================".blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, report: &Report) -> anyhow::Result<()> {
        let fitness = &report.ddd.fitness;
        writeln!(
            self.writer,
            "  Score: {}  Fitness: {}  ({} of {} criteria, {} issues)",
            paint_rating(fitness.score),
            paint_percentage(fitness.fitness),
            fitness.criteria.fulfilled,
            fitness.criteria.total,
            fitness.issue_count
        )?;
        let roles: Vec<String> = report
            .ddd
            .artifact_counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(ddd_type, count)| format!("{ddd_type}: {count}"))
            .collect();
        if !roles.is_empty() {
            writeln!(self.writer, "  {}", roles.join(", ").dimmed())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_hotspots(&mut self, report: &Report) -> anyhow::Result<()> {
        if report.ddd.hotspots.is_empty() {
            writeln!(self.writer, "{}", "No hotspots".green())?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "{}", "Hotspots".bold())?;
        let mut table = create_table(&["ARTIFACT", "ROLE", "FITNESS", "ISSUES"]);
        for spot in limit(&report.ddd.hotspots, self.max_hotspots) {
            table.add_row(hotspot_row(spot));
        }
        writeln!(self.writer, "{table}")?;
        let hidden = hidden_count(&report.ddd.hotspots, self.max_hotspots);
        if hidden > 0 {
            writeln!(self.writer, "  ... and {hidden} more")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_ood(&mut self, report: &Report) -> anyhow::Result<()> {
        if report.ood.per_module.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "{}", "Module Coupling".bold())?;
        let mut table = create_table(&["MODULE", "FILES", "CA", "CE", "A", "I", "D"]);
        for (path, metrics) in &report.ood.per_module {
            table.add_row(ood_row(path, metrics));
        }
        writeln!(self.writer, "{table}")?;
        if let Some(distance) = report.ood.distance {
            writeln!(
                self.writer,
                "  Distance: avg {:.2}, min {:.2}, max {:.2}",
                distance.avg, distance.min, distance.max
            )?;
        }
        Ok(())
    }
}

fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        let header_cells: Vec<Cell> = headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect();
        table.set_header(header_cells);
    } else {
        table.set_header(headers);
    }
    table
}

fn hotspot_row(spot: &ArtifactSummary) -> Vec<String> {
    vec![
        spot.path.clone(),
        role_label(spot.ddd_type).to_string(),
        format!("{:.2}%", spot.percentage),
        spot.issue_count.to_string(),
    ]
}

fn ood_row(path: &str, metrics: &OodModuleMetrics) -> Vec<String> {
    vec![
        path.to_string(),
        metrics.files.to_string(),
        metrics.afferent.to_string(),
        metrics.efferent.to_string(),
        ratio(metrics.abstractness),
        ratio(metrics.instability),
        ratio(metrics.distance),
    ]
}

fn role_label(ddd_type: Option<DddType>) -> &'static str {
    ddd_type.map_or("-", |t| t.as_str())
}

fn ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn limit(items: &[ArtifactSummary], max: Option<usize>) -> &[ArtifactSummary] {
    match max {
        Some(max) if max < items.len() => &items[..max],
        _ => items,
    }
}

fn hidden_count(items: &[ArtifactSummary], max: Option<usize>) -> usize {
    items.len() - limit(items, max).len()
}

/// Writer for `format` on stdout. JSON always carries the full report.
pub fn create_writer(format: OutputFormat, max_hotspots: Option<usize>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout(), max_hotspots)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout(), max_hotspots)),
    }
}
