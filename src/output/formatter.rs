use crate::bench::VariantResult;
use crate::listing::Excerpt;
use anyhow::{Context, Result};
use colored::*;
use prettytable::{format, Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// Everything a single run produces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    /// Path to the assembly listing that was scanned
    pub listing_path: String,
    /// One timed result per summation variant
    pub results: Vec<VariantResult>,
    /// One excerpt per function name looked up in the listing
    pub excerpts: Vec<Excerpt>,
}

/// Formats the bench report based on the specified output format
pub fn format_output(report: &BenchReport, format: &crate::cli::OutputFormat) -> Result<String> {
    match format {
        crate::cli::OutputFormat::Text => format_text(report),
        crate::cli::OutputFormat::Json => format_json(report),
    }
}

/// Formats the report as colorized human-readable text
fn format_text(report: &BenchReport) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", "Summation Micro-Benchmark".bold().cyan()));
    output.push_str(&format!("Listing: {}\n\n", report.listing_path));

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(Row::new(vec![
        Cell::new("Variant").style_spec("b"),
        Cell::new("Elapsed (s)").style_spec("b"),
        Cell::new("Sum").style_spec("b"),
    ]));
    for result in &report.results {
        table.add_row(Row::new(vec![
            Cell::new(&result.name),
            Cell::new(&format!("{:.9}", result.elapsed_secs)),
            Cell::new(&result.sum.to_string()),
        ]));
    }
    output.push_str(&table.to_string());

    for excerpt in &report.excerpts {
        output.push('\n');
        output.push_str(&format_excerpt(excerpt));
    }

    Ok(output)
}

/// Renders one excerpt: header only if the region was entered, instruction
/// lines verbatim, footer with the count always.
fn format_excerpt(excerpt: &Excerpt) -> String {
    let mut section = String::new();

    if let Some(header) = &excerpt.header {
        section.push_str(&format!(
            "{} {}\n",
            "==>".bold().yellow(),
            header.trim().bold().yellow()
        ));
        for line in &excerpt.instructions {
            section.push_str(line);
            section.push('\n');
        }
    }

    section.push_str(&format!(
        "{} {} instruction line(s) for {}\n",
        "---".magenta(),
        excerpt.instruction_count(),
        excerpt.function.green()
    ));

    section
}

/// Formats the report as pretty-printed JSON
fn format_json(report: &BenchReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize bench report to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn create_test_report() -> BenchReport {
        BenchReport {
            listing_path: "out.asm".to_string(),
            results: vec![
                VariantResult {
                    name: "sum_array".to_string(),
                    elapsed_secs: 0.000001,
                    sum: 4596,
                },
                VariantResult {
                    name: "sum_array_unrolled".to_string(),
                    elapsed_secs: 0.000002,
                    sum: 4596,
                },
            ],
            excerpts: vec![
                Excerpt {
                    function: "sum_array".to_string(),
                    header: Some("sum_array:".to_string()),
                    instructions: vec!["\tmov eax, 1".to_string(), "\tret".to_string()],
                },
                Excerpt {
                    function: "missing_fn".to_string(),
                    header: None,
                    instructions: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_text_output() {
        let report = create_test_report();
        let output = format_output(&report, &OutputFormat::Text).unwrap();

        assert!(output.contains("Summation Micro-Benchmark"));
        assert!(output.contains("out.asm"));
        assert!(output.contains("sum_array_unrolled"));
        assert!(output.contains("4596"));
        assert!(output.contains("\tmov eax, 1"));
        assert!(output.contains("2 instruction line(s)"));
    }

    #[test]
    fn test_text_output_missing_function_has_footer_no_header() {
        let report = create_test_report();
        let output = format_output(&report, &OutputFormat::Text).unwrap();

        assert!(output.contains("0 instruction line(s)"));
        assert!(!output.contains("==> missing_fn"));
    }

    #[test]
    fn test_json_output() {
        let report = create_test_report();
        let output = format_output(&report, &OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["listing_path"], "out.asm");
        assert_eq!(value["results"][0]["sum"], 4596);
        assert_eq!(value["excerpts"][1]["header"], serde_json::Value::Null);
    }
}
