//! CLI command handlers

use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::analysis::lexicon::all_lexicons;
use crate::analysis::result::AnalysisResult;
use crate::cli::commands::LexiconKind;
use crate::cli::commands::OutputFormat;
use crate::cli::output::*;
use crate::models::RawUserData;
use crate::persona::PersonaComparison;
use crate::persona::PersonaSummary;
use crate::AppConfig;
use crate::PersonaError;
use crate::PersonaLens;
use crate::Result;

#[derive(Serialize)]
struct AnalysisReport<'a> {
    analysis: &'a AnalysisResult,
    persona: &'a PersonaSummary,
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    first: &'a PersonaSummary,
    second: &'a PersonaSummary,
    comparison: &'a PersonaComparison,
}

/// Render a result in the requested format
pub fn render_result(
    subject: &str,
    result: &AnalysisResult,
    persona: Option<&PersonaSummary>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = match persona {
                Some(persona) => serde_json::to_string_pretty(&AnalysisReport {
                    analysis: result,
                    persona,
                })?,
                None => serde_json::to_string_pretty(result)?,
            };
            Ok(json)
        }
        OutputFormat::Text => {
            let mut text = render_analysis_text(subject, result)?;
            if let Some(persona) = persona {
                text.push('\n');
                text.push_str(&render_persona_text(persona)?);
            }
            Ok(text)
        }
    }
}

/// Relative output paths land in the configured output directory, if any
pub fn resolve_output_path(config: &AppConfig, path: &Path) -> PathBuf {
    match config.output.directory.as_deref() {
        Some(dir) if path.is_relative() => Path::new(dir).join(path),
        _ => path.to_path_buf(),
    }
}

/// Write rendered output to a file, or print it when no path is given
fn emit(lens: &PersonaLens, rendered: &str, output: Option<&Path>, what: &str) -> Result<()> {
    match output {
        Some(path) => {
            let path = resolve_output_path(lens.config(), path);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, rendered)?;
            info!("Wrote {} to {}", what, path.display());
            print_success(&format!("{} written to {}", capitalize_first(what), path.display()));
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn subject_name(data: &RawUserData, input: &Path) -> String {
    data.username
        .clone()
        .unwrap_or_else(|| input.display().to_string())
}

/// Handle analyze command
pub async fn handle_analyze_command(
    lens: &PersonaLens,
    input: &Path,
    format: Option<OutputFormat>,
    output: Option<&Path>,
    persona: bool,
) -> Result<()> {
    let data = crate::load_user_data(input)?;
    let subject = subject_name(&data, input);
    if output.is_some() {
        // stdout carries the result itself otherwise
        print_info(&format!(
            "Analyzing {} activities for {subject}",
            data.activity_count()
        ));
    }

    let result = lens.analyze(&data).await;
    if result == AnalysisResult::empty() {
        print_warning(&format!("No analyzable text found for {subject}"));
    }

    let summary = persona
        .then(|| PersonaSummary::from_analysis(&subject, &result).with_sources(&data));
    let format = format.unwrap_or_else(|| OutputFormat::from_config(&lens.config().output.format));
    let rendered = render_result(&subject, &result, summary.as_ref(), format)?;

    emit(lens, &rendered, output, "analysis")
}

/// Persona summaries for two subjects plus their comparison
pub async fn compare_files(
    lens: &PersonaLens,
    first: &Path,
    second: &Path,
) -> Result<(PersonaSummary, PersonaSummary, PersonaComparison)> {
    let mut personas = Vec::with_capacity(2);
    for input in [first, second] {
        let data = crate::load_user_data(input)?;
        let subject = subject_name(&data, input);
        let result = lens.analyze(&data).await;
        personas.push(PersonaSummary::from_analysis(&subject, &result).with_sources(&data));
    }
    let second = personas.pop().ok_or_else(|| PersonaError::Custom("missing persona".into()))?;
    let first = personas.pop().ok_or_else(|| PersonaError::Custom("missing persona".into()))?;
    let comparison = first.compare(&second);
    Ok((first, second, comparison))
}

/// Handle compare command
pub async fn handle_compare_command(
    lens: &PersonaLens,
    first: &Path,
    second: &Path,
    format: Option<OutputFormat>,
    output: Option<&Path>,
) -> Result<()> {
    let (first, second, comparison) = compare_files(lens, first, second).await?;
    info!(
        "Compared {} and {}: compatibility {:.2}",
        first.username, second.username, comparison.compatibility_score
    );

    let format = format.unwrap_or_else(|| OutputFormat::from_config(&lens.config().output.format));
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&ComparisonReport {
            first: &first,
            second: &second,
            comparison: &comparison,
        })?,
        OutputFormat::Text => render_comparison_text(&first, &second, &comparison)?,
    };

    emit(lens, &rendered, output, "comparison")
}

/// Handle lexicons command
pub fn handle_lexicons_command(category: Option<LexiconKind>) -> Result<()> {
    for lexicon in all_lexicons() {
        if category.map_or(true, |kind| kind.name() == lexicon.name()) {
            print_lexicon(lexicon);
        }
    }
    Ok(())
}

/// Handle config command
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
