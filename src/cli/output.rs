//! CLI output formatting utilities
//!
//! Text renderings are built as strings so they can be written to a file or
//! printed; the `print_*` helpers write straight to stdout.

use std::fmt;
use std::fmt::Write;

use crate::analysis::lexicon::CategoryLexicon;
use crate::analysis::result::AnalysisResult;
use crate::errors::PersonaError;
use crate::errors::Result;
use crate::persona::PersonaComparison;
use crate::persona::PersonaSummary;
use crate::AppConfig;

/// Safely truncate a string at character boundary (not byte boundary)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

fn ranked(items: &[(String, f64)]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(|(name, score)| format!("{name} ({score:.2})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable report of an analysis result
///
/// Empty facets are listed as "no data" rather than omitted.
pub fn render_analysis_text(subject: &str, result: &AnalysisResult) -> Result<String> {
    let mut out = String::new();
    write_analysis(&mut out, subject, result).map_err(render_error)?;
    Ok(out)
}

/// Human-readable persona summary
pub fn render_persona_text(persona: &PersonaSummary) -> Result<String> {
    let mut out = String::new();
    write_persona(&mut out, persona).map_err(render_error)?;
    Ok(out)
}

/// Human-readable comparison of two personas
pub fn render_comparison_text(
    first: &PersonaSummary,
    second: &PersonaSummary,
    comparison: &PersonaComparison,
) -> Result<String> {
    let mut out = String::new();
    write_comparison(&mut out, first, second, comparison).map_err(render_error)?;
    Ok(out)
}

fn render_error(e: fmt::Error) -> PersonaError {
    PersonaError::Custom(format!("Failed to render report: {e}"))
}

fn write_bullets(out: &mut String, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return writeln!(out, "  • none");
    }
    for item in items {
        writeln!(out, "  • {item}")?;
    }
    Ok(())
}

fn write_analysis(out: &mut String, subject: &str, result: &AnalysisResult) -> fmt::Result {
    writeln!(out, "📊 Persona analysis: {subject}")?;
    writeln!(out)?;

    writeln!(out, "📝 Text statistics:")?;
    match result.text_statistics.get() {
        Some(stats) => {
            writeln!(out, "  Texts: {}", stats.total_texts)?;
            writeln!(
                out,
                "  Words: {} ({} meaningful, {} distinct)",
                stats.total_words, stats.meaningful_words, stats.vocabulary_size
            )?;
            writeln!(out, "  Sentences: {}", stats.total_sentences)?;
            writeln!(out, "  Lexical diversity: {:.2}", stats.lexical_diversity)?;
        }
        None => writeln!(out, "  no data")?,
    }

    writeln!(out, "😊 Sentiment:")?;
    match result.sentiment_analysis.get() {
        Some(sentiment) => {
            writeln!(
                out,
                "  {} ({:.2}), subjectivity {:.2}",
                sentiment.sentiment_category, sentiment.overall_sentiment, sentiment.subjectivity
            )?;
            let d = &sentiment.sentiment_distribution;
            writeln!(
                out,
                "  Distribution: {} positive, {} neutral, {} negative",
                d.positive, d.neutral, d.negative
            )?;
            if let Some(trend) = sentiment.sentiment_trends.get() {
                writeln!(out, "  Trend: {} ({:+.2})", trend.trend, trend.change)?;
            }
        }
        None => writeln!(out, "  no data")?,
    }

    writeln!(out, "🧠 Personality:")?;
    match result.personality_traits.get() {
        Some(traits) => {
            writeln!(out, "  Type: {}", traits.personality_type)?;
            writeln!(out, "  Dominant: {}", ranked(&traits.dominant_traits))?;
        }
        None => writeln!(out, "  no data")?,
    }

    writeln!(out, "🎯 Interests:")?;
    match result.interests.get() {
        Some(interests) => {
            writeln!(out, "  Primary: {}", interests.primary_interest)?;
            writeln!(out, "  Top: {}", ranked(&interests.top_interests))?;
        }
        None => writeln!(out, "  no data")?,
    }

    writeln!(out, "✍️  Writing style:")?;
    match result.writing_style.get() {
        Some(style) => {
            writeln!(out, "  {}", style.summary)?;
            writeln!(
                out,
                "  Avg sentence length {:.1} tokens, avg word length {:.1}",
                style.avg_sentence_length, style.avg_word_length
            )?;
        }
        None => writeln!(out, "  no data")?,
    }

    writeln!(out, "🕐 Activity:")?;
    match result.activity_patterns.get() {
        Some(activity) => writeln!(
            out,
            "  {} activities, peak hour {:02}:00 UTC, {}",
            activity.total_activities, activity.peak_hour, activity.activity_pattern
        )?,
        None => writeln!(out, "  no data")?,
    }

    writeln!(out, "👥 Communities:")?;
    match result.community_engagement.get() {
        Some(community) => {
            let top = community
                .top_communities
                .iter()
                .map(|(name, count)| format!("{name} ({count})"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "  Top: {top}")?;
            writeln!(
                out,
                "  Engagement: {} (avg score {:.1})",
                community.engagement_level, community.avg_score
            )?;
        }
        None => writeln!(out, "  no data")?,
    }

    writeln!(out, "🗂️  Topics:")?;
    match result.topic_modeling.get() {
        Some(model) => {
            for topic in &model.topics {
                writeln!(
                    out,
                    "  #{}: {}",
                    topic.topic_id,
                    truncate_str(&topic.top_words.join(", "), 80)
                )?;
            }
        }
        None => writeln!(out, "  no data")?,
    }

    writeln!(out, "🔍 Behavioral clusters:")?;
    match result.behavioral_clusters.get() {
        Some(clusters) => {
            for cluster in &clusters.clusters {
                writeln!(
                    out,
                    "  #{}: {} items, avg score {:.1}, avg length {:.0}",
                    cluster.cluster_id, cluster.size, cluster.avg_score, cluster.avg_length
                )?;
            }
        }
        None => writeln!(out, "  no data")?,
    }

    writeln!(out, "🎭 MBTI estimate:")?;
    match result.mbti_estimation.get() {
        Some(mbti) => writeln!(out, "  {}: {}", mbti.mbti_type, mbti.description)?,
        None => writeln!(out, "  no data")?,
    }

    writeln!(out)?;
    writeln!(out, "📈 Confidence:")?;
    if result.confidence_scores.is_empty() {
        writeln!(out, "  none")?;
    }
    for (facet, value) in result.confidence_scores.iter() {
        writeln!(out, "  {facet}: {value:.2}")?;
    }

    Ok(())
}

fn write_persona(out: &mut String, persona: &PersonaSummary) -> fmt::Result {
    writeln!(out, "--- Persona: {} ---", persona.username)?;
    writeln!(out)?;
    writeln!(out, "🎭 Personality type: {}", persona.mbti_type)?;
    writeln!(out, "   {}", persona.mbti_description)?;
    writeln!(out, "   {}", persona.description)?;
    writeln!(out)?;
    writeln!(out, "🧠 Key traits:")?;
    write_bullets(out, &persona.traits)?;
    writeln!(out, "🎯 Main interests:")?;
    write_bullets(out, &persona.interests)?;
    writeln!(out, "🗣️  Social views:")?;
    write_bullets(out, &persona.social_views)?;
    writeln!(out, "📝 Writing style: {}", persona.writing_style)?;
    writeln!(out, "👥 Engagement: {}", persona.engagement_level)?;
    writeln!(out, "🕐 Activity pattern: {}", persona.activity_pattern)?;
    writeln!(out)?;

    let b = &persona.big_five;
    writeln!(out, "🌟 Big Five:")?;
    writeln!(out, "  Openness: {}", b.openness)?;
    writeln!(out, "  Conscientiousness: {}", b.conscientiousness)?;
    writeln!(out, "  Extraversion: {}", b.extraversion)?;
    writeln!(out, "  Agreeableness: {}", b.agreeableness)?;
    writeln!(out, "  Neuroticism: {}", b.neuroticism)?;

    if !persona.citations.is_empty() {
        writeln!(out)?;
        writeln!(out, "📎 Citations:")?;
        for citation in &persona.citations {
            writeln!(
                out,
                "  [{}] {} in {}: \"{}\"",
                citation.trait_name,
                citation.source_type,
                citation.community.as_deref().unwrap_or("unknown"),
                truncate_str(&citation.quote, 60)
            )?;
            if let Some(link) = citation.permalink.as_deref() {
                writeln!(out, "    {link}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out, "Confidence: {:.2}", persona.overall_confidence)
}

fn write_comparison(
    out: &mut String,
    first: &PersonaSummary,
    second: &PersonaSummary,
    comparison: &PersonaComparison,
) -> fmt::Result {
    writeln!(out, "⚖️  {} vs {}", first.username, second.username)?;
    writeln!(out)?;
    writeln!(out, "✅ Similarities:")?;
    write_bullets(out, &comparison.similarities)?;
    writeln!(out, "↔️  Differences:")?;
    write_bullets(out, &comparison.differences)?;
    writeln!(out)?;
    writeln!(out, "Compatibility: {:.2}", comparison.compatibility_score)
}

/// Print one lexicon table
pub fn print_lexicon(lexicon: &CategoryLexicon) {
    println!("📚 {} ({} categories)", lexicon.name(), lexicon.len());
    for (category, keywords) in lexicon.categories() {
        println!("  {category}: {}", keywords.join(", "));
    }
    println!();
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 PersonaLens Configuration:");
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!(
        "  Log directory: {}",
        config.logging.log_dir.as_deref().unwrap_or("(console only)")
    );
    println!();

    let analysis = &config.analysis;
    println!("🧠 Analysis:");
    println!("  Min text length: {} chars", analysis.min_text_length);
    println!("  Recent window: {} units", analysis.recent_window);
    println!("  Top N: {}", analysis.top_n);
    println!("  Max topics: {}", analysis.max_topics);
    println!("  Topic min units: {}", analysis.topic_min_units);
    println!("  Max clusters: {}", analysis.max_clusters);
    println!();

    println!("📤 Output:");
    println!("  Format: {}", config.output.format);
    println!(
        "  Directory: {}",
        config.output.directory.as_deref().unwrap_or("(current directory)")
    );
}

/// Print colored output functions
pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {msg}");
}
