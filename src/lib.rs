pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod persona;

use std::path::Path;
use std::sync::Arc;

use tracing::info;

pub use analysis::AnalysisResult;
pub use analysis::PersonaAnalyzer;
pub use analysis::PolarityScorer;
pub use config::AppConfig;
pub use errors::*;
pub use models::RawUserData;
pub use persona::PersonaComparison;
pub use persona::PersonaSummary;

/// Library facade: configuration plus a ready analyzer
#[derive(Debug, Clone)]
pub struct PersonaLens {
    config: AppConfig,
    analyzer: PersonaAnalyzer,
}

impl PersonaLens {
    /// Create a new instance, validating the configuration and lexicon tables
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        analysis::validate_lexicons()?;
        let analyzer = PersonaAnalyzer::new(config.analysis.clone());
        Ok(Self { config, analyzer })
    }

    /// Same as [`PersonaLens::new`] but with a caller-supplied sentiment scorer
    pub fn with_scorer(config: AppConfig, scorer: Arc<dyn PolarityScorer>) -> Result<Self> {
        config.validate()?;
        analysis::validate_lexicons()?;
        let analyzer = PersonaAnalyzer::with_scorer(config.analysis.clone(), scorer);
        Ok(Self { config, analyzer })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &PersonaAnalyzer {
        &self.analyzer
    }

    pub async fn analyze(&self, data: &RawUserData) -> AnalysisResult {
        self.analyzer.analyze(data).await
    }

    /// Read a `RawUserData` JSON file and analyze it
    pub async fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisResult> {
        let path = path.as_ref();
        let data = load_user_data(path)?;
        info!(
            "Loaded {} posts and {} comments from {}",
            data.posts.len(),
            data.comments.len(),
            path.display()
        );
        Ok(self.analyze(&data).await)
    }
}

/// Parse a scraped-activity JSON file
pub fn load_user_data<P: AsRef<Path>>(path: P) -> Result<RawUserData> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Analyze with default configuration and the built-in scorer
pub async fn analyze(data: &RawUserData) -> AnalysisResult {
    PersonaAnalyzer::default().analyze(data).await
}
