use std::path::PathBuf;

/// What happened to one target language during a run
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageOutcome {
    /// Nothing was missing
    UpToDate,
    /// Missing entries were translated and the file written
    Updated { translated: usize, path: PathBuf },
    /// Dry run: these key paths would be translated
    Pending { missing: Vec<String> },
    Failed { error: String },
}

/// Per-language outcomes of a run, in processing order
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<(String, LanguageOutcome)>,
}

impl RunReport {
    pub fn push(&mut self, language: &str, outcome: LanguageOutcome) {
        self.outcomes.push((language.to_string(), outcome));
    }

    pub fn outcome(&self, language: &str) -> Option<&LanguageOutcome> {
        self.outcomes
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, outcome)| outcome)
    }

    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, LanguageOutcome::Failed { .. }))
            .count()
    }

    pub fn log_summary(&self) {
        for (language, outcome) in &self.outcomes {
            match outcome {
                LanguageOutcome::UpToDate => tracing::info!("{language}: up to date"),
                LanguageOutcome::Updated { translated, path } => {
                    tracing::info!("{language}: {translated} texts translated into {}", path.display())
                }
                LanguageOutcome::Pending { missing } => {
                    tracing::info!("{language}: {} missing keys", missing.len());
                    for key in missing {
                        tracing::info!("  {key}");
                    }
                }
                LanguageOutcome::Failed { error } => tracing::error!("{language}: {error}"),
            }
        }
    }
}
