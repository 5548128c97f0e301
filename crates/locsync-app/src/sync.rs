use std::path::PathBuf;
use std::sync::Arc;

use locsync_config::Config;
use locsync_core::tree::{leaf_paths, text_count};
use locsync_core::{Mapping, StoreError, detect_missing, merge_into, store};
use locsync_translator::{LeafTranslator, RetryPolicy, TranslationFailure, Translator, translate_tree};

use crate::status::{LanguageOutcome, RunReport};

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Translation(#[from] TranslationFailure),
}

/// Fills the gaps of every target language from one source dictionary
pub struct Synchronizer {
    source: Mapping,
    languages: Vec<String>,
    output_dir: PathBuf,
    source_language: Option<String>,
    policy: RetryPolicy,
    continue_on_error: bool,
    dry_run: bool,
    translator: Arc<dyn Translator>,
}

impl Synchronizer {
    pub fn new(config: &Config, source: Mapping, translator: Arc<dyn Translator>) -> Self {
        Self {
            source,
            languages: config.languages.clone(),
            output_dir: config.output_dir.clone(),
            source_language: config.source_language.clone(),
            policy: RetryPolicy {
                max_attempts: config.translator.max_attempts,
                base_delay: config.translator.base_delay(),
            },
            continue_on_error: config.continue_on_error,
            dry_run: false,
            translator,
        }
    }

    /// Only report what is missing, never call the translator or write files
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process languages one at a time, in configured order.
    ///
    /// The first failing language ends the run unless `continue_on_error` is
    /// set, in which case it is recorded and the next language starts.
    pub async fn run(&self) -> Result<RunReport, SyncError> {
        let mut report = RunReport::default();

        for language in &self.languages {
            tracing::info!(
                "Starting translation for language: {language} via {}...",
                self.translator.metadata().name
            );

            match self.sync_language(language).await {
                Ok(outcome) => {
                    tracing::info!("Finished language: {language}");
                    report.push(language, outcome);
                }
                Err(e) if self.continue_on_error => {
                    tracing::error!("Giving up on {language}: {e}");
                    report.push(
                        language,
                        LanguageOutcome::Failed {
                            error: e.to_string(),
                        },
                    );
                }
                Err(e) => {
                    tracing::error!("Aborting run at {language}: {e}");
                    return Err(e);
                }
            }
        }

        Ok(report)
    }

    /// Translate what `language` is missing and merge it into its file.
    /// The file is only written once every missing text has been translated.
    pub async fn sync_language(&self, language: &str) -> Result<LanguageOutcome, SyncError> {
        let path = store::target_path(&self.output_dir, language);
        let mut existing = store::load_target(&path)?;

        let missing = detect_missing(&self.source, Some(&existing));
        if missing.is_empty() {
            tracing::info!("No missing keys for {language}");
            return Ok(LanguageOutcome::UpToDate);
        }

        if self.dry_run {
            return Ok(LanguageOutcome::Pending {
                missing: leaf_paths(&missing),
            });
        }

        let translated = text_count(&missing);
        tracing::info!("{translated} texts to translate for {language}");

        let leaf = LeafTranslator::new(self.translator.as_ref(), self.policy, language)
            .with_source_language(self.source_language.as_deref());
        let translations = translate_tree(&missing, &leaf).await?;

        merge_into(&mut existing, translations);
        store::persist(&path, &existing)?;

        Ok(LanguageOutcome::Updated { translated, path })
    }
}
