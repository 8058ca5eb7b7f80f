//! Build Data use case
//!
//! Runs both extractors for every planned language and hands the rendered
//! artifacts to the sink. The run stops at the first failure. Both artifacts
//! of a language are rendered before either is written, so a language either
//! gets both files or none.

use crate::config::LanguagePlan;
use crate::ports::artifact_sink::{ArtifactSink, ArtifactSinkError};
use crate::ports::document_source::{DocumentSource, DocumentSourceError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use semdom_domain::{
    ArtifactKind, ExtractionError, LanguageCode, RenderError, XmlDocument,
    extract_domain_definitions, extract_questions, render_artifact,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a data build
#[derive(Error, Debug)]
pub enum BuildDataError {
    #[error(transparent)]
    Source(#[from] DocumentSourceError),

    #[error("Invalid {kind} data for {language}: {source}")]
    Extraction {
        kind: ArtifactKind,
        language: LanguageCode,
        #[source]
        source: ExtractionError,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Sink(#[from] ArtifactSinkError),
}

/// Input for the BuildData use case
#[derive(Debug, Clone)]
pub struct BuildDataInput {
    pub plan: LanguagePlan,
}

impl BuildDataInput {
    pub fn new(plan: LanguagePlan) -> Self {
        Self { plan }
    }
}

/// An artifact produced by the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub kind: ArtifactKind,
    pub language: LanguageCode,
    pub path: PathBuf,
    /// Number of top-level entries (domains) in the artifact
    pub entries: usize,
}

/// Output of the BuildData use case, artifacts in write order
#[derive(Debug, Clone, Default)]
pub struct BuildDataOutput {
    pub artifacts: Vec<WrittenArtifact>,
}

/// Artifact text held in memory until its language is fully rendered
struct RenderedArtifact {
    kind: ArtifactKind,
    contents: String,
    entries: usize,
}

/// Use case for building every language's data artifacts
pub struct BuildDataUseCase<S: DocumentSource, W: ArtifactSink> {
    source: Arc<S>,
    sink: Arc<W>,
}

impl<S: DocumentSource, W: ArtifactSink> BuildDataUseCase<S, W> {
    pub fn new(source: Arc<S>, sink: Arc<W>) -> Self {
        Self { source, sink }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, input: BuildDataInput) -> Result<BuildDataOutput, BuildDataError> {
        self.execute_with_progress(input, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        input: BuildDataInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<BuildDataOutput, BuildDataError> {
        let plan = &input.plan;
        progress.on_run_start(plan.languages());
        info!(
            "Building data for {} languages (default {})",
            plan.languages().len(),
            plan.default_language()
        );

        let definitions = self.source.load_definitions()?;
        let mut output = BuildDataOutput::default();

        for language in plan.languages() {
            progress.on_language_start(language);

            let domains = self.render_domains(&definitions, language, plan.default_language())?;
            let questions = self.render_questions(language)?;

            for rendered in [domains, questions] {
                let artifact = self.write(language, rendered)?;
                progress.on_artifact_written(artifact.kind, language, &artifact.path);
                output.artifacts.push(artifact);
            }
        }

        progress.on_run_complete(output.artifacts.len());
        info!("Wrote {} artifacts", output.artifacts.len());
        Ok(output)
    }

    fn render_domains(
        &self,
        definitions: &XmlDocument,
        language: &LanguageCode,
        default_language: &LanguageCode,
    ) -> Result<RenderedArtifact, BuildDataError> {
        let kind = ArtifactKind::Domains;
        let catalog = extract_domain_definitions(definitions, language, default_language)
            .map_err(|source| BuildDataError::Extraction {
                kind,
                language: language.clone(),
                source,
            })?;

        Ok(RenderedArtifact {
            kind,
            contents: render_artifact(kind, language, &catalog)?,
            entries: catalog.len(),
        })
    }

    fn render_questions(&self, language: &LanguageCode) -> Result<RenderedArtifact, BuildDataError> {
        let kind = ArtifactKind::Questions;
        let document = self.source.load_questions(language)?;
        let catalog = extract_questions(&document).map_err(|source| BuildDataError::Extraction {
            kind,
            language: language.clone(),
            source,
        })?;

        Ok(RenderedArtifact {
            kind,
            contents: render_artifact(kind, language, &catalog)?,
            entries: catalog.len(),
        })
    }

    fn write(
        &self,
        language: &LanguageCode,
        rendered: RenderedArtifact,
    ) -> Result<WrittenArtifact, BuildDataError> {
        let RenderedArtifact {
            kind,
            contents,
            entries,
        } = rendered;
        let path = self.sink.write_artifact(kind, language, &contents)?;
        debug!(
            "Wrote {} artifact for {} ({} entries, {} bytes) to {}",
            kind,
            language,
            entries,
            contents.len(),
            path.display()
        );

        Ok(WrittenArtifact {
            kind,
            language: language.clone(),
            path,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semdom_domain::XmlElement;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Mutex;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::new(code).unwrap()
    }

    fn form(ws: &str, text: &str) -> XmlElement {
        XmlElement::new("form").with_attribute("ws", ws).with_text(text)
    }

    fn definitions() -> XmlDocument {
        let option = XmlElement::new("option")
            .with_child(XmlElement::new("key").with_text("1.1"))
            .with_child(
                XmlElement::new("name")
                    .with_child(form("en", "Sky"))
                    .with_child(form("fr", "Ciel")),
            )
            .with_child(XmlElement::new("abbreviation").with_child(form("en", "1.1")))
            .with_child(XmlElement::new("description").with_child(form("en", "The sky.")))
            .with_child(XmlElement::new("searchKeys").with_child(form("fr", "ciel")));
        XmlDocument::new(XmlElement::new("list").with_child(option))
    }

    fn questions(text: &str) -> XmlDocument {
        XmlDocument::new(
            XmlElement::new("semantic-domains").with_child(
                XmlElement::new("semantic-domain")
                    .with_attribute("id", "1.1")
                    .with_child(XmlElement::new("question").with_text(text)),
            ),
        )
    }

    struct InMemorySource {
        definitions: XmlDocument,
        questions: HashMap<String, XmlDocument>,
    }

    impl DocumentSource for InMemorySource {
        fn load_definitions(&self) -> Result<XmlDocument, DocumentSourceError> {
            Ok(self.definitions.clone())
        }

        fn load_questions(
            &self,
            language: &LanguageCode,
        ) -> Result<XmlDocument, DocumentSourceError> {
            self.questions
                .get(language.as_str())
                .cloned()
                .ok_or_else(|| DocumentSourceError::NotFound {
                    path: PathBuf::from(format!("Ddp4Questions-{}.xml", language)),
                })
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        written: Mutex<Vec<(ArtifactKind, String, String)>>,
    }

    impl ArtifactSink for RecordingSink {
        fn write_artifact(
            &self,
            kind: ArtifactKind,
            language: &LanguageCode,
            contents: &str,
        ) -> Result<PathBuf, ArtifactSinkError> {
            self.written.lock().unwrap().push((
                kind,
                language.to_string(),
                contents.to_string(),
            ));
            Ok(PathBuf::from(format!("{}_{}.js", kind.variable_prefix(), language)))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_run_start(&self, languages: &[LanguageCode]) {
            let list: Vec<_> = languages.iter().map(LanguageCode::as_str).collect();
            self.events
                .lock()
                .unwrap()
                .push(format!("start {}", list.join(",")));
        }

        fn on_language_start(&self, language: &LanguageCode) {
            self.events.lock().unwrap().push(format!("lang {}", language));
        }

        fn on_artifact_written(&self, kind: ArtifactKind, language: &LanguageCode, _path: &Path) {
            self.events
                .lock()
                .unwrap()
                .push(format!("wrote {} {}", kind, language));
        }

        fn on_run_complete(&self, artifact_count: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {}", artifact_count));
        }
    }

    fn source(languages: &[&str]) -> Arc<InMemorySource> {
        Arc::new(InMemorySource {
            definitions: definitions(),
            questions: languages
                .iter()
                .map(|l| (l.to_string(), questions(&format!("Question in {}?", l))))
                .collect(),
        })
    }

    fn input(languages: &[&str]) -> BuildDataInput {
        let plan = LanguagePlan::new(languages.iter().map(|l| lang(l)), lang("en")).unwrap();
        BuildDataInput::new(plan)
    }

    #[test]
    fn test_writes_two_artifacts_per_language_in_order() {
        let sink = Arc::new(RecordingSink::default());
        let use_case = BuildDataUseCase::new(source(&["en", "fr"]), Arc::clone(&sink));

        let output = use_case.execute(input(&["en", "fr"])).unwrap();

        let order: Vec<_> = output
            .artifacts
            .iter()
            .map(|a| (a.kind, a.language.to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                (ArtifactKind::Domains, "en".to_string()),
                (ArtifactKind::Questions, "en".to_string()),
                (ArtifactKind::Domains, "fr".to_string()),
                (ArtifactKind::Questions, "fr".to_string()),
            ]
        );
        assert!(output.artifacts.iter().all(|a| a.entries == 1));

        let written = sink.written.lock().unwrap();
        assert_eq!(written.len(), 4);
        assert!(written[2].2.contains("var semanticDomains_fr = "));
        assert!(written[2].2.contains("\"name\": \"Ciel\""));
        assert!(written[2].2.contains("\"description\": \"The sky.\""));
        assert!(written[3].2.contains("\"Question in fr?\""));
    }

    #[test]
    fn test_stops_at_first_missing_document() {
        let sink = Arc::new(RecordingSink::default());
        let use_case = BuildDataUseCase::new(source(&["en"]), Arc::clone(&sink));

        let err = use_case.execute(input(&["en", "fr", "es"])).unwrap_err();
        assert!(matches!(
            err,
            BuildDataError::Source(DocumentSourceError::NotFound { .. })
        ));

        // fr fails on its questions document, so nothing is written for fr
        let written = sink.written.lock().unwrap();
        let kinds: Vec<_> = written.iter().map(|(k, l, _)| (*k, l.as_str())).collect();
        assert_eq!(
            kinds,
            vec![(ArtifactKind::Domains, "en"), (ArtifactKind::Questions, "en")]
        );
    }

    #[test]
    fn test_invalid_questions_leave_no_artifact_for_language() {
        let broken = InMemorySource {
            definitions: definitions(),
            questions: HashMap::from([(
                "en".to_string(),
                XmlDocument::new(
                    XmlElement::new("semantic-domains")
                        .with_child(XmlElement::new("semantic-domain")),
                ),
            )]),
        };
        let sink = Arc::new(RecordingSink::default());
        let use_case = BuildDataUseCase::new(Arc::new(broken), Arc::clone(&sink));

        let err = use_case.execute(input(&["en"])).unwrap_err();
        assert!(matches!(
            err,
            BuildDataError::Extraction {
                kind: ArtifactKind::Questions,
                source: ExtractionError::MissingDomainId { position: 1 },
                ..
            }
        ));
        assert!(sink.written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_structural_error_reports_language() {
        let broken = InMemorySource {
            definitions: XmlDocument::new(XmlElement::new("option")),
            questions: HashMap::new(),
        };
        let use_case = BuildDataUseCase::new(Arc::new(broken), Arc::new(RecordingSink::default()));

        let err = use_case.execute(input(&["fr"])).unwrap_err();
        match err {
            BuildDataError::Extraction {
                kind,
                language,
                source,
            } => {
                assert_eq!(kind, ArtifactKind::Domains);
                assert_eq!(language.as_str(), "fr");
                assert_eq!(source, ExtractionError::MissingKey { position: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_progress_reported_before_work() {
        let progress = RecordingProgress::default();
        let use_case = BuildDataUseCase::new(source(&["en"]), Arc::new(RecordingSink::default()));

        use_case
            .execute_with_progress(input(&["en"]), &progress)
            .unwrap();

        let events = progress.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                "start en",
                "lang en",
                "wrote domains en",
                "wrote questions en",
                "done 2",
            ]
        );
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let first = Arc::new(RecordingSink::default());
        let second = Arc::new(RecordingSink::default());

        BuildDataUseCase::new(source(&["en", "fr"]), Arc::clone(&first))
            .execute(input(&["en", "fr"]))
            .unwrap();
        BuildDataUseCase::new(source(&["en", "fr"]), Arc::clone(&second))
            .execute(input(&["en", "fr"]))
            .unwrap();

        assert_eq!(*first.written.lock().unwrap(), *second.written.lock().unwrap());
    }
}
