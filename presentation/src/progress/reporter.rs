//! Progress reporting for data builds

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use semdom_application::ports::progress::ProgressNotifier;
use semdom_domain::{ArtifactKind, LanguageCode};
use std::path::Path;
use std::sync::Mutex;

/// The announcement printed before any document is parsed,
/// e.g. `Processing languages ['en', 'zh-CN']...`
pub fn format_language_list(languages: &[LanguageCode]) -> String {
    let quoted: Vec<String> = languages.iter().map(|l| format!("'{}'", l)).collect();
    format!("Processing languages [{}]...", quoted.join(", "))
}

/// Reports progress with a transient progress bar on stderr
///
/// Only the language announcement stays on screen; the bar is cleared when
/// the run completes.
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(bar) = guard.as_ref()
        {
            f(bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_run_start(&self, languages: &[LanguageCode]) {
        eprintln!("{}", format_language_list(languages));

        let total = (languages.len() * ArtifactKind::ALL.len()) as u64;
        let bar = ProgressBar::new(total);
        bar.set_style(Self::bar_style());
        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn on_language_start(&self, language: &LanguageCode) {
        self.with_bar(|bar| {
            bar.set_prefix(language.to_string());
            bar.set_message("parsing...");
        });
    }

    fn on_artifact_written(&self, kind: ArtifactKind, _language: &LanguageCode, path: &Path) {
        self.with_bar(|bar| {
            bar.set_message(format!("{} {} {}", "v".green(), kind, path.display()));
            bar.inc(1);
        });
    }

    fn on_run_complete(&self, _artifact_count: usize) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish_and_clear();
        }
    }
}

/// Announcement only, no progress bar (for non-interactive output)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_run_start(&self, languages: &[LanguageCode]) {
        eprintln!("{}", format_language_list(languages));
    }

    fn on_language_start(&self, _language: &LanguageCode) {}

    fn on_artifact_written(&self, _kind: ArtifactKind, _language: &LanguageCode, _path: &Path) {}
}
