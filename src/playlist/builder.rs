use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::PlaylistConfig;
use crate::core::{PlaygenError, Result};
use crate::playlist::entry::{PlaylistDocument, PlaylistEntry, write_playlist};
use crate::playlist::format::PlaylistFormat;
use crate::ui::{ProgressReporter, logging, output};
use crate::validation::{HttpVerifier, VerificationResult, VerificationScheduler, VerifyUrl};

/// Phases of a playlist run.
///
/// `Failed` is terminal and reachable from every other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Init,
    Verifying,
    Writing,
    Finalized,
    Failed,
}

/// Counts reported once the playlist file is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Size of the source range
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Whether URLs were checked before writing
    pub verified: bool,
    pub format: PlaylistFormat,
    pub output_path: PathBuf,
}

/// Drives one run: open output, optionally verify, write, finalize.
pub struct PlaylistBuilder<'a> {
    config: &'a PlaylistConfig,
    state: BuildState,
}

impl<'a> PlaylistBuilder<'a> {
    pub fn new(config: &'a PlaylistConfig) -> Self {
        Self {
            config,
            state: BuildState::Init,
        }
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Run with an HTTP verifier created for this run only.
    pub async fn run(&mut self, progress: Option<&mut ProgressReporter>) -> Result<BuildSummary> {
        if !self.config.verify {
            return self.execute(None, progress).await;
        }

        let verifier = match HttpVerifier::new(&self.config.verifier_options()) {
            Ok(verifier) => verifier,
            Err(err) => return self.fail(err),
        };
        self.execute(Some(&verifier), progress).await
    }

    /// Run with a caller-supplied verifier.
    ///
    /// The verifier is only consulted when verification is enabled in the
    /// configuration.
    pub async fn run_with_verifier(
        &mut self,
        verifier: &dyn VerifyUrl,
        progress: Option<&mut ProgressReporter>,
    ) -> Result<BuildSummary> {
        self.execute(Some(verifier), progress).await
    }

    async fn execute(
        &mut self,
        verifier: Option<&dyn VerifyUrl>,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<BuildSummary> {
        if self.state != BuildState::Init {
            return self.fail(PlaygenError::Config(
                "A playlist builder can only run once".to_string(),
            ));
        }

        // The results table is sized before the output file is touched
        let verification = match verifier.filter(|_| self.config.verify) {
            Some(verifier) => match VerificationScheduler::reserve_slots(self.config.range_len()) {
                Ok(slots) => Some((verifier, slots)),
                Err(err) => return self.fail(err),
            },
            None => None,
        };

        let file = match self.open_output() {
            Ok(file) => file,
            Err(err) => return self.fail(err),
        };

        match verification {
            Some((verifier, slots)) => {
                let results = self.verify(verifier, slots, progress.as_deref_mut()).await;
                let document = self.assemble(&results);
                self.write(file, Some(&document), progress)
            }
            None => self.write(file, None, progress),
        }
    }

    fn open_output(&self) -> Result<File> {
        let path = &self.config.output_path;
        File::create(path).map_err(|err| {
            PlaygenError::Io(std::io::Error::new(
                err.kind(),
                format!("could not open output file '{}': {err}", path.display()),
            ))
        })
    }

    async fn verify(
        &mut self,
        verifier: &dyn VerifyUrl,
        slots: Vec<VerificationResult>,
        progress: Option<&mut ProgressReporter>,
    ) -> Vec<VerificationResult> {
        self.state = BuildState::Verifying;

        let config = self.config;
        let scheduler = VerificationScheduler::new(config.threads);
        logging::log_verification_start(slots.len(), scheduler.workers());

        let start_time = Instant::now();
        let results = scheduler
            .schedule_all(slots, config.items(), verifier, progress)
            .await;

        let valid = results.iter().filter(|r| r.reachable).count();
        logging::log_verification_complete(
            valid,
            results.len() - valid,
            start_time.elapsed().as_millis(),
        );
        results
    }

    /// Write `document`, or the whole range streamed lazily when there is none.
    fn write(
        &mut self,
        file: File,
        document: Option<&PlaylistDocument>,
        progress: Option<&mut ProgressReporter>,
    ) -> Result<BuildSummary> {
        self.state = BuildState::Writing;

        let config = self.config;
        let out = BufWriter::new(file);
        let decoration = config.decoration();
        let written = match document {
            Some(document) => document.write_to(out, &decoration, progress),
            None => {
                let entries = config
                    .items()
                    .enumerate()
                    .map(|(i, (number, url))| PlaylistEntry::new(i + 1, number, url));
                write_playlist(
                    config.format,
                    config.range_len(),
                    entries,
                    out,
                    &decoration,
                    progress,
                )
            }
        };

        let accepted = match written {
            Ok(accepted) => accepted,
            Err(err) => {
                // Never leave a truncated document behind
                if let Err(remove_err) = fs::remove_file(&config.output_path) {
                    logging::log_error("Could not remove incomplete playlist", Some(&remove_err));
                }
                return self.fail(PlaygenError::Io(err));
            }
        };

        self.state = BuildState::Finalized;
        let summary = BuildSummary {
            total: config.range_len(),
            accepted,
            rejected: document.map_or(0, PlaylistDocument::total_rejected),
            verified: document.is_some(),
            format: config.format,
            output_path: config.output_path.clone(),
        };
        logging::log_playlist_written(&summary);
        Ok(summary)
    }

    /// Accepted entries in ascending range order.
    fn assemble(&self, results: &[VerificationResult]) -> PlaylistDocument {
        let mut document = PlaylistDocument::new(self.config.format);
        for result in results {
            if self.config.verbose && !self.config.quiet {
                output::display_check_result(&result.url, result.reachable);
            }
            document.push(result.range_number, result.url.clone(), result.reachable);
        }
        document
    }

    fn fail<T>(&mut self, err: PlaygenError) -> Result<T> {
        self.state = BuildState::Failed;
        logging::log_error("Playlist generation failed", Some(&err));
        Err(err)
    }
}
