use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

pub struct ProgressReporter {
    multi_progress: Arc<MultiProgress>,
    verify_progress: Option<ProgressBar>,
    write_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            multi_progress: Arc::new(MultiProgress::new()),
            verify_progress: None,
            write_progress: None,
            enabled,
        }
    }

    pub fn start_verification(&mut self, total_urls: usize) {
        if !self.enabled {
            return;
        }

        let pb = self.multi_progress.add(ProgressBar::new(total_urls as u64));
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} URLs verified ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message("Verifying URLs");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.verify_progress = Some(pb);
    }

    pub fn update_verification_progress(&self, current: usize) {
        if let Some(ref pb) = self.verify_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finish_verification(&self, valid_count: usize, total_count: usize) {
        if let Some(ref pb) = self.verify_progress {
            let message = if valid_count == total_count {
                "✓ All URLs reachable".to_string()
            } else {
                format!("✓ Verification complete ({valid_count}/{total_count} reachable)")
            };
            pb.finish_with_message(message);
        }
    }

    pub fn start_writing(&mut self, total_entries: usize) {
        if !self.enabled {
            return;
        }

        let pb = self
            .multi_progress
            .add(ProgressBar::new(total_entries as u64));
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} entries written")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message("Writing playlist");
        self.write_progress = Some(pb);
    }

    pub fn update_writing_progress(&self, current: usize) {
        if let Some(ref pb) = self.write_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finish_writing(&self, written: usize) {
        if let Some(ref pb) = self.write_progress {
            pb.finish_with_message(format!("✓ {written} entries written"));
        }
    }

    pub fn finish_and_clear(&self) {
        if self.enabled {
            self.multi_progress.clear().unwrap_or(());
        }
    }
}
