use crate::core::constants::defaults::PROGRESS_INTERVAL;
use crate::core::constants::template::TITLE_PREFIX;
use crate::playlist::format::PlaylistFormat;
use crate::ui::ProgressReporter;

use std::borrow::Borrow;
use std::io::Write;

/// A single line item of a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    /// 1-based position among accepted entries
    pub index: usize,
    /// Number substituted into the template
    pub range_number: u64,
    /// Generated URL, before prefix/suffix text is applied
    pub url: String,
    pub title: Option<String>,
    pub accepted: bool,
}

impl PlaylistEntry {
    /// Build an accepted entry carrying the default `Track <n>` title.
    pub fn new(index: usize, range_number: u64, url: String) -> Self {
        Self {
            index,
            range_number,
            url,
            title: Some(default_title(range_number)),
            accepted: true,
        }
    }

    /// Title to print for formats that always need one.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.url)
    }
}

/// Default title, keyed on the source number so it survives filtering.
pub fn default_title(range_number: u64) -> String {
    format!("{TITLE_PREFIX}{range_number}")
}

/// Text wrapped around every emitted URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Decoration {
    pub fn new(prefix: Option<String>, suffix: Option<String>) -> Self {
        Self { prefix, suffix }
    }

    /// `prefix + url + suffix`
    pub fn apply(&self, url: &str) -> String {
        let prefix = self.prefix.as_deref().unwrap_or("");
        let suffix = self.suffix.as_deref().unwrap_or("");
        format!("{prefix}{url}{suffix}")
    }
}

/// Accepted entries of one playlist in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDocument {
    format: PlaylistFormat,
    entries: Vec<PlaylistEntry>,
    rejected: usize,
}

impl PlaylistDocument {
    pub fn new(format: PlaylistFormat) -> Self {
        Self {
            format,
            entries: Vec::new(),
            rejected: 0,
        }
    }

    /// Record the outcome for the next source number.
    ///
    /// Must be called in ascending range order; accepted entries are numbered
    /// 1..N in call order and rejected ones are only counted.
    pub fn push(&mut self, range_number: u64, url: String, accepted: bool) {
        if accepted {
            let index = self.entries.len() + 1;
            self.entries.push(PlaylistEntry::new(index, range_number, url));
        } else {
            self.rejected += 1;
        }
    }

    pub fn format(&self) -> PlaylistFormat {
        self.format
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn total_accepted(&self) -> usize {
        self.entries.len()
    }

    pub fn total_rejected(&self) -> usize {
        self.rejected
    }

    /// Serialize header, entries and footer into `out`.
    ///
    /// Returns the number of entries written. The writer is flushed before
    /// returning so I/O errors surface here rather than on drop.
    pub fn write_to<W: Write>(
        &self,
        out: W,
        decoration: &Decoration,
        progress: Option<&mut ProgressReporter>,
    ) -> std::io::Result<usize> {
        write_playlist(
            self.format,
            self.entries.len(),
            &self.entries,
            out,
            decoration,
            progress,
        )
    }

    /// Render the whole document into a string.
    pub fn render(&self, decoration: &Decoration) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut buffer, decoration, None);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Stream `total` entries into `out` as one complete document.
///
/// Entries are consumed lazily, so a range never has to be held in memory.
/// `entries` must yield exactly `total` items; the header count is written
/// before the first entry. The writer is flushed before returning.
pub fn write_playlist<W, I>(
    format: PlaylistFormat,
    total: usize,
    entries: I,
    mut out: W,
    decoration: &Decoration,
    mut progress: Option<&mut ProgressReporter>,
) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: Borrow<PlaylistEntry>,
{
    let serializer = format.serializer();
    if let Some(prog) = progress.as_deref_mut() {
        prog.start_writing(total);
    }

    out.write_all(serializer.header(total).as_bytes())?;
    let mut written = 0;
    for entry in entries {
        let entry = entry.borrow();
        let location = decoration.apply(&entry.url);
        out.write_all(serializer.entry(entry, &location).as_bytes())?;
        written += 1;

        if let Some(prog) = progress.as_deref()
            && written % PROGRESS_INTERVAL == 0
        {
            prog.update_writing_progress(written);
        }
    }
    out.write_all(serializer.footer().as_bytes())?;
    out.flush()?;

    if let Some(prog) = progress.as_deref() {
        prog.finish_writing(written);
    }
    Ok(written)
}
