use crate::core::constants::{formats, xspf};
use crate::playlist::entry::PlaylistEntry;
use crate::ui::logging;

use std::fmt;

/// Supported playlist file formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlaylistFormat {
    #[default]
    Plain,
    M3u,
    M3u8,
    Pls,
    Xspf,
}

impl PlaylistFormat {
    /// Look up a format by name, ignoring case.
    ///
    /// Returns `None` for unknown names; see [`PlaylistFormat::parse_lenient`]
    /// for the command-line behaviour.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            formats::PLAIN => Some(Self::Plain),
            formats::M3U => Some(Self::M3u),
            formats::M3U8 => Some(Self::M3u8),
            formats::PLS => Some(Self::Pls),
            formats::XSPF => Some(Self::Xspf),
            _ => None,
        }
    }

    /// Unknown names fall back to [`PlaylistFormat::Plain`].
    pub fn parse_lenient(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            logging::log_warning(&format!(
                "Unrecognized playlist format '{name}', falling back to plain"
            ));
            Self::Plain
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => formats::PLAIN,
            Self::M3u => formats::M3U,
            Self::M3u8 => formats::M3U8,
            Self::Pls => formats::PLS,
            Self::Xspf => formats::XSPF,
        }
    }

    /// Serializer for this format, chosen once per run.
    pub fn serializer(&self) -> Box<dyn PlaylistSerializer> {
        match self {
            Self::Plain => Box::new(PlainSerializer),
            Self::M3u | Self::M3u8 => Box::new(M3uSerializer),
            Self::Pls => Box::new(PlsSerializer),
            Self::Xspf => Box::new(XspfSerializer),
        }
    }
}

impl fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Produces the text fragments of one playlist format.
///
/// `location` is the entry URL with prefix/suffix text already applied.
pub trait PlaylistSerializer: Send + Sync {
    fn header(&self, total_accepted: usize) -> String;
    fn entry(&self, entry: &PlaylistEntry, location: &str) -> String;
    fn footer(&self) -> String;
}

/// One URL per line.
#[derive(Debug, Default)]
pub struct PlainSerializer;

impl PlaylistSerializer for PlainSerializer {
    fn header(&self, _total_accepted: usize) -> String {
        String::new()
    }

    fn entry(&self, _entry: &PlaylistEntry, location: &str) -> String {
        format!("{location}\n")
    }

    fn footer(&self) -> String {
        String::new()
    }
}

/// Extended M3U, shared by `.m3u` and `.m3u8`.
#[derive(Debug, Default)]
pub struct M3uSerializer;

impl PlaylistSerializer for M3uSerializer {
    fn header(&self, _total_accepted: usize) -> String {
        "#EXTM3U\n".to_string()
    }

    fn entry(&self, entry: &PlaylistEntry, location: &str) -> String {
        format!("#EXTINF:-1,{}\n{location}\n", entry.display_title())
    }

    fn footer(&self) -> String {
        String::new()
    }
}

/// INI-style PLS version 2; keys are numbered by sequence index.
#[derive(Debug, Default)]
pub struct PlsSerializer;

impl PlaylistSerializer for PlsSerializer {
    fn header(&self, total_accepted: usize) -> String {
        format!("[playlist]\nNumberOfEntries={total_accepted}\nVersion=2\n\n")
    }

    fn entry(&self, entry: &PlaylistEntry, location: &str) -> String {
        let i = entry.index;
        format!(
            "File{i}={location}\nTitle{i}={}\nLength{i}=-1\n\n",
            entry.display_title()
        )
    }

    fn footer(&self) -> String {
        String::new()
    }
}

#[derive(Debug, Default)]
pub struct XspfSerializer;

impl PlaylistSerializer for XspfSerializer {
    fn header(&self, _total_accepted: usize) -> String {
        format!(
            "{}\n<playlist version=\"{}\" xmlns=\"{}\">\n  <trackList>\n",
            xspf::XML_PROLOGUE,
            xspf::VERSION,
            xspf::NAMESPACE
        )
    }

    fn entry(&self, entry: &PlaylistEntry, location: &str) -> String {
        let mut track = String::from("    <track>\n");
        track.push_str(&format!(
            "      <location>{}</location>\n",
            escape_xml(location)
        ));
        if let Some(title) = &entry.title {
            track.push_str(&format!("      <title>{}</title>\n", escape_xml(title)));
        }
        track.push_str("    </track>\n");
        track
    }

    fn footer(&self) -> String {
        "  </trackList>\n</playlist>\n".to_string()
    }
}

/// Escape the five XML special characters in text content.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn entry(index: usize, range_number: u64) -> PlaylistEntry {
        PlaylistEntry::new(index, range_number, format!("http://x/{range_number}"))
    }

    #[test]
    fn test_from_name__is_case_insensitive() {
        assert_eq!(PlaylistFormat::from_name("M3U8"), Some(PlaylistFormat::M3u8));
        assert_eq!(PlaylistFormat::from_name("Pls"), Some(PlaylistFormat::Pls));
        assert_eq!(PlaylistFormat::from_name("xspf"), Some(PlaylistFormat::Xspf));
        assert_eq!(PlaylistFormat::from_name("wpl"), None);
    }

    #[test]
    fn test_parse_lenient__unknown_falls_back_to_plain() {
        assert_eq!(PlaylistFormat::parse_lenient("asx"), PlaylistFormat::Plain);
        assert_eq!(PlaylistFormat::parse_lenient(""), PlaylistFormat::Plain);
        assert_eq!(PlaylistFormat::parse_lenient("m3u"), PlaylistFormat::M3u);
    }

    #[test]
    fn test_name__matches_constants() {
        for name in formats::ALL {
            let format = PlaylistFormat::from_name(name).unwrap();
            assert_eq!(format.name(), name);
            assert_eq!(format.to_string(), name);
        }
    }

    #[test]
    fn test_plain__fragments() {
        let s = PlainSerializer;
        assert_eq!(s.header(3), "");
        assert_eq!(s.entry(&entry(1, 1), "pre-http://x/1"), "pre-http://x/1\n");
        assert_eq!(s.footer(), "");
    }

    #[test]
    fn test_m3u__fragments() {
        let s = M3uSerializer;
        assert_eq!(s.header(2), "#EXTM3U\n");
        assert_eq!(
            s.entry(&entry(1, 4), "http://x/4"),
            "#EXTINF:-1,Track 4\nhttp://x/4\n"
        );
        assert_eq!(s.footer(), "");
    }

    #[test]
    fn test_m3u__untitled_entry_uses_url() {
        let mut untitled = entry(1, 4);
        untitled.title = None;
        assert_eq!(
            M3uSerializer.entry(&untitled, "[http://x/4]"),
            "#EXTINF:-1,http://x/4\n[http://x/4]\n"
        );
    }

    #[test]
    fn test_pls__keys_use_sequence_index() {
        let s = PlsSerializer;
        assert_eq!(s.header(2), "[playlist]\nNumberOfEntries=2\nVersion=2\n\n");
        assert_eq!(
            s.entry(&entry(2, 9), "http://x/9"),
            "File2=http://x/9\nTitle2=Track 9\nLength2=-1\n\n"
        );
    }

    #[test]
    fn test_xspf__fragments() {
        let s = XspfSerializer;
        let header = s.header(1);
        assert!(header.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(header.contains("<playlist version=\"1\" xmlns=\"http://xspf.org/ns/0/\">"));
        assert!(header.ends_with("  <trackList>\n"));

        assert_eq!(
            s.entry(&entry(1, 3), "http://x/3"),
            "    <track>\n      <location>http://x/3</location>\n      <title>Track 3</title>\n    </track>\n"
        );
        assert_eq!(s.footer(), "  </trackList>\n</playlist>\n");
    }

    #[test]
    fn test_xspf__title_omitted_when_absent() {
        let mut untitled = entry(1, 3);
        untitled.title = None;
        let fragment = XspfSerializer.entry(&untitled, "http://x/3");
        assert!(!fragment.contains("<title>"));
        assert!(fragment.contains("<location>http://x/3</location>"));
    }

    #[test]
    fn test_xspf__escapes_text() {
        let fragment = XspfSerializer.entry(&entry(1, 1), "http://x/?a=1&b=<2>");
        assert!(fragment.contains("<location>http://x/?a=1&amp;b=&lt;2&gt;</location>"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"a&b<c>"d"'e'"#),
            "a&amp;b&lt;c&gt;&quot;d&quot;&apos;e&apos;"
        );
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_serializer__selected_per_format() {
        let e = entry(1, 1);
        assert_eq!(PlaylistFormat::Plain.serializer().entry(&e, "u"), "u\n");
        assert_eq!(
            PlaylistFormat::M3u8.serializer().header(0),
            PlaylistFormat::M3u.serializer().header(0)
        );
        assert!(PlaylistFormat::Xspf.serializer().footer().contains("</playlist>"));
    }
}
