use crate::core::constants::template::WILDCARD;
use crate::core::{PlaygenError, Result};

use std::fmt;

/// A URL template split around its single wildcard marker.
///
/// The template is parsed once at startup; generating a URL afterwards can
/// never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
    suffix: String,
}

impl Template {
    /// Split `template` into the text before and after its wildcard.
    ///
    /// # Errors
    /// Returns [`PlaygenError::Config`] when the template contains no
    /// wildcard or more than one.
    ///
    /// # Examples
    /// ```
    /// use playgen::playlist::Template;
    ///
    /// let template = Template::parse("http://x/e_*.mp3").unwrap();
    /// assert_eq!(template.prefix(), "http://x/e_");
    /// assert_eq!(template.suffix(), ".mp3");
    /// assert_eq!(template.generate(7, 3), "http://x/e_007.mp3");
    /// ```
    pub fn parse(template: &str) -> Result<Self> {
        let Some((prefix, suffix)) = template.split_once(WILDCARD) else {
            return Err(PlaygenError::Config(format!(
                "No wildcard ({WILDCARD}) found in template '{template}'"
            )));
        };

        if suffix.contains(WILDCARD) {
            return Err(PlaygenError::Config(format!(
                "Template '{template}' must contain exactly one wildcard ({WILDCARD})"
            )));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Generate the URL for `number` using this template.
    pub fn generate(&self, number: u64, padding: usize) -> String {
        generate(&self.prefix, &self.suffix, number, padding)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{WILDCARD}{}", self.prefix, self.suffix)
    }
}

/// Render `number` between `prefix` and `suffix`.
///
/// With `padding > 0` the number is zero-left-padded to `padding` digits;
/// wider numbers are written in full. Text is passed through verbatim.
pub fn generate(prefix: &str, suffix: &str, number: u64, padding: usize) -> String {
    if padding > 0 {
        format!("{prefix}{number:0width$}{suffix}", width = padding)
    } else {
        format!("{prefix}{number}{suffix}")
    }
}
