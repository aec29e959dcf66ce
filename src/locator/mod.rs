//! Multi-language function-definition locator.
//!
//! Given raw source text and a target function name, a [`Locator`] scans for
//! the byte offset of that function's declaration using the language's
//! ordered pattern templates. This is lexical matching, not parsing: it is
//! robust to modifiers, decorators, generics and arrow/async variants, and
//! tolerates the false positives and negatives inherent to regex matching.

pub mod patterns;

pub use patterns::PLACEHOLDER;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::SearchResult;

/// A supported source language.
///
/// A closed set of variants, each holding its own immutable ordered template
/// list and extension set. New language support is a new variant plus an
/// entry in [`Language::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    JavaScript,
    TypeScript,
}

impl Language {
    /// All supported languages, in factory lookup order.
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Java,
        Language::JavaScript,
        Language::TypeScript,
    ];

    /// File extensions (without leading dot, lowercase) claimed by this
    /// language.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py"],
            Language::Java => &["java"],
            Language::JavaScript => &["js", "jsx"],
            Language::TypeScript => &["ts", "tsx"],
        }
    }

    /// Ordered declaration templates for this language.
    pub fn templates(self) -> &'static [&'static str] {
        match self {
            Language::Python => patterns::PYTHON,
            Language::Java => patterns::JAVA,
            Language::JavaScript => patterns::JAVASCRIPT,
            Language::TypeScript => patterns::TYPESCRIPT,
        }
    }

    /// Human-readable language name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    /// Every extension claimed by any supported language.
    pub fn supported_extensions() -> Vec<&'static str> {
        Self::ALL.iter().flat_map(|l| l.extensions()).copied().collect()
    }

    /// Factory: resolve a file extension to the language that claims it.
    ///
    /// The extension is expected without a leading dot and pre-normalized to
    /// lowercase by the caller.
    pub fn from_extension(extension: &str) -> Result<Language> {
        let extension = extension.trim();
        if extension.is_empty() {
            return Err(Error::InvalidInput(
                "language extension is blank".to_string(),
            ));
        }

        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&extension))
            .ok_or_else(|| {
                Error::unsupported_language(extension, &Self::supported_extensions())
            })
    }

    /// Build the locator for this language. Construction is cheap: the
    /// template list is static and nothing is precompiled.
    pub fn locator(self) -> Locator {
        Locator { language: self }
    }
}

/// Per-language definition locator. Stateless after construction.
#[derive(Debug, Clone, Copy)]
pub struct Locator {
    language: Language,
}

impl Locator {
    /// The language this locator matches.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Find the position of `function_name`'s declaration in `text`.
    ///
    /// All regex metacharacters in the name are escaped before interpolation,
    /// then each template is tried in list order against the whole buffer
    /// with multiline anchoring. The offset of the first template (in list
    /// order) that matches anywhere wins; precedence is by template order,
    /// not by match position.
    pub fn search_function_position(
        &self,
        text: &str,
        function_name: &str,
    ) -> Option<SearchResult> {
        let escaped = regex::escape(function_name);

        for template in self.language.templates() {
            let pattern = template.replacen(PLACEHOLDER, &escaped, 1);
            // A template that does not compile is a programming error in the
            // static tables, caught by the pattern validation tests.
            let regex = RegexBuilder::new(&pattern)
                .multi_line(true)
                .build()
                .expect("built-in declaration template must compile");

            if let Some(m) = regex.find(text) {
                debug!(
                    language = self.language.name(),
                    function = function_name,
                    index = m.start(),
                    "declaration matched"
                );
                return Some(SearchResult { index: m.start() });
            }
        }

        trace!(
            language = self.language.name(),
            function = function_name,
            "no declaration template matched"
        );
        None
    }
}
