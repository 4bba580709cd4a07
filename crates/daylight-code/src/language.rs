//! Language registry: which grammars a code block may ask for.
//!
//! Code blocks arrive tagged with a class such as `language-python`. The
//! name after the prefix must be one of a fixed, explicit set; each entry
//! maps to a bundled tree-sitter grammar and its highlight query.
//!
//! | Name         | Aliases         | Grammar                          |
//! |--------------|-----------------|----------------------------------|
//! | `bash`       | `sh`, `shell`   | `tree-sitter-bash`               |
//! | `css`        |                 | `tree-sitter-css`                |
//! | `go`         |                 | `tree-sitter-go`                 |
//! | `javascript` | `js`, `jsx`     | `tree-sitter-javascript`         |
//! | `json`       |                 | `tree-sitter-json`               |
//! | `python`     | `py`            | `tree-sitter-python`             |
//! | `rust`       | `rs`            | `tree-sitter-rust`               |
//! | `tsx`        |                 | `tree-sitter-typescript` (TSX)   |
//! | `typescript` | `ts`            | `tree-sitter-typescript`         |
//! | `yaml`       | `yml`           | `tree-sitter-yaml`               |
//!
//! The TypeScript queries only cover what TypeScript adds, so both
//! TypeScript dialects run the JavaScript query first. JavaScript and TSX
//! also get the JSX query.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::RenderError;

/// Class prefix used by Markdown/MDX fenced code blocks.
pub const CLASS_PREFIX: &str = "language-";

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Bash,
    Css,
    Go,
    JavaScript,
    Json,
    Python,
    Rust,
    Tsx,
    TypeScript,
    Yaml,
}

/// Which query pattern wins when two patterns capture the same node.
///
/// Grammar repositories do not agree on query order: most list the
/// catch-all patterns (`(identifier) @variable`) first and refine them
/// below, a few put the specific patterns first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternPrecedence {
    /// The pattern listed first wins.
    Earlier,
    /// The pattern listed last wins.
    Later,
}

/// Every accepted language name, canonical names first.
pub const SUPPORTED_LANGUAGES: &[(&str, Language)] = &[
    ("bash", Language::Bash),
    ("css", Language::Css),
    ("go", Language::Go),
    ("javascript", Language::JavaScript),
    ("json", Language::Json),
    ("python", Language::Python),
    ("rust", Language::Rust),
    ("tsx", Language::Tsx),
    ("typescript", Language::TypeScript),
    ("yaml", Language::Yaml),
    ("sh", Language::Bash),
    ("shell", Language::Bash),
    ("js", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("py", Language::Python),
    ("rs", Language::Rust),
    ("ts", Language::TypeScript),
    ("yml", Language::Yaml),
];

impl Language {
    /// Look up a language by name or alias. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|&(_, language)| language)
    }

    /// Resolve a code block class (`language-<name>`) to a language.
    ///
    /// # Errors
    ///
    /// [`RenderError::UnsupportedLanguage`] carrying `<name>` when it is
    /// not registered.
    pub fn from_class_name(class_name: &str) -> Result<Self, RenderError> {
        let name = language_name(class_name);
        Self::from_name(name).ok_or_else(|| RenderError::UnsupportedLanguage(name.to_string()))
    }

    /// Guess the language from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "sh" | "bash" => Some(Self::Bash),
            "css" => Some(Self::Css),
            "go" => Some(Self::Go),
            "js" | "mjs" | "cjs" | "jsx" => Some(Self::JavaScript),
            "json" => Some(Self::Json),
            "py" | "pyi" => Some(Self::Python),
            "rs" => Some(Self::Rust),
            "tsx" => Some(Self::Tsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Canonical name, as used in `language-<name>` classes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Css => "css",
            Self::Go => "go",
            Self::JavaScript => "javascript",
            Self::Json => "json",
            Self::Python => "python",
            Self::Rust => "rust",
            Self::Tsx => "tsx",
            Self::TypeScript => "typescript",
            Self::Yaml => "yaml",
        }
    }

    /// The tree-sitter grammar.
    #[must_use]
    pub fn grammar(self) -> tree_sitter::Language {
        match self {
            Self::Bash => tree_sitter_bash::LANGUAGE.into(),
            Self::Css => tree_sitter_css::LANGUAGE.into(),
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::Json => tree_sitter_json::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Yaml => tree_sitter_yaml::LANGUAGE.into(),
        }
    }

    /// The highlight query source, assembled from the grammar crates'
    /// bundled queries.
    #[must_use]
    pub fn highlights_query(self) -> Cow<'static, str> {
        use tree_sitter_javascript::{HIGHLIGHT_QUERY as JS, JSX_HIGHLIGHT_QUERY as JSX};
        use tree_sitter_typescript::HIGHLIGHTS_QUERY as TS;

        match self {
            Self::Bash => Cow::Borrowed(tree_sitter_bash::HIGHLIGHT_QUERY),
            Self::Css => Cow::Borrowed(tree_sitter_css::HIGHLIGHTS_QUERY),
            Self::Go => Cow::Borrowed(tree_sitter_go::HIGHLIGHTS_QUERY),
            Self::JavaScript => Cow::Owned([JS, JSX].join("\n")),
            Self::Json => Cow::Borrowed(tree_sitter_json::HIGHLIGHTS_QUERY),
            Self::Python => Cow::Borrowed(tree_sitter_python::HIGHLIGHTS_QUERY),
            Self::Rust => Cow::Borrowed(tree_sitter_rust::HIGHLIGHTS_QUERY),
            Self::Tsx => Cow::Owned([JS, JSX, TS].join("\n")),
            Self::TypeScript => Cow::Owned([JS, TS].join("\n")),
            Self::Yaml => Cow::Borrowed(tree_sitter_yaml::HIGHLIGHTS_QUERY),
        }
    }

    /// How overlapping captures on one node are resolved for this
    /// language's query.
    #[must_use]
    pub const fn pattern_precedence(self) -> PatternPrecedence {
        match self {
            // `(pair key: ...)` precedes `(string)`; call patterns precede
            // `(identifier) @variable`.
            Self::Json | Self::Go => PatternPrecedence::Earlier,
            _ => PatternPrecedence::Later,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strip the `language-` prefix from a code block class.
///
/// A class without the prefix is returned unchanged.
#[must_use]
pub fn language_name(class_name: &str) -> &str {
    class_name.strip_prefix(CLASS_PREFIX).unwrap_or(class_name)
}

/// Whether `name` (without prefix) is a registered language.
#[must_use]
pub fn is_language_valid(name: &str) -> bool {
    Language::from_name(name).is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_resolve() {
        assert_eq!(Language::from_name("javascript"), Some(Language::JavaScript));
        assert_eq!(Language::from_name("python"), Some(Language::Python));
        assert_eq!(Language::from_name("rust"), Some(Language::Rust));
        assert_eq!(Language::from_name("typescript"), Some(Language::TypeScript));
        assert_eq!(Language::from_name("tsx"), Some(Language::Tsx));
        assert_eq!(Language::from_name("json"), Some(Language::Json));
        assert_eq!(Language::from_name("bash"), Some(Language::Bash));
        assert_eq!(Language::from_name("css"), Some(Language::Css));
        assert_eq!(Language::from_name("yaml"), Some(Language::Yaml));
        assert_eq!(Language::from_name("go"), Some(Language::Go));
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(Language::from_name("js"), Some(Language::JavaScript));
        assert_eq!(Language::from_name("jsx"), Some(Language::JavaScript));
        assert_eq!(Language::from_name("py"), Some(Language::Python));
        assert_eq!(Language::from_name("rs"), Some(Language::Rust));
        assert_eq!(Language::from_name("ts"), Some(Language::TypeScript));
        assert_eq!(Language::from_name("sh"), Some(Language::Bash));
        assert_eq!(Language::from_name("shell"), Some(Language::Bash));
        assert_eq!(Language::from_name("yml"), Some(Language::Yaml));
    }

    #[test]
    fn web_site_classes_resolve() {
        for class in [
            "language-typescript",
            "language-tsx",
            "language-jsx",
            "language-bash",
            "language-json",
            "language-css",
            "language-ts",
        ] {
            assert!(Language::from_class_name(class).is_ok(), "{class}");
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(Language::from_name("Python"), None);
        assert!(!is_language_valid("RUST"));
    }

    #[test]
    fn unknown_names_are_invalid() {
        assert!(!is_language_valid("brainfuck"));
        assert!(!is_language_valid(""));
        assert!(is_language_valid("python"));
    }

    #[test]
    fn class_prefix_is_stripped() {
        assert_eq!(language_name("language-python"), "python");
        assert_eq!(language_name("python"), "python");
        assert_eq!(language_name("language-"), "");
    }

    #[test]
    fn from_class_name_resolves() {
        assert_eq!(Language::from_class_name("language-js").unwrap(), Language::JavaScript);
    }

    #[test]
    fn from_class_name_reports_stripped_name() {
        let err = Language::from_class_name("language-not-a-real-language").unwrap_err();
        assert!(
            matches!(&err, RenderError::UnsupportedLanguage(name) if name == "not-a-real-language"),
            "got {err:?}"
        );
        assert_eq!(err.to_string(), "unsupported language: not-a-real-language");
    }

    #[test]
    fn detect_from_extension() {
        assert_eq!(Language::from_path(Path::new("main.rs")), Some(Language::Rust));
        assert_eq!(Language::from_path(Path::new("/a/b/app.py")), Some(Language::Python));
        assert_eq!(Language::from_path(Path::new("index.mjs")), Some(Language::JavaScript));
        assert_eq!(Language::from_path(Path::new("App.tsx")), Some(Language::Tsx));
        assert_eq!(Language::from_path(Path::new("lib.ts")), Some(Language::TypeScript));
        assert_eq!(Language::from_path(Path::new("ci.yml")), Some(Language::Yaml));
        assert_eq!(Language::from_path(Path::new("package.json")), Some(Language::Json));
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
        assert_eq!(Language::from_path(Path::new("notes.txt")), None);
    }

    #[test]
    fn canonical_name_roundtrips() {
        for &(_, language) in SUPPORTED_LANGUAGES {
            assert_eq!(Language::from_name(language.name()), Some(language));
            assert_eq!(language.to_string(), language.name());
        }
    }

    #[test]
    fn every_grammar_accepts_its_query() {
        for &(name, language) in SUPPORTED_LANGUAGES {
            let grammar = language.grammar();
            let query = tree_sitter::Query::new(&grammar, &language.highlights_query());
            assert!(query.is_ok(), "{name}: {:?}", query.err());
        }
    }

    #[test]
    fn precedence_follows_query_layout() {
        assert_eq!(Language::Python.pattern_precedence(), PatternPrecedence::Later);
        assert_eq!(Language::JavaScript.pattern_precedence(), PatternPrecedence::Later);
        assert_eq!(Language::Json.pattern_precedence(), PatternPrecedence::Earlier);
        assert_eq!(Language::Go.pattern_precedence(), PatternPrecedence::Earlier);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::JavaScript).unwrap(), "\"javascript\"");
        assert_eq!(serde_json::to_string(&Language::TypeScript).unwrap(), "\"typescript\"");
    }
}
