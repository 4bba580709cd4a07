//! Code block assembly: validated language + tokens → a styled `<pre>`.
//!
//! [`render_code_block`] is the entry point a document pipeline calls for
//! each fenced code block. The result is a plain value tree
//! ([`CodeBlock`] → [`CodeLine`] → [`CodeToken`]) that a host can walk
//! itself, serialize, or turn into markup with [`CodeBlock::to_html`].

use std::fmt::Write as _;

use daylight_color::Rgb;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::RenderError;
use crate::highlight::{CodeLine, Highlighter};
use crate::language::{CLASS_PREFIX, Language};
use crate::vs_dark;

/// Padding around the code, in pixels.
pub const BLOCK_PADDING_PX: u16 = 20;

/// Class every rendered block carries, ahead of its `language-*` class.
pub const BLOCK_CLASS: &str = "prism-code";

/// Class of each line container.
pub const LINE_CLASS: &str = "token-line";

// ---------------------------------------------------------------------------
// BlockStyle
// ---------------------------------------------------------------------------

/// How content that does not fit the block is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Scroll when needed; never wrap.
    Auto,
}

impl Overflow {
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
        }
    }
}

/// Container style: the visual theme's base colors merged with the
/// block's own padding and overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockStyle {
    pub color: Rgb,
    pub background_color: Rgb,
    pub padding_px: u16,
    pub overflow: Overflow,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            color: vs_dark::PLAIN,
            background_color: vs_dark::BACKGROUND,
            padding_px: BLOCK_PADDING_PX,
            overflow: Overflow::Auto,
        }
    }
}

impl BlockStyle {
    /// Inline CSS declarations.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "color: {}; background-color: {}; padding: {}px; overflow: {};",
            self.color,
            self.background_color,
            self.padding_px,
            self.overflow.as_css()
        )
    }
}

// ---------------------------------------------------------------------------
// CodeBlock
// ---------------------------------------------------------------------------

/// A rendered code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub language: Language,
    /// `prism-code language-<name>`.
    pub class_name: String,
    pub style: BlockStyle,
    /// One container per source line, in order.
    pub lines: Vec<CodeLine>,
}

impl CodeBlock {
    /// Serialize as a `<pre>` element: one `<div>` per line, one `<span>`
    /// per token. Empty lines hold a bare newline so they keep their
    /// height.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<pre class=\"{}\" style=\"{}\">",
            self.class_name,
            self.style.to_css()
        );

        for line in &self.lines {
            let _ = write!(out, "<div class=\"{LINE_CLASS}\">");
            if line.is_empty() {
                out.push('\n');
            }
            for token in &line.tokens {
                let _ = write!(out, "<span class=\"{}\"", token.class_name());
                if let Some(color) = token.color {
                    let _ = write!(out, " style=\"color: {color};\"");
                }
                out.push('>');
                html_escape_into(&mut out, &token.content);
                out.push_str("</span>");
            }
            out.push_str("</div>");
        }

        out.push_str("</pre>");
        out
    }

    /// Total number of tokens across all lines.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(|line| line.tokens.len()).sum()
    }
}

/// Render a fenced code block.
///
/// `class_name` is the block's language annotation, `language-<name>`.
///
/// # Errors
///
/// - [`RenderError::UnsupportedLanguage`] when `<name>` is not registered;
///   nothing is tokenized.
/// - Any tokenizer failure ([`RenderError::Grammar`],
///   [`RenderError::Query`], [`RenderError::Parse`]), unmodified.
pub fn render_code_block(source: &str, class_name: &str) -> Result<CodeBlock, RenderError> {
    let language = Language::from_class_name(class_name).inspect_err(|err| {
        warn!(class_name, %err, "rejecting code block");
    })?;
    render_with(&mut Highlighter::new(language)?, source)
}

/// Render with an existing highlighter, reusing its parser and query.
///
/// # Errors
///
/// [`RenderError::Parse`] if tree-sitter produces no tree.
pub fn render_with(highlighter: &mut Highlighter, source: &str) -> Result<CodeBlock, RenderError> {
    let language = highlighter.language();
    let lines = highlighter.highlight(source)?;

    let block = CodeBlock {
        language,
        class_name: format!("{BLOCK_CLASS} {CLASS_PREFIX}{}", language.name()),
        style: BlockStyle::default(),
        lines,
    };
    debug!(
        language = language.name(),
        lines = block.lines.len(),
        tokens = block.token_count(),
        "rendered code block"
    );
    Ok(block)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// HTML-escape a string into the output buffer.
fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
