//! Tokenizing source text via tree-sitter.
//!
//! The [`Highlighter`] wraps a tree-sitter `Parser` and the language's
//! compiled highlight `Query`. Highlighting a source string produces one
//! [`CodeLine`] per line (`\r\n`, `\r` and `\n` all end a line); each line
//! is the run of tokens painted over its bytes.
//!
//! # Capture precedence
//!
//! Several captures can cover the same byte (a string and the escape
//! inside it, or `(identifier) @variable` and a call pattern on the same
//! identifier). Per byte:
//!
//! 1. the innermost node wins (shorter byte range);
//! 2. on the same range, the language's [`PatternPrecedence`] decides:
//!    usually the later pattern, which refines the catch-all ones above it.
//!
//! A token is a maximal run of bytes painted by the same node, so two
//! adjacent brackets stay two tokens. Syntax-tree leaves no pattern
//! captures become `plain` tokens of their own; whitespace between leaves
//! is plain too. The tokens of a line always concatenate back to its text.

use std::ops::Range;

use daylight_color::Rgb;
use serde::Serialize;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor, Tree};

use crate::error::RenderError;
use crate::language::{Language, PatternPrecedence};
use crate::vs_dark;

/// Token type for text outside every capture.
pub const PLAIN: &str = "plain";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One lexical unit of a line, rendered as a single styled span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeToken {
    /// Scopes of the capture, e.g. `["function", "builtin"]`, or
    /// `["plain"]` for uncaptured text.
    pub types: Vec<String>,
    /// The source text covered by the token.
    pub content: String,
    /// Foreground color; `None` inherits the block color.
    pub color: Option<Rgb>,
}

impl CodeToken {
    fn new(capture: Option<&str>, content: &str) -> Self {
        let name = capture.unwrap_or(PLAIN);
        Self {
            types: name.split('.').map(str::to_string).collect(),
            content: content.to_string(),
            color: capture.and_then(vs_dark::color_for),
        }
    }

    /// Whether this token is uncaptured text.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.types.len() == 1 && self.types[0] == PLAIN
    }

    /// CSS class list: `token` followed by the scopes.
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut class = String::from("token");
        for ty in &self.types {
            class.push(' ');
            class.push_str(ty);
        }
        class
    }
}

/// One source line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeLine {
    pub tokens: Vec<CodeToken>,
}

impl CodeLine {
    /// Reassemble the line's text from its tokens.
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.content.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Syntax highlighter for one language.
///
/// Reusable across sources; each call to [`highlight`](Self::highlight)
/// is a full parse.
pub struct Highlighter {
    language: Language,
    parser: Parser,
    query: Query,
}

/// The capture painted over one byte, and the node it came from.
///
/// `capture` is `None` for an uncaptured leaf.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Paint {
    capture: Option<u32>,
    pattern: usize,
    start: usize,
    end: usize,
}

impl Paint {
    const fn span(self) -> usize {
        self.end - self.start
    }

    const fn beats(self, other: Self, precedence: PatternPrecedence) -> bool {
        if other.capture.is_none() {
            return true;
        }
        if self.span() != other.span() {
            return self.span() < other.span();
        }
        match precedence {
            PatternPrecedence::Earlier => self.pattern < other.pattern,
            PatternPrecedence::Later => self.pattern > other.pattern,
        }
    }

    /// Identity of the run this byte belongs to: capture plus node.
    const fn run_key(self) -> (Option<u32>, usize, usize) {
        (self.capture, self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Highlighter
// ---------------------------------------------------------------------------

impl Highlighter {
    /// Create a highlighter for `language`.
    ///
    /// # Errors
    ///
    /// [`RenderError::Grammar`] if the grammar's ABI is incompatible with
    /// the linked tree-sitter, [`RenderError::Query`] if the highlight
    /// query does not compile.
    pub fn new(language: Language) -> Result<Self, RenderError> {
        let grammar = language.grammar();
        let mut parser = Parser::new();
        parser.set_language(&grammar)?;
        let query = Query::new(&grammar, &language.highlights_query())?;
        Ok(Self {
            language,
            parser,
            query,
        })
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Tokenize `source` into lines.
    ///
    /// Always yields at least one line: `""` is a single empty line, and a
    /// trailing line break yields a trailing empty line.
    ///
    /// # Errors
    ///
    /// [`RenderError::Parse`] if tree-sitter returns no tree.
    pub fn highlight(&mut self, source: &str) -> Result<Vec<CodeLine>, RenderError> {
        let paints = self.paint(source)?;
        let names = self.query.capture_names();

        Ok(line_ranges(source)
            .into_iter()
            .map(|line| tokenize_line(source, &paints, line, names))
            .collect())
    }

    /// Resolve the winning capture for every byte of `source`.
    fn paint(&mut self, source: &str) -> Result<Vec<Option<Paint>>, RenderError> {
        let tree = self.parser.parse(source, None).ok_or(RenderError::Parse)?;
        let precedence = self.language.pattern_precedence();
        let mut paints: Vec<Option<Paint>> = vec![None; source.len()];
        paint_leaves(&tree, &mut paints);

        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), source.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let range = capture.node.byte_range();
                let paint = Paint {
                    capture: Some(capture.index),
                    pattern: m.pattern_index,
                    start: range.start,
                    end: range.end,
                };
                for slot in &mut paints[range] {
                    match slot {
                        Some(current) if !paint.beats(*current, precedence) => {}
                        _ => *slot = Some(paint),
                    }
                }
            }
        }

        Ok(paints)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Give every leaf of the tree an uncaptured paint, so plain text still
/// splits at token boundaries.
fn paint_leaves(tree: &Tree, paints: &mut [Option<Paint>]) {
    let mut cursor = tree.walk();
    loop {
        if cursor.goto_first_child() {
            continue;
        }
        let range = cursor.node().byte_range();
        let leaf = Paint {
            capture: None,
            pattern: 0,
            start: range.start,
            end: range.end,
        };
        paints[range].fill(Some(leaf));
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// Byte ranges of the lines of `source`, terminators excluded.
///
/// `\r\n`, a lone `\r` and `\n` each end a line.
fn line_ranges(source: &str) -> Vec<Range<usize>> {
    let bytes = source.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let terminator = match bytes[i] {
            b'\n' => 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
            b'\r' => 1,
            _ => {
                i += 1;
                continue;
            }
        };
        lines.push(start..i);
        i += terminator;
        start = i;
    }
    lines.push(start..bytes.len());
    lines
}

/// Group a line's bytes into runs painted by the same node.
///
/// Run boundaries fall on node boundaries, which are always char
/// boundaries, so slicing `source` at them is safe.
fn tokenize_line(
    source: &str,
    paints: &[Option<Paint>],
    line: Range<usize>,
    names: &[&str],
) -> CodeLine {
    let mut tokens = Vec::new();
    let mut run_start = line.start;
    let key_at = |i: usize| paints[i].map(Paint::run_key);

    for i in line.clone() {
        let next = i + 1;
        if next == line.end || key_at(next) != key_at(i) {
            let name = paints[i].and_then(|p| p.capture).map(|c| names[c as usize]);
            tokens.push(CodeToken::new(name, &source[run_start..next]));
            run_start = next;
        }
    }

    CodeLine { tokens }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
