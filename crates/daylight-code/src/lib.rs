//! # daylight-code: syntax-highlighted code blocks
//!
//! Turns a fenced code block (source text plus a `language-<name>` class)
//! into styled lines of tokens, ready to emit as markup.
//!
//! # Architecture
//!
//! ```text
//! (source, "language-python")
//!     │
//!     ▼
//! language.rs:  strip prefix, look up the static registry
//!     │           └─ unknown → RenderError::UnsupportedLanguage
//!     ▼
//! highlight.rs: tree-sitter parse + highlight query → per-byte captures
//!     │           → per-line runs (CodeLine / CodeToken)
//!     ▼
//! vs_dark.rs:   capture name → token color
//!     │
//!     ▼
//! block.rs:     CodeBlock { class, style (+20px padding, overflow auto), lines }
//!                 └─ to_html()
//! ```

pub mod block;
pub mod error;
pub mod highlight;
pub mod language;
pub mod vs_dark;

pub use block::{BlockStyle, CodeBlock, Overflow, render_code_block, render_with};
pub use error::RenderError;
pub use highlight::{CodeLine, CodeToken, Highlighter};
pub use language::{Language, SUPPORTED_LANGUAGES, is_language_valid, language_name};
