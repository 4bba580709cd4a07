//! Errors produced while rendering a code block.

/// Why a code block could not be rendered.
///
/// Rendering is all-or-nothing: any error means no lines were produced.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The language tag names no registered grammar. Carries the name
    /// after the `language-` prefix was stripped.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The grammar was built for an incompatible tree-sitter ABI.
    #[error("grammar rejected by tree-sitter: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// The bundled highlight query does not compile against its grammar.
    #[error("highlight query failed to compile: {0}")]
    Query(#[from] tree_sitter::QueryError),

    /// The parser gave up without producing a tree.
    #[error("parser produced no syntax tree")]
    Parse,
}
