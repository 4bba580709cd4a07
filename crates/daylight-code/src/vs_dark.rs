//! The fixed dark visual theme for code blocks (Visual Studio Dark).
//!
//! Maps highlight capture names to token colors. Capture names follow
//! the tree-sitter convention of dot-separated scopes (`function.builtin`,
//! `punctuation.bracket`); lookup tries the full name first, then falls
//! back to the leading scope.

use daylight_color::Rgb;

/// Default text color.
pub const PLAIN: Rgb = Rgb::new(0x9c, 0xdc, 0xfe);
/// Block background.
pub const BACKGROUND: Rgb = Rgb::new(0x1e, 0x1e, 0x1e);

pub const COMMENT: Rgb = Rgb::new(106, 153, 85);
pub const KEYWORD: Rgb = Rgb::new(86, 156, 214);
pub const NUMBER: Rgb = Rgb::new(181, 206, 168);
pub const CONSTANT: Rgb = Rgb::new(100, 102, 149);
pub const VARIABLE: Rgb = Rgb::new(156, 220, 254);
pub const STRING: Rgb = Rgb::new(206, 145, 120);
pub const TAG: Rgb = Rgb::new(78, 201, 176);
pub const PUNCTUATION: Rgb = Rgb::new(212, 212, 212);
pub const FUNCTION: Rgb = Rgb::new(220, 220, 170);
pub const CLASS_NAME: Rgb = Rgb::new(78, 201, 176);
pub const CHAR: Rgb = Rgb::new(209, 105, 105);

/// Token color for a capture name, `None` for plain text.
#[must_use]
#[allow(clippy::match_same_arms)] // Scopes are grouped by meaning, not by color.
pub fn color_for(capture: &str) -> Option<Rgb> {
    // Builtins render like keywords regardless of their leading scope.
    match capture {
        "function.builtin" | "type.builtin" | "constant.builtin" | "variable.builtin" => {
            return Some(KEYWORD);
        }
        "string.escape" | "escape" | "string.special" | "string.regex" => return Some(CHAR),
        "string.special.key" => return Some(VARIABLE),
        _ => {}
    }

    let scope = capture.split('.').next().unwrap_or(capture);
    match scope {
        "comment" => Some(COMMENT),
        "keyword" | "conditional" | "repeat" | "include" | "exception" => Some(KEYWORD),
        "number" | "float" | "boolean" => Some(NUMBER),
        "constant" => Some(CONSTANT),
        "variable" | "property" | "attribute" | "label" | "parameter" => Some(VARIABLE),
        "string" | "character" => Some(STRING),
        "tag" => Some(TAG),
        "punctuation" | "operator" | "delimiter" => Some(PUNCTUATION),
        "function" | "method" => Some(FUNCTION),
        "type" | "constructor" | "namespace" | "module" => Some(CLASS_NAME),
        _ => None,
    }
}
