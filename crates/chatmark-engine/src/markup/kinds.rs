//! Formatting kinds and the delimiters that own them.
//!
//! All delimiter strings live here; the tokenizer asks [`FormatKind`] for
//! them and never hardcodes `**` or `` ` ``.

use serde::{Deserialize, Serialize};

/// The closed set of formatting categories the markup can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// Fenced preformatted block, delimited by three backticks.
    Pre,
    Bold,
    Italic,
    Strikethrough,
    /// Inline code, delimited by a single backtick.
    Code,
}

impl FormatKind {
    /// Every kind in delimiter matching priority order.
    ///
    /// The fence must precede the single backtick because `` ` `` is a prefix
    /// of ```` ``` ````.
    pub const PRIORITY: [FormatKind; 5] = [
        FormatKind::Pre,
        FormatKind::Bold,
        FormatKind::Italic,
        FormatKind::Strikethrough,
        FormatKind::Code,
    ];

    /// The literal delimiter that opens and closes this kind.
    pub const fn delimiter(self) -> &'static str {
        match self {
            FormatKind::Pre => "```",
            FormatKind::Bold => "**",
            FormatKind::Italic => "__",
            FormatKind::Strikethrough => "~~",
            FormatKind::Code => "`",
        }
    }

    /// The message entity type string used on the wire.
    pub const fn entity_type(self) -> &'static str {
        match self {
            FormatKind::Pre => "pre",
            FormatKind::Bold => "bold",
            FormatKind::Italic => "italic",
            FormatKind::Strikethrough => "strikethrough",
            FormatKind::Code => "code",
        }
    }
}
