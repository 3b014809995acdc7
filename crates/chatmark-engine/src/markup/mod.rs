//! # Markup Tokenizing
//!
//! Turns the lightweight inline markup emitted by language models into plain
//! text plus [`Annotation`](crate::annotation::Annotation)s.
//!
//! ## Modules
//!
//! - **`kinds`**: `FormatKind` enum owning each delimiter and wire entity type
//! - **`prefix`**: `match_delimiter()` picks the delimiter at a scan position
//! - **`cursor`**: `Cursor` for left-to-right scanning with position tracking
//! - **`tokenizer`**: `tokenize()` tag-stack tokenizer with literal recovery
//!
//! ## Delimiter Precedence
//!
//! | delimiter     | kind          |
//! |---------------|---------------|
//! | ```` ``` ```` | pre           |
//! | `**`          | bold          |
//! | `__`          | italic        |
//! | `~~`          | strikethrough |
//! | `` ` ``       | code          |
//!
//! Checked top to bottom at every position, so a fence is never read as three
//! inline code delimiters.

pub mod cursor;
pub mod kinds;
pub mod prefix;
pub mod tokenizer;

pub use kinds::FormatKind;
pub use prefix::match_delimiter;
pub use tokenizer::{Tokenized, tokenize};
