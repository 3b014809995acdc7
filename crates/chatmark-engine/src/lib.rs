//! # chatmark engine
//!
//! Converts inline markup produced by a language model into messages a chat
//! platform can deliver: plain text, formatting entities in UTF-16 units, and
//! a split into size-bounded fragments.
//!
//! ```
//! use chatmark_engine::prepare_messages;
//!
//! let messages = prepare_messages("a **bold** b", 3500);
//! assert_eq!(messages[0].text, "a bold b");
//! assert_eq!(messages[0].entities[0].kind, "bold");
//! assert_eq!(messages[0].entities[0].offset, 2);
//! ```
//!
//! Every stage is a pure function: nothing here fails, blocks, or keeps state
//! between calls.

pub mod annotation;
pub mod assemble;
pub mod chunking;
pub mod delivery;
pub mod entity;
pub mod invariants;
pub mod markup;
pub mod span;
pub mod utf16;

pub use annotation::Annotation;
pub use assemble::{DEFAULT_MAX_FRAGMENT_LEN, Fragment, assemble};
pub use delivery::{DeliveryError, DeliveryReport, FragmentFailure, MessageSink, deliver};
pub use entity::{MessageEntity, OutgoingMessage, PLATFORM_MAX_MESSAGE_UTF16, prepare_messages};
pub use markup::{FormatKind, Tokenized, tokenize};
pub use span::Span;
