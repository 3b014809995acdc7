//! Fragment splitting and annotation remapping.
//!
//! Long plain text is split into fragments that fit a messaging platform's
//! size limit, and the global annotation list is projected onto each fragment
//! so every fragment can be delivered as an independent message.
//!
//! # Size Limit
//!
//! - Measured in bytes of the plain text, not UTF-16 units
//! - Soft: a line longer than the limit is kept whole
//! - Fragments always end right after a `\n`, except the last

mod remap;
mod split;

pub use remap::remap_annotations;
pub use split::split_by_newline;
