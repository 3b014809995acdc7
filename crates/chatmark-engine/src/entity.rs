//! Wire-level message entities.
//!
//! Messaging platforms describe formatting as entities with a type string and
//! an offset/length counted in UTF-16 code units. These types are the shape
//! handed to the messaging collaborator.

use serde::{Deserialize, Serialize};

use crate::{
    annotation::Annotation,
    assemble::{Fragment, assemble},
};

/// Hard cap on message text length imposed by the platform, in UTF-16 units.
pub const PLATFORM_MAX_MESSAGE_UTF16: usize = 4096;

/// A formatting entity as sent to the messaging platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    /// Offset in UTF-16 code units.
    pub offset: usize,
    /// Length in UTF-16 code units.
    pub length: usize,
}

impl From<&Annotation> for MessageEntity {
    fn from(annotation: &Annotation) -> Self {
        Self {
            kind: annotation.kind.entity_type().to_string(),
            offset: annotation.utf16_offset,
            length: annotation.utf16_len,
        }
    }
}

/// A ready-to-send message: one fragment's text plus its entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,
}

impl OutgoingMessage {
    /// Length of the text as the platform counts it.
    pub fn utf16_len(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

impl From<Fragment> for OutgoingMessage {
    fn from(fragment: Fragment) -> Self {
        let entities = fragment.annotations.iter().map(MessageEntity::from).collect();
        Self {
            text: fragment.text,
            entities,
        }
    }
}

/// Converts model output into the ordered messages that carry it.
pub fn prepare_messages(input: &str, max_len: usize) -> Vec<OutgoingMessage> {
    assemble(input, max_len)
        .into_iter()
        .map(OutgoingMessage::from)
        .collect()
}
