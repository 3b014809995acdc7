//! Per-fragment delivery reporting.
//!
//! The engine never fails, but sending its output can. A long reply becomes
//! several messages, and one of them being rejected must not hide the others:
//! [`deliver`] keeps going after a failure and reports which fragments made
//! it and which did not.

use std::fmt;

use crate::entity::OutgoingMessage;

/// Something that can send a single message to the messaging platform.
pub trait MessageSink {
    type Error: fmt::Display;

    /// Sends the message at zero-based `index` of the reply's sequence.
    fn send(&mut self, index: usize, message: &OutgoingMessage) -> Result<(), Self::Error>;
}

/// A fragment the sink refused, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentFailure<E> {
    /// Zero-based position of the fragment in the message sequence.
    pub index: usize,
    pub error: E,
}

/// Outcome of sending every fragment of one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport<E> {
    total: usize,
    failures: Vec<FragmentFailure<E>>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("{failed} of {total} fragments failed to send (indices: {indices:?})")]
    Partial {
        failed: usize,
        total: usize,
        indices: Vec<usize>,
    },
}

impl<E> DeliveryReport<E> {
    /// Number of fragments attempted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Indices of fragments that were sent.
    pub fn sent(&self) -> Vec<usize> {
        (0..self.total)
            .filter(|i| !self.failures.iter().any(|f| f.index == *i))
            .collect()
    }

    pub fn failed(&self) -> &[FragmentFailure<E>] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Collapses the report into the number of sent fragments, or an error
    /// naming the fragments that failed.
    pub fn into_result(self) -> Result<usize, DeliveryError> {
        if self.failures.is_empty() {
            return Ok(self.total);
        }
        Err(DeliveryError::Partial {
            failed: self.failures.len(),
            total: self.total,
            indices: self.failures.iter().map(|f| f.index).collect(),
        })
    }
}

/// Sends `messages` in order through `sink`, continuing past failures.
pub fn deliver<S: MessageSink>(
    sink: &mut S,
    messages: &[OutgoingMessage],
) -> DeliveryReport<S::Error> {
    let mut failures = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if let Err(error) = sink.send(index, message) {
            log::warn!(
                "fragment {}/{} failed to send: {error}",
                index + 1,
                messages.len()
            );
            failures.push(FragmentFailure { index, error });
        }
    }

    DeliveryReport {
        total: messages.len(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records sent texts and rejects any message whose text contains `reject`.
    struct RecordingSink {
        reject: &'static str,
        sent: Vec<(usize, String)>,
    }

    impl MessageSink for RecordingSink {
        type Error = String;

        fn send(&mut self, index: usize, message: &OutgoingMessage) -> Result<(), Self::Error> {
            if message.text.contains(self.reject) {
                return Err(format!("rejected {:?}", message.text));
            }
            self.sent.push((index, message.text.clone()));
            Ok(())
        }
    }

    fn message(text: &str) -> OutgoingMessage {
        OutgoingMessage {
            text: text.to_string(),
            entities: vec![],
        }
    }

    #[test]
    fn all_sent() {
        let mut sink = RecordingSink {
            reject: "never",
            sent: vec![],
        };
        let report = deliver(&mut sink, &[message("a"), message("b")]);

        assert!(report.is_complete());
        assert_eq!(report.sent(), vec![0, 1]);
        assert_eq!(report.into_result(), Ok(2));
        assert_eq!(sink.sent, vec![(0, "a".to_string()), (1, "b".to_string())]);
    }

    #[test]
    fn failure_does_not_stop_later_fragments() {
        let mut sink = RecordingSink {
            reject: "bad",
            sent: vec![],
        };
        let report = deliver(&mut sink, &[message("one"), message("bad"), message("three")]);

        // The message after a refusal still carries its own position.
        assert_eq!(
            sink.sent,
            vec![(0, "one".to_string()), (2, "three".to_string())]
        );
        assert_eq!(report.sent(), vec![0, 2]);
        assert_eq!(report.failed().len(), 1);
        assert_eq!(report.failed()[0].index, 1);
        assert_eq!(
            report.into_result(),
            Err(DeliveryError::Partial {
                failed: 1,
                total: 3,
                indices: vec![1],
            })
        );
    }

    #[test]
    fn error_message_names_indices() {
        let err = DeliveryError::Partial {
            failed: 2,
            total: 5,
            indices: vec![1, 4],
        };
        assert_eq!(
            err.to_string(),
            "2 of 5 fragments failed to send (indices: [1, 4])"
        );
    }

    #[test]
    fn nothing_to_send() {
        let mut sink = RecordingSink {
            reject: "",
            sent: vec![],
        };
        let report = deliver(&mut sink, &[]);
        assert_eq!(report.total(), 0);
        assert!(report.is_complete());
    }
}
