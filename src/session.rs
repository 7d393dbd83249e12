use serde::{Deserialize, Serialize};

use crate::sample::GazeSample;

/// In-memory record sequence for one eye-tracking capture.
///
/// A session pairs a label (commonly the source filename) with the gaze
/// samples observed during that capture, kept in the order they were
/// appended. The sequence is append-only: samples are never reordered,
/// filtered, or removed once stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GazeSession {
    identifier: String,
    records: Vec<GazeSample>,
}

impl GazeSession {
    /// Creates an empty session with an empty identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identifier: String::new(),
            records: Vec::new(),
        }
    }

    /// Returns the session label.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Replaces the session label, leaving the stored samples untouched.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    /// Appends one sample at the end of the sequence.
    ///
    /// The sample is stored as given, with no validation and no capacity
    /// bound, so the call cannot fail.
    pub fn append(&mut self, sample: GazeSample) {
        self.records.push(sample);
    }

    /// Returns the stored samples in append order.
    #[must_use]
    pub fn records(&self) -> &[GazeSample] {
        &self.records
    }

    /// Returns the number of stored samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether no sample has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the stored samples in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, GazeSample> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a GazeSession {
    type Item = &'a GazeSample;
    type IntoIter = std::slice::Iter<'a, GazeSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
