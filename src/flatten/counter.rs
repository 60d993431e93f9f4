//! Per-record-type occurrence counter.

use hickory_proto::rr::RecordType;

use crate::roster::RecordRoster;

/// Ordered record-type counter.
///
/// Seeded with the roster (plus CNAME) at zero; types first seen in an answer
/// are appended after the seeds in discovery order.
#[derive(Debug, Clone, Default)]
pub struct RecordCounter {
    counts: Vec<(RecordType, usize)>,
}

impl RecordCounter {
    /// Creates a counter with one zero entry per roster member, then CNAME.
    pub fn seeded(roster: &RecordRoster) -> Self {
        let mut counter = Self::default();
        for record_type in roster.iter().chain(std::iter::once(RecordType::CNAME)) {
            if !counter.counts.iter().any(|(t, _)| *t == record_type) {
                counter.counts.push((record_type, 0));
            }
        }
        counter
    }

    /// Counts one more occurrence of `record_type` and returns the new count.
    pub fn increment(&mut self, record_type: RecordType) -> usize {
        if let Some((_, count)) = self.counts.iter_mut().find(|(t, _)| *t == record_type) {
            *count += 1;
            return *count;
        }
        self.counts.push((record_type, 1));
        1
    }

    pub fn get(&self, record_type: RecordType) -> usize {
        self.counts
            .iter()
            .find(|(t, _)| *t == record_type)
            .map_or(0, |(_, count)| *count)
    }

    /// Tracked types with their counts, seeds first.
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, usize)> + '_ {
        self.counts.iter().copied()
    }
}
