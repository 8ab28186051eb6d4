/*!
 * Attestation records.
 *
 * The backend aggregates, per dictionary entry, how often the entry is
 * attested in the corpus within historical timespans.
 */

use serde::{Deserialize, Serialize};

/// Year range of a historical period. Negative years are BCE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First year of the period
    #[serde(default)]
    pub begin: i32,
    /// Last year of the period
    #[serde(default)]
    pub end: i32,
}

impl Period {
    /// Create a new period.
    pub fn new(begin: i32, end: i32) -> Self {
        Period { begin, end }
    }

    /// Whether a year falls within this period (inclusive bounds).
    pub fn contains_year(&self, year: i32) -> bool {
        self.begin <= year && year <= self.end
    }
}

/// Attestation counts aggregated over the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationStats {
    /// Number of attestations
    #[serde(default)]
    pub count: u64,
    /// Number of distinct texts
    #[serde(default)]
    pub texts: u64,
    /// Number of distinct sentences
    #[serde(default)]
    pub sentences: u64,
    /// Number of distinct objects
    #[serde(default)]
    pub objects: u64,
}

/// Attestation counts within one historical timespan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestedTimespan {
    /// The historical period covered
    #[serde(default)]
    pub period: Period,
    /// Counts within that period
    #[serde(default)]
    pub attestations: AttestationStats,
}
