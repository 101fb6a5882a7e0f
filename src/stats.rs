use ndarray::Array2;
use strum::EnumCount;

use crate::census::BoardAssignment;
use crate::object::CelestialObject;
use crate::sector::{Ring, Sector};

/// Running per-(sector, object) occurrence counts across an enumeration.
///
/// Starts at zero everywhere and is bumped once per discovered board; the enumeration hands the
/// finished value back to the caller, after which it only answers queries.
#[derive(Clone, PartialEq, Debug)]
pub struct Census {
    ring: Ring,
    counts: Array2<u64>,
    boards: u64,
}

impl Census {
    /// An empty census over `ring`.
    pub fn new(ring: Ring) -> Self {
        Self {
            ring,
            counts: Array2::zeros((ring.size(), CelestialObject::COUNT)),
            boards: 0,
        }
    }

    /// Fold one discovered board into the counts.
    pub fn record(&mut self, board: &BoardAssignment) {
        for (sector, object) in board.placements() {
            self.counts[[sector.index(), object.ordinal()]] += 1;
        }
        self.boards += 1;
    }

    /// The total number of valid boards discovered.
    pub fn boards(&self) -> u64 {
        self.boards
    }

    /// The number of boards in which `sector` held `object`.
    pub fn count(&self, sector: Sector, object: CelestialObject) -> u64 {
        self.counts[[sector.index(), object.ordinal()]]
    }

    /// The ring this census describes.
    pub fn ring(&self) -> Ring {
        self.ring
    }

    /// Relative frequencies and entropy summaries over the counted boards, or [`None`] if no
    /// board satisfied the rules. The statistics of an empty solution set are undefined, never a
    /// division by zero.
    pub fn distribution(&self) -> Option<Distribution> {
        if self.boards == 0 {
            return None;
        }

        let total = self.boards as f64;
        Some(Distribution {
            ring: self.ring,
            boards: self.boards,
            probabilities: self.counts.mapv(|count| count as f64 / total),
        })
    }
}

/// Marginal probabilities over all valid boards, with Shannon entropy summaries.
///
/// Formatting one with [`Display`](std::fmt::Display) renders the full census report.
#[derive(Clone, PartialEq, Debug)]
pub struct Distribution {
    ring: Ring,
    boards: u64,
    probabilities: Array2<f64>,
}

impl Distribution {
    /// The fraction of all valid boards in which `sector` holds `object`.
    pub fn probability(&self, sector: Sector, object: CelestialObject) -> f64 {
        self.probabilities[[sector.index(), object.ordinal()]]
    }

    /// The Shannon entropy, in bits, of which object occupies `sector`. At most log2 of the
    /// number of object kinds.
    pub fn sector_entropy(&self, sector: Sector) -> f64 {
        entropy(self.probabilities.row(sector.index()).iter().copied())
    }

    /// The Shannon entropy, in bits, of where `object` sits across the ring.
    ///
    /// The probabilities across sectors sum to the object's board count k, not 1, so this is the
    /// entropy of an unnormalized distribution; it peaks at k·log2(N/k) when the object is spread
    /// evenly over all N sectors.
    pub fn object_entropy(&self, object: CelestialObject) -> f64 {
        entropy(self.probabilities.column(object.ordinal()).iter().copied())
    }

    /// The total number of valid boards behind these frequencies.
    pub fn boards(&self) -> u64 {
        self.boards
    }

    /// The ring this distribution describes.
    pub fn ring(&self) -> Ring {
        self.ring
    }
}

// 0 log2(0) is taken as 0, so impossible placements contribute nothing
fn entropy(probabilities: impl Iterator<Item = f64>) -> f64 {
    probabilities
        .filter(|p| *p > 0.0)
        .map(|p| -p * p.log2())
        .sum()
}
