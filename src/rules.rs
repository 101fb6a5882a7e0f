use std::num::NonZero;

use strum::{Display, EnumCount};
use thiserror::Error;

use crate::object::CelestialObject;
use crate::sector::{Ring, RingSize, Sector};

/// Sectors in the dwarf planet band of the expert board, endpoints included.
const EXPERT_BAND_WIDTH: usize = 6;

/// The two published board sizes and their preset rules.
#[derive(Copy, Clone, Display, Eq, PartialEq, Hash, Debug)]
pub enum GameMode {
    /// Twelve sectors; one dwarf planet and two truly empty sectors.
    Standard,
    /// Eighteen sectors; four dwarf planets confined to a band of six, five truly empty sectors.
    Expert,
}

/// Reasons a [`RulesetBuilder`] may fail to produce a [`Ruleset`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum RulesetError {
    /// A rule referenced a sector that does not exist on the ring.
    #[error("sector {number} does not exist on a ring of {size} sectors")]
    SectorOutOfRange {
        /// The one-based number of the offending sector.
        number: usize,
        /// The size of the ring it was aimed at.
        size: usize,
    },
    /// The per-object counts cannot tile the ring exactly.
    #[error("object counts sum to {total} but the ring has {size} sectors")]
    TargetSumMismatch {
        /// The sum of all per-object counts.
        total: usize,
        /// The size of the ring they must fill.
        size: usize,
    },
    /// The dwarf planet band cannot hold the requested dwarf planets on this ring.
    #[error("a band of {width} sectors cannot carry {dwarfs} dwarf planets on a ring of {size}")]
    BandUnsatisfiable {
        /// The requested band width.
        width: usize,
        /// The number of dwarf planets the counts call for.
        dwarfs: usize,
        /// The size of the ring.
        size: usize,
    },
    /// A survey window does not fit the ring, or its count exceeds its span.
    #[error("a survey of {span} sectors expecting {count} hits is impossible on a ring of {size}")]
    SurveyImpossible {
        /// The length of the survey window.
        span: usize,
        /// The expected number of hits inside it.
        count: usize,
        /// The size of the ring.
        size: usize,
    },
    /// A proximity radius of zero, or one that laps the ring, is meaningless.
    #[error("a proximity radius of {radius} is out of range on a ring of {size} sectors")]
    RadiusOutOfRange {
        /// The requested radius.
        radius: usize,
        /// The size of the ring.
        size: usize,
    },
}

/// A piece of knowledge layered on top of a mode's base rules, narrowing the census to the boards
/// consistent with it.
///
/// The presets carry no observations; they model what a player learns mid-game.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Observation {
    /// Exactly `count` of the `span` sectors clockwise from `start` (inclusive) hold `object`.
    Survey {
        /// The object the survey looked for.
        object: CelestialObject,
        /// The first sector of the surveyed window.
        start: Sector,
        /// The length of the window, wrapping if needed.
        span: usize,
        /// The exact number of hits reported.
        count: usize,
    },
    /// Every sector holding `subject` has at least one `object` within `radius` steps in either
    /// direction.
    Proximity {
        /// The object whose surroundings are constrained.
        subject: CelestialObject,
        /// The object that must appear nearby.
        object: CelestialObject,
        /// The maximum distance, in sectors, at which it may appear.
        radius: usize,
    },
    /// `sector` is known to hold `object`.
    Confirmed {
        /// The sector in question.
        sector: Sector,
        /// What it holds.
        object: CelestialObject,
    },
    /// `sector` is known not to hold `object`.
    RuledOut {
        /// The sector in question.
        sector: Sector,
        /// What it cannot hold.
        object: CelestialObject,
    },
}

/// A fully validated rule system for one board: the ring, the per-object counts, positional
/// exclusions, the optional dwarf planet band, and any [`Observation`]s.
///
/// Obtain one from [`Self::for_mode`] or through a [`RulesetBuilder`].
#[derive(Clone, Debug)]
pub struct Ruleset {
    ring: Ring,
    targets: [usize; CelestialObject::COUNT],
    banned: Vec<(Sector, CelestialObject)>,
    dwarf_band: Option<usize>,
    observations: Vec<Observation>,
}

impl Ruleset {
    /// The preset rule system for `mode`.
    pub fn for_mode(mode: GameMode) -> Self {
        // counts are in CelestialObject declaration order
        let (size, targets, dwarf_band) = match mode {
            GameMode::Standard => (12, [2, 2, 1, 4, 2, 1], None),
            GameMode::Expert => (18, [2, 2, 4, 4, 5, 1], Some(EXPERT_BAND_WIDTH)),
        };
        let ring = Ring::new(NonZero::new(size).unwrap());

        Self {
            ring,
            targets,
            banned: comet_exclusions(ring),
            dwarf_band,
            observations: Vec::new(),
        }
    }

    /// The ring this rule system constrains.
    pub fn ring(&self) -> Ring {
        self.ring
    }

    /// The number of sectors every valid board assigns to `object`.
    pub fn target(&self, object: CelestialObject) -> usize {
        self.targets[object.ordinal()]
    }

    pub(crate) fn banned(&self) -> &[(Sector, CelestialObject)] {
        &self.banned
    }

    pub(crate) fn dwarf_band(&self) -> Option<usize> {
        self.dwarf_band
    }

    pub(crate) fn observations(&self) -> &[Observation] {
        &self.observations
    }
}

/// Builds a [`Ruleset`], collecting reasons for invalidity rather than panicking.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some
/// point. Once a reason for invalidity arises, mutating methods do nothing and [`Self::build`]
/// reports every reason found.
#[derive(Clone, Debug)]
pub struct RulesetBuilder {
    ring: Ring,
    targets: [usize; CelestialObject::COUNT],
    banned: Vec<(Sector, CelestialObject)>,
    dwarf_band: Option<usize>,
    observations: Vec<Observation>,
    invalid_reasons: Vec<RulesetError>,
}

impl RulesetBuilder {
    /// A builder over a ring of `size` sectors with nothing else: all counts zero, no exclusions,
    /// no band, no observations.
    pub fn new(size: RingSize) -> Self {
        Self {
            ring: Ring::new(size),
            targets: [0; CelestialObject::COUNT],
            banned: Vec::new(),
            dwarf_band: None,
            observations: Vec::new(),
            invalid_reasons: Vec::new(),
        }
    }

    /// A builder primed with the preset rules of `mode`, ready for observations.
    pub fn for_mode(mode: GameMode) -> Self {
        let preset = Ruleset::for_mode(mode);

        Self {
            ring: preset.ring,
            targets: preset.targets,
            banned: preset.banned,
            dwarf_band: preset.dwarf_band,
            observations: preset.observations,
            invalid_reasons: Vec::new(),
        }
    }

    /// Require that exactly `count` sectors hold `object` on every valid board.
    pub fn target(&mut self, object: CelestialObject, count: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.targets[object.ordinal()] = count;
        self
    }

    /// Forbid `object` from ever occupying `sector`.
    pub fn ban(&mut self, object: CelestialObject, sector: Sector) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.ring.contains(sector) {
            self.invalid_reasons.push(RulesetError::SectorOutOfRange {
                number: sector.number(),
                size: self.ring.size(),
            });
            return self;
        }

        self.banned.push((sector, object));
        self
    }

    /// Confine dwarf planets to one contiguous run of exactly `width` sectors whose two endpoints
    /// both hold dwarf planets.
    pub fn dwarf_band(&mut self, width: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.dwarf_band = Some(width);
        self
    }

    /// Layer `observation` on top of the base rules.
    pub fn observe(&mut self, observation: Observation) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match self.vet(observation) {
            Some(reason) => self.invalid_reasons.push(reason),
            None => self.observations.push(observation),
        }
        self
    }

    fn vet(&self, observation: Observation) -> Option<RulesetError> {
        let size = self.ring.size();

        match observation {
            Observation::Survey { start, span, count, .. } => {
                if !self.ring.contains(start) {
                    return Some(RulesetError::SectorOutOfRange { number: start.number(), size });
                }
                if span == 0 || span > size || count > span {
                    return Some(RulesetError::SurveyImpossible { span, count, size });
                }
            }
            Observation::Proximity { radius, .. } => {
                if radius == 0 || radius > size / 2 {
                    return Some(RulesetError::RadiusOutOfRange { radius, size });
                }
            }
            Observation::Confirmed { sector, .. } | Observation::RuledOut { sector, .. } => {
                if !self.ring.contains(sector) {
                    return Some(RulesetError::SectorOutOfRange { number: sector.number(), size });
                }
            }
        }

        None
    }

    /// Check the validity of this builder.
    ///
    /// Returns [`None`] if the builder is valid, or [`Some`] with all reasons it is not.
    pub fn is_valid(&self) -> Option<&Vec<RulesetError>> {
        match self.invalid_reasons.is_empty() {
            true => None,
            false => Some(&self.invalid_reasons),
        }
    }

    /// Convert the state of this builder into a [`Ruleset`], running the whole-configuration
    /// checks no single mutating method can.
    pub fn build(&self) -> Result<Ruleset, Vec<RulesetError>> {
        let mut reasons = self.invalid_reasons.clone();
        let size = self.ring.size();

        let total: usize = self.targets.iter().sum();
        if total != size {
            reasons.push(RulesetError::TargetSumMismatch { total, size });
        }

        if let Some(width) = self.dwarf_band {
            let dwarfs = self.targets[CelestialObject::DwarfPlanet.ordinal()];
            // both endpoints of the band hold dwarf planets, so two is the floor
            if width > size || dwarfs < 2 || dwarfs > width {
                reasons.push(RulesetError::BandUnsatisfiable { width, dwarfs, size });
            }
        }

        if !reasons.is_empty() {
            return Err(reasons);
        }

        Ok(Ruleset {
            ring: self.ring,
            targets: self.targets,
            banned: self.banned.clone(),
            dwarf_band: self.dwarf_band,
            observations: self.observations.clone(),
        })
    }
}

/// Comets only ever appear in prime-numbered sectors, so every other sector carries an
/// unconditional exclusion.
fn comet_exclusions(ring: Ring) -> Vec<(Sector, CelestialObject)> {
    ring.sectors()
        .filter(|sector| !is_prime(sector.number()))
        .map(|sector| (sector, CelestialObject::Comet))
        .collect()
}

fn is_prime(n: usize) -> bool {
    n >= 2
        && (2..n)
            .take_while(|divisor| divisor * divisor <= n)
            .all(|divisor| n % divisor != 0)
}
