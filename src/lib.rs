#![warn(missing_docs)]

//! # `ephemeris`
//!
//! An exhaustive census of every valid sky in [The Search for Planet X](https://foxtrotgames.com/planetx/).
//! Begin with a [`Ruleset`], either a preset from [`Ruleset::for_mode`] or a custom rule system
//! assembled through a [`RulesetBuilder`], which can also layer mid-game [`Observation`]s on top.
//! Then call [`take_census`] with a fresh [`VarisatOracle`]; the resulting [`Census`] yields a
//! [`Distribution`] whose [`Display`](std::fmt::Display) form is the full probability report.
//!
//! # Internals
//! This crate expresses the board rules as a Boolean satisfiability problem and counts models
//! rather than finding one. Each (sector, object) pair is a variable stating that the sector
//! holds the object. Exactly-one clauses make the six objects mutually exclusive per sector,
//! cardinality clauses fix how many sectors each object claims, and the adjacency rules (gas
//! clouds by empties, dwarf planets away from Planet X, asteroids in runs) become implications
//! between neighboring sectors. The expert board's contiguous dwarf planet band is compiled with
//! one auxiliary selector variable per candidate band position.
//!
//! The census is a solve-and-block loop: each model is read back as a full board, tallied, then
//! excluded by a clause flipping at least one board variable, until the solver reports
//! unsatisfiability. Blocking clauses never mention auxiliary variables, so every distinct board
//! is counted exactly once. The tallies give the marginal probability of each object in each
//! sector and the Shannon entropies that say where a survey would be most informative.

pub use census::{enumerate_boards, take_census, BoardAssignment, CensusError};
pub use encoding::SkyEncoding;
pub use object::CelestialObject;
pub use oracle::{Oracle, VarisatOracle, Verdict};
pub use rules::{GameMode, Observation, Ruleset, RulesetBuilder, RulesetError};
pub use sector::{Ring, RingSize, Sector};
pub use stats::{Census, Distribution};

pub(crate) mod census;
pub(crate) mod encoding;
pub(crate) mod logic;
pub(crate) mod object;
pub(crate) mod oracle;
pub(crate) mod report;
pub(crate) mod rules;
pub(crate) mod sector;
pub(crate) mod stats;
