use strum::{EnumCount, VariantArray};
use thiserror::Error;
use tracing::{debug, info};
use varisat::Lit;

use crate::encoding::SkyEncoding;
use crate::object::CelestialObject;
use crate::oracle::{Oracle, Verdict};
use crate::rules::Ruleset;
use crate::sector::Sector;
use crate::stats::Census;

/// Reasons an exhaustive census may fail.
///
/// An unsatisfiable ruleset is not one of them: running out of boards is the normal terminal
/// state, and a ruleset admitting no boards at all simply produces an empty [`Census`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum CensusError {
    /// The oracle answered [`Verdict::Unknown`]. Treating that as "no boards left" would silently
    /// undercount, so the whole run is abandoned instead.
    #[error("the satisfiability oracle could not decide a query; the census is incomplete")]
    Indeterminate,
    /// The oracle reported a satisfiable system but exposed no model to probe.
    #[error("the oracle reported a satisfiable system but exposed no model")]
    MissingModel,
    /// A model assigned no object, or more than one, to some sector. The encoding rules this out,
    /// so seeing it means the oracle dropped constraints.
    #[error("the model assigns sector {sector} no single object")]
    IncoherentSector {
        /// The one-based number of the offending sector.
        sector: usize,
    },
}

/// One complete placement of objects on the ring, extracted from a model.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BoardAssignment {
    objects: Vec<CelestialObject>,
}

impl BoardAssignment {
    /// The object occupying `sector`.
    pub fn object_at(&self, sector: Sector) -> CelestialObject {
        self.objects[sector.index()]
    }

    /// All (sector, object) pairs in sector order.
    pub fn placements(&self) -> impl Iterator<Item = (Sector, CelestialObject)> + '_ {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (Sector(index), *object))
    }
}

/// Enumerate every board satisfying `ruleset`, calling `visit` once per distinct board, and
/// return how many there were.
///
/// This is a solve-and-block loop: query the oracle; on a model, extract the full board, hand it
/// to `visit`, then add a blocking clause flipping at least one board variable so the identical
/// board can never recur. Every clause strictly shrinks the remaining solution set, so the loop
/// terminates. [`Verdict::Unsatisfiable`] is the normal exit; [`Verdict::Unknown`] aborts the
/// census as incomplete.
///
/// Blocking clauses range over the board variables only. Any auxiliary variables the encoding
/// introduces may float freely without a board being counted twice.
///
/// The oracle must start empty; the enumeration adds constraints and never retracts them, so a
/// reused oracle would census the intersection of both rule systems.
pub fn enumerate_boards<O, F>(ruleset: &Ruleset, oracle: &mut O, mut visit: F) -> Result<u64, CensusError>
where
    O: Oracle,
    F: FnMut(&BoardAssignment),
{
    let encoding = SkyEncoding::new(ruleset);
    info!(
        sectors = ruleset.ring().size(),
        clauses = encoding.formula().len(),
        "compiled ruleset"
    );
    oracle.add_formula(encoding.formula());

    let mut boards = 0u64;
    loop {
        match oracle.check() {
            Verdict::Satisfiable => {
                let assignment = extract(&encoding, oracle)?;
                visit(&assignment);
                boards += 1;
                debug!(boards, "board recorded");

                let block = blocking_clause(&encoding, &assignment);
                oracle.add_clause(&block);
            }
            Verdict::Unsatisfiable => {
                info!(boards, "solution space exhausted");
                return Ok(boards);
            }
            Verdict::Unknown => return Err(CensusError::Indeterminate),
        }
    }
}

/// Run the full census for `ruleset`: enumerate every valid board and aggregate per-(sector,
/// object) occurrence counts.
///
/// Derive probabilities and entropies from the result with [`Census::distribution`].
pub fn take_census<O>(ruleset: &Ruleset, oracle: &mut O) -> Result<Census, CensusError>
where
    O: Oracle,
{
    let mut census = Census::new(ruleset.ring());
    enumerate_boards(ruleset, oracle, |board| census.record(board))?;

    Ok(census)
}

fn extract<O>(encoding: &SkyEncoding, oracle: &O) -> Result<BoardAssignment, CensusError>
where
    O: Oracle,
{
    let mut objects = Vec::with_capacity(encoding.ring().size());

    for sector in encoding.ring().sectors() {
        let mut held = None;
        for object in CelestialObject::VARIANTS {
            let value = oracle
                .value(encoding.var(sector, *object))
                .ok_or(CensusError::MissingModel)?;
            if value && held.replace(*object).is_some() {
                return Err(CensusError::IncoherentSector { sector: sector.number() });
            }
        }

        match held {
            Some(object) => objects.push(object),
            None => return Err(CensusError::IncoherentSector { sector: sector.number() }),
        }
    }

    Ok(BoardAssignment { objects })
}

// satisfied by everything except this exact board; at least one board variable must flip
fn blocking_clause(encoding: &SkyEncoding, assignment: &BoardAssignment) -> Vec<Lit> {
    let mut clause = Vec::with_capacity(encoding.ring().size() * CelestialObject::COUNT);

    for sector in encoding.ring().sectors() {
        let held = assignment.object_at(sector);
        for object in CelestialObject::VARIANTS {
            clause.push(encoding.var(sector, *object).lit(*object != held));
        }
    }

    clause
}
