use strum::{EnumCount, VariantArray};
use varisat::{CnfFormula, ExtendFormula, Lit, Var};

use crate::logic::{exactly_k, exactly_one};
use crate::object::CelestialObject;
use crate::rules::{Observation, Ruleset};
use crate::sector::{Ring, Sector};

/// A [`Ruleset`] compiled to propositional logic.
///
/// One variable per (sector, object) pair states that the sector holds the object; every rule
/// becomes clauses over these variables in a single [`CnfFormula`]. The variables are laid out
/// arithmetically so the census can recover a board from a model without bookkeeping.
pub struct SkyEncoding {
    ring: Ring,
    formula: CnfFormula,
}

impl SkyEncoding {
    /// Compile every rule of `ruleset` into a fresh formula.
    ///
    /// # Logical setup
    ///
    /// ## Sectors
    /// Every sector holds exactly one object, and for each object the number of sectors holding
    /// it equals the ruleset's count for that object.
    ///
    /// ## Exclusions
    /// Each positional exclusion, comet primality included, is a unit clause against one variable.
    ///
    /// ## Local rules
    /// The adjacency rules are implications on each sector and its two neighbors. For instance, a
    /// gas cloud at sector i needs a truly empty neighbor:
    /// G(i) => E(i - 1) + E(i + 1) = !G(i) + E(i - 1) + E(i + 1).
    /// The dwarf planet rule is stated from both sides, as the rulebook does, although either
    /// direction alone would cut the same boards.
    ///
    /// ## The dwarf planet band
    /// One selector variable per candidate start sector implies dwarf planets at both band
    /// endpoints and none outside the band; at least one selector must hold. Selectors live above
    /// the board variable block and are never enumerated over.
    pub fn new(ruleset: &Ruleset) -> Self {
        let mut encoding = Self {
            ring: ruleset.ring(),
            formula: CnfFormula::new(),
        };

        encoding.one_object_per_sector();
        encoding.object_counts(ruleset);
        encoding.exclusions(ruleset);
        encoding.gas_clouds_touch_empty();
        encoding.dwarves_avoid_planet_x();
        encoding.asteroids_pair_up();
        if let Some(width) = ruleset.dwarf_band() {
            encoding.dwarf_band(width);
        }
        for observation in ruleset.observations() {
            encoding.observation(*observation);
        }

        encoding
    }

    /// The variable stating that `sector` holds `object`.
    #[inline]
    pub fn var(&self, sector: Sector, object: CelestialObject) -> Var {
        Var::from_index(sector.index() * CelestialObject::COUNT + object.ordinal())
    }

    /// The compiled constraint system.
    pub fn formula(&self) -> &CnfFormula {
        &self.formula
    }

    /// The ring these constraints describe.
    pub fn ring(&self) -> Ring {
        self.ring
    }

    fn object_vars(&self, sector: Sector) -> Vec<Var> {
        CelestialObject::VARIANTS
            .iter()
            .map(|object| self.var(sector, *object))
            .collect()
    }

    fn sector_vars(&self, object: CelestialObject) -> Vec<Var> {
        self.ring.sectors().map(|sector| self.var(sector, object)).collect()
    }

    fn add_clauses(&mut self, clauses: Vec<Vec<Lit>>) {
        for clause in clauses {
            self.formula.add_clause(&clause);
        }
    }

    fn one_object_per_sector(&mut self) {
        for sector in self.ring.sectors() {
            let vars = self.object_vars(sector);
            self.add_clauses(exactly_one(&vars));
        }
    }

    fn object_counts(&mut self, ruleset: &Ruleset) {
        for object in CelestialObject::VARIANTS {
            let vars = self.sector_vars(*object);
            self.add_clauses(exactly_k(&vars, ruleset.target(*object)));
        }
    }

    fn exclusions(&mut self, ruleset: &Ruleset) {
        for (sector, object) in ruleset.banned() {
            let banned = self.var(*sector, *object).negative();
            self.formula.add_clause(&[banned]);
        }
    }

    fn gas_clouds_touch_empty(&mut self) {
        for sector in self.ring.sectors() {
            let [ccw, cw] = self.ring.neighbors(sector);
            let clause = [
                self.var(sector, CelestialObject::GasCloud).negative(),
                self.var(ccw, CelestialObject::Empty).positive(),
                self.var(cw, CelestialObject::Empty).positive(),
            ];
            self.formula.add_clause(&clause);
        }
    }

    fn dwarves_avoid_planet_x(&mut self) {
        for sector in self.ring.sectors() {
            for neighbor in self.ring.neighbors(sector) {
                // D(i) and X(i +- 1) cannot coexist; stated both ways round
                let forward = [
                    self.var(sector, CelestialObject::DwarfPlanet).negative(),
                    self.var(neighbor, CelestialObject::PlanetX).negative(),
                ];
                let backward = [
                    self.var(sector, CelestialObject::PlanetX).negative(),
                    self.var(neighbor, CelestialObject::DwarfPlanet).negative(),
                ];
                self.formula.add_clause(&forward);
                self.formula.add_clause(&backward);
            }
        }
    }

    fn asteroids_pair_up(&mut self) {
        for sector in self.ring.sectors() {
            let [ccw, cw] = self.ring.neighbors(sector);
            // A(i) => A(i - 1) + A(i + 1), so asteroids form runs of two or more
            let clause = [
                self.var(sector, CelestialObject::Asteroid).negative(),
                self.var(ccw, CelestialObject::Asteroid).positive(),
                self.var(cw, CelestialObject::Asteroid).positive(),
            ];
            self.formula.add_clause(&clause);
        }
    }

    /// The selector variable for the band starting at `start`, above the board variable block.
    #[inline]
    fn band_selector(&self, start: Sector) -> Var {
        Var::from_index(self.ring.size() * CelestialObject::COUNT + start.index())
    }

    fn dwarf_band(&mut self, width: usize) {
        for start in self.ring.sectors() {
            let selector = self.band_selector(start).negative();
            let window: Vec<Sector> = self.ring.span(start, width).collect();
            let last = self.ring.offset(start, width as isize - 1);

            // S(start) => D(start), S(start) => D(last)
            let head = [selector, self.var(start, CelestialObject::DwarfPlanet).positive()];
            let tail = [selector, self.var(last, CelestialObject::DwarfPlanet).positive()];
            self.formula.add_clause(&head);
            self.formula.add_clause(&tail);

            // S(start) => !D(outside) for every sector off the band
            let outside: Vec<Sector> = self
                .ring
                .sectors()
                .filter(|sector| !window.contains(sector))
                .collect();
            for sector in outside {
                let clause = [selector, self.var(sector, CelestialObject::DwarfPlanet).negative()];
                self.formula.add_clause(&clause);
            }
        }

        // some band must be in effect
        let selectors: Vec<Lit> = self
            .ring
            .sectors()
            .map(|start| self.band_selector(start).positive())
            .collect();
        self.formula.add_clause(&selectors);
    }

    fn observation(&mut self, observation: Observation) {
        match observation {
            Observation::Survey { object, start, span, count } => {
                let vars: Vec<Var> = self
                    .ring
                    .span(start, span)
                    .map(|sector| self.var(sector, object))
                    .collect();
                self.add_clauses(exactly_k(&vars, count));
            }
            Observation::Proximity { subject, object, radius } => {
                // subject at i needs the object within radius on either side
                for sector in self.ring.sectors() {
                    let mut clause = vec![self.var(sector, subject).negative()];
                    for step in 1..=radius as isize {
                        clause.push(self.var(self.ring.offset(sector, -step), object).positive());
                        clause.push(self.var(self.ring.offset(sector, step), object).positive());
                    }
                    self.formula.add_clause(&clause);
                }
            }
            Observation::Confirmed { sector, object } => {
                let known = self.var(sector, object).positive();
                self.formula.add_clause(&[known]);
            }
            Observation::RuledOut { sector, object } => {
                let known = self.var(sector, object).negative();
                self.formula.add_clause(&[known]);
            }
        }
    }
}
