use strum::{Display, EnumCount, VariantArray};

/// The mutually exclusive classifications a sector may hold.
///
/// Every valid sky assigns exactly one variant to every sector; how many sectors each variant
/// claims is fixed by the [`Ruleset`](crate::Ruleset) in play.
#[derive(Copy, Clone, VariantArray, EnumCount, Display, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum CelestialObject {
    /// Comets survive only in prime-numbered sectors.
    #[strum(serialize = "Comets")]
    Comet,
    /// Gas clouds sit next to at least one truly empty sector.
    #[strum(serialize = "Gas Cloud")]
    GasCloud,
    /// Dwarf planets keep their distance from Planet X.
    #[strum(serialize = "Dwarf Planet")]
    DwarfPlanet,
    /// Asteroids always border another asteroid.
    #[strum(serialize = "Asteroid")]
    Asteroid,
    /// Nothing at all. Planet X masquerades as one of these.
    #[strum(serialize = "Empty")]
    Empty,
    /// The planet everyone is searching for.
    #[strum(serialize = "Planet X")]
    PlanetX,
}

impl CelestialObject {
    /// The stable position of this object in variable and table layouts.
    pub(crate) fn ordinal(&self) -> usize {
        *self as usize
    }
}
