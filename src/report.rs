use std::fmt::{Display, Formatter};

use strum::VariantArray;

use crate::object::CelestialObject;
use crate::stats::Distribution;

impl Display for Distribution {
    /// Render the census report: the board total, a probability table with one row per sector and
    /// one column per object, then per-sector and per-object entropies. Percentages and entropies
    /// are rounded to two decimals.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total valid boards: {}", self.boards())?;
        writeln!(f)?;

        write!(f, "{:>6}", "Sector")?;
        for object in CelestialObject::VARIANTS {
            write!(f, "{:>14}", object.to_string())?;
        }
        writeln!(f)?;

        for sector in self.ring().sectors() {
            write!(f, "{:>6}", sector.number())?;
            for object in CelestialObject::VARIANTS {
                let cell = format!("{:.2}%", self.probability(sector, *object) * 100.0);
                write!(f, "{:>14}", cell)?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        for sector in self.ring().sectors() {
            writeln!(
                f,
                "Entropy for sector {}: {:.2} bits",
                sector,
                self.sector_entropy(sector)
            )?;
        }

        writeln!(f)?;
        for object in CelestialObject::VARIANTS {
            writeln!(f, "Entropy for {}: {:.2} bits", object, self.object_entropy(*object))?;
        }

        Ok(())
    }
}
