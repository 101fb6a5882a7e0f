use std::fmt::{Display, Formatter};
use std::num::NonZero;

/// The number of sectors on a [`Ring`], which must be positive.
pub type RingSize = NonZero<usize>;

/// One position on the cyclic board.
///
/// Positions are held zero-based; `Sector(0)` prints as sector 1, matching the numbering on the
/// physical board and in reports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub struct Sector(pub usize);

impl Sector {
    /// The zero-based position of this sector.
    pub fn index(&self) -> usize {
        self.0
    }

    /// The one-based number of this sector as printed on the board.
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl Display for Sector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The cyclic topology of the board: a fixed number of [`Sector`]s where stepping past the last
/// sector wraps around to the first.
///
/// All adjacency in the rule system is derived from [`Self::offset`], so no caller ever reasons
/// about wraparound itself.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Ring {
    size: RingSize,
}

impl Ring {
    /// A ring of `size` sectors.
    pub fn new(size: RingSize) -> Self {
        Self { size }
    }

    /// The number of sectors on this ring.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Whether `sector` exists on this ring.
    pub fn contains(&self, sector: Sector) -> bool {
        sector.index() < self.size()
    }

    /// All sectors on this ring, clockwise from sector 1.
    pub fn sectors(&self) -> impl Iterator<Item = Sector> {
        (0..self.size()).map(Sector)
    }

    /// The sector `steps` positions away from `from`; positive steps are clockwise, negative
    /// counterclockwise, both wrapping modulo the ring.
    pub fn offset(&self, from: Sector, steps: isize) -> Sector {
        let size = self.size() as isize;
        Sector((from.index() as isize + steps).rem_euclid(size) as usize)
    }

    /// The two immediate neighbors of `sector`, counterclockwise first.
    pub fn neighbors(&self, sector: Sector) -> [Sector; 2] {
        [self.offset(sector, -1), self.offset(sector, 1)]
    }

    /// `span` consecutive sectors clockwise from `from`, inclusive, wrapping as needed.
    pub fn span(&self, from: Sector, span: usize) -> impl Iterator<Item = Sector> {
        let ring = *self;
        (0..span).map(move |step| ring.offset(from, step as isize))
    }
}
