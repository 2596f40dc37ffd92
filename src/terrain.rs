use core::fmt;

/// Classification of a single grid cell. Every kind except [TerrainKind::Obstacle] can be
/// entered, at the cost given by [TerrainKind::cost].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    #[default]
    Open,
    Grassland,
    Swampland,
    Obstacle,
}

/// Cost of entering each kind, indexed by [TerrainKind::index]. [None] marks impassable terrain.
const COST_TABLE: [Option<u32>; 4] = [Some(1), Some(3), Some(4), None];
/// Map glyphs, same indexing as [COST_TABLE].
const GLYPH_TABLE: [char; 4] = ['.', 'g', 's', '#'];

impl TerrainKind {
    pub const ALL: [TerrainKind; 4] = [
        TerrainKind::Open,
        TerrainKind::Grassland,
        TerrainKind::Swampland,
        TerrainKind::Obstacle,
    ];

    fn index(self) -> usize {
        match self {
            TerrainKind::Open => 0,
            TerrainKind::Grassland => 1,
            TerrainKind::Swampland => 2,
            TerrainKind::Obstacle => 3,
        }
    }

    /// Cost of stepping onto a cell of this kind, or [None] if it can never be entered.
    pub fn cost(self) -> Option<u32> {
        COST_TABLE[self.index()]
    }

    pub fn is_passable(self) -> bool {
        self.cost().is_some()
    }

    /// Character used for this kind in the ASCII map format.
    pub fn glyph(self) -> char {
        GLYPH_TABLE[self.index()]
    }

    pub fn from_glyph(glyph: char) -> Option<TerrainKind> {
        TerrainKind::ALL
            .into_iter()
            .find(|kind| kind.glyph() == glyph)
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
