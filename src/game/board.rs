//! Board catalog and per-tile ownership state.
//!
//! The 40-tile layout is fixed (U.S. edition values) and test-critical:
//! tile order, costs, and rents must match the canonical table exactly,
//! including its quirks (Baltic Ave costs 0, utilities carry 0 base rent,
//! and two chest tiles are labelled "Chance").

use crate::game::PlayerId;

/// Number of tiles on the board.
pub const BOARD_TILES: usize = 40;

/// Number of purchasable tiles (22 properties + 4 railroads + 2 utilities).
pub const PURCHASABLE_TILES: u32 = 28;

/// Board index of the jail tile.
pub const JAIL_TILE: usize = 10;

/// Kind of a board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileCategory {
    /// The GO corner.
    Go,
    /// A color-group street.
    Property,
    /// One of the four railroads.
    Railroad,
    /// One of the two utilities.
    Utility,
    /// Chance card tile (no effect in this model).
    Chance,
    /// Community chest tile (no effect in this model).
    Chest,
    /// The jail corner (just visiting when landed on).
    Jail,
    /// The free parking corner.
    FreeParking,
    /// The go-to-jail corner.
    GoToJail,
    /// A tax tile; the charge is the tile's `rent` field.
    Tax,
}

impl TileCategory {
    /// Check whether tiles of this category can be bought and owned.
    #[must_use]
    pub const fn is_purchasable(self) -> bool {
        matches!(
            self,
            TileCategory::Property | TileCategory::Railroad | TileCategory::Utility
        )
    }
}

/// Color group of a street property.
///
/// Eight fixed groups; purple and blue hold two streets, the rest three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorGroup {
    /// Mediterranean / Baltic.
    Purple,
    /// Oriental / Vermont / Connecticut.
    Grey,
    /// St. Charles / States / Virginia.
    Pink,
    /// St. James / Tennessee / New York.
    Orange,
    /// Kentucky / Indiana / Illinois.
    Red,
    /// Atlantic / Ventnor / Marvin Garden.
    Yellow,
    /// Pacific / North Carolina / Pennsylvania.
    Green,
    /// Park Place / Boardwalk.
    Blue,
}

impl ColorGroup {
    /// Number of streets a player must hold to own the full set.
    #[must_use]
    pub const fn set_size(self) -> u32 {
        match self {
            ColorGroup::Purple | ColorGroup::Blue => 2,
            _ => 3,
        }
    }
}

/// A single board tile: immutable catalog data plus ownership state.
///
/// Ownership is a player id, not a reference; the game resolves the id
/// against its player list. `owner` being set is the definition of the
/// tile being purchased, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Position on the board (0-39).
    pub index: usize,
    /// Display name.
    pub name: &'static str,
    /// Purchase cost (0 for non-purchasable tiles).
    pub cost: u32,
    /// Base rent; for tax tiles this is the tax amount.
    pub rent: u32,
    /// Tile kind.
    pub category: TileCategory,
    /// Color group, present only for streets.
    pub color: Option<ColorGroup>,
    /// Current owner, if any.
    pub owner: Option<PlayerId>,
}

impl Tile {
    const fn new(
        index: usize,
        name: &'static str,
        cost: u32,
        rent: u32,
        category: TileCategory,
        color: Option<ColorGroup>,
    ) -> Self {
        Self {
            index,
            name,
            cost,
            rent,
            category,
            color,
            owner: None,
        }
    }

    /// Check whether the tile has been bought.
    #[must_use]
    pub const fn is_purchased(&self) -> bool {
        self.owner.is_some()
    }
}

/// The game board: the fixed catalog plus mutable ownership per tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Build the standard 40-tile board with no tiles owned.
    ///
    /// Each call yields an independently owned, value-equal board.
    #[must_use]
    pub fn standard() -> Self {
        use ColorGroup::{Blue, Green, Grey, Orange, Pink, Purple, Red, Yellow};
        use TileCategory::{
            Chance, Chest, FreeParking, Go, GoToJail, Jail, Property, Railroad, Tax, Utility,
        };

        let tiles = vec![
            Tile::new(0, "GO", 0, 0, Go, None),
            Tile::new(1, "Mediterranean Ave", 60, 2, Property, Some(Purple)),
            Tile::new(2, "Chance", 0, 0, Chest, None),
            Tile::new(3, "Baltic Ave", 0, 4, Property, Some(Purple)),
            Tile::new(4, "Income Tax", 0, 200, Tax, None),
            Tile::new(5, "Reading Railroad", 200, 25, Railroad, None),
            Tile::new(6, "Oriental Ave", 100, 6, Property, Some(Grey)),
            Tile::new(7, "Chance", 0, 0, Chance, None),
            Tile::new(8, "Vermont Ave", 100, 6, Property, Some(Grey)),
            Tile::new(9, "Connecticut Ave", 120, 8, Property, Some(Grey)),
            Tile::new(10, "Jail", 0, 0, Jail, None),
            Tile::new(11, "St. Charles Place", 140, 10, Property, Some(Pink)),
            Tile::new(12, "Electric", 150, 0, Utility, None),
            Tile::new(13, "States Ave", 140, 10, Property, Some(Pink)),
            Tile::new(14, "Virginia Ave", 160, 12, Property, Some(Pink)),
            Tile::new(15, "Pennsylvania Railroad", 200, 25, Railroad, None),
            Tile::new(16, "St. James Place", 180, 14, Property, Some(Orange)),
            Tile::new(17, "Chest", 0, 0, Chest, None),
            Tile::new(18, "Tennessee Ave", 180, 14, Property, Some(Orange)),
            Tile::new(19, "New York Ave", 200, 16, Property, Some(Orange)),
            Tile::new(20, "Free Parking", 0, 0, FreeParking, None),
            Tile::new(21, "Kentucky Ave", 220, 18, Property, Some(Red)),
            Tile::new(22, "Chance", 0, 0, Chance, None),
            Tile::new(23, "Indiana Ave", 220, 18, Property, Some(Red)),
            Tile::new(24, "Illinois Ave", 240, 20, Property, Some(Red)),
            Tile::new(25, "B & O Railroad", 200, 25, Railroad, None),
            Tile::new(26, "Atlantic Ave", 260, 22, Property, Some(Yellow)),
            Tile::new(27, "Ventnor Ave", 260, 22, Property, Some(Yellow)),
            Tile::new(28, "Water Works", 150, 0, Utility, None),
            Tile::new(29, "Marvin Garden", 280, 24, Property, Some(Yellow)),
            Tile::new(30, "Go To Jail", 0, 0, GoToJail, None),
            Tile::new(31, "Pacific Ave", 300, 26, Property, Some(Green)),
            Tile::new(32, "North Carolina Avenue", 300, 26, Property, Some(Green)),
            Tile::new(33, "Chance", 0, 0, Chest, None),
            Tile::new(34, "Pennsylvania Ave", 320, 28, Property, Some(Green)),
            Tile::new(35, "Short Line Railroad", 200, 25, Railroad, None),
            Tile::new(36, "Chance", 0, 0, Chance, None),
            Tile::new(37, "Park Place", 350, 35, Property, Some(Blue)),
            Tile::new(38, "Luxury Tax", 0, 100, Tax, None),
            Tile::new(39, "Boardwalk", 400, 50, Property, Some(Blue)),
        ];

        debug_assert_eq!(tiles.len(), BOARD_TILES);
        Self { tiles }
    }

    /// Get a reference to the tile at the given board index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Get a mutable reference to the tile at the given board index.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// Get a reference to the raw tiles slice for iteration.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over all tiles owned by a specific player.
    pub fn tiles_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |t| t.owner == Some(player))
    }

    /// Count purchasable tiles that currently have an owner.
    #[must_use]
    pub fn purchased_count(&self) -> u32 {
        self.tiles.iter().filter(|t| t.is_purchased()).count() as u32
    }
}
