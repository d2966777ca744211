//! Level template parsing
//!
//! A level is a grid of equal-length rows laid over the canvas. Each cell is
//! one of:
//!
//! | symbol | meaning              |
//! |--------|----------------------|
//! | `P`    | platform cell        |
//! | `L`    | player one spawn     |
//! | `R`    | player two spawn     |
//! | `H`    | hunter spawn         |
//! | `B`    | health pickup        |
//! | `S`    | split shot pickup    |
//! | `D`    | defense pickup       |
//! | ` `    | empty                |

use std::fmt;

use glam::Vec2;

use super::pickup::{Pickup, PickupKind};
use super::state::{Platform, PlayerId};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, FLOOR_Y, FOOT_OFFSET};

/// Platform slab thickness
pub const PLATFORM_HEIGHT: f32 = 10.0;

/// The built-in arena
pub const LEVEL: [&str; 20] = [
    "                    ",
    "                    ",
    "                    ",
    "         D          ",
    "       PPPPPP       ",
    "                    ",
    "                    ",
    "  S              B  ",
    " PPPP          PPPP ",
    "                    ",
    "                    ",
    "                    ",
    "                    ",
    "      PPPPPPPP      ",
    "                    ",
    "                    ",
    "                    ",
    "                    ",
    "                    ",
    "    L    H     R    ",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileMapError {
    Empty,
    RaggedRow { row: usize, expected: usize, found: usize },
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

impl fmt::Display for TileMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileMapError::Empty => write!(f, "level has no cells"),
            TileMapError::RaggedRow { row, expected, found } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            TileMapError::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown symbol {symbol:?} at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for TileMapError {}

/// Validated cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    cells: Vec<Vec<char>>,
}

/// World objects built from a tile map
#[derive(Debug, Clone, Default)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub pickups: Vec<Pickup>,
    /// Indexed by `PlayerId::index`; `None` keeps the default spawn
    pub spawns: [Option<Vec2>; 2],
    pub hunters: Vec<Vec2>,
}

impl TileMap {
    pub fn parse(rows: &[&str]) -> Result<Self, TileMapError> {
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let width = cells.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(TileMapError::Empty);
        }
        for (row, line) in cells.iter().enumerate() {
            if line.len() != width {
                return Err(TileMapError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            if let Some((col, &symbol)) = line
                .iter()
                .enumerate()
                .find(|&(_, c)| !matches!(c, 'P' | 'L' | 'R' | 'H' | 'B' | 'S' | 'D' | ' '))
            {
                return Err(TileMapError::UnknownSymbol { row, col, symbol });
            }
        }
        Ok(Self { cells })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Cell size in canvas units
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(
            CANVAS_WIDTH / self.cols() as f32,
            CANVAS_HEIGHT / self.rows() as f32,
        )
    }

    /// Turn the grid into platforms, pickups and spawn points
    pub fn build(&self) -> Level {
        let cell = self.cell_size();
        let mut level = Level::default();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &symbol) in line.iter().enumerate() {
                let corner = Vec2::new(col as f32 * cell.x, row as f32 * cell.y);
                let center = corner + cell / 2.0;
                // Stand a body with its feet on the cell's bottom edge
                let standing = Vec2::new(center.x, (corner.y + cell.y - FOOT_OFFSET).min(FLOOR_Y));
                match symbol {
                    'P' => level.platforms.push(Platform {
                        pos: corner,
                        width: cell.x,
                        height: PLATFORM_HEIGHT,
                    }),
                    'L' => level.spawns[PlayerId::One.index()] = Some(standing),
                    'R' => level.spawns[PlayerId::Two.index()] = Some(standing),
                    'H' => level.hunters.push(standing),
                    other => {
                        if let Some(kind) = PickupKind::from_symbol(other) {
                            level.pickups.push(Pickup::new(kind, center));
                        }
                    }
                }
            }
        }
        level
    }
}

/// Parse and build the built-in arena
pub fn default_level() -> Result<Level, TileMapError> {
    TileMap::parse(&LEVEL).map(|map| map.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PICKUP_RADIUS;
    use crate::sim::collision::within;

    #[test]
    fn test_builtin_level_parses() {
        let level = default_level().unwrap();
        assert_eq!(level.platforms.len(), 6 + 8 + 8);
        assert_eq!(level.pickups.len(), 3);
        assert_eq!(level.hunters.len(), 1);
        assert!(level.spawns.iter().all(Option::is_some));
    }

    #[test]
    fn test_spawns_stand_on_floor() {
        let level = default_level().unwrap();
        let one = level.spawns[0].unwrap();
        let two = level.spawns[1].unwrap();
        assert_eq!(one, Vec2::new(90.0, FLOOR_Y));
        assert_eq!(two, Vec2::new(310.0, FLOOR_Y));
        assert_eq!(level.hunters[0], Vec2::new(190.0, FLOOR_Y));
    }

    #[test]
    fn test_pickups_sit_above_platforms() {
        let level = default_level().unwrap();
        for pickup in &level.pickups {
            let resting = level
                .platforms
                .iter()
                .find(|p| p.spans_x(pickup.pos.x) && p.top() > pickup.pos.y)
                .map(|p| Vec2::new(pickup.pos.x, p.top() - FOOT_OFFSET));
            let stand = resting.unwrap();
            assert!(within(pickup.pos, stand, PICKUP_RADIUS), "{:?} unreachable", pickup.kind);
        }
    }

    #[test]
    fn test_platform_cells_cover_grid() {
        let map = TileMap::parse(&["P ", " P"]).unwrap();
        let level = map.build();
        assert_eq!(level.platforms.len(), 2);
        assert_eq!(level.platforms[1].pos, Vec2::new(200.0, 200.0));
        assert_eq!(level.platforms[1].width, 200.0);
    }

    #[test]
    fn test_errors_are_reported() {
        assert_eq!(TileMap::parse(&[]), Err(TileMapError::Empty));
        assert_eq!(
            TileMap::parse(&["PP", "P"]),
            Err(TileMapError::RaggedRow { row: 1, expected: 2, found: 1 })
        );
        assert_eq!(
            TileMap::parse(&["P ", " X"]),
            Err(TileMapError::UnknownSymbol { row: 1, col: 1, symbol: 'X' })
        );
        let msg = TileMap::parse(&["P?"]).unwrap_err().to_string();
        assert!(msg.contains("'?'"));
    }
}
