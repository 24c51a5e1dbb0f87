use super::{Cell, Generation};

/// Represents a named seed configuration
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(i32, i32)], // Offsets of alive cells from the pattern origin
}

impl Pattern {
    /// Columns spanned by the offsets
    pub fn width(&self) -> i32 {
        self.cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1)
    }

    /// Rows spanned by the offsets
    pub fn height(&self) -> i32 {
        self.cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1)
    }

    /// Build a generation with the pattern origin at (anchor_x, anchor_y)
    pub fn place_at(&self, anchor_x: i32, anchor_y: i32) -> Generation {
        self.cells
            .iter()
            .map(|&(dx, dy)| Cell::new(anchor_x, anchor_y).offset(dx, dy))
            .collect()
    }

    /// Anchor that centres this pattern on a `width` x `height` board
    pub fn anchor_centered(&self, width: usize, height: usize) -> (i32, i32) {
        let half = |n: usize| i32::try_from(n / 2).unwrap_or(i32::MAX);
        (
            half(width).saturating_sub(self.width() / 2),
            half(height).saturating_sub(self.height() / 2),
        )
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;
    use crate::error::{LifeError, LifeResult};

    /// Glider - simplest spaceship, moves diagonally
    pub const GLIDER: Pattern = Pattern {
        name: "glider",
        description: "Moves diagonally (period 4)",
        cells: &[
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ],
    };

    /// Blinker - period 2 oscillator
    pub const BLINKER: Pattern = Pattern {
        name: "blinker",
        description: "Oscillator (period 2)",
        cells: &[(0, 1), (1, 1), (2, 1)],
    };

    /// Toad - period 2 oscillator
    pub const TOAD: Pattern = Pattern {
        name: "toad",
        description: "Oscillator (period 2)",
        cells: &[
            (1, 0), (2, 0), (3, 0),
            (0, 1), (1, 1), (2, 1),
        ],
    };

    /// Beacon - period 2 oscillator
    pub const BEACON: Pattern = Pattern {
        name: "beacon",
        description: "Oscillator (period 2)",
        cells: &[
            (0, 0), (1, 0),
            (0, 1),
            (3, 2),
            (2, 3), (3, 3),
        ],
    };

    /// Pulsar - period 3 oscillator, symmetric on both axes
    pub const PULSAR: Pattern = Pattern {
        name: "pulsar",
        description: "Oscillator (period 3)",
        cells: &[
            // Top
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            // Upper middle
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            // Center
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            // Lower middle
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            // Bottom
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    };

    /// Lightweight Spaceship (LWSS)
    pub const LWSS: Pattern = Pattern {
        name: "lwss",
        description: "Lightweight Spaceship (period 4)",
        cells: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    };

    /// Gosper Glider Gun - produces gliders indefinitely
    pub const GOSPER: Pattern = Pattern {
        name: "gosper",
        description: "Gosper glider gun (period 30)",
        cells: &[
            // Left square
            (0, 4), (0, 5),
            (1, 4), (1, 5),

            // Left circle
            (10, 4), (10, 5), (10, 6),
            (11, 3), (11, 7),
            (12, 2), (12, 8),
            (13, 2), (13, 8),
            (14, 5),
            (15, 3), (15, 7),
            (16, 4), (16, 5), (16, 6),
            (17, 5),

            // Middle pieces
            (20, 2), (20, 3), (20, 4),
            (21, 2), (21, 3), (21, 4),
            (22, 1), (22, 5),
            (24, 0), (24, 1), (24, 5), (24, 6),

            // Right square
            (34, 2), (34, 3),
            (35, 2), (35, 3),
        ],
    };

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub const R_PENTOMINO: Pattern = Pattern {
        name: "r-pentomino",
        description: "Methuselah - stabilizes at gen 1103",
        cells: &[
            (1, 0), (2, 0),
            (0, 1), (1, 1),
            (1, 2),
        ],
    };

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub const ACORN: Pattern = Pattern {
        name: "acorn",
        description: "Methuselah - stabilizes at gen 5206",
        cells: &[
            (1, 0),
            (3, 1),
            (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
        ],
    };

    /// Block - simple still life
    pub const BLOCK: Pattern = Pattern {
        name: "block",
        description: "Still life",
        cells: &[
            (0, 0), (1, 0),
            (0, 1), (1, 1),
        ],
    };

    /// Every pattern, sorted by name
    pub static ALL: &[Pattern] = &[
        ACORN,
        BEACON,
        BLINKER,
        BLOCK,
        GLIDER,
        GOSPER,
        LWSS,
        PULSAR,
        R_PENTOMINO,
        TOAD,
    ];

    /// Pattern names in alphabetical order
    pub fn list_names() -> Vec<&'static str> {
        ALL.iter().map(|p| p.name).collect()
    }

    /// Find a pattern by name (case-insensitive)
    pub fn find(name: &str) -> LifeResult<&'static Pattern> {
        ALL.iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }

    /// Translate a named pattern by the anchor
    pub fn instantiate(name: &str, anchor_x: i32, anchor_y: i32) -> LifeResult<Generation> {
        find(name).map(|p| p.place_at(anchor_x, anchor_y))
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use crate::domain::engine::{advance, transition};
    use crate::domain::ConwayRule;
    use crate::error::LifeError;

    #[test]
    fn test_names_sorted_and_unique() {
        let names = list_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_required_patterns_present() {
        for name in ["glider", "pulsar", "gosper"] {
            assert!(list_names().contains(&name), "missing {name}");
        }
    }

    #[test]
    fn test_unknown_pattern() {
        assert!(matches!(
            instantiate("nonexistent", 0, 0),
            Err(LifeError::UnknownPattern(name)) if name == "nonexistent"
        ));
    }

    #[test]
    fn test_instantiate_translates_offsets() {
        let g = instantiate("glider", 10, -3).unwrap();

        assert_eq!(g.len(), 5);
        assert!(g.contains((11, -3).into()));
        assert!(g.contains((10, -1).into()));
        assert!(g.contains((12, -1).into()));
    }

    #[test]
    fn test_offsets_have_no_duplicates() {
        for pattern in ALL {
            assert_eq!(pattern.place_at(0, 0).len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_dimensions() {
        assert_eq!((GLIDER.width(), GLIDER.height()), (3, 3));
        assert_eq!((PULSAR.width(), PULSAR.height()), (13, 13));
        assert_eq!((GOSPER.width(), GOSPER.height()), (36, 9));
    }

    #[test]
    fn test_anchor_centered() {
        assert_eq!(GLIDER.anchor_centered(20, 10), (9, 4));
        assert_eq!(GOSPER.anchor_centered(20, 10), (-8, 1));
    }

    #[test]
    fn test_block_still_life() {
        let block = BLOCK.place_at(0, 0);
        assert_eq!(transition(&block), block);
    }

    #[test]
    fn test_pulsar_period_three() {
        let pulsar = PULSAR.place_at(0, 0);
        assert_ne!(transition(&pulsar), pulsar);
        assert_eq!(advance(&pulsar, &ConwayRule, 3), pulsar);
    }

    #[test]
    fn test_lwss_moves_horizontally() {
        let ship = LWSS.place_at(0, 0);
        let moved = advance(&ship, &ConwayRule, 4);
        assert_eq!(moved.normalized(), ship.normalized());
        assert_ne!(moved.bounding_box().min_x, ship.bounding_box().min_x);
    }

    #[test]
    fn test_gosper_emits_gliders() {
        let gun = GOSPER.place_at(0, 0);
        let later = advance(&gun, &ConwayRule, 120);
        assert!(later.len() > gun.len());
    }
}
