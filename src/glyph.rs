/// Heading on the character grid. Discriminants are the cyclic 0..4 encoding:
/// +1 turns right, +3 turns left, +2 reverses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Direction {
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Direction {
    pub(crate) const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    pub(crate) fn from_index(i: u32) -> Direction {
        Self::ALL[(i % 4) as usize]
    }

    fn rotate(self, quarter_turns: u32) -> Direction {
        Self::from_index(self as u32 + quarter_turns)
    }

    pub(crate) fn right(self) -> Direction {
        self.rotate(1)
    }

    pub(crate) fn left(self) -> Direction {
        self.rotate(3)
    }

    pub(crate) fn opposite(self) -> Direction {
        self.rotate(2)
    }

    pub(crate) fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// Screen delta; y grows downwards.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Glyph {
    Horizontal,
    Vertical,
    /// ┐ arms west and south
    DownLeft,
    /// ┌ arms east and south
    DownRight,
    /// ┘ arms west and north
    UpLeft,
    /// └ arms east and north
    UpRight,
    Fallback,
}

impl Glyph {
    pub(crate) fn as_char(self) -> char {
        match self {
            Glyph::Horizontal => '─',
            Glyph::Vertical => '│',
            Glyph::DownLeft => '┐',
            Glyph::DownRight => '┌',
            Glyph::UpLeft => '┘',
            Glyph::UpRight => '└',
            Glyph::Fallback => '*',
        }
    }

    fn corner(a: Direction, b: Direction) -> Glyph {
        use Direction::*;
        match (a, b) {
            (West, South) | (South, West) => Glyph::DownLeft,
            (East, South) | (South, East) => Glyph::DownRight,
            (West, North) | (North, West) => Glyph::UpLeft,
            (East, North) | (North, East) => Glyph::UpRight,
            _ => Glyph::Fallback,
        }
    }
}

/// Glyph for a cell the pipe entered heading `from` and leaves heading `to`.
/// A corner's arms are the side it came in through (`from.opposite()`) and the
/// side it leaves through (`to`), so turns out of a south or north heading
/// draw the shape the path actually takes rather than its mirror image.
/// Reversals fall back to `*`.
pub(crate) fn resolve_glyph(from: Direction, to: Direction) -> Glyph {
    if from == to {
        return if to.is_horizontal() {
            Glyph::Horizontal
        } else {
            Glyph::Vertical
        };
    }
    Glyph::corner(from.opposite(), to)
}
