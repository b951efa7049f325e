use crossterm::style::Color;

pub(crate) struct Swatch {
    pub(crate) name: &'static str,
    pub(crate) color: Color,
}

// The eight low ANSI colors, written by crossterm as 256-color SGR (`38;5;1` ..
// `38;5;8`), in the order the --color names are listed.
pub(crate) const PALETTE: [Swatch; 8] = [
    Swatch { name: "red", color: Color::DarkRed },
    Swatch { name: "green", color: Color::DarkGreen },
    Swatch { name: "yellow", color: Color::DarkYellow },
    Swatch { name: "blue", color: Color::DarkBlue },
    Swatch { name: "magenta", color: Color::DarkMagenta },
    Swatch { name: "cyan", color: Color::DarkCyan },
    Swatch { name: "white", color: Color::Grey },
    Swatch { name: "gray", color: Color::DarkGrey },
];

pub(crate) const COLOR_COUNT: usize = PALETTE.len();

/// Out-of-range indices wrap instead of panicking.
pub(crate) fn color_at(i: usize) -> Color {
    PALETTE[i % COLOR_COUNT].color
}

pub(crate) fn index_of(name: &str) -> Option<usize> {
    PALETTE.iter().position(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_in_order() {
        assert_eq!(index_of("red"), Some(0));
        assert_eq!(index_of("Gray"), Some(7));
        assert_eq!(index_of("rainbow"), None);
    }

    #[test]
    fn color_lookup_wraps() {
        assert_eq!(color_at(8), Color::DarkRed);
        assert_eq!(color_at(3), Color::DarkBlue);
    }
}
