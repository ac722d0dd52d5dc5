//! Terminal color palette for key=value output.
//!
//! A closed set of named ANSI codes used to decorate keys in console
//! output. `Color::None` doubles as the reset sequence.

/// Named terminal color for key decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    None,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    Gray,
    White,
}

impl Color {
    /// The ANSI escape sequence for this color.
    pub fn code(&self) -> &'static str {
        match self {
            Color::None => "\x1b[0m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Purple => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::Gray => "\x1b[37m",
            Color::White => "\x1b[97m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_reset_sequence() {
        assert_eq!(Color::None.code(), "\x1b[0m");
    }

    #[test]
    fn test_colors_are_distinct_escapes() {
        let codes = [
            Color::Red.code(),
            Color::Green.code(),
            Color::Yellow.code(),
            Color::Blue.code(),
            Color::Purple.code(),
            Color::Cyan.code(),
            Color::Gray.code(),
            Color::White.code(),
        ];
        for (i, code) in codes.iter().enumerate() {
            assert!(code.starts_with("\x1b["));
            assert!(!codes[i + 1..].contains(code));
        }
    }
}
