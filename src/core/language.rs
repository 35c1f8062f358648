//! Language chips: the player's lives
//!
//! Each wrong guess loses the front-most language still standing. The last
//! language in the list is the one left when the game is lost.

use std::fmt;

/// An opaque 24-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from a packed `0xRRGGBB` value
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// One life, themed as a programming language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub background: Rgb,
    pub text: Rgb,
}

impl Language {
    #[must_use]
    pub const fn new(name: &'static str, background: u32, text: u32) -> Self {
        Self {
            name,
            background: Rgb::from_hex(background),
            text: Rgb::from_hex(text),
        }
    }
}

const LIGHT: u32 = 0x00F9_F4DA;
const DARK: u32 = 0x001E_1E1E;

/// Default language table, lost front to back
///
/// Nine languages allow eight wrong guesses; losing everything but Assembly
/// ends the game.
pub const LANGUAGES: &[Language] = &[
    Language::new("HTML", 0x00E2_680F, LIGHT),
    Language::new("CSS", 0x0032_8AF1, LIGHT),
    Language::new("JavaScript", 0x00F4_EB13, DARK),
    Language::new("React", 0x002E_D3E9, DARK),
    Language::new("TypeScript", 0x0029_8EC6, LIGHT),
    Language::new("Node.js", 0x0059_9137, LIGHT),
    Language::new("Python", 0x00FF_D742, DARK),
    Language::new("Ruby", 0x00D0_2B2B, LIGHT),
    Language::new("Assembly", 0x002D_519F, LIGHT),
];

/// Maximum wrong guesses a language table allows before the game is lost
#[inline]
#[must_use]
pub const fn max_wrong_guesses(languages: &[Language]) -> usize {
    languages.len().saturating_sub(1)
}
