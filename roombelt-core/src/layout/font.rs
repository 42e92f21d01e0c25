//! Semantic font sizes and their glyph resources

/// Semantic font size
///
/// The set is closed; every variant has exactly one glyph resource in a
/// [`FontCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Font {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Display,
}

impl Font {
    /// Number of font variants
    pub const COUNT: usize = 5;

    /// All fonts, smallest first
    pub const ALL: [Font; Font::COUNT] = [
        Font::Small,
        Font::Medium,
        Font::Large,
        Font::ExtraLarge,
        Font::Display,
    ];

    /// The largest font, used where visibility matters most
    pub const fn largest() -> Self {
        Font::Display
    }

    /// Position of this font in [`Font::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Font::Small => 0,
            Font::Medium => 1,
            Font::Large => 2,
            Font::ExtraLarge => 3,
            Font::Display => 4,
        }
    }
}

/// Lookup table from [`Font`] to a glyph resource
///
/// Surfaces keep one of these and resolve `select_font` through it. The
/// table is total by construction, so lookups cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct FontCatalog<T> {
    entries: [T; Font::COUNT],
}

impl<T> FontCatalog<T> {
    /// Build a catalog from resources ordered like [`Font::ALL`]
    pub const fn new(entries: [T; Font::COUNT]) -> Self {
        Self { entries }
    }

    /// Resource for `font`
    pub fn get(&self, font: Font) -> &T {
        &self.entries[font.index()]
    }

    /// Iterate over `(font, resource)` pairs, smallest first
    pub fn iter(&self) -> impl Iterator<Item = (Font, &T)> {
        Font::ALL.into_iter().zip(self.entries.iter())
    }
}
