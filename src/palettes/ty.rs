use std::{fmt, str::FromStr};
pub(crate) use rgb::RGB8;
use crate::Error;

/// The colors of one palette, in both representations.
#[derive(Debug)]
pub(crate) struct PaletteData {
    pub(crate) hex: Vec<String>, // "#RRGGBB"
    pub(crate) rgb: Vec<RGB8>, // Invariant: same length and colors as `hex`
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaletteType {
    /// Qualitative color scheme.  Hues are used to create the primary
    /// visual differences between classes, which makes these schemes
    /// best suited to nominal or categorical data.
    Qualitative,
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high, with light colors for low data values to
    /// dark colors for high data values.
    Sequential,
    /// Diverging color scheme.  Equal emphasis is put on the mid-range
    /// critical values (light colors) and on the extremes at both ends
    /// of the data range (dark colors with contrasting hues).
    Diverging,
}

impl PaletteType {
    /// All palette types, in the order of the dataset.
    pub const ALL: [PaletteType; 3] =
        [PaletteType::Qualitative, PaletteType::Sequential,
         PaletteType::Diverging];

    /// The canonical name, e.g. `"Qualitative"`.
    pub fn name(self) -> &'static str {
        match self {
            PaletteType::Qualitative => "Qualitative",
            PaletteType::Sequential => "Sequential",
            PaletteType::Diverging => "Diverging",
        }
    }

    /// Comma separated list of the valid names.
    pub(crate) fn valid_names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl fmt::Display for PaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capitalize the first character and lowercase the rest.
fn normalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl FromStr for PaletteType {
    type Err = Error;

    /// Parse a palette type name in any casing (`"qualitative"`,
    /// `"SEQUENTIAL"`,...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize(s);
        Self::ALL.into_iter().find(|t| t.name() == name)
            .ok_or_else(|| Error::InvalidCategory { given: s.to_string() })
    }
}
