use thiserror::Error;
use crate::PaletteType;

/// Errors returned by palette lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested palette type is not one of [`PaletteType::ALL`].
    #[error("Invalid palette type {given:?}, must be one of {}",
            PaletteType::valid_names())]
    InvalidCategory { given: String },
    /// The requested number of colors is not in `1 ..= max`.
    #[error("Invalid number {count} for palette type {typ}: \
             valid numbers are between 1 and {max}")]
    InvalidCount { typ: PaletteType, count: usize, max: usize },
}

/// Errors detected while loading a palette dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed palette dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("the dataset defines no {0} palette")]
    Empty(PaletteType),
    #[error("{typ} palette with {count} colors lists {found} {form} colors")]
    Length { typ: PaletteType, count: usize, form: &'static str,
             found: usize },
    #[error("{typ} palette with {count} colors: {hex:?} is not a #RRGGBB color")]
    Hex { typ: PaletteType, count: usize, hex: String },
    #[error("{typ} palette with {count} colors: {hex} differs from \
             rgb({r}, {g}, {b})")]
    Mismatch { typ: PaletteType, count: usize, hex: String,
               r: u8, g: u8, b: u8 },
}
