// Paul Tol's colour schemes — see https://personal.sron.nl/~pault/
// The data file is written by the program in tools/.

use lazy_static::lazy_static;
use serde::Deserialize;
pub(crate) mod ty;
use ty::*;
use crate::{DatasetError, Registry};

/// Dataset compiled into the crate.
pub(crate) const TOL_JSON: &str = include_str!("../data/color_tol.json");

lazy_static! {
    pub(crate) static ref TOL: Registry = {
        match Registry::from_json(TOL_JSON) {
            Ok(r) => r,
            Err(e) => panic!("color-tol: corrupt embedded dataset: {e}"),
        }
    };
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Dataset {
    qualitative: Vec<Entry>,
    sequential: Vec<Entry>,
    diverging: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    #[serde(rename = "ColorsHTML")]
    html: Vec<String>,
    #[serde(rename = "ColorsRGB")]
    rgb: Vec<[u8; 3]>,
}

/// Palettes of each type, indexed by their number of colors minus one.
#[derive(Debug)]
pub(crate) struct PaletteTable {
    qualitative: Vec<PaletteData>,
    sequential: Vec<PaletteData>,
    diverging: Vec<PaletteData>,
}

impl PaletteTable {
    pub(crate) fn from_json(json: &str) -> Result<Self, DatasetError> {
        let d: Dataset = serde_json::from_str(json)?;
        let table = PaletteTable {
            qualitative: convert(PaletteType::Qualitative, d.qualitative)?,
            sequential: convert(PaletteType::Sequential, d.sequential)?,
            diverging: convert(PaletteType::Diverging, d.diverging)?,
        };
        tracing::debug!(qualitative = table.qualitative.len(),
                        sequential = table.sequential.len(),
                        diverging = table.diverging.len(),
                        "loaded palette dataset");
        Ok(table)
    }

    /// Returns the palettes of type `typ` (never empty).
    #[inline]
    pub(crate) fn get(&self, typ: PaletteType) -> &[PaletteData] {
        match typ {
            PaletteType::Qualitative => &self.qualitative,
            PaletteType::Sequential => &self.sequential,
            PaletteType::Diverging => &self.diverging,
        }
    }
}

/// Check that entry `k` has `k + 1` colors and that both forms agree.
fn convert(typ: PaletteType, entries: Vec<Entry>)
           -> Result<Vec<PaletteData>, DatasetError> {
    if entries.is_empty() {
        return Err(DatasetError::Empty(typ))
    }
    entries.into_iter().enumerate().map(|(i, e)| {
        let count = i + 1;
        for (form, found) in [("hex", e.html.len()), ("RGB", e.rgb.len())] {
            if found != count {
                return Err(DatasetError::Length { typ, count, form, found })
            }
        }
        let rgb: Vec<RGB8> = e.rgb.iter()
            .map(|&[r, g, b]| RGB8::new(r, g, b)).collect();
        for (hex, &c) in e.html.iter().zip(&rgb) {
            match parse_hex(hex) {
                None => return Err(DatasetError::Hex {
                    typ, count, hex: hex.clone() }),
                Some(h) if h != c => return Err(DatasetError::Mismatch {
                    typ, count, hex: hex.clone(), r: c.r, g: c.g, b: c.b }),
                Some(_) => (),
            }
        }
        Ok(PaletteData { hex: e.html, rgb })
    }).collect()
}

/// Convert colors such as "#4393C3" to `RGB8 { r: 67, g: 147, b: 195 }`.
pub(crate) fn parse_hex(s: &str) -> Option<RGB8> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i .. i + 2], 16).ok();
    Some(RGB8::new(channel(0)?, channel(2)?, channel(4)?))
}
