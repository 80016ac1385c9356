//! Color palettes by [Paul Tol](https://personal.sron.nl/~pault/).
//!
//! Three families of [`Palette`]s are provided, each available with
//! 1 up to a maximum number of colors:
//!
//! - [`qualitative`]: well distinct hues for categorical data;
//! - [`sequential`]: a light to dark ramp for ordered data;
//! - [`diverging`]: two dark ends meeting at a light midpoint, for
//!   data with a meaningful center.
//!
//! Every color is given both as a `"#RRGGBB"` string and as an
//! [`RGB8`] triplet.
//!
//! ```
//! let p = color_tol::diverging(4, true)?;
//! assert_eq!(p.hex_colors(), ["#D03232", "#F9BD7E", "#B4DDF7", "#008BCE"]);
//! assert!(p.reversed());
//! # Ok::<(), color_tol::Error>(())
//! ```
//!
//! The free functions use the palettes compiled into the crate.  A
//! [`Registry`] built with [`Registry::from_json`] serves the same
//! requests from another dataset.

pub use rgb::RGB8;

mod error;
mod palettes;
use palettes::{PaletteTable, ty::PaletteData};
pub use error::{Error, DatasetError};
pub use palettes::ty::PaletteType;

/// A list of colors, of a given [`PaletteType`].
///
/// A palette owns its colors: it is a copy of the dataset entry,
/// possibly in reverse order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    typ: PaletteType,
    hex: Vec<String>,
    rgb: Vec<RGB8>, // Invariant: rgb[i] is the color of hex[i]
    reversed: bool,
}

impl Palette {
    fn new(typ: PaletteType, data: &PaletteData, reversed: bool) -> Self {
        let mut hex = data.hex.clone();
        let mut rgb = data.rgb.clone();
        if reversed {
            hex.reverse();
            rgb.reverse();
        }
        Self { typ, hex, rgb, reversed }
    }

    /// Returns the number of colors in the palette (at least 1).
    pub fn len(&self) -> usize { self.rgb.len() }

    /// Says whether the palette is `Qualitative`, `Sequential` or
    /// `Diverging`.
    pub fn typ(&self) -> PaletteType { self.typ }

    /// Says whether the colors are in reverse order compared to the
    /// dataset.
    pub fn reversed(&self) -> bool { self.reversed }

    /// Returns the colors as HTML codes, e.g. `"#332288"`.
    pub fn hex_colors(&self) -> &[String] { &self.hex }

    /// Returns the colors as RGB triplets.
    pub fn rgb_colors(&self) -> &[RGB8] { &self.rgb }

    /// Returns the colors converted to any type constructible from
    /// [`RGB8`].
    pub fn colors<Color: From<RGB8>>(&self) -> Vec<Color> {
        self.rgb.iter().map(|&c| Color::from(c)).collect()
    }
}

/// A set of palettes of each [`PaletteType`].
///
/// [`Registry::tol`] is the set compiled into this crate.
#[derive(Debug)]
pub struct Registry {
    table: PaletteTable,
}

impl Registry {
    /// The palettes shipped with this crate.  They are parsed on
    /// first use.
    pub fn tol() -> &'static Registry { &palettes::TOL }

    /// Load palettes from a JSON document of the form
    ///
    /// ```json
    /// { "Qualitative": [ {"ColorsHTML": ["#4477AA"],
    ///                     "ColorsRGB": [[68, 119, 170]]},
    ///                    ... ],
    ///   "Sequential": [...],
    ///   "Diverging": [...] }
    /// ```
    ///
    /// where the `k`-th entry of each list (starting from 1) has `k`
    /// colors.  Each type needs at least one entry and the HTML codes
    /// must denote the RGB triplets next to them.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(Registry { table: PaletteTable::from_json(json)? })
    }

    /// Returns the largest number of colors a palette of type `typ`
    /// may have.
    pub fn max_count(&self, typ: PaletteType) -> usize {
        self.table.get(typ).len()
    }

    /// Returns the palette of type `typ` with `count` colors, in
    /// reverse order if `reverse` is `true`.
    pub fn get(&self, typ: PaletteType, count: usize, reverse: bool)
               -> Result<Palette, Error> {
        let palettes = self.table.get(typ);
        // The palette with `count` colors is at position `count - 1`.
        match count.checked_sub(1).and_then(|i| palettes.get(i)) {
            Some(data) => {
                tracing::trace!(%typ, count, reverse, "palette lookup");
                Ok(Palette::new(typ, data, reverse))
            }
            None => {
                let max = palettes.len();
                tracing::debug!(%typ, count, max, "palette size out of range");
                Err(Error::InvalidCount { typ, count, max })
            }
        }
    }

    /// Same as [`Registry::get`] with the type given by its name, in
    /// any casing.
    ///
    /// ```
    /// use color_tol::{Error, Registry};
    /// let tol = Registry::tol();
    /// assert_eq!(tol.lookup("SEQUENTIAL", 3, false)?,
    ///            tol.lookup("sequential", 3, false)?);
    /// assert!(matches!(tol.lookup("Rainbow", 3, false),
    ///                  Err(Error::InvalidCategory { .. })));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn lookup(&self, typ: &str, count: usize, reverse: bool)
                  -> Result<Palette, Error> {
        let typ = typ.parse::<PaletteType>().map_err(|e| {
            tracing::debug!(typ, "unknown palette type");
            e
        })?;
        self.get(typ, count, reverse)
    }

    /// [`Qualitative`][PaletteType::Qualitative] palette with `count`
    /// colors.
    #[inline]
    pub fn qualitative(&self, count: usize, reverse: bool)
                       -> Result<Palette, Error> {
        self.get(PaletteType::Qualitative, count, reverse)
    }

    /// [`Sequential`][PaletteType::Sequential] palette with `count`
    /// colors.
    #[inline]
    pub fn sequential(&self, count: usize, reverse: bool)
                      -> Result<Palette, Error> {
        self.get(PaletteType::Sequential, count, reverse)
    }

    /// [`Diverging`][PaletteType::Diverging] palette with `count`
    /// colors.
    #[inline]
    pub fn diverging(&self, count: usize, reverse: bool)
                     -> Result<Palette, Error> {
        self.get(PaletteType::Diverging, count, reverse)
    }

    /// Return an iterator on the palettes of type `typ`, from the one
    /// with a single color to the one with [`Registry::max_count`]
    /// colors.
    pub fn palettes(&self, typ: PaletteType) -> PaletteIter<'_> {
        PaletteIter::new(typ, self.table.get(typ))
    }
}

/// Return the palette of type `typ` (in any casing) with `count`
/// colors from [`Registry::tol`].
#[inline]
pub fn lookup(typ: &str, count: usize, reverse: bool)
              -> Result<Palette, Error> {
    Registry::tol().lookup(typ, count, reverse)
}

/// Paul Tol qualitative palette (12 colors max).
///
/// ```
/// let p = color_tol::qualitative(6, false)?;
/// assert_eq!(p.hex_colors(), ["#332288", "#88CCEE", "#117733",
///                             "#DDCC77", "#CC6677", "#AA4499"]);
/// # Ok::<(), color_tol::Error>(())
/// ```
#[inline]
pub fn qualitative(count: usize, reverse: bool) -> Result<Palette, Error> {
    Registry::tol().qualitative(count, reverse)
}

/// Paul Tol sequential palette (9 colors max).
///
/// ```
/// let p = color_tol::sequential(5, false)?;
/// assert_eq!(p.hex_colors(), ["#FFFBD5", "#FED98E", "#FB9A29",
///                             "#D95F0E", "#993404"]);
/// # Ok::<(), color_tol::Error>(())
/// ```
#[inline]
pub fn sequential(count: usize, reverse: bool) -> Result<Palette, Error> {
    Registry::tol().sequential(count, reverse)
}

/// Paul Tol diverging palette (11 colors max).
#[inline]
pub fn diverging(count: usize, reverse: bool) -> Result<Palette, Error> {
    Registry::tol().diverging(count, reverse)
}

/// An exact size iterator over the [`Palette`]s of a type.
#[derive(Clone, Copy, Debug)]
pub struct PaletteIter<'a> {
    typ: PaletteType,
    palettes: &'a [PaletteData],
    i: usize, // first position to be consumed (i < j)
    j: usize, // position after the last one to be consumed
}

impl<'a> PaletteIter<'a> {
    fn new(typ: PaletteType, palettes: &'a [PaletteData]) -> Self {
        Self { typ, palettes, i: 0, j: palettes.len() }
    }
}

impl<'a> Iterator for PaletteIter<'a> {
    type Item = Palette;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        let x = Palette::new(self.typ, &self.palettes[self.i], false);
        self.i += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.j - self.i;
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for PaletteIter<'a> {}

impl<'a> DoubleEndedIterator for PaletteIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        self.j -= 1;
        Some(Palette::new(self.typ, &self.palettes[self.j], false))
    }
}
