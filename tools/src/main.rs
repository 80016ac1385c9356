// To use this program, edit tol_schemes.hjson and run it from tools/.
// It rewrites ../data/color_tol.json, adding to each HTML code the RGB
// triplet it denotes.

use std::{env,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value;

/// Order of the palette types in the data file.
const MAP_TYPES: [&str; 3] = ["Qualitative", "Sequential", "Diverging"];

/// Convert colors such as "#4393C3" to `[67, 147, 195]`.
fn parse_color(s: &str) -> [u8; 3] {
    let digits = match s.strip_prefix('#') {
        Some(d) if d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit())
            => d,
        _ => panic!("color-tol-tools: not a color “{}”", s) };
    let mut rgb = [0; 3];
    for (i, c) in rgb.iter_mut().enumerate() {
        *c = match u8::from_str_radix(&digits[2 * i .. 2 * i + 2], 16) {
            Ok(c) => c,
            Err(_) => panic!("color-tol-tools: not a color “{}”", s) };
    }
    rgb
}

/// Return the palettes of type `ty`, the one with `k` colors at
/// position `k - 1`.
fn palettes_of_json(json: &Value, ty: &str) -> Vec<Vec<String>> {
    let palettes = match json {
        Value::Object(m) => match m.get(ty) {
            Some(Value::Array(a)) => a,
            _ => panic!("color-tol-tools: no list of {ty} palettes") },
        _ => panic!("color-tol-tools: tol_schemes.hjson is not an object") };
    palettes.iter().enumerate().map(|(i, p)| {
        let colors = match p {
            Value::Array(c) => c,
            _ => panic!("color-tol-tools: {ty} #{}: {p:?}", i + 1) };
        assert_eq!(colors.len(), i + 1,
                   "color-tol-tools: {ty} palette #{} has {} colors",
                   i + 1, colors.len());
        colors.iter().map(|c| match c {
            Value::String(c) => c.clone(),
            _ => panic!("color-tol-tools: {ty} #{}: {c:?}", i + 1) })
            .collect()
    }).collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let fh = File::open("tol_schemes.hjson")?;
    let json: Value = serde_hjson::from_reader(fh)?;

    let mut fh = BufWriter::new(File::create("../data/color_tol.json")?);
    writeln!(fh, "{{")?;
    for (k, ty) in MAP_TYPES.iter().enumerate() {
        let palettes = palettes_of_json(&json, ty);
        writeln!(fh, "  \"{ty}\": [")?;
        for (i, hex) in palettes.iter().enumerate() {
            let html: Vec<_> = hex.iter().map(|h| format!("\"{h}\"")).collect();
            let rgb: Vec<_> = hex.iter()
                .map(|h| { let [r, g, b] = parse_color(h);
                           format!("[{r}, {g}, {b}]") })
                .collect();
            let sep = if i + 1 < palettes.len() { "," } else { "" };
            writeln!(fh, "    {{\"ColorsHTML\": [{}],\n     \
                          \"ColorsRGB\": [{}]}}{sep}",
                     html.join(", "), rgb.join(", "))?;
        }
        let sep = if k + 1 < MAP_TYPES.len() { "," } else { "" };
        writeln!(fh, "  ]{sep}")?;
    }
    writeln!(fh, "}}")?;
    eprintln!("{}: wrote ../data/color_tol.json",
              env::args().next().unwrap_or_default());
    Ok(())
}
