use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use color_tol::{Palette, PaletteType, Registry};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, palette: &Palette,
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (hex, c) in palette.hex_colors().iter().zip(palette.rgb_colors()) {
        writeln!(fh, "  <td title=\"{hex} = rgb({}, {}, {})\" \
                      style=\"width: {width}px; height: 30px; \
                      background-color: {hex}\"></td>",
                 c.r, c.g, c.b)?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color_tol: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    let tol = Registry::tol();
    for typ in PaletteType::ALL {
        writeln!(fh, "<h3>{typ}</h3>")?;
        for p in tol.palettes(typ) {
            let c = format!("{} ({} colors)", typ, p.len());
            table_of_colors(&mut fh, &p, 40, &c)?;
        }
        let r = tol.get(typ, tol.max_count(typ), true)?;
        table_of_colors(&mut fh, &r, 40, "reversed")?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
