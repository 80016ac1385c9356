use color_tol::{self as ct, Error, PaletteType, Registry, RGB8};

fn rgb(colors: &[(u8, u8, u8)]) -> Vec<RGB8> {
    colors.iter().map(|&(r, g, b)| RGB8::new(r, g, b)).collect()
}

fn decode(hex: &str) -> RGB8 {
    let c = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16).unwrap();
    RGB8::new(c(1), c(3), c(5))
}

#[test]
fn every_size_has_its_length() {
    let tol = Registry::tol();
    for (typ, max) in [(PaletteType::Qualitative, 12),
                       (PaletteType::Sequential, 9),
                       (PaletteType::Diverging, 11)] {
        assert_eq!(tol.max_count(typ), max);
        for count in 1 ..= max {
            let p = ct::lookup(typ.name(), count, false).unwrap();
            assert_eq!(p.len(), count);
            assert_eq!(p.hex_colors().len(), count);
            assert_eq!(p.rgb_colors().len(), count);
            assert_eq!(p.typ(), typ);
            assert!(!p.reversed());
        }
    }
}

#[test]
fn hex_and_rgb_agree() {
    let tol = Registry::tol();
    for typ in PaletteType::ALL {
        for count in 1 ..= tol.max_count(typ) {
            for reverse in [false, true] {
                let p = tol.get(typ, count, reverse).unwrap();
                for (h, &c) in p.hex_colors().iter().zip(p.rgb_colors()) {
                    assert_eq!(decode(h), c, "{typ} {count} {h}");
                }
            }
        }
    }
}

#[test]
fn reverse_is_exact() {
    let tol = Registry::tol();
    for typ in PaletteType::ALL {
        for count in 1 ..= tol.max_count(typ) {
            let p = tol.get(typ, count, false).unwrap();
            let r = tol.get(typ, count, true).unwrap();
            assert!(r.reversed());
            let mut hex = r.hex_colors().to_vec();
            hex.reverse();
            assert_eq!(hex, p.hex_colors());
            let mut colors = r.rgb_colors().to_vec();
            colors.reverse();
            assert_eq!(colors, p.rgb_colors());
        }
    }
}

#[test]
fn type_names_ignore_case() {
    let p = ct::lookup("Qualitative", 5, false).unwrap();
    assert_eq!(ct::lookup("qualitative", 5, false).unwrap(), p);
    assert_eq!(ct::lookup("QUALITATIVE", 5, false).unwrap(), p);
    assert_eq!(ct::qualitative(5, false).unwrap(), p);
}

#[test]
fn invalid_count() {
    for count in [0, 10, 999] {
        match ct::lookup("Sequential", count, false) {
            Err(Error::InvalidCount { typ, max, .. }) => {
                assert_eq!(typ, PaletteType::Sequential);
                assert_eq!(max, 9);
            }
            r => panic!("count {count}: {r:?}"),
        }
    }
    let e = ct::diverging(12, false).unwrap_err();
    assert_eq!(e.to_string(), "Invalid number 12 for palette type Diverging: \
                               valid numbers are between 1 and 11");
}

#[test]
fn invalid_type() {
    let e = ct::lookup("Rainbow", 3, false).unwrap_err();
    assert_eq!(e, Error::InvalidCategory { given: "Rainbow".to_string() });
    assert_eq!(e.to_string(), "Invalid palette type \"Rainbow\", must be one \
                               of Qualitative, Sequential, Diverging");
    assert!(matches!(ct::lookup("", 3, false),
                     Err(Error::InvalidCategory { .. })));
}

#[test]
fn qualitative_5() {
    let p = ct::qualitative(5, false).unwrap();
    assert_eq!(p.len(), 5);
    assert_eq!(p.hex_colors(),
               ["#332288", "#88CCEE", "#117733", "#DDCC77", "#CC6677"]);
    assert_eq!(p.rgb_colors(),
               rgb(&[(51, 34, 136), (136, 204, 238), (17, 119, 51),
                     (221, 204, 119), (204, 102, 119)]));
    assert_eq!(p.typ(), PaletteType::Qualitative);
}

#[test]
fn sequential_7() {
    let p = ct::sequential(7, false).unwrap();
    assert_eq!(p.hex_colors(),
               ["#FFFBD5", "#FEE391", "#FEC44F", "#FB9A29", "#EC7014",
                "#CC4C02", "#8C2D04"]);
    assert_eq!(p.rgb_colors(),
               rgb(&[(255, 251, 213), (254, 227, 145), (254, 196, 79),
                     (251, 154, 41), (236, 112, 20), (204, 76, 2),
                     (140, 45, 4)]));
    assert_eq!(p.typ(), PaletteType::Sequential);
}

#[test]
fn diverging_4() {
    let p = ct::diverging(4, false).unwrap();
    assert_eq!(p.hex_colors(), ["#008BCE", "#B4DDF7", "#F9BD7E", "#D03232"]);
    assert_eq!(p.rgb_colors(),
               rgb(&[(0, 139, 206), (180, 221, 247), (249, 189, 126),
                     (208, 50, 50)]));
    assert!(!p.reversed());
}

#[test]
fn diverging_4_reversed() {
    let p = ct::diverging(4, true).unwrap();
    assert_eq!(p.len(), 4);
    assert_eq!(p.hex_colors(), ["#D03232", "#F9BD7E", "#B4DDF7", "#008BCE"]);
    assert_eq!(p.rgb_colors(),
               rgb(&[(208, 50, 50), (249, 189, 126), (180, 221, 247),
                     (0, 139, 206)]));
    assert!(p.reversed());
}

#[test]
fn no_color_beyond_length() {
    let p = ct::qualitative(2, false).unwrap();
    assert_eq!(p.len(), 2);
    assert!(p.hex_colors().get(10).is_none());
    assert!(p.rgb_colors().get(10).is_none());
}

#[test]
#[should_panic]
fn hex_index_beyond_length() {
    let p = ct::qualitative(2, false).unwrap();
    std::hint::black_box(&p.hex_colors()[10]);
}

#[test]
#[should_panic]
fn rgb_index_beyond_length() {
    let p = ct::qualitative(2, false).unwrap();
    std::hint::black_box(p.rgb_colors()[10]);
}

#[test]
fn largest_palettes() {
    let tol = Registry::tol();
    let last = tol.palettes(PaletteType::Qualitative).last().unwrap();
    assert_eq!(last.hex_colors()[9], "#AA4466");
    assert_eq!(tol.palettes(PaletteType::Sequential).count(), 9);
}

#[test]
fn colors_convert() {
    let p = ct::diverging(1, false).unwrap();
    assert_eq!(p.colors::<RGB8>(), vec![RGB8::new(255, 250, 210)]);
}

#[test]
fn injected_dataset() {
    let json = r##"{
      "Qualitative": [{"ColorsHTML": ["#000000"], "ColorsRGB": [[0, 0, 0]]},
                      {"ColorsHTML": ["#000000", "#FFFFFF"],
                       "ColorsRGB": [[0, 0, 0], [255, 255, 255]]}],
      "Sequential": [{"ColorsHTML": ["#808080"], "ColorsRGB": [[128, 128, 128]]}],
      "Diverging": [{"ColorsHTML": ["#FF0000"], "ColorsRGB": [[255, 0, 0]]}]
    }"##;
    let reg = Registry::from_json(json).unwrap();
    assert_eq!(reg.max_count(PaletteType::Qualitative), 2);
    assert_eq!(reg.max_count(PaletteType::Sequential), 1);
    let p = reg.lookup("qualitative", 2, true).unwrap();
    assert_eq!(p.hex_colors(), ["#FFFFFF", "#000000"]);
    assert!(matches!(reg.sequential(2, false),
                     Err(Error::InvalidCount { max: 1, .. })));
    // The built-in dataset is unaffected.
    assert_eq!(ct::sequential(2, false).unwrap().len(), 2);
}

#[test]
fn concurrent_first_use() {
    let handles: Vec<_> = (1 ..= 8)
        .map(|n| std::thread::spawn(move || ct::qualitative(n, false)))
        .collect();
    for (n, h) in (1 ..= 8).zip(handles) {
        assert_eq!(h.join().unwrap().unwrap().len(), n);
    }
}
