//! Built-in rectilinear stroke font for the embossed diameter label.
//!
//! Glyphs cover the digits and the decimal point, which is all a diameter
//! label ever needs. Each glyph is one or two axis-aligned polygons in an
//! em box 0.6 wide and 1.0 tall, on a 0.2 stroke grid; enclosed counters
//! ('0', '6', '8', '9') are listed separately. Outlines and counters are
//! both stored counter-clockwise; callers reverse counters when a ring
//! orientation convention requires it.
//!
//! Coordinates scale by the font size (cap height in mm) at layout time.

/// Gap between adjacent glyph cells, in em units.
pub const GLYPH_GAP_EM: f64 = 0.2;

#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    /// Outer boundary, CCW, in em units.
    pub outline: &'static [[f64; 2]],
    /// Enclosed counters, CCW, in em units.
    pub counters: &'static [&'static [[f64; 2]]],
    /// Cell width in em units; digits are monospaced.
    pub width: f64,
}

const DIGIT_WIDTH: f64 = 0.6;

const FULL_BOX: [[f64; 2]; 4] = [[0.0, 0.0], [0.6, 0.0], [0.6, 1.0], [0.0, 1.0]];
const COUNTER_LOW: [[f64; 2]; 4] = [[0.2, 0.2], [0.4, 0.2], [0.4, 0.4], [0.2, 0.4]];
const COUNTER_HIGH: [[f64; 2]; 4] = [[0.2, 0.6], [0.4, 0.6], [0.4, 0.8], [0.2, 0.8]];
const COUNTER_TALL: [[f64; 2]; 4] = [[0.2, 0.2], [0.4, 0.2], [0.4, 0.8], [0.2, 0.8]];

const ZERO: Glyph = Glyph {
    outline: &FULL_BOX,
    counters: &[&COUNTER_TALL],
    width: DIGIT_WIDTH,
};

const ONE: Glyph = Glyph {
    outline: &[[0.2, 0.0], [0.4, 0.0], [0.4, 1.0], [0.2, 1.0]],
    counters: &[],
    width: DIGIT_WIDTH,
};

const TWO: Glyph = Glyph {
    outline: &[
        [0.0, 0.0],
        [0.6, 0.0],
        [0.6, 0.2],
        [0.2, 0.2],
        [0.2, 0.4],
        [0.6, 0.4],
        [0.6, 1.0],
        [0.0, 1.0],
        [0.0, 0.8],
        [0.4, 0.8],
        [0.4, 0.6],
        [0.0, 0.6],
    ],
    counters: &[],
    width: DIGIT_WIDTH,
};

const THREE: Glyph = Glyph {
    outline: &[
        [0.0, 0.0],
        [0.6, 0.0],
        [0.6, 1.0],
        [0.0, 1.0],
        [0.0, 0.8],
        [0.4, 0.8],
        [0.4, 0.6],
        [0.0, 0.6],
        [0.0, 0.4],
        [0.4, 0.4],
        [0.4, 0.2],
        [0.0, 0.2],
    ],
    counters: &[],
    width: DIGIT_WIDTH,
};

const FOUR: Glyph = Glyph {
    outline: &[
        [0.4, 0.0],
        [0.6, 0.0],
        [0.6, 1.0],
        [0.4, 1.0],
        [0.4, 0.6],
        [0.2, 0.6],
        [0.2, 1.0],
        [0.0, 1.0],
        [0.0, 0.4],
        [0.4, 0.4],
    ],
    counters: &[],
    width: DIGIT_WIDTH,
};

const FIVE: Glyph = Glyph {
    outline: &[
        [0.0, 0.0],
        [0.6, 0.0],
        [0.6, 0.6],
        [0.2, 0.6],
        [0.2, 0.8],
        [0.6, 0.8],
        [0.6, 1.0],
        [0.0, 1.0],
        [0.0, 0.4],
        [0.4, 0.4],
        [0.4, 0.2],
        [0.0, 0.2],
    ],
    counters: &[],
    width: DIGIT_WIDTH,
};

const SIX: Glyph = Glyph {
    outline: &[
        [0.0, 0.0],
        [0.6, 0.0],
        [0.6, 0.6],
        [0.2, 0.6],
        [0.2, 0.8],
        [0.6, 0.8],
        [0.6, 1.0],
        [0.0, 1.0],
    ],
    counters: &[&COUNTER_LOW],
    width: DIGIT_WIDTH,
};

const SEVEN: Glyph = Glyph {
    outline: &[
        [0.4, 0.0],
        [0.6, 0.0],
        [0.6, 1.0],
        [0.0, 1.0],
        [0.0, 0.8],
        [0.4, 0.8],
    ],
    counters: &[],
    width: DIGIT_WIDTH,
};

const EIGHT: Glyph = Glyph {
    outline: &FULL_BOX,
    counters: &[&COUNTER_LOW, &COUNTER_HIGH],
    width: DIGIT_WIDTH,
};

const NINE: Glyph = Glyph {
    outline: &[
        [0.0, 0.0],
        [0.6, 0.0],
        [0.6, 1.0],
        [0.0, 1.0],
        [0.0, 0.4],
        [0.4, 0.4],
        [0.4, 0.2],
        [0.0, 0.2],
    ],
    counters: &[&COUNTER_HIGH],
    width: DIGIT_WIDTH,
};

const DOT: Glyph = Glyph {
    outline: &[[0.0, 0.0], [0.2, 0.0], [0.2, 0.2], [0.0, 0.2]],
    counters: &[],
    width: 0.2,
};

pub fn glyph(c: char) -> Option<&'static Glyph> {
    match c {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        '.' => Some(&DOT),
        _ => None,
    }
}

/// Total width of a line of text in em units, gaps included.
/// Characters without a glyph contribute nothing.
pub fn text_em_width(text: &str) -> f64 {
    let mut width = 0.0;
    let mut glyphs = 0usize;
    for c in text.chars() {
        if let Some(g) = glyph(c) {
            width += g.width;
            glyphs += 1;
        }
    }
    if glyphs > 1 {
        width += GLYPH_GAP_EM * (glyphs - 1) as f64;
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn shoelace(ring: &[[f64; 2]]) -> f64 {
        let mut twice = 0.0;
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            twice += a[0] * b[1] - b[0] * a[1];
        }
        twice * 0.5
    }

    #[test]
    fn every_label_character_has_a_glyph() {
        for c in "0123456789.".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
        assert!(glyph('x').is_none());
    }

    #[test]
    fn outlines_and_counters_are_ccw_within_the_em_box() {
        for c in "0123456789.".chars() {
            let g = glyph(c).unwrap();
            assert!(shoelace(g.outline) > 0.0, "outline of {c:?} not CCW");
            for p in g.outline {
                assert!((0.0..=0.6).contains(&p[0]) && (0.0..=1.0).contains(&p[1]));
            }
            for counter in g.counters {
                assert!(shoelace(counter) > 0.0, "counter of {c:?} not CCW");
            }
        }
    }

    #[test]
    fn glyph_ink_area_matches_stroke_layout() {
        // '8' is the full box minus two 0.2 x 0.2 counters.
        let eight = glyph('8').unwrap();
        let area = shoelace(eight.outline)
            - eight.counters.iter().map(|c| shoelace(c)).sum::<f64>();
        assert_relative_eq!(area, 0.6 - 2.0 * 0.04, epsilon = 1e-12);
    }

    #[test]
    fn text_width_accounts_for_gaps_and_the_narrow_dot() {
        assert_relative_eq!(text_em_width("4"), 0.6);
        assert_relative_eq!(text_em_width("11"), 1.4);
        assert_relative_eq!(text_em_width("11.5"), 0.6 * 3.0 + 0.2 + 0.2 * 3.0);
    }
}
