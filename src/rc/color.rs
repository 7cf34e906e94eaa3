//! Colour specifications accepted by the render configuration.

/// The default colour cycle, addressed as `"C0"` through `"C9"`.
pub const COLOR_CYCLE: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("k", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("w", (255, 255, 255)),
    ("grey", (128, 128, 128)),
    ("gray", (128, 128, 128)),
    ("lightgrey", (211, 211, 211)),
    ("lightgray", (211, 211, 211)),
    ("darkgrey", (169, 169, 169)),
    ("darkgray", (169, 169, 169)),
    ("red", (255, 0, 0)),
    ("r", (191, 0, 0)),
    ("green", (0, 128, 0)),
    ("g", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("b", (0, 0, 255)),
    ("cyan", (0, 255, 255)),
    ("c", (0, 191, 191)),
    ("magenta", (255, 0, 255)),
    ("m", (191, 0, 191)),
    ("yellow", (255, 255, 0)),
    ("y", (191, 191, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("brown", (165, 42, 42)),
    ("pink", (255, 192, 203)),
    ("navy", (0, 0, 128)),
];

/// Parses a colour specification into an RGB triplet.
///
/// Accepted forms:
///
/// - a name such as `"black"`, `"grey"` or a single-letter shorthand (`"k"`)
/// - hex `"#rrggbb"` or `"#rgb"`
/// - a grey level between `"0"` (black) and `"1"` (white), e.g. `"0.8"`
/// - a colour cycle reference `"C0"` through `"C9"`
///
/// # Example
///
/// ```rust
/// use pubstyle::rc::parse_color;
///
/// assert_eq!(parse_color("black"), Some((0, 0, 0)));
/// assert_eq!(parse_color("#ff8000"), Some((255, 128, 0)));
/// assert_eq!(parse_color("0.8"), Some((204, 204, 204)));
/// assert_eq!(parse_color("C0"), Some((0x1f, 0x77, 0xb4)));
/// assert_eq!(parse_color("not-a-colour"), None);
/// ```
pub fn parse_color(spec: &str) -> Option<(u8, u8, u8)> {
    let spec = spec.trim();

    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(index) = spec.strip_prefix('C') {
        if let Ok(i) = index.parse::<usize>() {
            return COLOR_CYCLE.get(i).copied();
        }
    }

    if let Ok(level) = spec.parse::<f64>() {
        if (0.0..=1.0).contains(&level) {
            let v = (level * 255.0).round() as u8;
            return Some((v, v, v));
        }
        return None;
    }

    let lower = spec.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}
