/// Straight (non-premultiplied) 8-bit RGB triple. Alpha travels separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fallback used whenever a line color cannot be resolved.
    pub const NEAR_BLACK: Self = Self::new(15, 15, 15);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Midpoint blend, `blend(self, other, 0.5)`.
    pub fn blend_half(self, other: Self) -> Self {
        blend(self, other, 0.5)
    }

    /// Functional notation understood by [`parse_color`], e.g. `rgb(132, 195, 24)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Parse a style color.
///
/// Accepted forms:
/// - `rgb(r, g, b)` anywhere in the text (case-insensitive, free whitespace)
/// - `rgba(r, g, b, a)` anywhere in the text; alpha is ignored and never validated
/// - `#rrggbb` as the entire text (case-insensitive)
///
/// Channels are decimal integers; values above 255 saturate to 255. Anything else yields
/// `None` and the caller picks a fallback.
pub fn parse_color(text: &str) -> Option<Rgb> {
    if text.is_empty() {
        return None;
    }
    parse_functional(text).or_else(|| parse_hex(text))
}

/// Per-channel linear interpolation from `a` (t = 0) to `b` (t = 1), rounded to nearest.
pub fn blend(a: Rgb, b: Rgb, t: f64) -> Rgb {
    fn mix(a: u8, b: u8, t: f64) -> u8 {
        let (a, b) = (f64::from(a), f64::from(b));
        (a + (b - a) * t).round() as u8
    }

    Rgb {
        r: mix(a.r, b.r, t),
        g: mix(a.g, b.g, t),
        b: mix(a.b, b.b, t),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Terminator {
    /// `rgb(...)`: the third channel closes the call.
    Paren,
    /// `rgba(...)`: the third channel is followed by the alpha argument.
    Comma,
}

fn parse_functional(text: &str) -> Option<Rgb> {
    let lower = text.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    scan_calls(bytes, b"rgb", Terminator::Paren)
        .or_else(|| scan_calls(bytes, b"rgba", Terminator::Comma))
}

fn scan_calls(bytes: &[u8], name: &[u8], term: Terminator) -> Option<Rgb> {
    (0..bytes.len())
        .filter(|&at| bytes[at..].starts_with(name))
        .find_map(|at| parse_args(&bytes[at + name.len()..], term))
}

fn parse_args(rest: &[u8], term: Terminator) -> Option<Rgb> {
    let mut cur = Cursor { bytes: rest, pos: 0 };
    cur.skip_ws();
    cur.expect(b'(')?;

    let mut channels = [0u8; 3];
    for (idx, slot) in channels.iter_mut().enumerate() {
        if idx > 0 {
            cur.expect(b',')?;
        }
        cur.skip_ws();
        *slot = cur.channel()?;
        cur.skip_ws();
    }

    match term {
        Terminator::Paren => cur.expect(b')')?,
        Terminator::Comma => cur.expect(b',')?,
    }

    let [r, g, b] = channels;
    Some(Rgb { r, g, b })
}

fn parse_hex(text: &str) -> Option<Rgb> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, want: u8) -> Option<()> {
        if self.peek() == Some(want) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    fn channel(&mut self) -> Option<u8> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(c) = self.peek().filter(u8::is_ascii_digit) {
            value = value.saturating_mul(10).saturating_add(u32::from(c - b'0'));
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        // Out-of-range channels saturate, like a canvas stroke style does.
        Some(u8::try_from(value).unwrap_or(u8::MAX))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/color.rs"]
mod tests;
