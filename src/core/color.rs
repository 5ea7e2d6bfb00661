use thiserror::Error;

/// Linear 0..1 RGB triple as consumed by the particle shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub [f32; 3]);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

impl Rgb {
    /// Parse `#rrggbb` or `#rgb`.
    pub fn from_hex(input: &str) -> Result<Rgb, ColorError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(input.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(input.to_string()));
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map(|v| v as f32 / 255.0);
        let parsed = match digits.len() {
            6 => [
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            ],
            3 => {
                let wide = |i: usize| digits[i..i + 1].repeat(2);
                [channel(&wide(0)), channel(&wide(1)), channel(&wide(2))]
            }
            _ => return Err(ColorError::BadLength(input.to_string())),
        };
        let mut rgb = [0.0; 3];
        for (out, c) in rgb.iter_mut().zip(parsed) {
            *out = c.map_err(|_| ColorError::BadDigit(input.to_string()))?;
        }
        Ok(Rgb(rgb))
    }

    /// `rgba(r, g, b, a)` string for Canvas2D fill styles.
    pub fn css_rgba(&self, alpha: f32) -> String {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha.clamp(0.0, 1.0))
    }
}

/// Named swatches offered by the host color picker, in picker order.
pub const PALETTE: [(&str, &str); 8] = [
    ("Cyan", "#00ffff"),
    ("Magenta", "#ff00ff"),
    ("Yellow", "#ffff00"),
    ("Green", "#00ff00"),
    ("Orange", "#ff6600"),
    ("Purple", "#9933ff"),
    ("Pink", "#ff69b4"),
    ("Blue", "#0099ff"),
];

/// Palette entry following `current`; unknown colors restart at the first swatch.
pub fn next_palette_color(current: &str) -> &'static str {
    let pos = PALETTE
        .iter()
        .position(|(_, hex)| hex.eq_ignore_ascii_case(current.trim()));
    match pos {
        Some(i) => PALETTE[(i + 1) % PALETTE.len()].1,
        None => PALETTE[0].1,
    }
}
