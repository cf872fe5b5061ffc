//! A terminal-sized buffer of [`Glyph`]s and the diff between two of them.

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The terminal's own colour.
    pub const DEFAULT: Self = Self(0);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// A character with foreground and background colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self::new(' ', Color::DEFAULT, Color::DEFAULT)
    }
}

/// A glyph that changed between two canvases, at screen column `x`, row `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Change {
    pub x: u16,
    pub y: u16,
    pub glyph: Glyph,
}

/// A `width × height` screen buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    /// Create a blank canvas.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Glyph at `(x, y)`, or the blank glyph outside the canvas.
    pub fn get(&self, x: u16, y: u16) -> Glyph {
        self.index(x, y)
            .map(|i| self.glyphs[i])
            .unwrap_or_default()
    }

    /// Set the glyph at `(x, y)`. No-op outside the canvas.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Fill every position with `glyph`.
    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` left to right starting at `(x, y)`, clipped to the
    /// canvas.
    pub fn print(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Color) {
        for (i, ch) in text.chars().enumerate() {
            let Ok(dx) = u16::try_from(i) else {
                break;
            };
            let Some(cx) = x.checked_add(dx) else {
                break;
            };
            self.set(cx, y, Glyph::new(ch, fg, bg));
        }
    }

    /// Glyphs of `self` that differ from `prev`, row-major. When the sizes
    /// differ every glyph is reported.
    pub fn diff(&self, prev: &Canvas) -> Vec<Change> {
        let same_size = self.width == prev.width && self.height == prev.height;
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let glyph = self.get(x, y);
                if !same_size || prev.get(x, y) != glyph {
                    out.push(Change { x, y, glyph });
                }
            }
        }
        out
    }
}
