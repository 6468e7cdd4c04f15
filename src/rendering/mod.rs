use macroquad::prelude::{Color, clear_background, draw_rectangle};
use rand::Rng;

/// Plain RGBA color, independent of the windowing backend so draw logic can
/// be exercised against a recording surface in tests.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::from_rgba(c.r, c.g, c.b, c.a)
    }
}

/// Background for dead cells
pub const BACKGROUND: Rgba = Rgba::new(0, 0, 0);

/// Live-cell color when palette mode is off
pub const LIVE: Rgba = Rgba::new(255, 255, 255);

/// Palette for randomized live-cell coloring. Re-sampled per cell per frame,
/// which produces the characteristic flicker.
pub const PALETTE: [Rgba; 8] = [
    Rgba::new(255, 0, 0),
    Rgba::new(0, 255, 0),
    Rgba::new(0, 0, 255),
    Rgba::new(255, 255, 0),
    Rgba::new(0, 255, 255),
    Rgba::new(255, 0, 255),
    Rgba::new(255, 165, 0),
    Rgba::new(255, 255, 255),
];

/// Pick the color for a live cell: a uniform palette sample in colors mode,
/// fixed white otherwise.
pub fn live_color(colors: bool, rng: &mut impl Rng) -> Rgba {
    if colors {
        PALETTE[rng.random_range(0..PALETTE.len())]
    } else {
        LIVE
    }
}

/// A 2D pixel canvas the simulation draws into. Presenting the finished
/// frame belongs to the runtime loop, not the surface.
pub trait Surface {
    /// Fill the whole canvas with one color
    fn clear(&mut self, color: Rgba);

    /// Draw a filled axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
}

/// Surface backed by the macroquad window.
pub struct WindowSurface;

impl Surface for WindowSurface {
    fn clear(&mut self, color: Rgba) {
        clear_background(color.into());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        draw_rectangle(x, y, w, h, color.into());
    }
}
