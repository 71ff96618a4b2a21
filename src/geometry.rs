//! Pixel-space primitives shared by the renderer and the drawing surfaces.

/// A vertex in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer bounds of a drawable area, right/bottom exclusive as GDI reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// A rectangle anchored at the origin, which is what a client area looks like.
    pub const fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Shrinks all four sides by `amount`. The result may be inverted for small rectangles.
    pub const fn inset(&self, amount: i32) -> Self {
        Self::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }

    /// True when `other` lies inside `self`, edges included.
    #[cfg(test)]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs into the 0x00BBGGRR layout used by COLORREF.
    pub const fn to_bgr(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16)
    }
}

pub const RED: Color = Color::rgb(255, 0, 0);
pub const ORANGE: Color = Color::rgb(255, 127, 0);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const PURPLE: Color = Color::rgb(255, 0, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const BROWN: Color = Color::rgb(128, 64, 0);
pub const LIGHT_BLUE: Color = Color::rgb(0, 255, 255);
pub const PINK: Color = Color::rgb(255, 128, 255);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const DARK_PURPLE: Color = Color::rgb(64, 0, 128);
