use crate::geometry::{Color, Point, Rect};

/// An immediate-mode 2D paint target with a single active solid brush.
///
/// Shapes are filled with whatever brush was selected last, and outlined with
/// the active pen until the null pen is selected.
pub trait Surface {
    fn select_null_pen(&mut self);
    fn select_brush(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect);
    /// `points` must hold at least three vertices.
    fn fill_polygon(&mut self, points: &[Point]);
    fn fill_ellipse(&mut self, bounds: Rect);
}

/// One fill operation together with the brush color that was active for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Rect { color: Color, rect: Rect },
    Polygon { color: Color, points: Vec<Point> },
    Ellipse { color: Color, bounds: Rect },
}

impl DrawCall {
    pub fn color(&self) -> Color {
        match self {
            DrawCall::Rect { color, .. }
            | DrawCall::Polygon { color, .. }
            | DrawCall::Ellipse { color, .. } => *color,
        }
    }
}

/// Surface that keeps every fill in order instead of rasterizing.
#[derive(Debug, Default)]
pub struct Recorder {
    brush: Option<Color>,
    null_pen: bool,
    outlined: usize,
    calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of fills issued while a visible pen was still active.
    pub fn outlined_fills(&self) -> usize {
        self.outlined
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    // GDI starts out with the white stock brush selected.
    fn active(&mut self) -> Color {
        if !self.null_pen {
            self.outlined += 1;
        }
        self.brush.unwrap_or(crate::geometry::WHITE)
    }
}

impl Surface for Recorder {
    fn select_null_pen(&mut self) {
        self.null_pen = true;
    }

    fn select_brush(&mut self, color: Color) {
        self.brush = Some(color);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let color = self.active();
        self.calls.push(DrawCall::Rect { color, rect });
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        debug_assert!(points.len() >= 3, "polygon needs at least three vertices");
        let color = self.active();
        self.calls.push(DrawCall::Polygon {
            color,
            points: points.to_vec(),
        });
    }

    fn fill_ellipse(&mut self, bounds: Rect) {
        let color = self.active();
        self.calls.push(DrawCall::Ellipse { color, bounds });
    }
}

impl std::fmt::Display for DrawCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Color { r, g, b } = self.color();
        match self {
            DrawCall::Rect { rect, .. } => write!(
                f,
                "rect    #{r:02x}{g:02x}{b:02x} ({}, {}) - ({}, {})",
                rect.left, rect.top, rect.right, rect.bottom
            ),
            DrawCall::Polygon { points, .. } => {
                write!(f, "polygon #{r:02x}{g:02x}{b:02x}")?;
                for p in points {
                    write!(f, " ({}, {})", p.x, p.y)?;
                }
                Ok(())
            }
            DrawCall::Ellipse { bounds, .. } => write!(
                f,
                "ellipse #{r:02x}{g:02x}{b:02x} ({}, {}) - ({}, {})",
                bounds.left, bounds.top, bounds.right, bounds.bottom
            ),
        }
    }
}
