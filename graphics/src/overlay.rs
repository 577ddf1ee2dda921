//! Layout of on-screen debug overlay tiles.

/// Places debug overlay tiles left to right, wrapping to a new row.
///
/// Rows go downward in a y-up coordinate system: wrapping moves `y` down by
/// the tallest tile placed on the finished row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayCursor {
    /// Left edge of the next tile.
    pub x: f32,
    /// Bottom edge of the current row.
    pub y: f32,
    line_height: f32,
}

impl OverlayCursor {
    /// Start a layout at `(x, y)`.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            line_height: -1.0,
        }
    }

    /// Advance past a tile of `overlay_width` x `overlay_height` that was just
    /// drawn at the current position.
    ///
    /// If another tile of the same width would not fit in `screen_width`, the
    /// cursor wraps to the start of the next row.
    pub fn next(&mut self, overlay_width: f32, overlay_height: f32, screen_width: f32) {
        self.x += overlay_width;
        self.line_height = self.line_height.max(overlay_height);
        if self.x + overlay_width > screen_width {
            self.x = 0.0;
            self.y -= self.line_height;
            self.line_height = -1.0;
        }
    }

    /// Current `(x, y)`.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Default for OverlayCursor {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
