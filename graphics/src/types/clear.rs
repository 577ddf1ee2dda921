//! Clear flags and clear colors.

use bitflags::bitflags;

bitflags! {
    /// Which channels a render-target bind resets.
    ///
    /// ```
    /// use framekit_graphics::ClearFlag;
    ///
    /// assert!(ClearFlag::ALL.has_color() && ClearFlag::ALL.has_depth());
    /// assert!(!ClearFlag::NONE.has_color() && !ClearFlag::NONE.has_depth());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlag: u32 {
        /// Clear nothing.
        const NONE = 0;
        /// Clear the color attachments.
        const COLOR = 1 << 0;
        /// Clear the depth attachment.
        const DEPTH = 1 << 1;
        /// Clear color and depth.
        const ALL = Self::COLOR.bits() | Self::DEPTH.bits();
    }
}

impl ClearFlag {
    /// Returns true if the color bit is set.
    pub fn has_color(self) -> bool {
        self.contains(Self::COLOR)
    }

    /// Returns true if the depth bit is set.
    pub fn has_depth(self) -> bool {
        self.contains(Self::DEPTH)
    }
}

impl Default for ClearFlag {
    fn default() -> Self {
        Self::NONE
    }
}

/// Linear RGBA color used for clears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Opaque black, the default clear color.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Components as `[r, g, b, a]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
