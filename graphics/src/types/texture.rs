//! Texture formats, cubemap faces and render-target handles.

/// Texture format enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TextureFormat {
    /// 8-bit red channel, unsigned normalized.
    R8Unorm,
    /// 16-bit red channel, float.
    R16Float,
    /// 32-bit red channel, float.
    R32Float,
    /// 16-bit RG channels, float.
    Rg16Float,
    /// 8-bit RGBA channels, unsigned normalized.
    #[default]
    Rgba8Unorm,
    /// 8-bit RGBA channels, sRGB.
    Rgba8UnormSrgb,
    /// 8-bit BGRA channels, unsigned normalized.
    Bgra8Unorm,
    /// 10-bit RGB with 2-bit alpha, unsigned normalized.
    Rgb10a2Unorm,
    /// 16-bit RGBA channels, float.
    Rgba16Float,
    /// 32-bit RGBA channels, float.
    Rgba32Float,
    /// 16-bit depth.
    Depth16Unorm,
    /// 24-bit depth with 8-bit stencil.
    Depth24PlusStencil8,
    /// 32-bit depth, float.
    Depth32Float,
}

impl TextureFormat {
    /// Number of depth bits in this format, zero for color formats.
    pub fn depth_bits(&self) -> u32 {
        match self {
            Self::Depth16Unorm => 16,
            Self::Depth24PlusStencil8 => 24,
            Self::Depth32Float => 32,
            _ => 0,
        }
    }

    /// Returns true if this is a depth or stencil format.
    pub fn is_depth_stencil(&self) -> bool {
        self.depth_bits() > 0
    }
}

/// Cubemap face selector for render-target binds.
///
/// Faces are numbered 0 through 5 in the standard cubemap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CubemapFace {
    /// Not a cubemap face; bind the whole (2D) target.
    #[default]
    Unknown,
    /// +X, face 0.
    PositiveX,
    /// -X, face 1.
    NegativeX,
    /// +Y, face 2.
    PositiveY,
    /// -Y, face 3.
    NegativeY,
    /// +Z, face 4.
    PositiveZ,
    /// -Z, face 5.
    NegativeZ,
}

impl CubemapFace {
    /// The six faces in index order.
    pub const ALL: [Self; 6] = [
        Self::PositiveX,
        Self::NegativeX,
        Self::PositiveY,
        Self::NegativeY,
        Self::PositiveZ,
        Self::NegativeZ,
    ];

    /// Face for an index in `0..6`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Face index in `0..6`, or `None` for [`CubemapFace::Unknown`].
    pub fn index(self) -> Option<usize> {
        Self::ALL.iter().position(|&face| face == self)
    }
}

/// Borrowed handle to an externally owned render texture.
///
/// The handle is opaque to this crate: it is recorded into command buffers and
/// compared, never resolved. The format is carried along so that callers can
/// reason about depth bits without a round trip to the resource owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetId {
    handle: u64,
    format: TextureFormat,
}

impl RenderTargetId {
    /// Wrap a backend texture handle.
    pub const fn new(handle: u64, format: TextureFormat) -> Self {
        Self { handle, format }
    }

    /// Raw backend handle.
    pub fn handle(&self) -> u64 {
        self.handle
    }

    /// Format the texture was created with.
    pub fn format(&self) -> TextureFormat {
        self.format
    }
}
