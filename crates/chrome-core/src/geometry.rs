#![forbid(unsafe_code)]

//! Minimal geometry for safe-area layout.
//!
//! Pixel-space rectangles come from the platform collaborator; the only
//! computation this layer performs is converting a safe-area rectangle into
//! normalized anchor coordinates.

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub const fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub const fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the rectangle has zero area.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Normalized anchor coordinates in `[0.0, 1.0]`, as consumed by the
/// layout collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl AnchorBox {
    /// Convert a safe-area rectangle into anchors relative to `screen`.
    ///
    /// Returns the full-screen anchor box when `screen` is empty, since
    /// dividing by a zero dimension has no meaningful answer.
    #[must_use]
    pub fn from_safe_area(safe: Rect, screen: Size) -> Self {
        if screen.is_empty() {
            return Self {
                min_x: 0.0,
                min_y: 0.0,
                max_x: 1.0,
                max_y: 1.0,
            };
        }
        let w = screen.width as f32;
        let h = screen.height as f32;
        Self {
            min_x: (safe.x as f32 / w).clamp(0.0, 1.0),
            min_y: (safe.y as f32 / h).clamp(0.0, 1.0),
            max_x: (safe.right() as f32 / w).clamp(0.0, 1.0),
            max_y: (safe.bottom() as f32 / h).clamp(0.0, 1.0),
        }
    }
}
