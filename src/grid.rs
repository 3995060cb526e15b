//! Serpentine addressing of a 2D pixel matrix as a 1D buffer.
//!
//! Row 0 runs left-to-right, row 1 right-to-left, alternating. The mapping
//! is fixed for the device's lifetime.

/// Serpentine index map for a rectangular pixel matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerpentineGrid {
    width: usize,
    height: usize,
}

impl SerpentineGrid {
    /// Create a map for a `width` x `height` matrix
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn width(self) -> usize {
        self.width
    }

    pub const fn height(self) -> usize {
        self.height
    }

    /// Total number of pixels in the matrix
    pub const fn len(self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Map matrix coordinates to a linear buffer index
    ///
    /// Even rows run left-to-right, odd rows right-to-left.
    /// Returns `None` for out-of-range coordinates.
    pub const fn index(self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = if y.is_multiple_of(2) {
            x
        } else {
            self.width - 1 - x
        };
        Some(y * self.width + offset)
    }
}
