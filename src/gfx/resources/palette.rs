//! Fixed color palette shared by scene objects and light markers.
//!
//! Objects store an index into the palette rather than a color, matching the
//! editor's color picker.

/// Index of the near-black used for the ground grid.
pub const GRID_COLOR: usize = 0;
/// Index new objects start with.
pub const DEFAULT_OBJECT_COLOR: usize = 8;

/// Ordered list of RGBA colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<[f32; 4]>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                [0.1, 0.1, 0.1, 1.0], // black
                [1.0, 0.0, 0.0, 1.0], // red
                [1.0, 1.0, 0.0, 1.0], // yellow
                [0.0, 1.0, 0.0, 1.0], // green
                [0.0, 0.0, 1.0, 1.0], // blue
                [1.0, 0.0, 1.0, 1.0], // magenta
                [0.0, 1.0, 1.0, 1.0], // cyan
                [0.5, 0.5, 0.5, 1.0], // grey
                [1.0, 1.0, 1.0, 1.0], // white
            ],
        }
    }
}

impl Palette {
    /// Builds a palette from explicit colors.
    pub fn new(colors: Vec<[f32; 4]>) -> Self {
        Self { colors }
    }

    pub fn get(&self, index: usize) -> Option<[f32; 4]> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 9);
        assert_eq!(palette.get(GRID_COLOR), Some([0.1, 0.1, 0.1, 1.0]));
        assert_eq!(palette.get(DEFAULT_OBJECT_COLOR), Some([1.0, 1.0, 1.0, 1.0]));
        assert_eq!(palette.get(9), None);
    }
}
