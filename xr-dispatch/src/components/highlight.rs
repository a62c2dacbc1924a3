/// Marks an entity as a target for pointer picking
#[derive(Debug, Clone, Copy)]
pub struct Pickable;

/// Outline rendering state of a [`Pickable`] entity. Purely cosmetic: the renderer reads it, nothing
/// else depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Highlight {
    /// Is the outline currently drawn?
    pub outlined: bool,
    /// Width of the outline, only meaningful while `outlined` is set
    pub width: f32,
}

impl Highlight {
    /// Flip the outline: switch it off if it is on, otherwise switch it on with the given width.
    pub fn toggle(&mut self, width: f32) {
        if self.outlined {
            self.outlined = false;
        } else {
            self.outlined = true;
            self.width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_pairs_cancel_out() {
        let mut highlight = Highlight::default();
        highlight.toggle(0.05);
        assert!(highlight.outlined);
        assert_eq!(highlight.width, 0.05);

        highlight.toggle(0.05);
        assert!(!highlight.outlined);
    }
}
