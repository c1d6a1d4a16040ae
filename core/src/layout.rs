use crate::prelude::*;

/// Boundary limit for a widget's layout.
///
/// A parent hands a `BoxClamp` to each child it measures; the child must
/// resolve to a size between `min` and `max`. The components are not
/// validated, values such as negative or NaN sizes flow through to the
/// underlying componentwise clamp untouched.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct BoxClamp {
  pub min: Size,
  pub max: Size,
}

impl BoxClamp {
  /// clamp use fixed size
  pub const fn fixed_size(size: Size) -> Self { BoxClamp { min: size, max: size } }

  pub fn with_fixed_width(mut self, width: f32) -> Self {
    self.min.width = width;
    self.max.width = width;
    self
  }

  pub fn with_fixed_height(mut self, height: f32) -> Self {
    self.min.height = height;
    self.max.height = height;
    self
  }

  /// Clamp `size` into the `min..max` bounds, component by component.
  pub fn clamp(self, size: Size) -> Size {
    if self.min.width > self.max.width || self.min.height > self.max.height {
      log::warn!("degenerate BoxClamp: min {:?} exceeds max {:?}", self.min, self.max);
    }
    size.clamp(self.min, self.max)
  }
}

impl Default for BoxClamp {
  fn default() -> Self { Self { min: ZERO_SIZE, max: INFINITY_SIZE } }
}
