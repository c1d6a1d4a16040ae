use std::any::{Any, TypeId};

use crate::prelude::*;

/// A wrapper that constrains its child to a fixed width and/or height.
///
/// A fixed axis pins the child clamp to the requested value, clamped into the
/// constraint the parent passed down. The requested values themselves are not
/// validated; what a negative or NaN request resolves to is decided by the
/// clamp math alone.
pub struct FixedSize {
  pub width: Dimension,
  pub height: Dimension,
  pub child: BoxWidget,
}

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub enum Dimension {
  #[default]
  Auto,
  Fixed(f32),
}

impl From<f32> for Dimension {
  #[inline]
  fn from(v: f32) -> Self { Dimension::Fixed(v) }
}

impl Widget for FixedSize {
  fn measure(&self, clamp: BoxClamp) -> Size {
    let mut new_clamp = clamp;
    if let Dimension::Fixed(w) = self.width {
      let fixed_w = w.clamp(clamp.min.width, clamp.max.width);
      new_clamp = new_clamp.with_fixed_width(fixed_w);
    }
    if let Dimension::Fixed(h) = self.height {
      let fixed_h = h.clamp(clamp.min.height, clamp.max.height);
      new_clamp = new_clamp.with_fixed_height(fixed_h);
    }
    self.child.measure(new_clamp)
  }
}

impl Query for FixedSize {
  fn query_all(&self, type_id: TypeId, callback: &mut dyn FnMut(&dyn Any) -> bool) {
    if type_id == TypeId::of::<Self>() && !callback(self) {
      return;
    }
    self.child.query_all(type_id, callback);
  }
}
