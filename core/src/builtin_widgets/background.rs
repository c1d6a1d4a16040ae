use std::any::{Any, TypeId};

use crate::prelude::*;

/// Decorates its child with a background color.
///
/// Layout passes straight through; the color is decoration only and is
/// observable through [`Query`].
pub struct Background {
  pub color: Color,
  pub child: BoxWidget,
}

impl Background {
  #[inline]
  pub fn new(color: Color, child: impl Widget) -> Self {
    Self { color, child: child.box_it() }
  }
}

impl Widget for Background {
  #[inline]
  fn measure(&self, clamp: BoxClamp) -> Size { self.child.measure(clamp) }
}

impl Query for Background {
  fn query_all(&self, type_id: TypeId, callback: &mut dyn FnMut(&dyn Any) -> bool) {
    if type_id == TypeId::of::<Self>() && !callback(self) {
      return;
    }
    self.child.query_all(type_id, callback);
  }
}
