use std::any::{Any, TypeId};

use smallvec::SmallVec;

use crate::prelude::*;

/// A widget that overlaps its children, aligned at the left top, and sizes
/// itself to the largest of them.
#[derive(Default)]
pub struct Stack {
  pub children: SmallVec<[BoxWidget; 2]>,
}

impl Stack {
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Add `child` on top of the current children.
  #[inline]
  pub fn with_child(mut self, child: impl Widget) -> Self {
    self.children.push(child.box_it());
    self
  }
}

impl Widget for Stack {
  fn measure(&self, clamp: BoxClamp) -> Size {
    self
      .children
      .iter()
      .fold(ZERO_SIZE, |size, child| size.max(child.measure(clamp)))
  }
}

impl Query for Stack {
  fn query_all(&self, type_id: TypeId, callback: &mut dyn FnMut(&dyn Any) -> bool) {
    if type_id == TypeId::of::<Self>() && !callback(self) {
      return;
    }
    for child in &self.children {
      child.query_all(type_id, callback);
    }
  }
}
