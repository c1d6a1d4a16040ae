use std::any::{Any, TypeId};

use crate::prelude::*;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EdgeInsets {
  pub left: f32,
  pub right: f32,
  pub bottom: f32,
  pub top: f32,
}

/// A widget that adds empty space around its child.
pub struct Margin {
  pub margin: EdgeInsets,
  pub child: BoxWidget,
}

impl Margin {
  #[inline]
  pub fn new(margin: EdgeInsets, child: impl Widget) -> Self {
    Self { margin, child: child.box_it() }
  }
}

impl Widget for Margin {
  fn measure(&self, clamp: BoxClamp) -> Size {
    let thickness = self.margin.thickness().min(clamp.max);
    let min = (clamp.min - thickness).max(ZERO_SIZE);
    let max = (clamp.max - thickness).max(ZERO_SIZE);

    // Shrink the clamp of the child.
    let size = self.child.measure(BoxClamp { min, max });
    clamp.clamp(size + thickness)
  }
}

impl Query for Margin {
  fn query_all(&self, type_id: TypeId, callback: &mut dyn FnMut(&dyn Any) -> bool) {
    if type_id == TypeId::of::<Self>() && !callback(self) {
      return;
    }
    self.child.query_all(type_id, callback);
  }
}

impl EdgeInsets {
  pub const ZERO: Self = Self { top: 0., right: 0., bottom: 0., left: 0. };

  #[inline]
  pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
    Self { top, right, bottom, left }
  }

  #[inline]
  pub const fn all(value: f32) -> Self { Self::new(value, value, value, value) }

  #[inline]
  pub const fn only_left(left: f32) -> Self { Self { left, ..Self::ZERO } }

  #[inline]
  pub const fn symmetrical(vertical: f32, horizontal: f32) -> Self {
    Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
  }

  #[inline]
  pub const fn horizontal(horizontal: f32) -> Self {
    Self { left: horizontal, right: horizontal, ..Self::ZERO }
  }

  #[inline]
  pub const fn vertical(vertical: f32) -> Self {
    Self { top: vertical, bottom: vertical, ..Self::ZERO }
  }

  /// The total space the insets occupy on both axes.
  #[inline]
  pub fn thickness(&self) -> Size {
    Size::new(self.left + self.right, self.top + self.bottom)
  }
}

#[cfg(test)]
mod tests {
  use veneer_dev_helper::*;

  use super::*;
  use crate::test_helper::*;

  widget_layout_test!(
    smoke,
    LayoutTester::new(Margin::new(EdgeInsets::all(10.), Container::new(Size::new(100., 100.)))),
    size == Size::new(120., 120.)
  );

  widget_layout_test!(
    asymmetric,
    LayoutTester::new(
      Container::new(Size::new(100., 100.)).with_margin(EdgeInsets::only_left(1.))
    ),
    size == Size::new(101., 100.)
  );
}
