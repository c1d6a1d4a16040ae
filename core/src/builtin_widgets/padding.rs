use std::any::{Any, TypeId};

use crate::prelude::*;

/// A widget that insets its child by the given padding.
pub struct Padding {
  pub padding: EdgeInsets,
  pub child: BoxWidget,
}

impl Padding {
  #[inline]
  pub fn new(padding: EdgeInsets, child: impl Widget) -> Self {
    Self { padding, child: child.box_it() }
  }
}

impl Widget for Padding {
  fn measure(&self, clamp: BoxClamp) -> Size {
    let thickness = self.padding.thickness().min(clamp.max);
    let min = (clamp.min - thickness).max(ZERO_SIZE);
    let max = (clamp.max - thickness).max(ZERO_SIZE);

    // The child lays out in the space left over after the insets; the insets
    // then grow the resolved size back.
    let size = self.child.measure(BoxClamp { min, max });
    clamp.clamp(size + thickness)
  }
}

impl Query for Padding {
  fn query_all(&self, type_id: TypeId, callback: &mut dyn FnMut(&dyn Any) -> bool) {
    if type_id == TypeId::of::<Self>() && !callback(self) {
      return;
    }
    self.child.query_all(type_id, callback);
  }
}

#[cfg(test)]
mod tests {
  use veneer_dev_helper::*;

  use super::*;
  use crate::test_helper::*;

  widget_layout_test!(
    smoke,
    LayoutTester::new(
      Container::new(Size::new(100., 100.)).with_padding(EdgeInsets::symmetrical(5., 10.))
    ),
    size == Size::new(120., 110.)
  );

  widget_layout_test!(
    insets_do_not_escape_the_clamp,
    LayoutTester::new(
      Container::new(Size::new(100., 100.)).with_padding(EdgeInsets::all(20.))
    )
    .with_wnd_size(Size::new(110., 110.)),
    size == Size::new(110., 110.)
  );
}
