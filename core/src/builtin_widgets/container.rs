use crate::{impl_query_self_only, prelude::*};

/// A plain box with a preferred size, the simplest thing to hang decorations
/// on.
pub struct Container {
  pub size: Size,
}

impl Container {
  #[inline]
  pub fn new(size: Size) -> Self { Self { size } }
}

impl Widget for Container {
  #[inline]
  fn measure(&self, clamp: BoxClamp) -> Size { clamp.clamp(self.size) }
}

impl Query for Container {
  impl_query_self_only!();
}

#[cfg(test)]
mod tests {
  use veneer_dev_helper::*;

  use super::*;
  use crate::test_helper::*;

  const SIZE: Size = Size::new(100., 100.);

  widget_layout_test!(smoke, LayoutTester::new(Container::new(SIZE)), size == SIZE);

  widget_layout_test!(
    respects_the_window_bound,
    LayoutTester::new(Container::new(SIZE)).with_wnd_size(Size::new(50., 50.)),
    size == Size::new(50., 50.)
  );
}
