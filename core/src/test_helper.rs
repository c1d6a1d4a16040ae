//! Utilities to resolve widget layout in tests without a window shell.

use crate::prelude::*;

/// Resolves the layout of a widget tree under a window-sized clamp, the way a
/// root window would.
pub struct LayoutTester {
  root: BoxWidget,
  wnd_size: Size,
}

impl LayoutTester {
  /// Wrap `root` with a default 1024x1024 logical window.
  pub fn new(root: impl Widget) -> Self {
    Self { root: root.box_it(), wnd_size: Size::new(1024., 1024.) }
  }

  pub fn with_wnd_size(mut self, size: Size) -> Self {
    self.wnd_size = size;
    self
  }

  /// The resolved size of the root widget.
  pub fn layout(&self) -> Size {
    self
      .root
      .measure(BoxClamp { min: ZERO_SIZE, max: self.wnd_size })
  }

  #[track_caller]
  pub fn assert_size(&self, expect: Size) { assert_eq!(self.layout(), expect); }
}
