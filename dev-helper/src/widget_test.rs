/// Generates a layout test from a test name, a `LayoutTester` expression
/// (see `veneer_core::test_helper`), and the expected resolved size. The
/// macro appends a `_layout` suffix to the test name.
///
/// Make sure `veneer_core::test_helper::*` is imported and `paste` is
/// available as a dev-dependency before using it.
///
/// # Examples
///
/// ```rust
/// use veneer_core::{prelude::*, test_helper::*};
/// use veneer_dev_helper::*;
///
/// widget_layout_test!(
///   container,
///   LayoutTester::new(Container::new(Size::new(10., 10.))),
///   size == Size::new(10., 10.)
/// );
/// ```
#[macro_export]
macro_rules! widget_layout_test {
  (
    $name: ident,
    $tester: expr,
    size == $expect: expr $(,)?
  ) => {
    paste::paste! {
      #[test]
      fn [<$name _layout>]() {
        $tester.assert_size($expect);
      }
    }
  };
}

#[cfg(test)]
mod tests {
  use veneer_core::{prelude::*, test_helper::*};

  widget_layout_test!(
    generates_a_suffixed_test,
    LayoutTester::new(Container::new(Size::new(10., 10.))),
    size == Size::new(10., 10.)
  );
}
