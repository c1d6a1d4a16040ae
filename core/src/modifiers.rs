use crate::prelude::*;

/// Chainable modifier methods available on every [`Widget`].
///
/// The `with_*` family wraps the receiver in one decorator each. The
/// `modifier_if*` family picks one of several transforms at call time, so
/// callers don't spell out the branching (and the type juggling it implies)
/// themselves:
///
/// ```rust
/// use veneer_core::prelude::*;
///
/// let emphasized = true;
/// let card = Container::new(Size::new(120., 40.))
///   .modifier_if(emphasized, |w| w.with_background(Color::RED));
/// assert!(card.box_it().contains::<Background>());
/// ```
pub trait ModifierExt: Widget + Sized {
  /// Insets the widget by the given padding.
  #[inline]
  fn with_padding(self, padding: EdgeInsets) -> Padding { Padding::new(padding, self) }

  /// Creates empty space around the widget.
  #[inline]
  fn with_margin(self, margin: EdgeInsets) -> Margin { Margin::new(margin, self) }

  /// Puts a background color behind the widget.
  #[inline]
  fn with_background(self, color: Color) -> Background { Background::new(color, self) }

  /// Constrains the widget to a fixed `width` and `height`.
  #[inline]
  fn with_fixed_size(self, width: f32, height: f32) -> FixedSize {
    FixedSize { width: width.into(), height: height.into(), child: self.box_it() }
  }

  /// Constrains the widget to a fixed `width`, leaving the height free.
  #[inline]
  fn with_fixed_width(self, width: f32) -> FixedSize {
    FixedSize { width: width.into(), height: Dimension::Auto, child: self.box_it() }
  }

  /// Constrains the widget to a fixed `height`, leaving the width free.
  #[inline]
  fn with_fixed_height(self, height: f32) -> FixedSize {
    FixedSize { width: Dimension::Auto, height: height.into(), child: self.box_it() }
  }

  /// Applies `then` to the widget when `condition` holds, otherwise hands the
  /// widget back untouched.
  ///
  /// The transform runs at most once, and only on the true branch. Whatever
  /// it panics with propagates to the caller.
  fn modifier_if<T, F>(self, condition: bool, then: F) -> WidgetE2<T, Self>
  where
    T: Widget,
    F: FnOnce(Self) -> T,
  {
    if condition { WidgetE2::A(then(self)) } else { WidgetE2::B(self) }
  }

  /// Applies `then` to the widget when `condition` holds, `otherwise` when it
  /// doesn't. Exactly one of the two transforms runs.
  fn modifier_if_else<T, F, TF, FF>(
    self, condition: bool, then: TF, otherwise: FF,
  ) -> WidgetE2<T, F>
  where
    T: Widget,
    F: Widget,
    TF: FnOnce(Self) -> T,
    FF: FnOnce(Self) -> F,
  {
    if condition { WidgetE2::A(then(self)) } else { WidgetE2::B(otherwise(self)) }
  }

  /// Applies `then` to the widget and the value inside `value`, if there is
  /// one; otherwise hands the widget back untouched.
  ///
  /// The transform owns the unwrapped value, destructured in the same match
  /// that decides the branch.
  fn modifier_if_let<V, T, F>(self, value: Option<V>, then: F) -> WidgetE2<T, Self>
  where
    T: Widget,
    F: FnOnce(Self, V) -> T,
  {
    match value {
      Some(v) => WidgetE2::A(then(self, v)),
      None => WidgetE2::B(self),
    }
  }

  /// Constrains the widget to `size`, shorthand for
  /// [`with_fixed_size`](ModifierExt::with_fixed_size) on the size's two
  /// components.
  #[inline]
  fn frame(self, size: Size) -> FixedSize { self.with_fixed_size(size.width, size.height) }
}

impl<W: Widget> ModifierExt for W {}
