use std::any::{Any, TypeId};

use crate::prelude::*;

/// The common behavior of widgets: resolve a size under the constraint its
/// parent passes down.
///
/// Implementors describe a piece of UI; composition happens by wrapping
/// widgets in decorator widgets, usually through the chainable methods of
/// [`ModifierExt`].
pub trait Widget: Query + 'static {
  /// Compute the size this widget occupies under `clamp`.
  ///
  /// Implementations are responsible for measuring their children and must
  /// return a size that respects the clamp.
  fn measure(&self, clamp: BoxClamp) -> Size;

  /// Erase the concrete widget type so widgets of different shapes can live
  /// in one tree.
  #[inline]
  fn box_it(self) -> BoxWidget
  where
    Self: Sized,
  {
    Box::new(self)
  }
}

/// A type-erased widget.
pub type BoxWidget = Box<dyn Widget>;

impl Widget for BoxWidget {
  #[inline]
  fn measure(&self, clamp: BoxClamp) -> Size { (**self).measure(clamp) }

  // Already erased, hand back the same box.
  #[inline]
  fn box_it(self) -> BoxWidget { self }
}

impl Query for BoxWidget {
  #[inline]
  fn query_all(&self, type_id: TypeId, callback: &mut dyn FnMut(&dyn Any) -> bool) {
    (**self).query_all(type_id, callback)
  }
}

impl dyn Widget {
  /// Map the outermost descendant of type `T` through `f`, if any.
  pub fn query_map<T: Any, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
    let mut f = Some(f);
    let mut result = None;
    self.query_all(TypeId::of::<T>(), &mut |any| {
      match (any.downcast_ref::<T>(), f.take()) {
        (Some(t), Some(f)) => {
          result = Some(f(t));
          false
        }
        _ => true,
      }
    });
    result
  }

  /// Whether the widget tree contains a `T`.
  #[inline]
  pub fn contains<T: Any>(&self) -> bool { self.query_map(|_: &T| ()).is_some() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn boxed_widget_measures_like_its_inner() {
    let clamp = BoxClamp::default();
    let size = Size::new(24., 24.);
    assert_eq!(Container::new(size).box_it().measure(clamp), Container::new(size).measure(clamp));
  }

  #[test]
  fn query_map_finds_the_outermost_match() {
    let w = Container::new(Size::new(10., 10.))
      .with_background(Color::BLUE)
      .with_background(Color::RED)
      .box_it();
    assert_eq!(w.query_map(|b: &Background| b.color), Some(Color::RED));
  }

  #[test]
  fn contains_reports_absence() {
    let w = Container::new(Size::new(10., 10.)).box_it();
    assert!(!w.contains::<Background>());
  }
}
