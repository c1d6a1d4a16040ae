//! Geometry aliases shared across the workspace, tagged with a logic unit so
//! values from other unit systems can't be mixed in by accident.

/// The tag for the logic unit system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicUnit;

pub type Point<T = f32> = euclid::Point2D<T, LogicUnit>;
pub type Rect<T = f32> = euclid::Rect<T, LogicUnit>;
pub type Size<T = f32> = euclid::Size2D<T, LogicUnit>;
pub type Vector<T = f32> = euclid::Vector2D<T, LogicUnit>;

pub const INFINITY_SIZE: Size = Size::new(f32::INFINITY, f32::INFINITY);
pub const ZERO_SIZE: Size = Size::new(0., 0.);

pub use euclid::num::Zero;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn size_clamp_is_componentwise() {
    let size = Size::new(150., 20.);
    let clamped = size.clamp(Size::new(0., 50.), Size::new(100., 100.));
    assert_eq!(clamped, Size::new(100., 50.));
  }

  #[test]
  fn infinity_size_is_identity_upper_bound() {
    let size = Size::new(42., 7.);
    assert_eq!(size.clamp(ZERO_SIZE, INFINITY_SIZE), size);
  }
}
