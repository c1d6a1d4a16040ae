use crate::{impl_query_self_only, prelude::*};

/// A placeholder widget that holds a spot in the tree and takes the least
/// space its parent allows.
pub struct Void;

impl Widget for Void {
  #[inline]
  fn measure(&self, clamp: BoxClamp) -> Size { clamp.clamp(ZERO_SIZE) }
}

impl Query for Void {
  impl_query_self_only!();
}
