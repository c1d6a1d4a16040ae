use std::any::{Any, TypeId};

/// Type-driven inspection of a widget tree.
///
/// Widgets report themselves and their descendants that match `type_id` to
/// `callback`, outside first. Returning `false` from the callback stops the
/// traversal.
pub trait Query {
  fn query_all(&self, type_id: TypeId, callback: &mut dyn FnMut(&dyn Any) -> bool);
}

/// Implements [`Query`] for a leaf widget that only reports itself.
#[macro_export]
macro_rules! impl_query_self_only {
  () => {
    fn query_all(
      &self, type_id: std::any::TypeId, callback: &mut dyn FnMut(&dyn std::any::Any) -> bool,
    ) {
      if type_id == std::any::TypeId::of::<Self>() {
        callback(self);
      }
    }
  };
}
