//! The view kernel of Veneer: a measure-only widget capability, a handful of
//! decorator widgets, and chainable modifier helpers to compose them without
//! imperative branching at call sites.
//!
//! A widget resolves its size under a [`BoxClamp`](prelude::BoxClamp) and can
//! be inspected by type through [`Query`](prelude::Query). Painting, state,
//! and event handling are deliberately absent; this crate only describes and
//! sizes view trees.

pub mod builtin_widgets;
mod color;
mod enum_widget;
mod layout;
mod modifiers;
mod query;
pub mod test_helper;
mod widget;

pub mod prelude {
  pub use veneer_geom::{Size, INFINITY_SIZE, ZERO_SIZE};

  pub use crate::builtin_widgets::*;
  pub use crate::color::Color;
  pub use crate::enum_widget::WidgetE2;
  pub use crate::layout::BoxClamp;
  pub use crate::modifiers::ModifierExt;
  pub use crate::query::Query;
  pub use crate::widget::{BoxWidget, Widget};
}
