//! Veneer puts a thin layer of modifier sugar over a measure-only declarative
//! view kernel: decorate widgets through builder chains, branch on runtime
//! conditions without imperative `if`s at the call site, and constrain sizes
//! from a single `Size` value.
//!
//! ```rust
//! use veneer::prelude::*;
//!
//! let badge: Option<u32> = Some(3);
//! let card = Container::new(Size::new(120., 40.))
//!   .modifier_if(badge.is_some(), |w| w.with_background(Color::RED))
//!   .modifier_if_let(badge, |w, n| {
//!     Stack::new().with_child(w).with_child(Text::new(n.to_string()))
//!   })
//!   .frame(Size::new(200., 64.));
//!
//! assert_eq!(card.measure(BoxClamp::default()), Size::new(200., 64.));
//! ```

pub use veneer_core as core;

pub mod prelude {
  pub use veneer_core::prelude::*;
}
