//! The decorator and leaf widgets the kernel ships with. Each module holds
//! one widget; the chainable constructors live in
//! [`ModifierExt`](crate::prelude::ModifierExt).

mod background;
pub use background::*;
mod container;
pub use container::*;
mod fixed_size;
pub use fixed_size::*;
mod margin;
pub use margin::*;
mod padding;
pub use padding::*;
mod stack;
pub use stack::*;
mod text;
pub use text::*;
mod void;
pub use void::*;
