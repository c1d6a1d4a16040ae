//! An enum to store either of two widgets and forward the common traits to
//! whichever variant is live. Branching combinators return it so both arms
//! can produce different concrete widget types without boxing.

use std::any::{Any, TypeId};

use crate::prelude::*;

pub enum WidgetE2<A, B> {
  A(A),
  B(B),
}

impl<A: Query, B: Query> Query for WidgetE2<A, B> {
  fn query_all(&self, type_id: TypeId, callback: &mut dyn FnMut(&dyn Any) -> bool) {
    match self {
      WidgetE2::A(w) => w.query_all(type_id, callback),
      WidgetE2::B(w) => w.query_all(type_id, callback),
    }
  }
}

impl<A: Widget, B: Widget> Widget for WidgetE2<A, B> {
  fn measure(&self, clamp: BoxClamp) -> Size {
    match self {
      WidgetE2::A(w) => w.measure(clamp),
      WidgetE2::B(w) => w.measure(clamp),
    }
  }
}
