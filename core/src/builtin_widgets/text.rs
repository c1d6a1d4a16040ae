use crate::{impl_query_self_only, prelude::*};

/// A leaf widget carrying a single line of text.
///
/// Measurement uses fixed-advance metrics so layout stays deterministic; text
/// shaping is not this kernel's business.
pub struct Text {
  pub text: String,
}

const GLYPH_ADVANCE: f32 = 8.;
const LINE_HEIGHT: f32 = 16.;

impl Text {
  #[inline]
  pub fn new(text: impl Into<String>) -> Self { Self { text: text.into() } }
}

impl Widget for Text {
  fn measure(&self, clamp: BoxClamp) -> Size {
    let width = GLYPH_ADVANCE * self.text.chars().count() as f32;
    clamp.clamp(Size::new(width, LINE_HEIGHT))
  }
}

impl Query for Text {
  impl_query_self_only!();
}

#[cfg(test)]
mod tests {
  use veneer_dev_helper::*;

  use super::*;
  use crate::test_helper::*;

  widget_layout_test!(
    smoke,
    LayoutTester::new(Text::new("hello")),
    size == Size::new(40., 16.)
  );

  #[test]
  fn content_is_queryable() {
    let w = Text::new("42").box_it();
    assert_eq!(w.query_map(|t: &Text| t.text.clone()), Some("42".to_string()));
  }
}
