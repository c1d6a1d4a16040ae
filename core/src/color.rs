/// A color in the sRGB space, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
  pub red: u8,
  pub green: u8,
  pub blue: u8,
  pub alpha: u8,
}

impl Color {
  pub const BLACK: Color = Self::from_rgb(0, 0, 0);
  pub const BLUE: Color = Self::from_rgb(0, 0, 255);
  pub const GREEN: Color = Self::from_rgb(0, 128, 0);
  pub const RED: Color = Self::from_rgb(255, 0, 0);
  pub const TRANSPARENT: Color = Self::new(0, 0, 0, 0);
  pub const WHITE: Color = Self::from_rgb(255, 255, 255);

  #[inline]
  pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
    Self { red, green, blue, alpha }
  }

  #[inline]
  pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
    Self::new(red, green, blue, u8::MAX)
  }
}
