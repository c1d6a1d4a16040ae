//! A small tour of the conditional modifier helpers. Run with
//! `RUST_LOG=info cargo run --example gallery`.

use veneer::prelude::*;

fn main() {
  env_logger::init();

  let highlighted = true;
  let badge: Option<u32> = Some(42);

  let card = Container::new(Size::new(120., 40.))
    .modifier_if(highlighted, |w| w.with_background(Color::RED))
    .modifier_if_let(badge, |w, n| {
      Stack::new().with_child(w).with_child(Text::new(n.to_string()))
    })
    .with_padding(EdgeInsets::all(8.))
    .frame(Size::new(200., 64.));

  let resolved = card.measure(BoxClamp::default());
  log::info!("card resolved to {resolved:?}");

  let boxed = card.box_it();
  println!("resolved size: {}x{}", resolved.width, resolved.height);
  println!("has background: {}", boxed.contains::<Background>());
  println!("badge label: {:?}", boxed.query_map(|t: &Text| t.text.clone()));
}
