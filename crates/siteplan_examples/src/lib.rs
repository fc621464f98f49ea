#![forbid(unsafe_code)]

mod display;

pub use display::render_layout_ascii;
