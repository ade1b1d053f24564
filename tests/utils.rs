#[path = "utils/color.rs"]
mod color;
#[path = "utils/text.rs"]
mod text;
