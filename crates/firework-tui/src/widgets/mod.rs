mod canvas;
mod status_bar;

pub use canvas::FireworkCanvasWidget;
pub use status_bar::StatusBarWidget;
