pub mod app;
pub mod clock;
pub mod event;
pub mod input;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use clock::FrameClock;
pub use surface::CanvasSurface;
pub use theme::Theme;
