use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block,
    },
    Frame,
};

use firework_core::SurfaceSize;

use crate::app::App;
use crate::surface::{disc_points, DOTS_PER_COLUMN, DOTS_PER_ROW};
use crate::theme::to_color;

/// Paints the circles recorded on the surface during the last tick
pub struct FireworkCanvasWidget;

impl FireworkCanvasWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let background = app.theme.background;
        frame.render_widget(Block::default().style(Style::default().bg(background)), area);

        let region = app.canvas_area.intersection(area);
        if region.is_empty() {
            return;
        }

        let width = region.width as f64 * DOTS_PER_COLUMN;
        let height = region.height as f64 * DOTS_PER_ROW;
        let circles = app.surface.circles();
        let bounds = SurfaceSize::new(width, height);

        let canvas = Canvas::default()
            .background_color(background)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                for circle in circles {
                    // Canvas y grows upwards, surface y grows downwards
                    let disc = disc_points(circle.center, circle.radius, bounds);
                    let coords: Vec<(f64, f64)> = disc
                        .into_iter()
                        .map(|(x, y)| (x, height - y))
                        .collect();
                    ctx.draw(&Points {
                        coords: &coords,
                        color: to_color(circle.color),
                    });
                }
            });
        frame.render_widget(canvas, region);
    }
}
