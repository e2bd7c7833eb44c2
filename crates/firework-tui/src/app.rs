use std::sync::Arc;

use anyhow::Result;
use firework_core::{AnimationEngine, AppConfig, EasingLibrary, EasingSpec, Surface, TickReport};
use ratatui::layout::{Constraint, Layout, Rect};
use tracing::{debug, info};

use crate::event::AppEvent;
use crate::input::{handle_key_event, Action};
use crate::surface::{cell_to_surface, CanvasSurface};
use crate::theme::Theme;

/// Split the terminal into the canvas and the one-line status bar below it
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let [canvas, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (canvas, status)
}

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub engine: AnimationEngine,
    pub surface: CanvasSurface,
    pub theme: Theme,
    /// Terminal cells covered by the surface
    pub canvas_area: Rect,
    pub should_quit: bool,
    /// Set by the user; keeps resizes from restarting the engine
    pub paused: bool,
    pub status_message: Option<String>,
    /// Frames rendered since start
    pub frames: u64,
}

impl App {
    /// Build the engine from `config.firework`; invalid settings fail here
    pub fn new(config: Arc<AppConfig>) -> Result<Self> {
        let engine = AnimationEngine::new(config.firework.clone())?;
        let surface = if config.ui.full_screen {
            CanvasSurface::full_screen()
        } else {
            CanvasSurface::fixed(config.ui.width, config.ui.height)
        };
        let theme = Theme::from_config(&config.ui);

        Ok(Self {
            config,
            engine,
            surface,
            theme,
            canvas_area: Rect::default(),
            should_quit: false,
            paused: false,
            status_message: None,
            frames: 0,
        })
    }

    /// Fit the surface to a terminal of `area` and (re)start the animation
    pub fn resize(&mut self, area: Rect) {
        let (canvas, _) = split_screen(area);
        self.canvas_area = self.surface.layout(canvas);
        self.surface.resize(self.canvas_area);
        debug!(
            columns = self.canvas_area.width,
            rows = self.canvas_area.height,
            "surface resized"
        );

        if self.surface.size().is_empty() {
            self.engine.stop();
        } else if !self.paused {
            self.engine.start(&self.surface);
        }
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: AppEvent) {
        let action = match event {
            AppEvent::Key(key) => handle_key_event(key),
            AppEvent::Trigger { column, row } => cell_to_surface(column, row, self.canvas_area)
                .map(Action::Spawn)
                .unwrap_or(Action::None),
            AppEvent::Resize(width, height) => {
                self.resize(Rect::new(0, 0, width, height));
                Action::None
            }
        };
        self.handle_action(action);
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Spawn(position) => self.engine.spawn(position),
            Action::SpawnCentre => {
                let centre = self.surface.size().center();
                self.engine.spawn(centre);
            }
            Action::Clear => {
                self.engine.clear();
                self.set_status("cleared");
            }
            Action::CycleEasing => self.cycle_easing(),
            Action::TogglePause => self.toggle_pause(),
            Action::None => {}
        }
    }

    /// Run one animation frame
    pub fn tick(&mut self) -> Option<TickReport> {
        let report = self.engine.tick(&mut self.surface)?;
        self.frames += 1;
        Some(report)
    }

    /// Rebuild the engine with the next named curve
    pub fn cycle_easing(&mut self) {
        let current = self.engine.settings().easing.to_string();
        let next = EasingLibrary::global().next_name(&current);

        let mut settings = self.engine.settings().clone();
        settings.easing = EasingSpec::Named(next.to_string());
        match AnimationEngine::new(settings) {
            Ok(mut engine) => {
                if self.engine.is_running() {
                    engine.start(&self.surface);
                }
                self.engine = engine;
                info!(easing = next, "easing changed");
                self.set_status(format!("easing: {}", next));
            }
            Err(e) => self.set_status(format!("easing {} unavailable: {}", next, e)),
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.engine.is_running() {
            self.paused = true;
            self.engine.stop();
            self.set_status("paused");
        } else {
            self.paused = false;
            if self.engine.start(&self.surface) {
                self.clear_status();
            } else {
                self.set_status("terminal too small to animate");
            }
        }
    }

    /// Name of the active curve for display
    pub fn easing_label(&self) -> String {
        self.engine.settings().easing.to_string()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
