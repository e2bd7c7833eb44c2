use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(Paragraph::new(Self::line(app, area.width)), area);
    }

    fn line(app: &App, width: u16) -> Line<'static> {
        let theme = &app.theme;
        let bar = Style::default().fg(theme.bar_fg).bg(theme.bar_bg);

        // Idle without a pause means the surface has no room to draw on
        let (state, state_color) = if app.engine.is_running() {
            (" RUNNING ", theme.running)
        } else if app.paused {
            (" PAUSED ", theme.paused)
        } else {
            (" TOO SMALL ", theme.hint)
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {} ", msg),
            None => format!(
                " easing: {} | bursts: {} | trigger: {} ",
                app.easing_label(),
                app.engine.active_bursts(),
                app.config.ui.trigger
            ),
        };

        let help_hint = " q:quit space:burst e:easing c:clear p:pause ";
        let used = state.len() + status_text.len() + help_hint.len();
        let padding = (width as usize).saturating_sub(used);

        Line::from(vec![
            Span::styled(
                state,
                Style::default()
                    .fg(theme.bar_bg)
                    .bg(state_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, bar),
            Span::styled(" ".repeat(padding), bar),
            Span::styled(help_hint, Style::default().fg(theme.hint).bg(theme.bar_bg)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firework_core::AppConfig;
    use std::sync::Arc;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_line_shows_engine_state() {
        let mut app = App::new(Arc::new(AppConfig::default())).unwrap();
        let idle = text(&StatusBarWidget::line(&app, 120));
        assert!(idle.starts_with(" TOO SMALL "));
        assert!(idle.contains("easing: Quad | bursts: 0 | trigger: click"));
        assert_eq!(idle.len(), 120);

        app.resize(Rect::new(0, 0, 80, 25));
        app.set_status("cleared");
        let running = text(&StatusBarWidget::line(&app, 40));
        assert!(running.starts_with(" RUNNING  cleared "));
    }

    #[test]
    fn test_badge_tells_pause_from_small_terminal() {
        let mut app = App::new(Arc::new(AppConfig::default())).unwrap();

        app.resize(Rect::new(0, 0, 80, 1));
        assert!(text(&StatusBarWidget::line(&app, 80)).starts_with(" TOO SMALL "));

        app.resize(Rect::new(0, 0, 80, 25));
        app.toggle_pause();
        assert!(text(&StatusBarWidget::line(&app, 80)).starts_with(" PAUSED "));

        // a paused app stays paused when the terminal shrinks
        app.resize(Rect::new(0, 0, 80, 1));
        assert!(text(&StatusBarWidget::line(&app, 80)).starts_with(" PAUSED "));

        app.resize(Rect::new(0, 0, 80, 25));
        app.toggle_pause();
        assert!(text(&StatusBarWidget::line(&app, 80)).starts_with(" RUNNING "));
    }
}
