use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{info, warn};

use firework_core::AppConfig;
use firework_tui::{
    app::{split_screen, App},
    clock::{wait_for, FrameClock},
    event::{spawn_event_reader, AppEvent, EventHandler},
    widgets::{FireworkCanvasWidget, StatusBarWidget},
};

/// How often the input reader wakes up to notice shutdown
const INPUT_POLL_MS: u64 = 50;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Configuration errors surface before the terminal is touched
    let mut app = App::new(config.clone())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Firework"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let reader = spawn_event_reader(EventHandler::new(config.ui.trigger, INPUT_POLL_MS), tx);

    info!(fps = config.ui.fps, trigger = %config.ui.trigger, "firework started");
    let result = event_loop(&mut terminal, &mut app, &mut rx, config.ui.fps).await;

    // Stop the reader before handing the terminal back
    drop(rx);
    match reader.await {
        Ok(Err(e)) => warn!(error = %e, "input reader failed"),
        Err(e) => warn!(error = %e, "input reader panicked"),
        Ok(Ok(())) => {}
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(frames = app.frames, "firework stopped");
    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    fps: u32,
) -> Result<()> {
    let size = terminal.size()?;
    app.resize(Rect::new(0, 0, size.width, size.height));
    draw(terminal, app)?;

    let mut clock = FrameClock::new(fps);

    loop {
        if app.engine.take_frame_request() {
            clock.arm(Instant::now());
        }

        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break };
                app.handle_event(event);
                // Nothing else repaints while the animation is stopped
                if !app.engine.is_running() {
                    clock.disarm();
                    draw(terminal, app)?;
                }
            }
            _ = wait_for(clock.deadline()) => {
                clock.fire(Instant::now());
                app.tick();
                draw(terminal, app)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    terminal.draw(|frame| {
        let (canvas, status) = split_screen(frame.area());
        FireworkCanvasWidget::render(frame, canvas, app);
        StatusBarWidget::render(frame, status, app);
    })?;
    Ok(())
}
