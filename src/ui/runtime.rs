use crate::board::Board;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::input::is_quit_key;
use crate::ui::layout::{body_rect, hit_test};
use crate::ui::listener::StatusListener;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::io;

/// Runs the board in the terminal until the user quits.
///
/// Events are read and handled one at a time on this thread, so focus and
/// the drag session never see concurrent updates.
pub fn run(board: Board, config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(board, config, StatusListener::default());
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match event::read()? {
            Event::Key(key) if is_quit_key(key) => app.request_quit(),
            Event::Key(key) => {
                app.on_key(key);
            }
            Event::Mouse(mouse) => {
                let area = terminal.size()?;
                let body = body_rect(Rect::new(0, 0, area.width, area.height));
                on_mouse(&mut app, body, mouse);
            }
            _ => {}
        }
    }

    app.unmount();
    drop(guard);
    Ok(())
}

fn on_mouse(app: &mut App<StatusListener>, body: Rect, mouse: MouseEvent) {
    let hit = hit_test(body, app.board(), mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_pointer_down(hit),
        MouseEventKind::Drag(MouseButton::Left) => app.on_pointer_drag(),
        MouseEventKind::Up(MouseButton::Left) => app.on_pointer_up(hit),
        _ => {}
    }
}
