//! Stateless UI rendering for tic-tac-toe.
//!
//! Layout is computed by pure functions so that mouse hit-testing in the
//! event loop agrees exactly with what was drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tictactoe_engine::{GameStatus, Mark, Position, Square};

use crate::app::{Action, App};
use crate::presenter::{TITLE, restart_label, status_line};
use crate::theme::Palette;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

const RESTART_WIDTH: u16 = 22;
const THEME_WIDTH: u16 = 16;

/// Screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Title and status line.
    pub header: Rect,
    /// Region the grid is centred in.
    pub board: Rect,
    /// Restart and theme buttons.
    pub controls: Rect,
    /// Mark legend and cursor description.
    pub legend: Rect,
    /// Key help (zero height when hidden).
    pub help: Rect,
}

/// Splits the screen into its regions.
pub fn areas(screen: Rect, show_help: bool) -> Areas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(CELL_HEIGHT * 3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(u16::from(show_help)),
    ])
    .split(screen);

    Areas {
        header: chunks[0],
        board: chunks[1],
        controls: chunks[2],
        legend: chunks[3],
        help: chunks[4],
    }
}

/// Rectangles of the nine cells, indexed by board index.
pub fn board_cells(board: Rect) -> [Rect; 9] {
    let grid = center_rect(board, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    Position::ALL.map(|pos| {
        Rect::new(
            grid.x + pos.col() as u16 * CELL_WIDTH,
            grid.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid)
    })
}

/// Rectangles of the restart and theme buttons.
pub fn control_buttons(controls: Rect) -> (Rect, Rect) {
    let chunks = Layout::horizontal([
        Constraint::Length(RESTART_WIDTH),
        Constraint::Length(THEME_WIDTH),
    ])
    .flex(Flex::Center)
    .spacing(2u16)
    .split(controls);
    (chunks[0], chunks[1])
}

/// Maps a mouse click at (`column`, `row`) to the action of the control
/// under it.
pub fn hit_test(screen: Rect, show_help: bool, column: u16, row: u16) -> Option<Action> {
    let areas = areas(screen, show_help);
    let cells = board_cells(areas.board);
    if let Some(pos) = Position::ALL
        .into_iter()
        .find(|pos| contains(cells[pos.to_index()], column, row))
    {
        return Some(Action::Place(pos));
    }

    let (restart, theme) = control_buttons(areas.controls);
    if contains(restart, column, row) {
        Some(Action::Restart)
    } else if contains(theme, column, row) {
        Some(Action::ToggleTheme)
    } else {
        None
    }
}

/// Draws the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let palette = app.theme().palette();
    let screen = frame.area();
    frame.render_widget(Block::default().style(palette.base), screen);

    let areas = areas(screen, *app.show_help());
    render_header(app, frame, areas.header, &palette);
    render_board(app, frame, areas.board, &palette);
    render_controls(app, frame, areas.controls, &palette);
    render_legend(app, frame, areas.legend, &palette);
    if *app.show_help() {
        render_help(app, frame, areas.help, &palette);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let snapshot = app.snapshot();
    let status = match snapshot.status() {
        GameStatus::Won(winner) => Line::from(vec![
            Span::styled(winner.to_string(), mark_style(winner, palette)),
            Span::styled(" wins!", palette.status),
        ]),
        GameStatus::InProgress | GameStatus::Draw => {
            Line::styled(status_line(snapshot), palette.status)
        }
    };

    let block = Block::bordered()
        .title(Line::styled(format!(" {} ", TITLE), palette.title).centered())
        .border_style(palette.grid);
    let header = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(header, area);
}

fn render_board(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let snapshot = app.snapshot();
    let winning = snapshot.winning_line();
    let ended = snapshot.is_terminal();
    let cells = board_cells(area);

    for pos in Position::ALL {
        let square = snapshot.board().get(pos);
        let (text, text_style) = match square {
            Square::Empty if ended => (" ".to_string(), palette.empty),
            Square::Empty => ((pos.to_index() + 1).to_string(), palette.empty),
            Square::Occupied(mark) => (mark.to_string(), mark_style(mark, palette)),
        };

        let under_cursor = pos == *app.cursor();
        let cell_style = if winning.is_some_and(|line| line.contains(&pos)) {
            palette.winning
        } else if !square.is_empty() {
            if under_cursor {
                palette.blocked
            } else {
                palette.disabled
            }
        } else if under_cursor && app.is_playable(pos) {
            palette.cursor
        } else {
            Style::default()
        };
        let border_style = if ended { palette.ended } else { palette.grid };

        let cell = Paragraph::new(Line::styled(text, text_style))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .style(cell_style),
            );
        frame.render_widget(cell, cells[pos.to_index()]);
    }
}

fn render_controls(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let (restart, theme) = control_buttons(area);

    let label = restart_label(app.snapshot().status());
    let restart_button = Paragraph::new(Line::styled(format!("[r] {}", label), palette.control))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(palette.grid));
    frame.render_widget(restart_button, restart);

    let theme_button = Paragraph::new(Line::styled(
        format!("[t] {}", app.theme().label()),
        palette.control,
    ))
    .alignment(Alignment::Center)
    .block(Block::bordered().border_style(palette.grid));
    frame.render_widget(theme_button, theme);
}

fn render_legend(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let cursor = *app.cursor();
    let square = app.snapshot().board().get(cursor);
    let legend = Line::from(vec![
        Span::styled("X", palette.primary),
        Span::styled(" | ", palette.help),
        Span::styled("O", palette.accent),
        Span::styled(
            format!("   {}: {}", cursor.label(), square.label()),
            palette.help,
        ),
    ]);
    frame.render_widget(Paragraph::new(legend).alignment(Alignment::Center), area);
}

fn render_help(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let help = format!(
        "Arrows/hjkl: Move | Enter/Space: Place | 1-9: Cell | r: Restart | t: {} | ?: Help | q: Quit",
        app.theme().toggle_hint()
    );
    let paragraph = Paragraph::new(help)
        .style(palette.help)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_style(mark: Mark, palette: &Palette) -> Style {
    match mark {
        Mark::X => palette.primary,
        Mark::O => palette.accent,
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 24,
    };

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
        terminal
            .draw(|frame| render(app, frame))
            .expect("render should not panic");
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..SCREEN.height {
            for x in 0..SCREEN.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn fresh_game_shows_turn_and_restart() {
        let screen = draw(&app());
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Turn: X"));
        assert!(screen.contains("[r] Restart"));
        assert!(screen.contains("Dark"));
        assert!(screen.contains("Center: Empty square"));
    }

    #[test]
    fn finished_game_offers_new_game() {
        let mut app = app();
        for index in [0, 4, 1, 5, 2] {
            app.update(Action::Place(Position::from_index(index).unwrap()));
        }
        let screen = draw(&app);
        assert!(screen.contains("X wins!"));
        assert!(screen.contains("Start New Game"));
    }

    #[test]
    fn dark_theme_offers_light() {
        let mut app = app();
        app.update(Action::ToggleTheme);
        assert_eq!(app.theme(), &Theme::Dark);
        let screen = draw(&app);
        assert!(screen.contains("Light"));
        assert!(screen.contains("Switch to light mode"));
    }

    fn render_buffer(app: &App) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn corner(buffer: &ratatui::buffer::Buffer, pos: Position) -> ratatui::buffer::Cell {
        let rect = board_cells(areas(SCREEN, true).board)[pos.to_index()];
        buffer[(rect.x, rect.y)].clone()
    }

    #[test]
    fn occupied_cells_are_drawn_disabled() {
        let mut app = app();
        app.update(Action::Place(Position::TopLeft));
        let palette = app.theme().palette();
        let buffer = render_buffer(&app);

        let occupied = corner(&buffer, Position::TopLeft);
        let empty = corner(&buffer, Position::TopRight);
        assert_ne!(occupied.style(), empty.style());
        assert_eq!(Some(occupied.bg), palette.disabled.bg);
        assert_eq!(Some(empty.bg), palette.base.bg);

        let blocked = corner(&buffer, Position::Center);
        assert_eq!(Some(blocked.bg), palette.cursor.bg);
        app.update(Action::PlaceAtCursor);
        let buffer = render_buffer(&app);
        assert_eq!(
            Some(corner(&buffer, Position::Center).bg),
            palette.blocked.bg
        );
    }

    #[test]
    fn grid_is_dimmed_once_game_ends() {
        let mut app = app();
        let palette = app.theme().palette();
        let before = corner(&render_buffer(&app), Position::BottomRight);
        assert_eq!(Some(before.fg), palette.grid.fg);

        for index in [0, 4, 1, 5, 2] {
            app.update(Action::Place(Position::from_index(index).unwrap()));
        }
        let after = corner(&render_buffer(&app), Position::BottomRight);
        assert_eq!(Some(after.fg), palette.ended.fg);
        assert!(after.modifier.contains(ratatui::style::Modifier::DIM));
        assert_ne!(before.style(), after.style());
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let app = app();
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    #[test]
    fn cells_tile_the_grid() {
        let cells = board_cells(areas(SCREEN, true).board);
        for pos in Position::ALL {
            let rect = cells[pos.to_index()];
            assert_eq!(rect.width, CELL_WIDTH);
            assert_eq!(rect.height, CELL_HEIGHT);
        }
        assert_eq!(
            cells[Position::TopCenter.to_index()].x,
            cells[Position::TopLeft.to_index()].x + CELL_WIDTH
        );
        assert_eq!(
            cells[Position::MiddleLeft.to_index()].y,
            cells[Position::TopLeft.to_index()].y + CELL_HEIGHT
        );
    }

    #[test]
    fn clicks_map_to_cells() {
        let cells = board_cells(areas(SCREEN, true).board);
        for pos in Position::ALL {
            let rect = cells[pos.to_index()];
            assert_eq!(
                hit_test(SCREEN, true, rect.x + 1, rect.y + 1),
                Some(Action::Place(pos))
            );
        }
    }

    #[test]
    fn clicks_map_to_buttons() {
        let (restart, theme) = control_buttons(areas(SCREEN, false).controls);
        assert_eq!(
            hit_test(SCREEN, false, restart.x, restart.y),
            Some(Action::Restart)
        );
        assert_eq!(
            hit_test(SCREEN, false, theme.x + 1, theme.y + 1),
            Some(Action::ToggleTheme)
        );
        assert_eq!(hit_test(SCREEN, false, 0, 0), None);
    }
}
