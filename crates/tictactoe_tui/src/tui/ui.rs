//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tictactoe::{Mark, Position, StatusKind, winning_line};

use super::app::App;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

/// Renders the whole screen and returns where each cell was drawn.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Turn banner
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let game = app.game();
    let banner_style = if game.is_over() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let banner = Paragraph::new(game.turn_banner())
        .style(banner_style)
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[1]);

    let areas = cell_areas(chunks[2]);
    let line = winning_line(game.board());
    for pos in Position::ALL {
        let highlighted = line.is_some_and(|l| l.contains(&pos));
        draw_cell(frame, areas[pos.to_index()], app, pos, highlighted);
    }

    let status_color = match game.status_kind() {
        StatusKind::Next => Color::Yellow,
        StatusKind::Win => Color::Green,
        StatusKind::Draw => Color::Magenta,
    };
    let status = Paragraph::new(game.status_line())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, center_rect(chunks[3], 30, 3));

    if let Some(notice) = app.notice() {
        let notice = Paragraph::new(notice)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(notice, chunks[4]);
    }

    let help = Paragraph::new("arrows/hjkl move · enter/1-9/click play · r new game · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);

    areas
}

/// Splits the board region into 9 cells, centred, row-major.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, col) in cols.iter().enumerate() {
            cells[r * 3 + c] = *col;
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, highlighted: bool) {
    let game = app.game();
    let enabled = game.cell_enabled(pos);

    let (symbol, mut style) = match game.cell(pos).mark() {
        Some(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None if app.show_hints() && enabled => (
            pos.number().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        None => (" ".to_string(), Style::default()),
    };

    if highlighted {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let mut border = Style::default().fg(Color::DarkGray);
    if !enabled {
        border = border.add_modifier(Modifier::DIM);
    }
    let border_type = if pos == app.cursor() {
        border = Style::default().fg(Color::Yellow);
        BorderType::Thick
    } else {
        BorderType::Plain
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border),
        );

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render_buffer(app: &App) -> (Buffer, [Rect; 9]) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("terminal");
        let mut areas = [Rect::default(); 9];
        terminal
            .draw(|frame| areas = draw(frame, app))
            .expect("draw");
        (terminal.backend().buffer().clone(), areas)
    }

    fn render(app: &App) -> (String, [Rect; 9]) {
        let (buffer, areas) = render_buffer(app);
        let text = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, areas)
    }

    /// Buffer cell holding the mark of a board cell (centre of the inner row).
    fn mark_cell(area: Rect) -> (u16, u16) {
        (area.x + CELL_WIDTH / 2, area.y + 1)
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn test_cell_areas_are_disjoint_grid() {
        let cells = cell_areas(Rect::new(0, 0, 40, 20));
        assert_eq!(cells[0].width, CELL_WIDTH);
        assert_eq!(cells[1].x, cells[0].x + CELL_WIDTH);
        assert_eq!(cells[3].y, cells[0].y + CELL_HEIGHT);
        assert_eq!(cells[8].x + cells[8].width, cells[0].x + BOARD_WIDTH);
    }

    #[test]
    fn test_renders_initial_status() {
        let app = App::new(true);
        let (text, areas) = render(&app);
        assert!(text.contains("Tic Tac Toe"));
        assert!(text.contains("Player Turn: X"));
        assert!(text.contains("Next: X"));
        assert!(areas.iter().all(|a| a.width == CELL_WIDTH));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(true);
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, c);
        }
        let (text, _) = render(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Game Over"));
    }

    #[test]
    fn test_renders_draw() {
        let mut app = App::new(false);
        for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
            press(&mut app, c);
        }
        let (text, _) = render(&app);
        assert!(text.contains("It's a draw!"));
    }

    #[test]
    fn test_winning_line_highlighted_and_cells_dimmed() {
        let mut app = App::new(true);
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, c);
        }
        let (buffer, areas) = render_buffer(&app);

        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            let cell = &buffer[mark_cell(areas[pos.to_index()])];
            assert_eq!(cell.symbol(), "X");
            assert_eq!(cell.bg, Color::Green, "{} not highlighted", pos);
        }

        let o_cell = &buffer[mark_cell(areas[Position::MiddleLeft.to_index()])];
        assert_eq!(o_cell.symbol(), "O");
        assert_ne!(o_cell.bg, Color::Green);

        // Empty cell after the win: disabled, so no hint and a dimmed border.
        let empty = areas[Position::BottomRight.to_index()];
        assert_eq!(buffer[mark_cell(empty)].symbol(), " ");
        assert!(buffer[(empty.x, empty.y)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_enabled_cells_not_dimmed() {
        let app = App::new(true);
        let (buffer, areas) = render_buffer(&app);

        let corner = areas[Position::TopLeft.to_index()];
        assert_eq!(buffer[mark_cell(corner)].symbol(), "1");
        assert!(!buffer[(corner.x, corner.y)].modifier.contains(Modifier::DIM));
    }
}
