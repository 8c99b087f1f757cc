//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_engine::{Cell, GameStatus, GameView, Mark, Position};

use super::app::App;
use crate::Config;

const HELP: &str = "arrows/1-9 move  enter select  [ ] history  home/end  n new  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, config: &Config) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(28)])
        .split(chunks[1]);

    draw_board(frame, body[0], &view, app.cursor(), config);
    draw_history(frame, body[1], &view);
    draw_status(frame, chunks[2], &view, app.message());

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, config: &Config) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let highlight = if *config.highlight_winning_line() {
        *view.winning_line()
    } else {
        None
    };

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);

        for (column, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(position) = Position::from_row_column(row, column) {
                let in_line = highlight.is_some_and(|line| line.contains(&position));
                draw_cell(frame, cell_area, view, position, cursor, in_line, config);
            }
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }

    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    position: Position,
    cursor: Position,
    in_winning_line: bool,
    config: &Config,
) {
    let (symbol, base_style) = match view.board().cell(position) {
        Cell::Empty if *config.show_cell_numbers() => (
            (position.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Marked(mark) => (mark.to_string(), mark_style(mark)),
    };

    let style = if position == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if in_winning_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_history(frame: &mut Frame, area: Rect, view: &GameView) {
    let items: Vec<ListItem> = view
        .steps()
        .iter()
        .map(|step| {
            let style = if *step.is_current() {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(step.label().clone(), style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView, message: Option<&str>) {
    let color = match view.status() {
        GameStatus::InProgress(_) => Color::Yellow,
        GameStatus::Won(_) => Color::Green,
        GameStatus::Drawn => Color::Magenta,
    };
    let text = match message {
        Some(message) => format!("{}  ({message})", view.status()),
        None => view.status().to_string(),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal
            .draw(|frame| draw(frame, app, &Config::default()))
            .expect("draw succeeds");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_history() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);

        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #1"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);

        assert!(screen.contains("Winner: X"));
    }

    #[test]
    fn test_renders_rejection_message() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);

        assert!(screen.contains("Center is already occupied"));
    }
}
