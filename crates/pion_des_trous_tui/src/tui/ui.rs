//! Board and status rendering.

use super::app::{App, pointer_position};
use pion_des_trous::{Game, Location, Side};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Colours used to draw the board.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    board_fg: Color,
    board_bg: Color,
    hole: Color,
    hole_edge: Color,
    light_pawn: Color,
    dark_pawn: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            board_fg: Color::Rgb(0x8d, 0x6e, 0x63),
            board_bg: Color::Rgb(0x79, 0x55, 0x48),
            hole: Color::Rgb(0x3e, 0x27, 0x23),
            hole_edge: Color::Rgb(0x5d, 0x40, 0x37),
            light_pawn: Color::White,
            dark_pawn: Color::Rgb(0xd3, 0x2f, 0x2f),
        }
    }
}

impl Theme {
    fn pawn(&self, side: Side) -> Option<Color> {
        match side {
            Side::Light => Some(self.light_pawn),
            Side::Dark => Some(self.dark_pawn),
            Side::None => None,
        }
    }
}

/// Main draw function.
pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = Theme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(f.area());

    let title = Paragraph::new("Le pion des trous")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let size = u16::try_from(app.game().board_size()).unwrap_or(u16::MAX);
    let board_area = center_rect(
        chunks[1],
        size.saturating_mul(4).saturating_add(3),
        size.saturating_mul(2).saturating_add(2),
    );
    app.set_board_area(board_area);
    render_board(f, app, &theme);

    render_status(f, chunks[2], app, &theme);
}

fn render_board(f: &mut Frame, app: &App, theme: &Theme) {
    let area = app.board_area();
    let mapper = app.mapper();
    let game = app.game();
    let surface = Style::default().fg(theme.board_fg).bg(theme.board_bg);

    let lines: Vec<Line> = (area.y..area.bottom())
        .map(|row| {
            let spans: Vec<Span> = (area.x..area.right())
                .map(|column| {
                    let (x, y) = pointer_position(column, row);
                    match mapper.grid_location(x, y) {
                        Some(loc) if game.board().in_bounds(loc.col, loc.row) => {
                            // Two cells per hole, drawn as one centred block
                            let glyph = if (column - area.x) % 2 == 1 { "▐" } else { "▌" };
                            Span::styled(glyph, hole_style(game, app.hovered(), loc, theme))
                        }
                        _ => Span::styled(" ", surface),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn hole_style(game: &Game, hovered: Option<Location>, loc: Location, theme: &Theme) -> Style {
    let base = Style::default().bg(theme.board_bg);
    let occupant = game.opponent_at(loc.col, loc.row).unwrap_or(Side::None);
    if let Some(color) = theme.pawn(occupant) {
        return base.fg(color);
    }
    if hovered == Some(loc)
        && let Some(color) = theme.pawn(game.current_side())
    {
        return base.fg(color).add_modifier(Modifier::DIM);
    }
    base.fg(theme.hole).bg(theme.hole_edge)
}

fn render_status(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let game = app.game();
    let side = game.current_side();
    let side_style = theme
        .pawn(side)
        .map(|color| Style::default().fg(color).add_modifier(Modifier::BOLD))
        .unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::raw("To move: "),
            Span::styled(side.to_string(), side_style),
            Span::raw(format!(
                "   Light: {}   Dark: {}",
                game.pawns_remaining(Side::Light),
                game.pawns_remaining(Side::Dark)
            )),
        ]),
        Line::from(Span::styled(
            app.status_message().to_string(),
            Style::default().fg(Color::Yellow),
        )),
    ];

    let status = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Status (click a hole, 'r' restart, 'q' quit)"),
    );
    f.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
