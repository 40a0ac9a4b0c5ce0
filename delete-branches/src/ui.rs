use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

const HELP_LINE: &str =
    "up/down or j/k: move  space: toggle  a: toggle all  enter: confirm  q: cancel";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.size();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)].as_ref())
        .split(size);

    let mut state = ListState::default();
    if !app.is_empty() {
        state.select(Some(app.cursor()));
    }

    let list_items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|choice| {
            let marker = if choice.selected { "[x]" } else { "[ ]" };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(choice.label.as_str(), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(Span::styled(
                    app.title(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, vertical[0], &mut state);

    let status_line = format!("{} / {} selected", app.selected_count(), app.total_count());
    let status_block = Paragraph::new(vec![Line::from(HELP_LINE), Line::from(status_line)])
        .block(Block::default().title("Status").borders(Borders::ALL));

    frame.render_widget(status_block, vertical[1]);
}
