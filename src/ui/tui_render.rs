use crate::constants::BOT_NAME;
use crate::ui::tui_state::{Speaker, UiState, top_row};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the chat window given the current state, clamping scrollback.
pub fn render(
    frame: &mut Frame,
    state: &mut UiState,
) {
    // Layout: transcript, input box (3 lines), then help bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let area = chunks[0];
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = area.height.saturating_sub(2) as usize;
    let total = state.wrapped_height(inner_width);
    let top = top_row(total, visible, &mut state.scroll_back);

    let lines: Vec<Line> = state
        .transcript
        .iter()
        .map(|l| {
            let color = match l.speaker {
                Speaker::User => Color::Cyan,
                Speaker::Bot => Color::Green,
            };
            Line::from(vec![
                Span::styled(
                    l.label(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(l.text.clone()),
            ])
        })
        .collect();
    let title = if state.status.is_empty() {
        format!("Chat with {BOT_NAME}")
    } else {
        format!("Chat with {BOT_NAME} ({})", state.status)
    };
    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((top.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(transcript, area);

    let (input_title, input_style) = if state.closed {
        ("Session closed", Style::default().fg(Color::DarkGray))
    } else {
        ("Type your message...", Style::default())
    };
    let input = Paragraph::new(state.input.as_str())
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title(input_title));
    frame.render_widget(input, chunks[1]);
    if !state.closed {
        let x = chunks[1].x + 1 + state.input.chars().count().min(u16::MAX as usize) as u16;
        frame.set_cursor_position((x.min(chunks[1].right().saturating_sub(2)), chunks[1].y + 1));
    }

    let help_text = vec![
        Span::styled("Enter: Send  ", Style::default().fg(Color::Yellow)),
        Span::styled("/load <file>: Load Corpus  ", Style::default().fg(Color::Yellow)),
        Span::styled("PgUp/PgDn: Scroll  ", Style::default().fg(Color::Yellow)),
        Span::styled("Esc: Quit", Style::default().fg(Color::Yellow)),
    ];
    frame.render_widget(Paragraph::new(Line::from(help_text)), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_transcript_and_help() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = UiState::new(&["Corpus loaded successfully!".to_string()]);
        state.push_user("hello".into());
        terminal.draw(|f| render(f, &mut state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("BOT: Corpus loaded successfully!"));
        assert!(text.contains("You: hello"));
        assert!(text.contains("Esc: Quit"));
    }
}
