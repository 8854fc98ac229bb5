use crate::app::state::AppState;
use crate::arena::nav::NavigationState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(format!(" [{}] ", state.view().label()), Theme::status_view()));

    // Status text
    parts.push(Span::styled(format!(" {} ", state.status_line()), Theme::status_bar()));

    // Rope readout while on the arena
    if state.view() == NavigationState::Home && state.config.ui.show_rope_readout {
        let rope = state.arena.tracker.rope();
        let pos = state.arena.tracker.session().current_position;
        parts.push(Span::styled(
            format!(
                " | pipe ({:.0},{:.0}) rope {:.1} @ {:.1}° ",
                pos.x, pos.y, rope.length, rope.angle_degrees
            ),
            Theme::status_bar(),
        ));
    }

    let hint = match state.view() {
        NavigationState::Home => "q quit",
        _ => "Esc back | q quit",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint.width() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(format!(" {} ", hint), Theme::status_hint()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
