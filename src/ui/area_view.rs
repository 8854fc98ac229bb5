use crate::app::state::{AppState, AreaButton};
use crate::arena::nav::Area;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

fn title(area: Area) -> &'static str {
    match area {
        Area::Lunar => "Welcome to the Lunar Area",
        Area::Mars => "Welcome to Mars Area",
    }
}

fn greeting(area: Area) -> &'static str {
    match area {
        Area::Lunar => {
            "You've successfully connected to the lunar exploration zone. Prepare for moon adventures!"
        }
        Area::Mars => {
            "You've successfully connected to the Martian exploration zone. Ready to explore the Red Planet!"
        }
    }
}

pub fn render(frame: &mut Frame, content: Rect, state: &AppState, area: Area) {
    render_backdrop(frame, content, state, area);

    let buttons = AreaButton::for_area(area);
    let l = layout::area_layout(content, buttons);

    frame.render_widget(
        Paragraph::new(Span::styled(title(area), Theme::area_title(area))).alignment(Alignment::Center),
        l.title,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(greeting(area), Theme::area_text(area)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        l.text,
    );

    for (i, (button, rect)) in buttons.iter().zip(l.buttons.iter()).enumerate() {
        let selected = i == state.area_view.selected;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::button_border(selected));
        frame.render_widget(
            Paragraph::new(Span::styled(button.label(), Theme::button(selected)))
                .alignment(Alignment::Center)
                .block(block),
            *rect,
        );
    }
}

/// Stars in the sky, and a ground line across the lower third.
fn render_backdrop(frame: &mut Frame, content: Rect, state: &AppState, area: Area) {
    let (bright, dim) = state.starfield.points_at(state.tick_count, 1.0, 0.7);
    let ground = match area {
        Area::Lunar => Theme::CRATER,
        Area::Mars => Color::Red,
    };
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .paint(|ctx| {
            let sky: Vec<(f64, f64)> = bright
                .iter()
                .chain(dim.iter())
                .map(|&(x, y)| (x, 1.0 - y))
                .collect();
            ctx.draw(&Points { coords: &sky, color: Theme::STAR_DIM });
            let horizon: Vec<(f64, f64)> = (0..200).map(|i| (i as f64 / 200.0, 0.2)).collect();
            ctx.draw(&Points { coords: &horizon, color: ground });
        });
    frame.render_widget(canvas, content);
}
