use crate::arena::nav::Area;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const STAR_BRIGHT: Color = Color::White;
    pub const STAR_DIM: Color = Color::DarkGray;
    pub const ROPE_IDLE: Color = Color::Gray;
    pub const ROPE_TAUT: Color = Color::Yellow;
    pub const PIPE: Color = Color::Yellow;
    pub const ASTRONAUT: Color = Color::White;
    pub const HELMET: Color = Color::LightBlue;
    pub const CONNECTOR: Color = Color::LightGreen;
    pub const SHIP: Color = Color::Gray;
    pub const SHIP_HOVER: Color = Color::Yellow;
    pub const SHIP_DOCKED: Color = Color::LightGreen;
    pub const THRUSTER: Color = Color::LightRed;
    pub const MOON: Color = Color::Gray;
    pub const CRATER: Color = Color::DarkGray;

    pub fn title() -> Style {
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Color::LightBlue)
    }

    pub fn underline() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn instructions() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::DIM)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::White).bg(Color::Black)
    }

    pub fn area_title(area: Area) -> Style {
        let color = match area {
            Area::Lunar => Color::LightBlue,
            Area::Mars => Color::LightRed,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn area_text(area: Area) -> Style {
        match area {
            Area::Lunar => Style::default().fg(Color::Gray),
            Area::Mars => Style::default().fg(Color::LightYellow),
        }
    }

    pub fn button(selected: bool) -> Style {
        if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn button_border(selected: bool) -> Style {
        if selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn back_link() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_view() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
