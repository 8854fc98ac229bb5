use crate::app::state::AreaButton;
use crate::arena::geometry::{Bounds, Point};
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub struct AppLayout {
    /// Everything above the status bar.
    pub content: Rect,
    pub title: Rect,
    pub arena: Rect,
    pub instructions: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Home view: title | arena | instructions
    let home_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title, subtitle, underline
            Constraint::Min(3),    // Arena
            Constraint::Length(1), // Instructions
        ])
        .split(content);

    AppLayout {
        content,
        title: home_chunks[0],
        arena: home_chunks[1],
        instructions: home_chunks[2],
        status_bar,
    }
}

/// Maps terminal cells onto arena units for one arena rectangle.
#[derive(Debug, Clone, Copy)]
pub struct ArenaViewport {
    pub area: Rect,
    pub bounds: Bounds,
}

impl ArenaViewport {
    pub fn new(area: Rect, bounds: Bounds) -> Self {
        Self { area, bounds }
    }

    /// Viewport of the home arena for a terminal of size `screen`.
    pub fn for_screen(screen: Rect, bounds: Bounds) -> Self {
        Self::new(compute_layout(screen).arena, bounds)
    }

    pub fn is_mounted(&self) -> bool {
        self.area.width > 0 && self.area.height > 0
    }

    /// Arena units covered by one cell.
    pub fn cell_size(&self) -> (f64, f64) {
        (
            self.bounds.width / f64::from(self.area.width.max(1)),
            self.bounds.height / f64::from(self.area.height.max(1)),
        )
    }

    /// Center of the cell at (`col`, `row`) in arena units. Cells outside the
    /// viewport map outside the bounds.
    pub fn to_arena(&self, col: u16, row: u16) -> Option<Point> {
        if !self.is_mounted() {
            return None;
        }
        let (cw, ch) = self.cell_size();
        let x = (f64::from(col) - f64::from(self.area.x) + 0.5) * cw;
        let y = (f64::from(row) - f64::from(self.area.y) + 0.5) * ch;
        Some(Point::new(x, y))
    }

    /// Cell containing an in-bounds arena point.
    pub fn to_cell(&self, p: Point) -> (u16, u16) {
        let (cw, ch) = self.cell_size();
        let col = (p.x / cw).floor().clamp(0.0, f64::from(self.area.width.saturating_sub(1)));
        let row = (p.y / ch).floor().clamp(0.0, f64::from(self.area.height.saturating_sub(1)));
        (self.area.x + col as u16, self.area.y + row as u16)
    }
}

pub struct AreaLayout {
    pub title: Rect,
    pub text: Rect,
    pub buttons: Vec<Rect>,
}

const BUTTON_HEIGHT: u16 = 3;

/// Centered column of title, greeting and buttons for an area view.
pub fn area_layout(content: Rect, buttons: &[AreaButton]) -> AreaLayout {
    let mut constraints = vec![
        Constraint::Length(1), // Title
        Constraint::Length(1), // Spacer
        Constraint::Length(2), // Greeting
        Constraint::Length(1), // Spacer
    ];
    constraints.extend(buttons.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));

    let rows = Layout::vertical(constraints).flex(Flex::Center).split(content);

    let button_width = buttons
        .iter()
        .map(|b| b.label().width() as u16 + 6)
        .max()
        .unwrap_or(0)
        .min(content.width);

    let buttons = rows
        .iter()
        .skip(4)
        .map(|row| {
            let x = row.x + row.width.saturating_sub(button_width) / 2;
            Rect::new(x, row.y, button_width, row.height)
        })
        .collect();

    AreaLayout {
        title: rows[0],
        text: rows[2],
        buttons,
    }
}

/// Clickable "← Back" link of the moon viewer.
pub fn back_link(content: Rect) -> Rect {
    Rect::new(content.x + 2, content.y + 1, 8.min(content.width), 1.min(content.height))
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_screen() {
        let l = compute_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(l.status_bar, Rect::new(0, 39, 100, 1));
        assert_eq!(l.title.height, 3);
        assert_eq!(l.instructions.height, 1);
        assert_eq!(l.arena.y, 3);
        assert_eq!(l.arena.height, 35);
    }

    #[test]
    fn test_viewport_mapping() {
        let vp = ArenaViewport::new(Rect::new(0, 3, 100, 30), Bounds::default());
        assert_eq!(vp.cell_size(), (4.0, 10.0));
        assert_eq!(vp.to_arena(0, 3), Some(Point::new(2.0, 5.0)));
        assert_eq!(vp.to_arena(99, 32), Some(Point::new(398.0, 295.0)));
        // Above the arena maps to negative y.
        assert!(vp.to_arena(10, 0).unwrap().y < 0.0);
        assert_eq!(vp.to_cell(Point::new(96.0, 48.0)), (24, 7));
    }

    #[test]
    fn test_cell_roundtrip_lands_in_same_cell() {
        let vp = ArenaViewport::new(Rect::new(0, 3, 80, 20), Bounds::default());
        let p = vp.to_arena(37, 11).unwrap();
        assert_eq!(vp.to_cell(p), (37, 11));
    }

    #[test]
    fn test_unmounted_viewport() {
        let vp = ArenaViewport::new(Rect::new(0, 0, 0, 0), Bounds::default());
        assert!(!vp.is_mounted());
        assert_eq!(vp.to_arena(1, 1), None);
    }

    #[test]
    fn test_area_buttons_are_centered_and_stacked() {
        let content = Rect::new(0, 0, 80, 30);
        let l = area_layout(content, AreaButton::for_area(crate::arena::nav::Area::Lunar));
        assert_eq!(l.buttons.len(), 3);
        let w = "Interact with 3D Moon".len() as u16 + 6;
        for (i, b) in l.buttons.iter().enumerate() {
            assert_eq!(b.width, w);
            assert_eq!(b.x, (80 - w) / 2);
            if i > 0 {
                assert_eq!(b.y, l.buttons[i - 1].y + BUTTON_HEIGHT);
            }
        }
        assert!(l.title.y < l.text.y && l.text.y < l.buttons[0].y);
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(5, 5, 3, 2);
        assert!(contains(r, 5, 5));
        assert!(contains(r, 7, 6));
        assert!(!contains(r, 8, 6));
        assert!(!contains(r, 6, 7));
    }
}
