use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, AreaButton};
use crate::arena::drag::DropOutcome;
use crate::arena::geometry::Point;
use crate::arena::nav::{Area, NavigationState};
use crate::arena::target::{DockPhase, DockStage};
use crate::ui::layout::{self, ArenaViewport};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Dock {
            area,
            generation,
            stage,
        } => handle_dock_stage(state, area, generation, stage),
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.is_animating() {
        state.dirty = true;
    }
}

fn handle_dock_stage(state: &mut AppState, area: Area, generation: u64, stage: DockStage) -> Vec<Action> {
    if state.view() != NavigationState::Home {
        tracing::debug!(%area, ?stage, "dock stage arrived after the arena was left");
        return vec![];
    }
    let tick = state.tick_count;
    state.dirty = true;
    match state.arena.complete_stage(area, generation, stage, tick) {
        Some(area) => {
            let mut actions = vec![Action::DockComplete { area }];
            actions.extend(state.navigate_to(area));
            actions
        }
        None => {
            let departing = state
                .arena
                .target(area)
                .map(|t| t.phase() == DockPhase::Departing && t.generation() == generation)
                .unwrap_or(false);
            if stage == DockStage::Departing && departing {
                let label = state.target_label(area);
                state.set_status(format!("{} departing...", label));
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.screen = Some(Rect::new(0, 0, width, height));
            vec![]
        }
        CEvent::FocusLost => {
            state.arena.tracker.cancel();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.view() {
        NavigationState::Home => handle_home_key(state, key),
        NavigationState::Lunar if state.area_view.moon_viewer => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                state.return_home();
                vec![]
            }
            KeyCode::Char('q') => vec![Action::Quit],
            _ => vec![],
        },
        _ => handle_area_key(state, key),
    }
}

/// Keyboard dragging: Space picks up, arrows move, Space/Enter drops, Esc cancels.
fn handle_home_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let dragging = state.arena.tracker.is_active();
    let step = state.config.arena.keyboard_step;

    match key.code {
        KeyCode::Char('q') if !dragging => vec![Action::Quit],
        KeyCode::Char(' ') if !dragging => {
            if state.arena.pick_up() {
                state.status_message = None;
            }
            vec![]
        }
        KeyCode::Char(' ') | KeyCode::Enter if dragging => {
            let at = state.arena.tracker.position();
            release(state, at)
        }
        KeyCode::Esc if dragging => {
            state.arena.tracker.cancel();
            state.set_status("Drag cancelled");
            vec![]
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down if dragging => {
            let (dx, dy) = match key.code {
                KeyCode::Left => (-step, 0.0),
                KeyCode::Right => (step, 0.0),
                KeyCode::Up => (0.0, -step),
                _ => (0.0, step),
            };
            let to = state.arena.tracker.position().offset(dx, dy);
            state.arena.pointer_move(to);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_area_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            state.return_home();
            vec![]
        }
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Up | KeyCode::Left | KeyCode::BackTab => {
            state.select_prev_button();
            vec![]
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
            state.select_next_button();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            match state.area_buttons().get(state.area_view.selected).copied() {
                Some(button) => activate_button(state, button),
                None => vec![],
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            match state.area_buttons().get(index).copied() {
                Some(button) => {
                    state.area_view.selected = index;
                    activate_button(state, button)
                }
                None => vec![],
            }
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    // Nothing is laid out until the terminal size is known.
    let Some(screen) = state.screen else {
        return vec![];
    };

    match state.view() {
        NavigationState::Home => handle_arena_mouse(state, screen, mouse),
        NavigationState::Lunar if state.area_view.moon_viewer => {
            let content = layout::compute_layout(screen).content;
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && layout::contains(layout::back_link(content), mouse.column, mouse.row)
            {
                state.return_home();
            }
            vec![]
        }
        _ => {
            if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                return vec![];
            }
            let content = layout::compute_layout(screen).content;
            let buttons = state.area_buttons();
            let rects = layout::area_layout(content, buttons).buttons;
            let hit = rects
                .iter()
                .position(|r| layout::contains(*r, mouse.column, mouse.row));
            match hit {
                Some(index) => {
                    state.area_view.selected = index;
                    activate_button(state, buttons[index])
                }
                None => vec![],
            }
        }
    }
}

fn handle_arena_mouse(state: &mut AppState, screen: Rect, mouse: MouseEvent) -> Vec<Action> {
    let viewport = ArenaViewport::for_screen(screen, state.arena.tracker.bounds());
    let Some(point) = viewport.to_arena(mouse.column, mouse.row) else {
        return vec![];
    };

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if state.arena.pointer_down(point, viewport.cell_size()) {
                state.status_message = None;
            }
            vec![]
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            state.arena.pointer_move(point);
            vec![]
        }
        MouseEventKind::Up(MouseButton::Left) => release(state, point),
        _ => vec![],
    }
}

fn release(state: &mut AppState, at: Point) -> Vec<Action> {
    let tick = state.tick_count;
    match state.arena.pointer_up(at, tick) {
        Some(DropOutcome::Accepted(ticket)) => {
            let label = state.target_label(ticket.area);
            state.set_status(format!("Pipe connected to {}", label));
            vec![Action::ScheduleDock { ticket }]
        }
        Some(DropOutcome::Rejected) => {
            state.set_status("Missed! Drop the pipe onto a spaceship");
            vec![]
        }
        None => vec![],
    }
}

fn activate_button(state: &mut AppState, button: AreaButton) -> Vec<Action> {
    let Some(area) = state.view().area() else {
        return vec![];
    };
    match button {
        AreaButton::Explore => {
            let url = state.explore_url(area).to_string();
            state.set_status(format!("Opening {}", url));
            vec![Action::OpenLink { url }]
        }
        AreaButton::MoonViewer => {
            state.area_view.moon_viewer = true;
            state.status_message = None;
            state.dirty = true;
            vec![]
        }
        AreaButton::ReturnHome => {
            state.return_home();
            vec![]
        }
    }
}
