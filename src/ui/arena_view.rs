use crate::app::state::AppState;
use crate::arena::geometry::{Point, Region};
use crate::arena::target::{DockPhase, DropTarget};
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points, Rectangle};
use ratatui::widgets::Paragraph;

const TITLE: &str = "CtrlESC's Arena";
const SUBTITLE: &str = "Connect the pipe to explore the universe";
const INSTRUCTIONS: &str =
    "Drag the pipe from the astronaut to a spaceship to begin your journey (Space: keyboard drag, q: quit)";

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState) {
    render_title(frame, layout.title, state);
    render_arena(frame, layout.arena, state);
    frame.render_widget(
        Paragraph::new(Span::styled(INSTRUCTIONS, Theme::instructions())).alignment(Alignment::Center),
        layout.instructions,
    );
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    // Underline grows in over the first couple of seconds.
    let full = SUBTITLE.len();
    let grown = ((state.tick_count as usize) * full / 40).min(full);
    let lines = vec![
        Line::from(Span::styled(TITLE, Theme::title())),
        Line::from(Span::styled(SUBTITLE, Theme::subtitle())),
        Line::from(Span::styled("━".repeat(grown), Theme::underline())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_arena(frame: &mut Frame, area: Rect, state: &AppState) {
    let bounds = state.arena.tracker.bounds();
    let (w, h) = (bounds.width, bounds.height);
    let tick = state.tick_count;
    let (bright, dim) = state.starfield.points_at(tick, w, h);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, w])
        .y_bounds([0.0, h])
        .paint(|ctx| {
            // Canvas y grows upward, arena y grows downward.
            let dim: Vec<(f64, f64)> = dim.iter().map(|&(x, y)| (x, h - y)).collect();
            let bright: Vec<(f64, f64)> = bright.iter().map(|&(x, y)| (x, h - y)).collect();
            ctx.draw(&Points { coords: &dim, color: Theme::STAR_DIM });
            ctx.draw(&Points { coords: &bright, color: Theme::STAR_BRIGHT });
            ctx.layer();

            for target in &state.arena.targets {
                draw_ship(ctx, target, state, h);
            }
            draw_astronaut(ctx, state, h);
            draw_rope_and_pipe(ctx, state, h);
        });

    frame.render_widget(canvas, area);
}

fn flip(p: Point, h: f64) -> (f64, f64) {
    (p.x, h - p.y)
}

/// How far a departing ship has risen, in arena units.
fn departure_lift(target: &DropTarget, state: &AppState) -> f64 {
    if target.phase() != DockPhase::Departing {
        return 0.0;
    }
    let timing = &state.config.timing;
    let total_ticks = (timing.depart_delay_ms / timing.tick_ms.max(1)).max(1);
    let elapsed = state.tick_count.saturating_sub(target.phase_started_tick());
    let progress = (elapsed as f64 / total_ticks as f64).min(1.0);
    // Ease in: slow start, fast exit.
    progress * progress * state.arena.tracker.bounds().height * 1.2
}

fn draw_ship(ctx: &mut Context, target: &DropTarget, state: &AppState, h: f64) {
    let region = target.region;
    let lift = departure_lift(target, state);
    let hovered = state.arena.tracker.is_active() && target.contains(state.arena.tracker.position());
    let color = match target.phase() {
        DockPhase::Connected | DockPhase::Departing => Theme::SHIP_DOCKED,
        DockPhase::Idle if hovered => Theme::SHIP_HOVER,
        DockPhase::Idle => Theme::SHIP,
    };

    // Hull occupies the middle of the drop region, nose up.
    let hull = Region::new(
        region.x + region.width * 0.35,
        region.y + region.height * 0.25 - lift,
        region.width * 0.3,
        region.height * 0.55,
    );
    let (hx, hy) = flip(Point::new(hull.x, hull.y + hull.height), h);
    ctx.draw(&Rectangle { x: hx, y: hy, width: hull.width, height: hull.height, color });

    let nose = Point::new(hull.center().x, hull.y);
    let (nx, ny) = flip(nose, h);
    ctx.draw(&CanvasLine::new(hx, hy + hull.height, nx, ny + hull.height * 0.35, color));
    ctx.draw(&CanvasLine::new(hx + hull.width, hy + hull.height, nx, ny + hull.height * 0.35, color));
    ctx.draw(&Circle { x: nx, y: hy + hull.height * 0.6, radius: hull.width * 0.2, color });

    if target.phase() == DockPhase::Departing {
        let (tx, ty) = flip(Point::new(hull.center().x, hull.y + hull.height + 8.0), h);
        ctx.draw(&CanvasLine::new(tx, ty, tx, ty - 10.0, Theme::THRUSTER));
    }

    if hovered {
        ctx.draw(&Rectangle {
            x: region.x,
            y: h - region.y - region.height,
            width: region.width,
            height: region.height,
            color: Theme::SHIP_HOVER,
        });
    }

    if target.phase() != DockPhase::Departing {
        let label = if target.phase() == DockPhase::Connected {
            format!("{} [docked]", target.label)
        } else {
            target.label.clone()
        };
        let (lx, ly) = flip(Point::new(region.x + region.width * 0.1, region.y + region.height), h);
        ctx.print(lx, ly, Span::styled(label, Theme::label()));
    }
}

fn draw_astronaut(ctx: &mut Context, state: &AppState, h: f64) {
    let c = state.arena.tracker.connection();
    // Gentle float.
    let bob = ((state.tick_count as f64) / 20.0).sin() * 3.0;
    let helmet = Point::new(c.x, c.y - 34.0 + bob);
    let (hx, hy) = flip(helmet, h);
    ctx.draw(&Circle { x: hx, y: hy, radius: 16.0, color: Theme::HELMET });

    let (bx, by) = flip(Point::new(c.x - 12.0, c.y + 24.0 + bob), h);
    ctx.draw(&Rectangle { x: bx, y: by, width: 24.0, height: 22.0, color: Theme::ASTRONAUT });
    let (lx, ly) = flip(Point::new(c.x - 8.0, c.y + 24.0 + bob), h);
    ctx.draw(&CanvasLine::new(lx, ly, lx - 4.0, ly - 20.0, Theme::ASTRONAUT));
    ctx.draw(&CanvasLine::new(lx + 16.0, ly, lx + 20.0, ly - 20.0, Theme::ASTRONAUT));

    let (cx, cy) = flip(c, h);
    ctx.draw(&Circle { x: cx, y: cy, radius: 3.0, color: Theme::CONNECTOR });
}

fn draw_rope_and_pipe(ctx: &mut Context, state: &AppState, h: f64) {
    let tracker = &state.arena.tracker;
    let anchor = tracker.connection();
    let end = tracker.rope().end_from(anchor);
    let rope_color = if tracker.is_active() {
        Theme::ROPE_TAUT
    } else {
        Theme::ROPE_IDLE
    };
    let (ax, ay) = flip(anchor, h);
    let (ex, ey) = flip(end, h);
    ctx.draw(&CanvasLine::new(ax, ay, ex, ey, rope_color));

    let radius = if tracker.is_active() { 9.0 } else { 7.0 };
    ctx.draw(&Circle { x: ex, y: ey, radius, color: Theme::PIPE });
}
