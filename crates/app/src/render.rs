//! Immediate-mode drawing of one session frame.

use app::app_loop::{AppMode, AppState};
use app::session::{Contact, Session};
use app::{mode_code, status_line};
use chase_core::{Ghost, GhostKind, MazeGraph, Mode};
use glam::Vec2;
use macroquad::prelude::{
    BLACK, BLUE, Color, DARKGRAY, GRAY, LIGHTGRAY, ORANGE, PINK, RED, SKYBLUE, WHITE, YELLOW,
    clear_background, draw_circle, draw_circle_lines, draw_line, draw_text, screen_height,
    screen_width,
};

const MARGIN: f32 = 32.0;
const STATUS_HEIGHT: f32 = 64.0;

/// Maps maze pixels onto the window, preserving aspect ratio.
struct View {
    origin: Vec2,
    scale: f32,
}

impl View {
    fn fit(maze: &MazeGraph) -> Self {
        let extent = maze.nodes().fold(Vec2::ONE, |acc, node| acc.max(node.position));
        let available = Vec2::new(
            screen_width() - 2.0 * MARGIN,
            screen_height() - 2.0 * MARGIN - STATUS_HEIGHT,
        );
        let scale = (available / extent).min_element().max(0.1);
        Self { origin: Vec2::splat(MARGIN), scale }
    }

    fn project(&self, point: Vec2) -> Vec2 {
        self.origin + point * self.scale
    }
}

fn ghost_color(ghost: &Ghost) -> Color {
    match ghost.mode() {
        Mode::Freight => BLUE,
        Mode::Spawn => LIGHTGRAY,
        Mode::Scatter | Mode::Chase => match ghost.kind() {
            GhostKind::Leader => RED,
            GhostKind::Ambusher => PINK,
            GhostKind::Flanker => SKYBLUE,
            GhostKind::Whimsical => ORANGE,
        },
    }
}

pub fn draw_frame(session: &Session, app: &AppState) {
    clear_background(BLACK);
    let maze = session.maze();
    let view = View::fit(maze);
    let tile = session.config().metrics.tile_width * view.scale;

    for node in maze.nodes() {
        let from = view.project(node.position);
        for dir in node.open_directions() {
            if let Some(to) = maze.neighbor(node.id, dir).and_then(|id| maze.position(id)) {
                let to = view.project(to);
                draw_line(from.x, from.y, to.x, to.y, 2.0, DARKGRAY);
            }
        }
        draw_circle(from.x, from.y, 3.0, GRAY);
    }

    let group = session.group();
    for line in group.debug_overlay() {
        let (from, to) = (view.project(line.from), view.project(line.to));
        let color = ghost_color(group.ghost(line.ghost));
        draw_line(from.x, from.y, to.x, to.y, 1.0, color);
        draw_circle_lines(to.x, to.y, 4.0, 1.0, color);
    }

    for ghost in group.ghosts().iter().filter(|ghost| ghost.is_visible()) {
        let at = view.project(ghost.position());
        draw_circle(at.x, at.y, tile * 0.4, ghost_color(ghost));
        if ghost.forced_chase() {
            draw_circle_lines(at.x, at.y, tile * 0.55, 2.0, WHITE);
        }
    }

    let player = view.project(session.player().position);
    draw_circle(player.x, player.y, tile * 0.4, YELLOW);

    let status_y = screen_height() - STATUS_HEIGHT + 8.0;
    let status = status_line(
        group.tick(),
        group.difficulty(),
        group.group_alerted(),
        group.snapshot_hash(),
    );
    let paused = if app.mode == AppMode::Paused { "PAUSED  " } else { "" };
    draw_text(&format!("{paused}{status}"), MARGIN, status_y, 22.0, WHITE);

    let modes: Vec<String> = group
        .ghosts()
        .iter()
        .map(|ghost| format!("{:?}:{}:{}", ghost.kind(), mode_code(ghost.mode()), ghost.points()))
        .collect();
    let contact = match app.last_contact {
        Some(Contact::GhostEaten(kind)) => format!("  ate {kind:?}"),
        Some(Contact::PlayerCaught(kind)) => format!("  caught by {kind:?}"),
        None => String::new(),
    };
    draw_text(&format!("{}{contact}", modes.join("  ")), MARGIN, status_y + 24.0, 18.0, LIGHTGRAY);
}
