use chase_core::maze::DEFAULT_LAYOUT;
use chase_core::{
    ChaseConfig, Difficulty, GhostEvent, GhostGroup, GhostKind, MazeGraph, Mode, NodeId,
    PlayerView,
};
use glam::Vec2;

const TILE: f32 = 16.0;

fn node(maze: &MazeGraph, col: f32, row: f32) -> NodeId {
    maze.node_at(Vec2::new(col * TILE, row * TILE)).expect("node in layout")
}

fn player_on(maze: &MazeGraph, at: NodeId) -> PlayerView {
    PlayerView { position: maze.position(at).unwrap_or_default(), node: Some(at), facing: None }
}

/// Leader shares a row with the player; nobody else is aligned with them.
fn scattered(difficulty: Difficulty) -> (MazeGraph, GhostGroup) {
    let maze = MazeGraph::from_layout(DEFAULT_LAYOUT, TILE, TILE).expect("default layout");
    let config = ChaseConfig::with_difficulty(difficulty);
    let mut group = GhostGroup::new(&maze, node(&maze, 0.0, 0.0), &config).expect("group");
    group.set_start_node(GhostKind::Ambusher, &maze, node(&maze, 13.0, 9.0));
    group.set_start_node(GhostKind::Flanker, &maze, node(&maze, 8.0, 7.0));
    group.set_start_node(GhostKind::Whimsical, &maze, node(&maze, 13.0, 5.0));
    group.set_player(Some(player_on(&maze, node(&maze, 5.0, 0.0))));
    (maze, group)
}

#[test]
fn hard_single_sighting_alerts_the_whole_group() {
    let (maze, mut group) = scattered(Difficulty::Hard);
    let player = group.player().copied().expect("player");
    let seers: Vec<GhostKind> = group
        .ghosts()
        .iter()
        .filter(|ghost| ghost.can_perceive_player(&maze, Some(&player)))
        .map(|ghost| ghost.kind())
        .collect();
    assert_eq!(seers, vec![GhostKind::Leader]);

    group.update(&maze, 0.001);

    assert!(group.group_alerted());
    assert!(group.ghosts().iter().all(|ghost| ghost.forced_chase()));
    let ambusher = group.ghost(GhostKind::Ambusher);
    assert_eq!(ambusher.target(), player.position);
    assert_eq!(group.log().first(), Some(&GhostEvent::GroupAlerted { tick: 0 }));
}

#[test]
fn alert_clears_once_nobody_sees_the_player() {
    let (maze, mut group) = scattered(Difficulty::Hard);
    group.update(&maze, 0.001);
    assert!(group.group_alerted());

    group.set_player(Some(player_on(&maze, node(&maze, 0.0, 9.0))));
    group.update(&maze, 0.001);
    assert!(!group.group_alerted());
    assert!(group.ghosts().iter().all(|ghost| !ghost.forced_chase()));
}

#[test]
fn returning_ghost_is_never_forced() {
    let (maze, mut group) = scattered(Difficulty::Hard);
    group.set_spawn_node(&maze, node(&maze, 8.0, 5.0));
    assert!(group.ghost_mut(GhostKind::Flanker).start_freight());
    assert!(group.start_spawn(GhostKind::Flanker));

    group.update(&maze, 0.001);

    assert_eq!(group.ghost(GhostKind::Flanker).mode(), Mode::Spawn);
    assert!(!group.ghost(GhostKind::Flanker).forced_chase());
    assert!(group.ghost(GhostKind::Whimsical).forced_chase());
}

#[test]
fn medium_sighting_stays_individual() {
    let (maze, mut group) = scattered(Difficulty::Medium);
    group.update(&maze, 0.001);
    assert!(!group.group_alerted());
    assert!(group.ghosts().iter().all(|ghost| !ghost.forced_chase()));
    assert!(!group.log().iter().any(|event| matches!(event, GhostEvent::GroupAlerted { .. })));
}
