use chase_core::maze::DEFAULT_LAYOUT;
use chase_core::{
    ChaseConfig, Difficulty, Direction, Ghost, GhostGroup, GhostKind, MazeGraph, NodeId, PlayerView,
    has_line_of_sight,
};
use glam::Vec2;
use proptest::prelude::*;
use proptest::test_runner::TestRunner;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![Just(Difficulty::Easy), Just(Difficulty::Medium), Just(Difficulty::Hard)]
}

fn config(difficulty: Difficulty, tile_width: f32) -> ChaseConfig {
    let mut config = ChaseConfig::with_difficulty(difficulty);
    config.metrics.tile_width = tile_width;
    config.metrics.tile_height = tile_width;
    config
}

fn player_on(maze: &MazeGraph, at: NodeId) -> PlayerView {
    PlayerView { position: maze.position(at).unwrap_or_default(), node: Some(at), facing: None }
}

#[test]
fn unaligned_nodes_are_never_perceived() {
    let maze = MazeGraph::from_layout(DEFAULT_LAYOUT, 16.0, 16.0).expect("default layout");
    let nodes: Vec<NodeId> = maze.nodes().map(|node| node.id).collect();
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let inputs = (0..nodes.len(), 0..nodes.len(), difficulty());

    runner
        .run(&inputs, |(from, to, difficulty)| {
            let (a, b) = (nodes[from], nodes[to]);
            let pa = maze.position(a).unwrap_or_default();
            let pb = maze.position(b).unwrap_or_default();
            prop_assume!(pa.x != pb.x && pa.y != pb.y);

            prop_assert!(!has_line_of_sight(&maze, a, b));
            let ghost = Ghost::new(GhostKind::Leader, &maze, a, &config(difficulty, 1000.0));
            prop_assert!(!ghost.can_perceive_player(&maze, Some(&player_on(&maze, b))));
            Ok(())
        })
        .expect("unaligned pairs must not see each other");
}

#[test]
fn clear_corridor_is_seen_exactly_within_the_radius() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let inputs = (2usize..24, 1u32..40, 1u32..32, difficulty());

    runner
        .run(&inputs, |(len, spacing, tile_width, difficulty)| {
            let spacing = spacing as f32;
            let mut maze = MazeGraph::new();
            let nodes: Vec<NodeId> =
                (0..len).map(|i| maze.add_node(Vec2::new(i as f32 * spacing, 0.0))).collect();
            for pair in nodes.windows(2) {
                maze.connect(pair[0], Direction::Right, pair[1]);
            }

            let cfg = config(difficulty, tile_width as f32);
            let ghost = Ghost::new(GhostKind::Ambusher, &maze, nodes[0], &cfg);
            for (index, &node) in nodes.iter().enumerate() {
                let distance = index as f32 * spacing;
                let expected = distance <= ghost.vision_radius_px();
                let seen = ghost.can_perceive_player(&maze, Some(&player_on(&maze, node)));
                if seen != expected {
                    return Err(TestCaseError::fail(format!(
                        "node {index} at {distance}px: seen={seen}, radius={}",
                        ghost.vision_radius_px()
                    )));
                }
            }
            Ok(())
        })
        .expect("corridor visibility should follow the vision radius");
}

#[test]
fn reset_twice_matches_reset_once() {
    let maze = MazeGraph::from_layout(DEFAULT_LAYOUT, 16.0, 16.0).expect("default layout");
    let start = maze.node_at(Vec2::ZERO).expect("corner node");
    let mut runner = TestRunner::new(ProptestConfig::with_cases(24));
    let inputs = (any::<u64>(), 0u32..400, any::<bool>(), difficulty());

    runner
        .run(&inputs, |(seed, ticks, freight, difficulty)| {
            let config = ChaseConfig { seed, ..ChaseConfig::with_difficulty(difficulty) };
            let mut group = GhostGroup::new(&maze, start, &config)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;
            if freight {
                group.start_freight();
            }
            group.update_points();
            for _ in 0..ticks {
                group.update(&maze, 1.0 / 60.0);
            }

            group.reset(&maze);
            let once = group.snapshot_hash();
            let ghosts_once = format!("{:?}", group.ghosts());
            group.reset(&maze);
            prop_assert_eq!(once, group.snapshot_hash());
            prop_assert_eq!(ghosts_once, format!("{:?}", group.ghosts()));
            Ok(())
        })
        .expect("reset should be idempotent");
}
