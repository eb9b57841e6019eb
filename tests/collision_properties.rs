//! Property tests for the swept collision engine and brick selection

use glam::Vec2;
use proptest::prelude::*;

use brick_sweep::sim::{
    Ball, BrickGrid, Edge, StaticRect, WallBounds, circle_intersects_rect, resolve_tick,
    swept_circle_vs_rect,
};

fn point() -> impl Strategy<Value = Vec2> {
    (-200.0f32..1000.0, -200.0f32..1000.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn displacement() -> impl Strategy<Value = Vec2> {
    (-40.0f32..40.0, -40.0f32..40.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn rect() -> impl Strategy<Value = StaticRect> {
    (point(), 1.0f32..200.0, 1.0f32..200.0)
        .prop_map(|(origin, w, h)| StaticRect::new(origin.x, origin.y, w, h))
}

proptest! {
    #[test]
    fn stationary_swept_matches_static(center in point(), radius in 1.0f32..30.0, rect in rect()) {
        let hit = swept_circle_vs_rect(center, center, radius, &rect);
        prop_assert_eq!(hit.collided, circle_intersects_rect(center, radius, &rect));
        if hit.collided {
            prop_assert_eq!(hit.time, 0.0);
            prop_assert_eq!(hit.edge, Edge::None);
        }
    }

    #[test]
    fn hit_time_and_point_lie_on_path(
        prev in point(),
        delta in displacement(),
        radius in 1.0f32..30.0,
        rect in rect(),
    ) {
        let curr = prev + delta;
        let hit = swept_circle_vs_rect(prev, curr, radius, &rect);
        if hit.collided {
            prop_assert!((0.0..=1.0).contains(&hit.time), "time = {}", hit.time);

            let eps = 1e-3;
            prop_assert!(hit.point.x >= prev.x.min(curr.x) - eps);
            prop_assert!(hit.point.x <= prev.x.max(curr.x) + eps);
            prop_assert!(hit.point.y >= prev.y.min(curr.y) - eps);
            prop_assert!(hit.point.y <= prev.y.max(curr.y) + eps);

            let offset = hit.point - prev;
            let cross = offset.x * delta.y - offset.y * delta.x;
            prop_assert!(cross.abs() <= 1e-2 * (1.0 + delta.length_squared()), "cross = {}", cross);
        } else {
            prop_assert_eq!(hit.time, 1.0);
            prop_assert_eq!(hit.edge, Edge::None);
        }
    }

    #[test]
    fn vertical_motion_never_hits_side_edges(
        prev in point(),
        dy in 0.5f32..40.0,
        up in any::<bool>(),
        radius in 1.0f32..30.0,
        rect in rect(),
    ) {
        let dy = if up { -dy } else { dy };
        let hit = swept_circle_vs_rect(prev, prev + Vec2::new(0.0, dy), radius, &rect);
        prop_assert!(hit.edge != Edge::Left && hit.edge != Edge::Right);
        if hit.collided {
            prop_assert_eq!(hit.edge, if up { Edge::Bottom } else { Edge::Top });
        }
    }

    #[test]
    fn larger_radius_never_turns_hit_into_miss(
        prev in point(),
        delta in displacement(),
        radius in 1.0f32..30.0,
        extra in 1.0f32..20.0,
        rect in rect(),
    ) {
        let curr = prev + delta;
        let small = swept_circle_vs_rect(prev, curr, radius, &rect);
        let large = swept_circle_vs_rect(prev, curr, radius + extra, &rect);
        if small.collided {
            prop_assert!(large.collided);
            prop_assert!(large.time <= small.time);
        }
    }

    #[test]
    fn resolve_picks_earliest_then_lowest_index(
        prev in point(),
        delta in displacement(),
        radius in 1.0f32..30.0,
        bricks in prop::collection::vec(rect(), 1..12),
    ) {
        let expected = bricks
            .iter()
            .enumerate()
            .map(|(i, b)| (i, swept_circle_vs_rect(prev, prev + delta, radius, b)))
            .filter(|(_, hit)| hit.collided)
            .min_by(|(ia, a), (ib, b)| a.time.total_cmp(&b.time).then(ia.cmp(ib)))
            .map(|(i, _)| i);

        let count = bricks.len();
        let mut grid = BrickGrid::from_bricks(1, count, bricks);
        let mut ball = Ball { prev, pos: prev + delta, vel: delta, radius };
        let paddle = StaticRect::new(10_000.0, 10_000.0, 10.0, 10.0);
        let bounds = WallBounds::new(800.0, 600.0);

        let outcome = resolve_tick(&mut ball, &paddle, bounds, &mut grid);

        prop_assert_eq!(outcome.destroyed_obstacle_index, expected);
        let destroyed = usize::from(expected.is_some());
        prop_assert_eq!(outcome.remaining_obstacles, count - destroyed);
        prop_assert_eq!(grid.active_count(), count - destroyed);
    }
}

#[test]
fn falling_onto_wide_rect_hits_top_halfway() {
    let rect = StaticRect::new(90.0, 115.0, 60.0, 12.0);
    let hit = swept_circle_vs_rect(Vec2::new(100.0, 100.0), Vec2::new(100.0, 110.0), 10.0, &rect);
    assert!(hit.collided);
    assert_eq!(hit.edge, Edge::Top);
    assert!((hit.time - 0.5).abs() < 1e-4);
    assert!(hit.point.distance(Vec2::new(100.0, 105.0)) < 1e-4);
}

#[test]
fn sliding_right_into_rect_hits_left_edge() {
    let rect = StaticRect::new(75.0, 40.0, 20.0, 20.0);
    let hit = swept_circle_vs_rect(Vec2::new(50.0, 50.0), Vec2::new(70.0, 50.0), 10.0, &rect);
    assert!(hit.collided);
    assert_eq!(hit.edge, Edge::Left);
    assert!((hit.point.x - 65.0).abs() < 1e-4);
}
