//! Property tests for the simulation, mesh and camera pipeline

use glam::{DVec2, DVec3};
use proptest::prelude::*;

use nagumo_tube::camera::OrbitCamera;
use nagumo_tube::consts::*;
use nagumo_tube::renderer::{build_cone, build_cylinder, build_tube};
use nagumo_tube::sim::{Parameters, SimState, TrajectoryBuffer, step};
use nagumo_tube::{Session, Settings};

fn in_range_parameters() -> impl Strategy<Value = Parameters> {
    (EPSILON_RANGE, A_RANGE, CURRENT_RANGE).prop_map(|(epsilon, a, current)| Parameters {
        epsilon,
        a,
        current,
        ..Default::default()
    })
}

fn point() -> impl Strategy<Value = DVec3> {
    (-10.0..10.0f64, -10.0..10.0f64, -10.0..10.0f64).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

#[derive(Debug, Clone)]
enum BufferOp {
    Append,
    Trim(usize),
    Clear,
}

fn buffer_op() -> impl Strategy<Value = BufferOp> {
    prop_oneof![
        6 => Just(BufferOp::Append),
        3 => (1usize..6).prop_map(BufferOp::Trim),
        1 => Just(BufferOp::Clear),
    ]
}

#[derive(Debug, Clone)]
enum CameraOp {
    Drag(f64, f64),
    Wheel(f64),
}

fn camera_op() -> impl Strategy<Value = CameraOp> {
    prop_oneof![
        (-1e6..1e6f64, -1e6..1e6f64).prop_map(|(dx, dy)| CameraOp::Drag(dx, dy)),
        (-500.0..500.0f64).prop_map(CameraOp::Wheel),
    ]
}

proptest! {
    #[test]
    fn step_is_deterministic(
        params in in_range_parameters(),
        v in -2.5..2.5f64,
        w in -1.5..2.5f64,
        steps in 1usize..200,
    ) {
        let start = SimState { v, w, t: 0.0 };
        let (mut a, mut b) = (start, start);
        for _ in 0..steps {
            a = step(a, &params);
            b = step(b, &params);
        }
        prop_assert_eq!(a, b);
        prop_assert!(a.v.is_finite() && a.w.is_finite());
    }

    #[test]
    fn trajectory_never_exceeds_capacity_after_trim(
        capacity in 1usize..50,
        ops in prop::collection::vec(buffer_op(), 0..300),
    ) {
        let mut buffer = TrajectoryBuffer::new(capacity);
        let mut n = 0.0;
        for op in ops {
            match op {
                BufferOp::Append => {
                    buffer.append(DVec3::splat(n));
                    n += 1.0;
                }
                BufferOp::Trim(batch) => {
                    buffer.trim_if_overflow(batch);
                    prop_assert!(buffer.len() <= capacity);
                }
                BufferOp::Clear => buffer.clear(),
            }
        }
        buffer.trim_if_overflow(1);
        prop_assert!(buffer.len() <= capacity);
        // Order is preserved through evictions
        let points = buffer.points();
        prop_assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn tube_counts_match_distinct_points(
        points in prop::collection::vec(point(), 0..40),
        segments in 1u32..16,
        radius in 0.001..1.0f64,
    ) {
        let mesh = build_tube(&points, radius, segments);
        let pairs = points
            .windows(2)
            .filter(|w| (w[1] - w[0]).length() >= 1e-9)
            .count();
        let expected = 2 * segments as usize * pairs;
        prop_assert_eq!(mesh.vertex_count(), expected);
        prop_assert_eq!(mesh.triangle_count(), expected);
        prop_assert!(mesh.is_finite());
        prop_assert!(mesh.triangles.iter().flatten().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn tube_with_duplicates_has_no_nan(
        points in prop::collection::vec(point(), 1..20),
        repeat in 0usize..20,
    ) {
        // Duplicate one point to create a coincident pair
        let mut points = points;
        let idx = repeat % points.len();
        points.insert(idx, points[idx]);
        let mesh = build_tube(&points, 0.025, 8);
        prop_assert!(mesh.is_finite());
        prop_assert_eq!(mesh.vertex_count(), mesh.triangle_count());
    }

    #[test]
    fn primitives_are_finite(a in point(), b in point(), radius in 0.001..0.5f64) {
        let cylinder = build_cylinder(a, b, radius, 8);
        let cone = build_cone(a, b, radius, 8);
        prop_assert!(cylinder.is_finite());
        prop_assert!(cone.is_finite());
        if (b - a).length() >= 1e-9 {
            prop_assert_eq!(cylinder.vertex_count(), 16);
            prop_assert_eq!(cone.vertex_count(), 9);
        }
    }

    #[test]
    fn camera_stays_clamped(ops in prop::collection::vec(camera_op(), 0..200)) {
        let mut camera = OrbitCamera::default();
        for op in ops {
            match op {
                CameraOp::Drag(dx, dy) => camera.update_from_drag(dx, dy),
                CameraOp::Wheel(delta) => camera.update_from_wheel(delta),
            }
            prop_assert!((PHI_MIN..=PHI_MAX).contains(&camera.phi));
            prop_assert!((DISTANCE_MIN..=DISTANCE_MAX).contains(&camera.distance));
            prop_assert!((camera.position().length() - camera.distance).abs() < 1e-9);
        }
    }

    #[test]
    fn reset_restores_initial_state(
        ticks in 0usize..60,
        epsilon in EPSILON_RANGE,
        drag in (-400.0..400.0f64, -400.0..400.0f64),
        wheels in 0usize..30,
    ) {
        let mut session = Session::new(Settings {
            max_points: 64,
            ..Default::default()
        });
        session.set_epsilon(epsilon);
        session.on_drag_start(DVec2::ZERO);
        session.on_drag_move(DVec2::new(drag.0, drag.1));
        for _ in 0..wheels {
            session.on_wheel(1.0);
        }
        for _ in 0..ticks {
            session.on_tick();
        }

        session.reset();

        prop_assert_eq!(session.simulation().state, SimState { v: 0.1, w: 0.0, t: 0.0 });
        prop_assert!(session.simulation().trajectory.is_empty());
        let camera = session.camera();
        prop_assert_eq!((camera.theta, camera.phi, camera.distance), (45.0, 30.0, 8.0));
    }
}
