use approx::assert_relative_eq;
use nalgebra::Point2;
use polyview_core::{build, Point3D, ShapeKind, ViewModel};

#[test]
fn every_index_is_in_bounds() {
    for kind in ShapeKind::ALL {
        let topology = build(kind).unwrap();
        let len = topology.vertex_count();
        for edge in topology.edges() {
            assert!(edge.0 < len && edge.1 < len, "{kind}: {edge:?}");
        }
        for face in topology.faces() {
            assert!(face.indices().iter().all(|&i| i < len), "{kind}: {face:?}");
        }
    }
}

#[test]
fn cube_at_rest_on_800_by_600() {
    let view = ViewModel::new(ShapeKind::Cube).unwrap();
    let points = view.project_all(800, 600);

    assert_eq!(view.topology().vertices()[0], Point3D::new(-1.0, -1.0, -1.0));
    assert_eq!(points[0], Point2::new(80, 540));
    // (1, 1, 1): f = 4/3, offsets truncate from 533.33 and 400
    assert_eq!(points[6], Point2::new(933, -100));
}

#[test]
fn prism_rings_line_up() {
    let view = ViewModel::new(ShapeKind::Prism).unwrap();
    let vertices = view.topology().vertices();
    assert_relative_eq!(vertices[0], Point3D::new(1.0, -1.0, 0.0));
    assert_relative_eq!(vertices[6], Point3D::new(1.0, 1.0, 0.0));
}

#[test]
fn switching_shape_always_resets_view() {
    let mut view = ViewModel::new(ShapeKind::Cube).unwrap();
    for kind in ShapeKind::ALL {
        view.apply_drag(-73, 41);
        view.apply_zoom_delta(-12);
        view.select_shape(kind).unwrap();

        assert_eq!(view.zoom(), 1.0);
        assert_eq!(view.rotation().x, 0.0);
        assert_eq!(view.rotation().y, 0.0);
    }
}

#[test]
fn drag_then_project_rotates_x_before_y() {
    let mut view = ViewModel::new(ShapeKind::Pyramid).unwrap();
    // rotation_x = -90, rotation_y = -90
    view.apply_drag(90, 90);
    let points = view.project_all(800, 600);

    // Apex (0,1,0): X by -90 gives (0,0,-1), Y by -90 gives (-1,0,0)
    assert_eq!(points[4], Point2::new(0, 300));
}

#[test]
fn zoom_roughly_doubles_offset() {
    let mut view = ViewModel::new(ShapeKind::Box).unwrap();
    let base = view.project_all(1000, 1000);
    // 1.0 -> 2.0
    view.apply_zoom_delta(-10);
    let zoomed = view.project_all(1000, 1000);

    for (a, b) in base.iter().zip(&zoomed) {
        let da = (a.x - 500).abs();
        let db = (b.x - 500).abs();
        assert!((db - 2 * da).abs() <= 1, "{da} -> {db}");
    }
}
