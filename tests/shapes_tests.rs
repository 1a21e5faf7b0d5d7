// Host-side tests for the wireframe primitives and the icon registry.

use std::collections::HashSet;
use wireframe_core::shapes::{
    cone, cuboid, cylinder, floor_grid, icosahedron, octahedron, sphere, tetrahedron, torus,
};
use wireframe_core::{Edge, Mesh, ShapeKind, REGISTRY};

fn assert_well_formed(mesh: &Mesh) {
    let mut seen = HashSet::new();
    for e in mesh.edges() {
        assert!(e.a < e.b);
        assert!(e.b < mesh.vertex_count());
        assert!(seen.insert(*e), "duplicate edge {:?}", e);
    }
}

#[test]
fn primitive_edge_counts() {
    let cases = [
        ("cuboid", cuboid(1.0, 1.0, 1.0), 8, 12),
        ("cylinder", cylinder(0.7, 0.7, 1.2, 8), 16, 24),
        ("cone", cone(0.8, 1.2, 8), 9, 16),
        ("pyramid", cone(1.1, 0.9, 4), 5, 8),
        ("octahedron", octahedron(1.0), 6, 12),
        ("tetrahedron", tetrahedron(1.0), 4, 6),
        ("icosahedron", icosahedron(1.0), 12, 30),
        ("torus", torus(0.5, 0.15, 8, 16), 128, 256),
        ("sphere", sphere(0.6, 12, 8), 2 + 12 * 7, 12 * 7 + 12 * 8),
        ("floor", floor_grid(20.0, 20), 84, 42),
    ];
    for (name, mesh, vertices, edges) in cases {
        assert_eq!(mesh.vertex_count(), vertices, "{} vertices", name);
        assert_eq!(mesh.edge_count(), edges, "{} edges", name);
        assert_well_formed(&mesh);
    }
}

#[test]
fn platonic_solids_sit_on_their_sphere() {
    for mesh in [octahedron(0.8), tetrahedron(0.8), icosahedron(0.8)] {
        for v in mesh.vertices() {
            assert!((v.length() - 0.8).abs() < 1e-5);
        }
    }
}

#[test]
fn mesh_connect_rejects_bad_edges() {
    let mut mesh = Mesh::new();
    let a = mesh.push_vertex(glam::Vec3::ZERO);
    let b = mesh.push_vertex(glam::Vec3::X);
    assert!(mesh.connect(a, b));
    assert!(!mesh.connect(b, a));
    assert!(!mesh.connect(a, a));
    assert!(!mesh.connect(a, 5));
    assert_eq!(mesh.edges(), &[Edge { a: 0, b: 1 }]);
    assert_eq!(Edge::new(3, 3), None);
    assert_eq!(Edge::new(4, 1), Some(Edge { a: 1, b: 4 }));
}

#[test]
fn registry_covers_every_kind_once() {
    assert_eq!(REGISTRY.len(), ShapeKind::ALL.len());
    let kinds: HashSet<ShapeKind> = REGISTRY.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds.len(), ShapeKind::ALL.len());
    for kind in ShapeKind::ALL {
        assert!(kind.builder().is_some(), "{} missing", kind);
    }
}

#[test]
fn every_icon_builds_a_fitting_wireframe() {
    for kind in ShapeKind::ALL {
        let mesh = kind.build();
        assert!(mesh.edge_count() > 0, "{}", kind);
        assert_well_formed(&mesh);
        // icons are framed by a camera three units away
        assert!(mesh.radius() < 1.5, "{} radius {}", kind, mesh.radius());
    }
}

#[test]
fn target_is_three_rings_and_a_cross() {
    let mesh = ShapeKind::Target.build();
    assert_eq!(mesh.vertex_count(), 3 * 128 + 2 * 8);
    assert_eq!(mesh.edge_count(), 3 * 256 + 2 * 12);
}

#[test]
fn shape_names_round_trip() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.name().parse::<ShapeKind>(), Ok(kind));
    }
    assert_eq!("map-pin".parse::<ShapeKind>(), Ok(ShapeKind::MapPin));
    assert_eq!(" Cloud ".parse::<ShapeKind>(), Ok(ShapeKind::Cloud));
    assert!("teapot".parse::<ShapeKind>().is_err());
}
