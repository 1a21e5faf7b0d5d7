//! Wireframe primitives and the icon shape registry.
//!
//! Every icon kind maps to a pure constructor in [`REGISTRY`]. Primitives are
//! centred on the origin with `y` up, and only carry the edges a viewer would
//! expect to see (box outlines, latitude/longitude lines, tube rings) rather
//! than a full triangulation.

use crate::config::ConfigError;
use crate::mesh::Mesh;
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

pub fn cuboid(width: f32, height: f32, depth: f32) -> Mesh {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    let mut mesh = Mesh::new();
    for &z in &[-hz, hz] {
        for &(x, y) in &[(-hx, -hy), (hx, -hy), (hx, hy), (-hx, hy)] {
            mesh.push_vertex(Vec3::new(x, y, z));
        }
    }
    mesh.close_loop(&[0, 1, 2, 3]);
    mesh.close_loop(&[4, 5, 6, 7]);
    for i in 0..4 {
        mesh.connect(i, i + 4);
    }
    mesh
}

/// Cylinder along `y`. A zero top radius collapses the top ring into an apex,
/// which gives a cone (or a pyramid for small segment counts).
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Mesh {
    let segments = segments.max(3) as usize;
    let half = height * 0.5;
    let mut mesh = Mesh::new();
    let bottom = ring_xz(&mut mesh, radius_bottom, -half, segments);
    if radius_top <= 0.0 {
        let apex = mesh.push_vertex(Vec3::new(0.0, half, 0.0));
        for &b in &bottom {
            mesh.connect(b, apex);
        }
    } else {
        let top = ring_xz(&mut mesh, radius_top, half, segments);
        for (&b, &t) in bottom.iter().zip(&top) {
            mesh.connect(b, t);
        }
    }
    mesh
}

pub fn cone(radius: f32, height: f32, segments: u32) -> Mesh {
    cylinder(0.0, radius, height, segments)
}

fn ring_xz(mesh: &mut Mesh, radius: f32, y: f32, segments: usize) -> Vec<usize> {
    let ring: Vec<usize> = (0..segments)
        .map(|i| {
            let a = i as f32 / segments as f32 * TAU;
            mesh.push_vertex(Vec3::new(radius * a.sin(), y, radius * a.cos()))
        })
        .collect();
    mesh.close_loop(&ring);
    ring
}

/// UV sphere: `width_segments` meridians, `height_segments` bands.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let cols = width_segments.max(3) as usize;
    let bands = height_segments.max(2) as usize;
    let mut mesh = Mesh::new();
    let north = mesh.push_vertex(Vec3::new(0.0, radius, 0.0));
    let mut parallels: Vec<Vec<usize>> = Vec::with_capacity(bands - 1);
    for band in 1..bands {
        let theta = band as f32 / bands as f32 * std::f32::consts::PI;
        let y = radius * theta.cos();
        let r = radius * theta.sin();
        parallels.push(ring_xz(&mut mesh, r, y, cols));
    }
    let south = mesh.push_vertex(Vec3::new(0.0, -radius, 0.0));
    for col in 0..cols {
        let mut prev = north;
        for ring in &parallels {
            mesh.connect(prev, ring[col]);
            prev = ring[col];
        }
        mesh.connect(prev, south);
    }
    mesh
}

/// Torus in the `xy` plane around the `z` axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let radial = radial_segments.max(3) as usize;
    let tubular = tubular_segments.max(3) as usize;
    let mut mesh = Mesh::new();
    for i in 0..tubular {
        let u = i as f32 / tubular as f32 * TAU;
        for j in 0..radial {
            let v = j as f32 / radial as f32 * TAU;
            let r = radius + tube * v.cos();
            mesh.push_vertex(Vec3::new(r * u.cos(), r * u.sin(), tube * v.sin()));
        }
    }
    let at = |i: usize, j: usize| (i % tubular) * radial + (j % radial);
    for i in 0..tubular {
        for j in 0..radial {
            mesh.connect(at(i, j), at(i, j + 1));
            mesh.connect(at(i, j), at(i + 1, j));
        }
    }
    mesh
}

pub fn octahedron(radius: f32) -> Mesh {
    let mut mesh = Mesh::new();
    for axis in [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z] {
        mesh.push_vertex(axis * radius);
    }
    // every pair except the three opposite ones
    for i in 0..6 {
        for j in (i + 1)..6 {
            if !(i % 2 == 0 && j == i + 1) {
                mesh.connect(i, j);
            }
        }
    }
    mesh
}

pub fn tetrahedron(radius: f32) -> Mesh {
    let mut mesh = Mesh::new();
    for v in [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ] {
        mesh.push_vertex(v.normalize() * radius);
    }
    for i in 0..4 {
        for j in (i + 1)..4 {
            mesh.connect(i, j);
        }
    }
    mesh
}

pub fn icosahedron(radius: f32) -> Mesh {
    let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let raw = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ];
    let mut mesh = Mesh::new();
    for v in raw {
        mesh.push_vertex(v.normalize() * radius);
    }
    // neighbours sit exactly 2 apart before normalisation
    for i in 0..raw.len() {
        for j in (i + 1)..raw.len() {
            if (raw[i].distance(raw[j]) - 2.0).abs() < 1e-3 {
                mesh.connect(i, j);
            }
        }
    }
    mesh
}

/// Square grid in the `xz` plane, `divisions` cells per side.
pub fn floor_grid(size: f32, divisions: u32) -> Mesh {
    let divisions = divisions.max(1);
    let half = size * 0.5;
    let step = size / divisions as f32;
    let mut mesh = Mesh::new();
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let a = mesh.push_vertex(Vec3::new(-half, 0.0, k));
        let b = mesh.push_vertex(Vec3::new(half, 0.0, k));
        mesh.connect(a, b);
        let c = mesh.push_vertex(Vec3::new(k, 0.0, -half));
        let d = mesh.push_vertex(Vec3::new(k, 0.0, half));
        mesh.connect(c, d);
    }
    mesh
}

/// Icon kinds used on the capability and industry cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Store,
    Factory,
    Zap,
    Shield,
    Home,
    MapPin,
    Check,
    Target,
    Database,
    Dashboard,
    Network,
    Gears,
    Graph,
    Cloud,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 14] = [
        ShapeKind::Store,
        ShapeKind::Factory,
        ShapeKind::Zap,
        ShapeKind::Shield,
        ShapeKind::Home,
        ShapeKind::MapPin,
        ShapeKind::Check,
        ShapeKind::Target,
        ShapeKind::Database,
        ShapeKind::Dashboard,
        ShapeKind::Network,
        ShapeKind::Gears,
        ShapeKind::Graph,
        ShapeKind::Cloud,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Store => "store",
            ShapeKind::Factory => "factory",
            ShapeKind::Zap => "zap",
            ShapeKind::Shield => "shield",
            ShapeKind::Home => "home",
            ShapeKind::MapPin => "mappin",
            ShapeKind::Check => "check",
            ShapeKind::Target => "target",
            ShapeKind::Database => "database",
            ShapeKind::Dashboard => "dashboard",
            ShapeKind::Network => "network",
            ShapeKind::Gears => "gears",
            ShapeKind::Graph => "graph",
            ShapeKind::Cloud => "cloud",
        }
    }

    pub fn builder(self) -> Option<ShapeBuilder> {
        REGISTRY
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, build)| *build)
    }

    /// Build the mesh for this kind; unregistered kinds fall back to a unit box.
    pub fn build(self) -> Mesh {
        match self.builder() {
            Some(build) => build(),
            None => {
                log::warn!("no wireframe registered for `{}`, using a box", self);
                cuboid(1.0, 1.0, 1.0)
            }
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = if wanted == "map-pin" { "mappin".to_string() } else { wanted };
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownShape(s.to_string()))
    }
}

pub type ShapeBuilder = fn() -> Mesh;

pub static REGISTRY: [(ShapeKind, ShapeBuilder); 14] = [
    (ShapeKind::Store, store),
    (ShapeKind::Factory, factory),
    (ShapeKind::Zap, zap),
    (ShapeKind::Shield, shield),
    (ShapeKind::Home, home),
    (ShapeKind::MapPin, map_pin),
    (ShapeKind::Check, check),
    (ShapeKind::Target, target),
    (ShapeKind::Database, database),
    (ShapeKind::Dashboard, dashboard),
    (ShapeKind::Network, network),
    (ShapeKind::Gears, gears),
    (ShapeKind::Graph, graph),
    (ShapeKind::Cloud, cloud),
];

fn store() -> Mesh {
    cuboid(1.0, 1.0, 1.0)
}

fn factory() -> Mesh {
    cylinder(0.7, 0.7, 1.2, 8)
}

fn zap() -> Mesh {
    octahedron(0.8)
}

fn shield() -> Mesh {
    cone(0.8, 1.2, 8)
}

fn home() -> Mesh {
    cone(1.1, 0.9, 4)
}

fn map_pin() -> Mesh {
    sphere(0.6, 12, 8)
}

fn check() -> Mesh {
    torus(0.5, 0.15, 8, 16)
}

// Three concentric rings and a cross hair.
fn target() -> Mesh {
    let mut mesh = Mesh::new();
    for radius in [0.8, 0.5, 0.25] {
        mesh.append(&torus(radius, 0.1, 8, 16));
    }
    mesh.append(&cuboid(1.6, 0.05, 0.05));
    mesh.append(&cuboid(0.05, 1.6, 0.05));
    mesh
}

fn database() -> Mesh {
    cylinder(0.8, 0.8, 1.5, 12)
}

fn dashboard() -> Mesh {
    cuboid(1.2, 0.8, 0.1)
}

fn network() -> Mesh {
    icosahedron(0.8)
}

fn gears() -> Mesh {
    torus(0.6, 0.2, 8, 16)
}

fn graph() -> Mesh {
    tetrahedron(0.9)
}

fn cloud() -> Mesh {
    sphere(0.7, 8, 6)
}

/// Model matrix for a mesh placed at `position` with XYZ Euler `rotation`.
#[inline]
pub fn placement(position: Vec3, rotation: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_euler(glam::EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}
