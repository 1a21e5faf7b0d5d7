use crate::animator::{Clock, Wireframe};
use crate::camera::{project_with, Camera};
use crate::constants::*;
use crate::draw::{DrawList, Rgba};
use crate::mesh::Mesh;
use crate::pointer::PointerState;
use crate::shapes::{cuboid, floor_grid, placement, sphere};
use crate::viewport::Viewport;
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Solid {
    Box,
    Sphere,
}

impl Solid {
    fn mesh(self) -> Mesh {
        match self {
            Solid::Box => cuboid(2.0, 2.0, 2.0),
            Solid::Sphere => sphere(1.5, 16, 16),
        }
    }

    // Per-frame spin around x, y, z for a unit speed.
    fn spin_axes(self) -> Vec3 {
        match self {
            Solid::Box => Vec3::new(1.0, 0.7, 0.0),
            Solid::Sphere => Vec3::new(1.0, 0.0, 0.5),
        }
    }
}

// (solid, position, radians per frame, colour)
const LAYOUT: [(Solid, [f32; 3], f32, [u8; 3]); 5] = [
    (Solid::Box, [-3.0, 2.0, -5.0], 0.005, [17, 24, 39]),
    (Solid::Box, [3.0, -2.0, -7.0], 0.008, [31, 41, 55]),
    (Solid::Sphere, [0.0, 3.0, -6.0], 0.006, [55, 65, 81]),
    (Solid::Box, [-4.0, -3.0, -8.0], 0.007, [17, 24, 39]),
    (Solid::Sphere, [4.0, 1.0, -9.0], 0.004, [31, 41, 55]),
];

struct FloatingObject {
    mesh: Mesh,
    position: Vec3,
    spin: Vec3,
    rotation: Vec3,
    color: Rgba,
}

/// Slowly rotating wireframe solids over a pulsing floor grid, seen through a
/// fixed perspective camera. Ignores the pointer.
pub struct FloatingScene {
    objects: Vec<FloatingObject>,
    floor: Mesh,
    camera: Camera,
    screen: Vec<Option<Vec2>>,
}

impl FloatingScene {
    pub fn new(viewport: Viewport) -> Self {
        let objects = LAYOUT
            .iter()
            .map(|&(solid, position, speed, rgb)| FloatingObject {
                mesh: solid.mesh(),
                position: Vec3::from(position),
                spin: solid.spin_axes() * speed,
                rotation: Vec3::ZERO,
                color: Rgba::rgb(rgb),
            })
            .collect();
        let floor = floor_grid(FLOOR_SIZE, FLOOR_DIVISIONS)
            .transformed(Mat4::from_translation(Vec3::new(0.0, 0.0, FLOOR_Z)));
        Self {
            objects,
            floor,
            camera: Camera::looking_at_origin(
                FLOATING_CAMERA_Z,
                FLOATING_FOV_DEG,
                viewport.aspect(),
            ),
            screen: Vec::new(),
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current rotation of each object, in layout order.
    pub fn rotations(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.objects.iter().map(|o| o.rotation)
    }

    /// Floor opacity at `seconds`, before the layer alpha.
    pub fn floor_alpha(seconds: f32) -> f32 {
        FLOOR_ALPHA_BASE + (seconds * FLOOR_PULSE_RATE).sin() * FLOOR_ALPHA_SWING
    }

    fn draw_mesh(
        screen: &mut Vec<Option<Vec2>>,
        mesh: &Mesh,
        mvp: &Mat4,
        viewport: Viewport,
        color: Rgba,
        out: &mut DrawList,
    ) {
        screen.clear();
        screen.extend(mesh.vertices().iter().map(|&v| project_with(mvp, v, viewport)));
        for e in mesh.edges() {
            if let (Some(a), Some(b)) = (screen[e.a], screen[e.b]) {
                out.line(a, b, 1.0, color);
            }
        }
    }
}

impl Wireframe for FloatingScene {
    fn name(&self) -> &'static str {
        "floating"
    }

    fn resize(&mut self, viewport: Viewport) {
        self.camera.aspect = viewport.aspect();
    }

    fn render(
        &mut self,
        clock: &Clock,
        _pointer: &PointerState,
        viewport: Viewport,
        out: &mut DrawList,
    ) {
        let view_projection = self.camera.view_projection();
        let seconds = clock.seconds();

        let floor_color =
            Rgba::rgb(FLOOR_RGB).with_alpha(Self::floor_alpha(seconds) * FLOATING_LAYER_ALPHA);
        Self::draw_mesh(
            &mut self.screen,
            &self.floor,
            &view_projection,
            viewport,
            floor_color,
            out,
        );

        let sway =
            Mat4::from_rotation_y((seconds * FLOATING_SWAY_RATE).sin() * FLOATING_SWAY_ANGLE);
        for object in &mut self.objects {
            object.rotation += object.spin;
            let mvp = view_projection * sway * placement(object.position, object.rotation);
            let color = object.color.with_alpha(FLOATING_LAYER_ALPHA);
            Self::draw_mesh(&mut self.screen, &object.mesh, &mvp, viewport, color, out);
        }
    }
}
