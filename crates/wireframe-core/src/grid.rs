use crate::animator::{Clock, Wireframe};
use crate::config::AnimatorConfig;
use crate::constants::*;
use crate::draw::{DrawList, Rgba};
use crate::pointer::PointerState;
use crate::projection::{depth_factor, Projector, ScreenPoint};
use crate::viewport::Viewport;
use glam::Vec2;

/// `cols x rows` for a viewport: enough cells to cover it plus a padding ring
/// so that the undulating edges never reveal the border.
pub fn grid_dimensions(viewport: Viewport, cell_size: f32) -> (u32, u32) {
    let cols = (viewport.width / cell_size).ceil() as u32 + GRID_PADDING_CELLS;
    let rows = (viewport.height / cell_size).ceil() as u32 + GRID_PADDING_CELLS;
    (cols, rows)
}

/// Regular grid whose depth is a sum of travelling sine waves plus a bump
/// under the pointer. Edges are implicit: right and lower neighbour.
pub struct GridField {
    cell_override: Option<f32>,
    cell_size: f32,
    cols: u32,
    rows: u32,
    color: Rgba,
    projected: Vec<ScreenPoint>,
}

impl GridField {
    pub fn new(config: &AnimatorConfig, viewport: Viewport) -> Self {
        let mut grid = Self {
            cell_override: config.cell_size,
            cell_size: 0.0,
            cols: 0,
            rows: 0,
            color: config.color,
            projected: Vec::new(),
        };
        grid.layout(viewport);
        grid
    }

    fn layout(&mut self, viewport: Viewport) {
        self.cell_size = self
            .cell_override
            .unwrap_or_else(|| viewport.size_class().cell_size())
            .max(MIN_CELL_SIZE);
        let (cols, rows) = grid_dimensions(viewport, self.cell_size);
        self.cols = cols;
        self.rows = rows;
        self.projected.clear();
        log::debug!(
            "[mesh] {}x{} cells of {}px over {}x{}",
            cols,
            rows,
            self.cell_size,
            viewport.width,
            viewport.height
        );
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn point_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Fixed planar position of grid point `(row, col)`; the grid starts one
    /// cell above and left of the surface.
    #[inline]
    pub fn planar(&self, row: u32, col: u32) -> Vec2 {
        Vec2::new(
            (col as f32 - 1.0) * self.cell_size,
            (row as f32 - 1.0) * self.cell_size,
        )
    }

    /// Projections from the last frame, row-major.
    pub fn projected(&self) -> &[ScreenPoint] {
        &self.projected
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn project_all(&mut self, time: f32, pointer: &PointerState, projector: &Projector) {
        self.projected.clear();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = self.planar(row, col);
                let z = depth_at(p, time, pointer);
                self.projected.push(projector.project(p.extend(z)));
            }
        }
    }

    fn draw_line(
        &self,
        a: ScreenPoint,
        b: ScreenPoint,
        pointer: &PointerState,
        out: &mut DrawList,
    ) {
        let mean = (a.depth + b.depth) * 0.5;
        let mut opacity = depth_factor(mean, GRID_EDGE_FADE) * GRID_EDGE_ALPHA;
        let hover = pointer.influence((a.position + b.position) * 0.5, GRID_HOVER_RADIUS);
        opacity = (opacity + hover * GRID_HOVER_BOOST).min(1.0);
        let width = 1.0 + hover * GRID_HOVER_WIDTH;
        out.line(a.position, b.position, width, self.color.with_alpha(opacity));
    }
}

/// Depth of the surface at planar point `p`.
pub fn depth_at(p: Vec2, time: f32, pointer: &PointerState) -> f32 {
    let coords = [p.x, p.y, p.x + p.y];
    let waves: f32 = GRID_WAVES
        .iter()
        .zip(coords)
        .map(|([spatial, temporal, amplitude], c)| {
            (c * spatial + time * temporal).sin() * amplitude
        })
        .sum();
    waves + pointer.influence(p, GRID_BUMP_RADIUS) * GRID_BUMP_HEIGHT
}

impl Wireframe for GridField {
    fn name(&self) -> &'static str {
        "mesh"
    }

    fn resize(&mut self, viewport: Viewport) {
        self.layout(viewport);
    }

    fn render(
        &mut self,
        clock: &Clock,
        pointer: &PointerState,
        viewport: Viewport,
        out: &mut DrawList,
    ) {
        let projector = Projector::new(viewport);
        self.project_all(clock.time, pointer, &projector);

        for row in 0..self.rows {
            for col in 0..self.cols {
                let here = self.projected[self.index(row, col)];
                if col + 1 < self.cols {
                    self.draw_line(here, self.projected[self.index(row, col + 1)], pointer, out);
                }
                if row + 1 < self.rows {
                    self.draw_line(here, self.projected[self.index(row + 1, col)], pointer, out);
                }
            }
        }

        for p in &self.projected {
            let glow = pointer.influence(p.position, GRID_VERTEX_RADIUS);
            if glow <= 0.0 {
                continue;
            }
            let size = GRID_VERTEX_SIZE * (1.0 + glow);
            let ring = pointer.influence(p.position, RING_RADIUS);
            if ring > 0.0 {
                out.ring(
                    p.position,
                    size + RING_GAP,
                    RING_WIDTH,
                    self.color.with_alpha(ring * RING_ALPHA),
                );
            }
            out.dot(p.position, size, self.color.with_alpha(glow * GRID_VERTEX_ALPHA));
        }
    }
}
