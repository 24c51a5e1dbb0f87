use crate::domain::{BoundingBox, Cell, Generation};

/// Smallest allowed cell size in pixels
pub const MIN_CELL_SIZE: f64 = 2.0;
/// Largest allowed cell size in pixels
pub const MAX_CELL_SIZE: f64 = 50.0;
/// Cell size used before any zoom or fit
pub const DEFAULT_CELL_SIZE: f64 = 10.0;

/// Viewport maps the unbounded world onto a bounded display.
/// `offset_x`/`offset_y` is the world position shown at the display's
/// top-left corner; `cell_size` is pixels per cell.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    cell_size: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }

    /// Start with a given cell size (clamped to the allowed range)
    pub fn with_cell_size(cell_size: f64) -> Self {
        Self {
            cell_size: clamp_cell_size(cell_size),
            ..Self::new()
        }
    }

    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// World point currently at the display centre
    pub fn center(&self, display_width: f64, display_height: f64) -> (f64, f64) {
        (
            self.offset_x + display_width / (2.0 * self.cell_size),
            self.offset_y + display_height / (2.0 * self.cell_size),
        )
    }

    /// Put a world point at the display centre, keeping the scale
    pub fn look_at(&mut self, world_x: f64, world_y: f64, display_width: f64, display_height: f64) {
        self.offset_x = world_x - display_width / (2.0 * self.cell_size);
        self.offset_y = world_y - display_height / (2.0 * self.cell_size);
    }

    /// Align the generation's bounding-box centre with the display centre.
    /// An empty generation centres the world origin.
    pub fn center_on(&mut self, generation: &Generation, display_width: f64, display_height: f64) {
        let (cx, cy) = if generation.is_empty() {
            (0.0, 0.0)
        } else {
            generation.bounding_box().center()
        };
        self.look_at(cx, cy, display_width, display_height);
    }

    /// Pick the largest cell size that shows the whole generation, then centre it
    pub fn fit(&mut self, generation: &Generation, display_width: f64, display_height: f64) {
        if !generation.is_empty() {
            let bb = generation.bounding_box();
            // Non-empty boxes are at least one cell wide and tall
            let scale_x = display_width / bb.width() as f64;
            let scale_y = display_height / bb.height() as f64;
            self.cell_size = clamp_cell_size(scale_x.min(scale_y));
        }
        self.center_on(generation, display_width, display_height);
    }

    /// Pan camera by world units
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Pan by a pointer drag in pixels; content follows the pointer
    pub fn pan_pixels(&mut self, dx: f64, dy: f64) {
        self.pan(-dx / self.cell_size, -dy / self.cell_size);
    }

    /// Rescale by `factor` keeping the world point at the display centre fixed.
    /// Returns false when the clamped scale is unchanged (nothing moves).
    pub fn zoom(&mut self, factor: f64, display_width: f64, display_height: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }

        let new_size = clamp_cell_size(self.cell_size * factor);
        if new_size == self.cell_size {
            return false;
        }

        let (cx, cy) = self.center(display_width, display_height);
        self.cell_size = new_size;
        self.look_at(cx, cy, display_width, display_height);
        true
    }

    /// Convert world coordinates to the pixel of the cell's top-left corner
    pub fn world_to_screen(&self, cell: Cell) -> (f64, f64) {
        (
            (cell.x as f64 - self.offset_x) * self.cell_size,
            (cell.y as f64 - self.offset_y) * self.cell_size,
        )
    }

    /// Convert a pixel to continuous world coordinates
    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> (f64, f64) {
        (
            screen_x / self.cell_size + self.offset_x,
            screen_y / self.cell_size + self.offset_y,
        )
    }

    /// Cell under a pixel
    pub fn screen_to_cell(&self, screen_x: f64, screen_y: f64) -> Cell {
        let (wx, wy) = self.screen_to_world(screen_x, screen_y);
        // `as` saturates at the i32 limits
        Cell::new(wx.floor() as i32, wy.floor() as i32)
    }

    /// Get visible cell bounds for culling
    pub fn visible_bounds(&self, display_width: f64, display_height: f64) -> BoundingBox {
        let top_left = self.screen_to_cell(0.0, 0.0);
        let bottom_right = self.screen_to_cell(display_width, display_height);
        BoundingBox {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: bottom_right.x,
            max_y: bottom_right.y,
        }
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_cell_size(size: f64) -> f64 {
    if size.is_nan() {
        return MIN_CELL_SIZE;
    }
    size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}
