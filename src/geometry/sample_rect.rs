/// Axis-aligned sample region in image display coordinates.
///
/// Width/height may go negative mid-drag (a corner crossing its opposite);
/// nothing here normalizes that, and every consumer has to cope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SampleRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x.min(self.x + self.width)
    }

    pub fn max_x(&self) -> f32 {
        self.x.max(self.x + self.width)
    }

    pub fn min_y(&self) -> f32 {
        self.y.min(self.y + self.height)
    }

    pub fn max_y(&self) -> f32 {
        self.y.max(self.y + self.height)
    }

    /// Corner positions in `Corner::ALL` order.
    pub fn corner_positions(&self) -> [(f32, f32); 4] {
        [
            (self.min_x(), self.min_y()),
            (self.max_x(), self.min_y()),
            (self.min_x(), self.max_y()),
            (self.max_x(), self.max_y()),
        ]
    }

    pub fn corner_position(&self, corner: Corner) -> (f32, f32) {
        self.corner_positions()[corner as usize]
    }
}

/// The four corner roles, always derived from the rect, never stored.
///
/// The ordering is load-bearing: `nearest_corner` walks it front to back and
/// keeps the first strictly-closer corner, so equidistant ties resolve to the
/// earlier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner, the one a drag must not move.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }
}

/// Owns the mutable sample rectangle and the corner-drag editing rules.
#[derive(Debug, Clone)]
pub struct RectangleEditor {
    pub rect: SampleRect,
    hit_radius: f32,
}

impl Default for RectangleEditor {
    fn default() -> Self {
        Self {
            rect: SampleRect::new(200.0, 200.0, 240.0, 240.0),
            hit_radius: 50.0,
        }
    }
}

impl RectangleEditor {
    pub fn new(rect: SampleRect, hit_radius: f32) -> Self {
        Self { rect, hit_radius }
    }

    /// Picks the corner nearest to `pointer`, or `None` when every corner is
    /// at or beyond the hit radius.
    pub fn nearest_corner(&self, pointer: (f32, f32)) -> Option<Corner> {
        let mut best: Option<(Corner, f32)> = None;
        for corner in Corner::ALL {
            let (cx, cy) = self.rect.corner_position(corner);
            let distance = (cx - pointer.0).hypot(cy - pointer.1);
            if distance >= self.hit_radius {
                continue;
            }
            let closer = match best {
                Some((_, best_distance)) => distance < best_distance,
                None => true,
            };
            if closer {
                best = Some((corner, distance));
            }
        }
        best.map(|(corner, _)| corner)
    }

    /// Moves `corner` to `pointer`, keeping the diagonally opposite corner's
    /// absolute position fixed. Width/height are allowed to go negative.
    pub fn apply_drag(&mut self, corner: Corner, pointer: (f32, f32)) {
        let rect = &mut self.rect;
        match corner {
            Corner::TopLeft => {
                rect.width += rect.x - pointer.0;
                rect.height += rect.y - pointer.1;
                rect.x = pointer.0;
                rect.y = pointer.1;
            }
            Corner::TopRight => {
                rect.width = pointer.0 - rect.x;
                rect.height += rect.y - pointer.1;
                rect.y = pointer.1;
            }
            Corner::BottomLeft => {
                rect.width += rect.x - pointer.0;
                rect.height = pointer.1 - rect.y;
                rect.x = pointer.0;
            }
            Corner::BottomRight => {
                rect.width = pointer.0 - rect.x;
                rect.height = pointer.1 - rect.y;
            }
        }
    }
}
