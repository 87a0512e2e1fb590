use crate::core::Vec2;
use crate::domain::config::check_half_extents;
use crate::domain::ConfigError;

/// Hitbox side, in resolution order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
    Left,
    Right,
}

impl Side {
    /// Fixed resolution order: ceiling and floor first, then walls
    pub const ORDER: [Side; 4] = [Side::Above, Side::Below, Side::Left, Side::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Above => 0,
            Side::Below => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }
}

/// Inset edge of a hitbox, corner to corner
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct EdgeSample {
    pub start: Vec2,
    pub end: Vec2,
}

impl EdgeSample {
    /// Diagonal corners of the strip swept from `self` (last tick) to `next`.
    pub fn swept_to(&self, next: &EdgeSample) -> (Vec2, Vec2) {
        let lo = self.start.min(self.end).min(next.start).min(next.end);
        let hi = self.start.max(self.end).max(next.start).max(next.end);
        (lo, hi)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

/// Inset corners of a hitbox at one position
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RaycastOrigins {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl RaycastOrigins {
    pub fn edge(&self, side: Side) -> EdgeSample {
        match side {
            Side::Above => EdgeSample { start: self.top_left, end: self.top_right },
            Side::Below => EdgeSample { start: self.bottom_left, end: self.bottom_right },
            Side::Left => EdgeSample { start: self.bottom_left, end: self.top_left },
            Side::Right => EdgeSample { start: self.bottom_right, end: self.top_right },
        }
    }

    /// Edges in `Side::ORDER`
    pub fn edges(&self) -> [EdgeSample; 4] {
        Side::ORDER.map(|side| self.edge(side))
    }
}

/// Distance between neighbouring rays
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaySpacing {
    /// Between horizontal rays (stacked along y)
    pub horizontal: f32,
    /// Between vertical rays (spread along x)
    pub vertical: f32,
}

/// Hitbox geometry used to place ray origins
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastBounds {
    half_width: f32,
    half_height: f32,
    skin_width: f32,
}

impl RaycastBounds {
    pub fn new(half_width: f32, half_height: f32, skin_width: f32) -> Result<Self, ConfigError> {
        check_half_extents(half_width, half_height)?;
        if !(skin_width.is_finite() && skin_width >= 0.0) {
            return Err(ConfigError::InvalidSkinWidth(skin_width));
        }
        let narrowest = half_width.min(half_height);
        if skin_width >= narrowest {
            return Err(ConfigError::SkinTooWide { skin_width, half_extent: narrowest });
        }
        Ok(Self { half_width, half_height, skin_width })
    }

    pub fn half_width(&self) -> f32 { self.half_width }

    pub fn half_height(&self) -> f32 { self.half_height }

    pub fn skin_width(&self) -> f32 { self.skin_width }

    /// Inset half extents
    #[inline]
    fn inner(&self) -> Vec2 {
        Vec2::new(self.half_width - self.skin_width, self.half_height - self.skin_width)
    }

    pub fn origins(&self, position: Vec2) -> RaycastOrigins {
        let h = self.inner();
        RaycastOrigins {
            top_left: Vec2::new(position.x - h.x, position.y + h.y),
            top_right: Vec2::new(position.x + h.x, position.y + h.y),
            bottom_left: Vec2::new(position.x - h.x, position.y - h.y),
            bottom_right: Vec2::new(position.x + h.x, position.y - h.y),
        }
    }

    /// Spacing for `ray_count` rays per edge, first and last on the corners.
    pub fn ray_spacing(&self, ray_count: usize) -> Result<RaySpacing, ConfigError> {
        if ray_count < 2 {
            return Err(ConfigError::TooFewRays(ray_count));
        }
        let gaps = (ray_count - 1) as f32;
        let h = self.inner();
        Ok(RaySpacing {
            horizontal: 2.0 * h.y / gaps,
            vertical: 2.0 * h.x / gaps,
        })
    }
}
