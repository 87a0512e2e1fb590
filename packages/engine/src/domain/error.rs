use std::fmt;

/// Configuration rejected at construction time
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Half-extent is zero, negative or not finite
    InvalidHalfExtent { half_width: f32, half_height: f32 },

    /// Skin width must be finite and non-negative
    InvalidSkinWidth(f32),

    /// Inset hitbox would be empty (half-extent not larger than the skin)
    SkinTooWide { skin_width: f32, half_extent: f32 },

    /// Ray spacing needs at least two rays per edge
    TooFewRays(usize),

    /// Tick duration must be positive and finite
    InvalidTickDuration(f32),

    /// Friction denominator below 1 would accelerate bodies
    InvalidFriction(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidHalfExtent { half_width, half_height } => {
                write!(f, "Invalid half extents: {} x {}", half_width, half_height)
            }
            ConfigError::InvalidSkinWidth(skin) => {
                write!(f, "Invalid skin width: {}", skin)
            }
            ConfigError::SkinTooWide { skin_width, half_extent } => {
                write!(
                    f,
                    "Skin width {} leaves no hitbox for half extent {}",
                    skin_width, half_extent
                )
            }
            ConfigError::TooFewRays(count) => {
                write!(f, "Ray count must be at least 2 (got {})", count)
            }
            ConfigError::InvalidTickDuration(dt) => {
                write!(f, "Invalid tick duration: {}", dt)
            }
            ConfigError::InvalidFriction(denominator) => {
                write!(f, "Friction denominator must be >= 1 (got {})", denominator)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}
