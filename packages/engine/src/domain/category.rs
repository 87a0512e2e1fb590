//! Collision categories
//!
//! Colliders carry a single category bit; queries take a mask of the
//! categories they want to see.

pub type CategoryMask = u32;

/// Static or kinematic level geometry (tiles, walls, platforms)
pub const CAT_OBSTACLE: CategoryMask = 1 << 0;
/// Character hitboxes (platform passengers)
pub const CAT_CHARACTER: CategoryMask = 1 << 1;

#[inline]
pub fn matches(category: CategoryMask, filter: CategoryMask) -> bool {
    category & filter != 0
}
