//! Host capability snapshot, resolved once at the composition root.

/// Environment preferences that gate every pointer and motion effect.
///
/// Built once from the host's media queries and passed down explicitly.
/// A query the host cannot answer resolves to `false`, so an unknown
/// environment gets full animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub reduced_motion: bool,
    pub coarse_pointer: bool,
}

impl Capabilities {
    /// Full motion with a fine pointer.
    pub const FULL: Self = Self {
        reduced_motion: false,
        coarse_pointer: false,
    };

    /// Resolve from optional query answers; `None` means the query was unavailable.
    pub fn from_queries(reduced_motion: Option<bool>, coarse_pointer: Option<bool>) -> Self {
        Self {
            reduced_motion: reduced_motion.unwrap_or(false),
            coarse_pointer: coarse_pointer.unwrap_or(false),
        }
    }

    /// Pointer-driven effects (ambient parallax, trail, magnets) run only with motion
    /// allowed and a fine pointer.
    #[inline]
    pub fn allows_pointer_effects(&self) -> bool {
        !self.reduced_motion && !self.coarse_pointer
    }

    /// Timed and scroll-driven animation (intro, typewriter, card tilt, scroll parallax)
    /// is governed by reduced motion alone.
    #[inline]
    pub fn allows_animation(&self) -> bool {
        !self.reduced_motion
    }
}
