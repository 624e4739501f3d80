//! Per-direction collision flags

bitflags::bitflags! {
    /// Directions in which a collision was detected
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CollisionFlags: u8 {
        /// Blocked moving up
        const TOP = 1 << 0;
        /// Blocked moving down
        const BOTTOM = 1 << 1;
        /// Blocked moving left
        const LEFT = 1 << 2;
        /// Blocked moving right
        const RIGHT = 1 << 3;
    }
}
