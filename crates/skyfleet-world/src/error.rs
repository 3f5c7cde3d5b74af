//! Error types for world construction and zone registration.

/// Errors that can occur when building or mutating the world map.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The world dimensions are not positive.
    #[error("invalid world size: width and height must be positive, got {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// A zone rectangle violates the edge ordering invariant.
    #[error("invalid rect for zone {zone_id}: requires xmin <= xmax and ymin <= ymax")]
    InvalidRect {
        /// The zone whose rectangle is malformed.
        zone_id: String,
    },

    /// A zone id is already registered.
    #[error("duplicate zone id: {zone_id}")]
    DuplicateZone {
        /// The conflicting zone id.
        zone_id: String,
    },
}
