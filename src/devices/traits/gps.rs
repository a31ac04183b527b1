//! GPS receiver collaborator
//!
//! Sentence parsing and fix extraction happen in the implementation.

/// Position source
pub trait GpsReceiver {
    fn has_fix(&mut self) -> bool;

    /// Latitude and longitude in degrees, if a fix is held
    fn current_fix_location(&mut self) -> Option<(f64, f64)>;
}
