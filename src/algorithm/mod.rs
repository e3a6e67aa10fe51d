/// Flood-fill connectivity pruning
pub mod connectivity;
/// Canonical stone orientations per grid
pub mod orientation;
/// Signature-deduplicated solution registry and persistence seam
pub mod registry;
/// Resuming an interrupted search from its last recorded board
pub mod resume;
/// Generic backtracking solver with cancellation and statistics
pub mod solver;
