//! Navigation logic: the current-position cursor and flat tree views.

pub mod navigator;
pub mod snapshot;

pub use navigator::Navigator;
