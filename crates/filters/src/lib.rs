#![forbid(unsafe_code)]

pub mod invalid;
pub mod resample;
pub mod weak;

pub use invalid::remove_invalid_points;
pub use resample::{resample_by_ratio, resample_to, Resampled};
pub use weak::discard_weak_points;
