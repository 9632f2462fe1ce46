//! REST API handlers

pub mod consolidate;
pub mod health;
pub mod notify;
pub mod packages;
pub mod rates;
pub mod shared;

pub use consolidate::*;
pub use health::*;
pub use notify::*;
pub use packages::*;
pub use rates::*;
