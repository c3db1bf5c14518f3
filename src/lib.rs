pub mod core;

// Re-export everything from core for ergonomic library use
// Users can write `tabbar_rename::rename` instead of `tabbar_rename::core::rename`
pub use core::*;
