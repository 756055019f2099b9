//! Window selection, measurements and type resolution.

pub mod registry;
pub mod spec;
pub mod types;

pub use registry::{
    calculator, layout_key, layouts_for, resolve, resolve_strict, resolve_with_default,
};
pub use spec::{Measurements, WindowSelection, WindowSpec};
pub use types::{PartitionStyle, WindowType};

/// Smallest accepted height or width.
pub const MIN_DIMENSION_MM: u32 = 100;

/// Largest accepted height or width.
pub const MAX_DIMENSION_MM: u32 = 9999;
