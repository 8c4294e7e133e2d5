// Models module - exports all model types

mod instruction;
mod location;
mod route;

// Re-export model types
pub use self::instruction::{Instruction, Maneuver};
pub use self::location::{Coordinate, MapRegion};
pub use self::route::{Route, RouteType, Traffic};

// Common type aliases for improved code readability
pub type RouteId = String;
pub type Minutes = f64;
pub type Miles = f64;
pub type Feet = f64;
pub type Seconds = f64;
pub type Confidence = u8;
