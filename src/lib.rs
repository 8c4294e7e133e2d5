// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod guidance;
pub mod location;
pub mod models;
pub mod planner;
pub mod session;
pub mod utils;

// Re-exports for convenience
pub use algorithms::mock_catalog::MockCatalogGenerator;
pub use algorithms::RouteGenerator;
pub use config::NavigatorConfig;
pub use error::{NavError, Result};
pub use models::{Coordinate, Instruction, Route, RouteType, Traffic};
pub use planner::RoutePlanner;
pub use session::{NavigationSession, NavigationSessionStore};
