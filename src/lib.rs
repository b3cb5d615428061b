// Pathfinder web app build configuration
// Library surface consumed by the CLI binary and the integration tests

pub mod cli;
pub mod core;
pub mod infrastructure;
pub mod utils;
