// Composition root for the activities bounded context.
//
// - Read config from defaults, files and environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Seed the catalog and spawn background workers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
pub mod workers;
