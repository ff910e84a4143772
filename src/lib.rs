// Library target for the session core. The terminal front end in main.rs,
// the integration tests and the criterion benches all build on it.

pub mod alphabet;
pub mod config;
pub mod logging;
pub mod session;
pub mod speech;
