/*
    * Re-exports for all cross-cutting modules: error handling,
    * response logging, and clock/timestamp helpers.
*/

pub mod clock;
pub mod error_handler;
pub mod response_logger;
