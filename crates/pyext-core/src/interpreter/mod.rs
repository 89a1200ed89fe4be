pub mod configured;
pub mod traits;

// Re-export public API
pub use configured::ConfiguredInterpreterService;
pub use traits::InterpreterService;
