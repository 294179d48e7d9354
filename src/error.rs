// Errors from the window shell and startup configuration.
// The canvas, fill and history code never fails; only the host layer does.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Presenting the framebuffer failed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String), // A command-line value was rejected
}
