use log::Level;

/// localStorage key the login flow writes the session token under.
pub const SESSION_TOKEN_KEY: &str = "token";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development build, running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
