pub mod analysis;
pub mod capture_session;
pub mod core;
pub mod main;
pub mod render;
pub mod run_effect;

#[cfg(test)]
mod tests;
