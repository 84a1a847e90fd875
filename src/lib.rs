pub mod config;
pub mod contact;
pub mod content;
pub mod motion;
pub mod navigation;
pub mod subscriptions;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
