pub mod config;
pub mod home;

pub use config::Config;
