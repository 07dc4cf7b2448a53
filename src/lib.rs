pub mod config;
pub mod diffusion;
pub mod utils;
