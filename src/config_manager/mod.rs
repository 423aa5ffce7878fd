pub mod main;
pub mod system;
pub mod line;
pub mod translator;
pub mod utils;

pub use main::Config;
