mod constants;
mod constants_config;

pub use constants::*;
pub use constants_config::*;

#[cfg(test)]
mod constants_config_tests;
