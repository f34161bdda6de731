pub mod household_manager;
pub mod services;
pub mod utils;
