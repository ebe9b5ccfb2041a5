pub mod console;
pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod navigation;
pub mod shared_main;
pub mod views;
