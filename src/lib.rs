pub mod config;
pub mod err;
pub mod index;
pub mod logging;
pub mod logic;
pub mod messages;
pub mod model;
pub mod sample_data;
pub mod storage;
