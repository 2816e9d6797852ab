pub mod cli;
pub mod cmd;
pub mod core;
pub mod dirs;
pub mod error;
pub mod lock;
pub mod model;
pub mod output;
pub mod storage;
