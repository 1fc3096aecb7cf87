pub mod activity;
pub mod board;
pub mod config;
pub mod document;
pub mod error;
pub mod git;
pub mod io;
pub mod lane;
pub mod package;
pub mod paths;

pub use error::{BoardError, Result};
pub use lane::Lane;
