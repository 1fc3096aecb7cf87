pub mod accept;
pub mod history;
pub mod list;
pub mod merge;
pub mod mv;
pub mod rollback;
