pub mod history;
pub mod preprocess;
pub mod render;
pub mod search;
pub mod state;
pub mod storage;
pub mod words;
