pub mod list;
pub mod matching;
pub mod resolve;
