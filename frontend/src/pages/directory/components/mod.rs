pub mod filter;
pub mod list;
pub mod search;
