pub mod search;
pub mod serve;
