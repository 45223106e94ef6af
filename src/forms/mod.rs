pub mod article;
pub mod category;
pub mod user;
pub mod video;
pub mod writer;
