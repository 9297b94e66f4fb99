pub mod clarify;
pub mod composer;
pub mod jongseong;
pub mod unicode;
pub mod word;
