pub mod document;
pub mod link;
