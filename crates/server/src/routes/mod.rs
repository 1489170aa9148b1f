pub mod catalog;
pub mod recommend;
pub mod system;
