pub mod radar;
pub mod search;
pub mod skill;
pub mod stats;
pub mod catalog;
