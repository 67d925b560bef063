pub mod home;
pub mod catalog;
pub mod professional;
pub mod skill;
pub mod radar;
pub mod stats;
pub mod system;
