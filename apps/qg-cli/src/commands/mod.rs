pub mod configure;
pub mod tasks;
