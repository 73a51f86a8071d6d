mod hosts;
mod monitoring;
mod not_found;

pub use hosts::Hosts;
pub use monitoring::Monitoring;
pub use not_found::NotFound;
