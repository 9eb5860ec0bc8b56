// Module exports for models

pub mod flight;
pub mod plant;
pub mod policy;
