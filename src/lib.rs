// Plant Flights Library
// Flight-date scheduling for plant storefront listings

pub mod models;
pub mod services;
pub mod utils;
