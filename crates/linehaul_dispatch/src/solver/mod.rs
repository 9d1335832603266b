pub mod assignment;
pub mod day_plan;
pub mod dispatch_config;
pub mod driver_state;
pub mod engine;
pub mod score;
