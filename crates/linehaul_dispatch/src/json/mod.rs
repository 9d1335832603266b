pub mod scenario_input;
pub mod schema;
