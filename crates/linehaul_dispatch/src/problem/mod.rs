pub mod dispatch_problem;
pub mod dollars;
pub mod driver;
pub mod load;
pub mod load_origin_index;
pub mod location;
pub mod miles;
pub mod mph;
