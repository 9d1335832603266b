pub mod economics;
pub mod history;
pub mod problem;
pub mod scenario;
pub mod solver;
pub mod timing;
mod utils;

pub mod json;

#[cfg(test)]
pub(crate) mod test_utils;
