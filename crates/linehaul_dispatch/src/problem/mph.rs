use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
pub struct Mph(f64);

impl Mph {
    pub fn new(value: f64) -> Self {
        Mph(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
