pub mod fibonacci;

pub use fibonacci::{fibonacci, fibonacci_counted, Evaluation};
