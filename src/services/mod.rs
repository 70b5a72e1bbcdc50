pub mod engine;
pub mod similarity;
pub mod trainer;
