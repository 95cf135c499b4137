pub mod states;
pub mod params;
pub mod engine;
pub mod trajectory;
pub mod spline;
pub mod tension;
pub mod scenario;
