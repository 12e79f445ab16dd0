pub mod states;
pub mod params;
pub mod dynamics;
pub mod integrator;
pub mod transform;
pub mod trajectory;
pub mod scenario;
