pub mod behaviors;
pub mod decay;
pub mod reactions;
