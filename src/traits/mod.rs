pub mod migration;

pub use migration::{MigrationStep, StepFn};
