pub mod configuration;

pub use configuration::{AppServiceDependencies, Configuration};
