//! Plan creation: the configuration wizard and the weekly schedule generator

pub mod generator;
pub mod interactive;
pub mod wizard;

pub use generator::{build_schedule, generate};
pub use interactive::run_interactive;
pub use wizard::{PlanWizard, WizardError, WizardStep};
