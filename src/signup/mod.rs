//! Multi-step sign-up form
//!
//! Step definitions, the collected form state, and the engine that validates
//! each step and moves the cursor. Account creation happens outside this
//! module, once [`StepFormEngine::advance`] reports [`AdvanceOutcome::Complete`].

pub mod engine;
pub mod form;
pub mod step;

pub use engine::{AdvanceOutcome, DobPolicy, FormSnapshot, RetreatOutcome, StepFormEngine};
pub use form::{ErrorMap, FormState, SignupSeed};
pub use step::{signup_steps, Field, Step, StepRule, UnknownField, GENDERS, SIGNUP_STEPS};
