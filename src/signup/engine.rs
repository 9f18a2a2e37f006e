//! Step-by-step progression through the sign-up form
//!
//! The engine owns the collected values, the messages for the step last
//! validated, and the cursor. Each user action maps to one method call; the
//! returned outcome tells the caller whether it has to leave the flow or
//! create the account. The engine itself never performs I/O.

use serde::Serialize;
use zeroize::Zeroizing;

use super::form::{ErrorMap, FormState, SignupSeed};
use super::step::{signup_steps, Field, Step, StepRule};
use crate::validation::{strip_non_digits, validate_date_of_birth, validate_email};

/// How strictly the date-of-birth step is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DobPolicy {
    /// Month, day and year only need to be selected
    #[default]
    PresenceOnly,
    /// The selection must also be a real, past calendar date
    Calendar,
}

/// Result of pressing "next"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvanceOutcome {
    /// The current step has errors; the cursor did not move
    Blocked,
    /// The cursor moved to the following step
    Advanced,
    /// The last step passed; the caller should create the account
    Complete,
}

/// Result of pressing "back"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetreatOutcome {
    /// The cursor moved to the preceding step
    MovedBack,
    /// Already on the first step; the caller should leave the flow
    ExitRequested,
}

/// Render-ready view of the engine state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub cursor: usize,
    pub step_count: usize,
    pub step: Step,
    pub values: FormState,
    pub errors: ErrorMap,
    pub is_first: bool,
    pub is_last: bool,
    pub continue_label: &'static str,
}

/// Multi-step form engine
#[derive(Debug, Clone)]
pub struct StepFormEngine {
    steps: Vec<Step>,
    form: FormState,
    errors: ErrorMap,
    cursor: usize,
    dob_policy: DobPolicy,
    password: Option<Zeroizing<String>>,
}

impl StepFormEngine {
    /// Create an engine over `steps`; `None` if there are no steps
    pub fn new(steps: Vec<Step>) -> Option<Self> {
        Self::with_seed(steps, SignupSeed::default())
    }

    /// Create an engine with values carried in from a previous screen
    pub fn with_seed(steps: Vec<Step>, seed: SignupSeed) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self::seeded(steps, seed))
    }

    /// The standard six-step sign-up flow
    pub fn signup(seed: SignupSeed) -> Self {
        Self::seeded(signup_steps(), seed)
    }

    // Callers guarantee `steps` is non-empty.
    fn seeded(steps: Vec<Step>, seed: SignupSeed) -> Self {
        let mut form = FormState::new();
        if let Some(email) = seed.email {
            form.set(Field::Email, email);
        }

        Self {
            steps,
            form,
            errors: ErrorMap::new(),
            cursor: 0,
            dob_policy: DobPolicy::default(),
            password: seed.password,
        }
    }

    /// Choose how the date-of-birth step is checked
    pub fn with_dob_policy(mut self, policy: DobPolicy) -> Self {
        self.dob_policy = policy;
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.cursor]
    }

    pub fn form_state(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn dob_policy(&self) -> DobPolicy {
        self.dob_policy
    }

    /// The seeded password, if any
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    pub fn is_first_step(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.cursor == self.steps.len() - 1
    }

    /// Store a value and drop any message recorded for that same field
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Validate one step, replacing the error map with its result
    ///
    /// Returns true iff the step produced no messages. Indices past the end
    /// validate nothing.
    pub fn validate_step(&mut self, step_index: usize) -> bool {
        let mut errors = ErrorMap::new();
        if let Some(step) = self.steps.get(step_index) {
            if let Some((field, message)) = check_rule(step.rule, &self.form, self.dob_policy) {
                errors.insert(field, message);
            }
        }

        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    /// Try to move to the next step
    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.validate_step(self.cursor) {
            return AdvanceOutcome::Blocked;
        }

        if self.is_last_step() {
            AdvanceOutcome::Complete
        } else {
            self.cursor += 1;
            AdvanceOutcome::Advanced
        }
    }

    /// Move to the previous step, or ask to leave from the first one
    pub fn retreat(&mut self) -> RetreatOutcome {
        if self.cursor > 0 {
            self.cursor -= 1;
            RetreatOutcome::MovedBack
        } else {
            RetreatOutcome::ExitRequested
        }
    }

    /// Capture the current state for rendering
    pub fn snapshot(&self) -> FormSnapshot {
        let is_last = self.is_last_step();
        FormSnapshot {
            cursor: self.cursor,
            step_count: self.steps.len(),
            step: *self.current_step(),
            values: self.form.clone(),
            errors: self.errors.clone(),
            is_first: self.is_first_step(),
            is_last,
            continue_label: if is_last {
                "Continue to Login"
            } else {
                "Continue"
            },
        }
    }
}

/// Run one step rule, returning the field and message of the first failure
fn check_rule(
    rule: StepRule,
    form: &FormState,
    dob_policy: DobPolicy,
) -> Option<(Field, &'static str)> {
    match rule {
        StepRule::Name => form
            .get(Field::Name)
            .trim()
            .is_empty()
            .then_some((Field::Name, "Name is required")),
        StepRule::Email => {
            let email = form.get(Field::Email);
            if email.trim().is_empty() {
                Some((Field::Email, "Email is required"))
            } else if !validate_email(email) {
                Some((Field::Email, "Please enter a valid email"))
            } else {
                None
            }
        }
        StepRule::PhoneNumber => {
            let phone = form.get(Field::PhoneNumber);
            if phone.trim().is_empty() {
                Some((Field::PhoneNumber, "Phone number is required"))
            } else if strip_non_digits(phone).len() != 10 {
                Some((
                    Field::PhoneNumber,
                    "Please enter a valid 10-digit phone number",
                ))
            } else {
                None
            }
        }
        StepRule::City => form
            .get(Field::City)
            .trim()
            .is_empty()
            .then_some((Field::City, "City is required")),
        StepRule::Gender => form
            .get(Field::Gender)
            .is_empty()
            .then_some((Field::Gender, "Please select your gender")),
        StepRule::DateOfBirth => {
            let (month, day, year) = (
                form.get(Field::Month),
                form.get(Field::Day),
                form.get(Field::Year),
            );
            if month.is_empty() || day.is_empty() || year.is_empty() {
                Some((
                    Field::DateOfBirth,
                    "Please select your complete date of birth",
                ))
            } else if dob_policy == DobPolicy::Calendar && !validate_date_of_birth(month, day, year)
            {
                Some((Field::DateOfBirth, "Please enter a valid date of birth"))
            } else {
                None
            }
        }
    }
}
