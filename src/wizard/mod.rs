//! Multi-step forms.
//!
//! Each flow (student signup, owner signup, new listing) is a [`WizardForm`]
//! driven by the same [`Wizard`] state machine: numbered steps, a readiness
//! check per step gating `advance`, linear back navigation and a single
//! terminal `submit`.

pub mod owner;
pub mod property;
pub mod student;

pub use owner::{AccountKind, OwnerSignupForm};
pub use property::PropertyForm;
pub use student::StudentSignupForm;

use tracing::{debug, info};

use crate::error::WizardError;
use crate::router::Route;

/// A form with numbered steps that produces a record when complete
pub trait WizardForm {
    type Output;

    const NAME: &'static str;
    const STEPS: u8 = 4;

    /// Requirements of `step` the draft does not meet yet. Steps without
    /// requirements always return an empty list.
    fn missing_fields(&self, step: u8) -> Vec<&'static str>;

    fn step_ready(&self, step: u8) -> bool {
        self.missing_fields(step).is_empty()
    }

    /// Build the final record from a complete draft.
    fn finish(&self) -> Result<Self::Output, WizardError>;

    /// Where "back" on the first step leads.
    fn exit_route(&self) -> Route;

    /// Where to go once `output` has been handed off.
    fn destination(&self, output: &Self::Output) -> Route;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retreat {
    Moved(u8),
    Exit(Route),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission<T> {
    pub record: T,
    pub destination: Route,
}

/// Step pointer plus the draft it walks over
#[derive(Debug, Clone)]
pub struct Wizard<F> {
    form: F,
    step: u8,
    submitted: bool,
}

impl<F: WizardForm> Wizard<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            step: 1,
            submitted: false,
        }
    }

    /// Current step, 1-indexed.
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn steps(&self) -> u8 {
        F::STEPS
    }

    pub fn is_final_step(&self) -> bool {
        self.step == F::STEPS
    }

    /// Whether a record has already been built from this draft.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn can_advance(&self) -> bool {
        !self.submitted && self.step < F::STEPS && self.form.step_ready(self.step)
    }

    /// Move to the next step if the current one is complete.
    pub fn advance(&mut self) -> bool {
        if self.submitted || self.step >= F::STEPS {
            return false;
        }
        if !self.form.step_ready(self.step) {
            debug!(
                wizard = F::NAME,
                step = self.step,
                missing = ?self.form.missing_fields(self.step),
                "advance refused"
            );
            return false;
        }
        self.step += 1;
        debug!(wizard = F::NAME, step = self.step, "advanced");
        true
    }

    pub fn retreat(&mut self) -> Retreat {
        if self.step > 1 {
            self.step -= 1;
            debug!(wizard = F::NAME, step = self.step, "went back");
            Retreat::Moved(self.step)
        } else {
            Retreat::Exit(self.form.exit_route())
        }
    }

    /// Validate the whole draft and build the record. Only allowed on the last
    /// step, and only once: a draft that produced a record is closed.
    pub fn submit(&mut self) -> Result<Submission<F::Output>, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if !self.is_final_step() {
            return Err(WizardError::NotAtFinalStep {
                step: self.step,
                steps: F::STEPS,
            });
        }
        if let Some(step) = (1..=F::STEPS).find(|s| !self.form.step_ready(*s)) {
            return Err(WizardError::StepIncomplete { step });
        }

        let record = self.form.finish()?;
        let destination = self.form.destination(&record);
        self.submitted = true;
        info!(wizard = F::NAME, %destination, "submitted");
        Ok(Submission {
            record,
            destination,
        })
    }
}

/// Add `item` to a multi-select, or remove it if already picked. Keeps pick order.
pub(crate) fn toggle_selection(selection: &mut Vec<String>, item: &str) {
    if let Some(pos) = selection.iter().position(|s| s == item) {
        selection.remove(pos);
    } else {
        selection.push(item.to_string());
    }
}
