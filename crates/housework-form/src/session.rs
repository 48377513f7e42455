//! Dialog Session
//!
//! One opening of the done-housework dialog: seeded form values, validation
//! errors and the `Idle -> Submitting -> Closed` lifecycle.

use std::future::Future;
use std::pin::Pin;

use crate::config::{ClosePolicy, FormConfig};
use crate::error::FormError;
use crate::form::{DoneHouseworkForm, Field, FormRules, ValidationErrors};
use crate::models::{DoneHouseworkRequest, Housework, HouseworkId, MemberId};
use crate::reconcile::{reconcile, AlreadyAssigned};

/// Future returned by a completion callback
pub type CompletionFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Closed,
}

/// Already-assigned members, recomputed only when the housework snapshot changes
#[derive(Debug, Clone, Default)]
pub struct AssignedCache {
    key: Option<Housework>,
    assigned: AlreadyAssigned,
}

impl AssignedCache {
    pub fn get_or_compute(&mut self, housework: &Housework) -> &AlreadyAssigned {
        if self.key.as_ref() != Some(housework) {
            log::debug!("[DIALOG] Deriving assigned members for housework {}", housework.id);
            self.assigned = AlreadyAssigned::from_housework(housework);
            self.key = Some(housework.clone());
        }
        &self.assigned
    }
}

#[derive(Debug, Clone)]
pub struct DialogSession {
    housework_id: HouseworkId,
    assigned: AlreadyAssigned,
    form: DoneHouseworkForm,
    rules: FormRules,
    close_policy: ClosePolicy,
    phase: Phase,
    errors: ValidationErrors,
    /// Set by the first blocked submit; fields revalidate on change afterwards
    revalidate: bool,
    completion_error: Option<String>,
}

impl DialogSession {
    pub fn open(housework: &Housework, cache: &mut AssignedCache, config: &FormConfig) -> Self {
        let assigned = cache.get_or_compute(housework).clone();
        Self {
            housework_id: housework.id,
            form: DoneHouseworkForm::seeded(housework, &assigned),
            assigned,
            rules: FormRules::from_labels(&config.labels),
            close_policy: config.close_policy,
            phase: Phase::Idle,
            errors: ValidationErrors::default(),
            revalidate: false,
            completion_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    pub fn form(&self) -> &DoneHouseworkForm {
        &self.form
    }

    pub fn assigned(&self) -> &AlreadyAssigned {
        &self.assigned
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.message(field)
    }

    /// Message of the last failed completion, kept when the dialog stays open
    pub fn completion_error(&self) -> Option<&str> {
        self.completion_error.as_deref()
    }

    pub fn set_status(&mut self, status: bool) {
        if self.phase == Phase::Idle {
            self.form.set_status(status);
            self.refresh_errors();
        }
    }

    pub fn toggle_member(&mut self, id: MemberId) {
        if self.phase == Phase::Idle {
            self.form.toggle_member(id);
            self.refresh_errors();
        }
    }

    fn refresh_errors(&mut self) {
        if self.revalidate {
            self.errors = self.rules.validate(&self.form).err().unwrap_or_default();
        }
    }

    /// Validate the raw selection and start submitting the reconciled delta
    pub fn begin_submit(&mut self) -> Result<DoneHouseworkRequest, FormError> {
        if self.phase != Phase::Idle {
            return Err(FormError::NotIdle(self.phase));
        }
        if let Err(errors) = self.rules.validate(&self.form) {
            self.revalidate = true;
            self.errors = errors.clone();
            return Err(FormError::Validation(errors));
        }
        self.errors = ValidationErrors::default();
        self.completion_error = None;
        self.phase = Phase::Submitting;

        let request = DoneHouseworkRequest {
            housework_id: self.housework_id,
            status: self.form.status,
            member_ids: reconcile(&self.assigned, &self.form.member_ids),
        };
        log::debug!(
            "[DIALOG] Submitting housework {} with {} new member(s)",
            request.housework_id,
            request.member_ids.len()
        );
        Ok(request)
    }

    /// Finish a submission with the callback outcome
    pub fn settle(&mut self, result: Result<(), String>) -> Phase {
        if self.phase != Phase::Submitting {
            return self.phase;
        }
        self.phase = match result {
            Ok(()) => Phase::Closed,
            Err(message) => {
                log::warn!("[DIALOG] Completing housework {} failed: {}", self.housework_id, message);
                match self.close_policy {
                    ClosePolicy::Always => Phase::Closed,
                    ClosePolicy::OnSuccess => {
                        self.completion_error = Some(message);
                        Phase::Idle
                    }
                }
            }
        };
        self.phase
    }

    /// In-flight submissions cannot be cancelled
    pub fn cancel(&mut self) -> Phase {
        if self.phase == Phase::Idle {
            self.phase = Phase::Closed;
        }
        self.phase
    }
}
