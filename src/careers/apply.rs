// =============================================================================
// Talevo Web - Apply Modal State
// =============================================================================
// Table of Contents:
// 1. Labels
// 2. Apply Modal
// =============================================================================

use crate::api::SubmitOutcome;
use super::card::ApplyTarget;

// -----------------------------------------------------------------------------
// 1. Labels
// -----------------------------------------------------------------------------

pub const SUBMIT_LABEL: &str = "Başvuruyu Gönder";
pub const BUSY_LABEL: &str = "Gönderiliyor...";

// -----------------------------------------------------------------------------
// 2. Apply Modal
// -----------------------------------------------------------------------------

/// State of `applyModal`: visibility, target, panels and submit control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyModal {
    pub open: bool,
    pub target: Option<ApplyTarget>,
    pub form_visible: bool,
    pub success_visible: bool,
    pub error: Option<String>,
    pub submitting: bool,
}

impl ApplyModal {
    /// Show the form for `target`, clearing any earlier result.
    pub fn open(&mut self, target: ApplyTarget) {
        self.target = Some(target);
        self.form_visible = true;
        self.success_visible = false;
        self.error = None;
        self.open = true;
    }

    /// Hide the dialog. Field values in the form are left alone.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Enter the busy state. Returns `false` if a submission is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        self.submitting = false;

        match outcome {
            SubmitOutcome::Accepted => {
                self.form_visible = false;
                self.success_visible = true;
                self.error = None;
            }
            SubmitOutcome::Rejected { .. } | SubmitOutcome::Unreachable => {
                self.error = outcome.message().map(str::to_string);
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.submitting
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn position_id(&self) -> &str {
        self.target.as_ref().map(|t| t.position_id.as_str()).unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.target.as_ref().map(|t| t.title.as_str()).unwrap_or_default()
    }

    pub fn company(&self) -> &str {
        self.target.as_ref().map(|t| t.company.as_str()).unwrap_or_default()
    }
}
