//! Page state and the reducer that drives it.
//!
//! `Page::dispatch` is pure with respect to the outside world: anything that
//! has to leave the process (the recommendation call, the failure alert) is
//! returned as an [`Effect`] for the caller to run.

use crate::{
    client::RecommendationError,
    form::{Field, FormState},
    models::{Gender, RecommendationRequest, Recommendations},
    notify::FailureNotifier,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const FAILURE_MESSAGE: &str = "Failed to get recommendations from backend.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub is_loading: bool,
    pub recommendations: Option<Recommendations>,
    pub received_at: Option<DateTime<Utc>>,
    pub last_request_id: Option<Uuid>,
}

#[derive(Debug)]
pub enum Action {
    SetField(Field, String),
    SetGender(Gender),
    AddStyle(String),
    AddPendingStyle,
    RemoveStyle(String),
    SubmitStart,
    SubmitSuccess(Recommendations),
    SubmitFailure(RecommendationError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch(RecommendationRequest),
    Notify(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub form: FormState,
    pub submission: SubmissionState,
}

impl Page {
    pub fn can_submit(&self) -> bool { self.form.has_clothing_item() && !self.submission.is_loading }

    /// Results are hidden while a newer request is in flight.
    pub fn visible_recommendations(&self) -> Option<&Recommendations> {
        if self.submission.is_loading { None } else { self.submission.recommendations.as_ref() }
    }

    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::SetField(field, value) => { self.form.set_field(field, value); None }
            Action::SetGender(gender) => { self.form.set_gender(gender); None }
            Action::AddStyle(tag) => { self.form.add_style(&tag); None }
            Action::AddPendingStyle => { self.form.add_pending_style(); None }
            Action::RemoveStyle(tag) => { self.form.remove_style(&tag); None }
            Action::SubmitStart => self.start(),
            Action::SubmitSuccess(payload) => {
                if !self.submission.is_loading {
                    warn!("Ignoring recommendations that arrived with no request in flight");
                    return None;
                }
                self.submission.recommendations = Some(payload);
                self.submission.received_at = Some(Utc::now());
                self.submission.is_loading = false;
                None
            }
            Action::SubmitFailure(err) => {
                if !self.submission.is_loading {
                    warn!("Ignoring failure that arrived with no request in flight: {}", err);
                    return None;
                }
                warn!(request_id = ?self.submission.last_request_id, "❌ Recommendation call failed: {}", err);
                self.submission.is_loading = false;
                Some(Effect::Notify(FAILURE_MESSAGE))
            }
        }
    }

    fn start(&mut self) -> Option<Effect> {
        if !self.form.has_clothing_item() {
            debug!("Submit ignored: clothing item is empty");
            return None;
        }
        if self.submission.is_loading {
            debug!("Submit ignored: a request is already in flight");
            return None;
        }
        let request = RecommendationRequest {
            request_id: Uuid::new_v4(),
            clothing_item: self.form.clothing_item.clone(),
            color: self.form.color.clone(),
            styles: self.form.selected_styles().to_vec(),
            gender: self.form.gender,
        };
        info!(request_id = %request.request_id, "🚀 Requesting recommendations for: {}", request.clothing_item);
        self.submission.is_loading = true;
        self.submission.last_request_id = Some(request.request_id);
        Some(Effect::Fetch(request))
    }
}

pub fn run_notify(notifier: &dyn FailureNotifier, message: &str) {
    if let Err(e) = notifier.notify(message) {
        warn!("Failure notification could not be shown: {}", e);
    }
}
