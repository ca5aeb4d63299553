use std::sync::{Arc, Mutex};
use std::time::Duration;

use sf_app::FormOrchestrator;
use sf_core::form::StrengthLabel;
use sf_core::ports::FormPresenterPort;
use sf_core::submission::SUBMISSION_ERROR_MESSAGES;
use sf_core::{
    AvailabilityStatus, Checkbox, EngineConfig, FieldId, FormView, Panel, SubmissionState,
    TaskOutcome, TextField,
};
use sf_infra::random::ScriptedRandom;
use sf_infra::time::TokioTimer;
use tokio::time::Instant;

#[derive(Default)]
struct RecordingPresenter {
    views: Mutex<Vec<FormView>>,
}

impl RecordingPresenter {
    fn last(&self) -> FormView {
        self.views
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one render")
    }

    fn count(&self) -> usize {
        self.views.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl FormPresenterPort for RecordingPresenter {
    async fn render(&self, view: &FormView) -> anyhow::Result<()> {
        self.views.lock().unwrap().push(view.clone());
        Ok(())
    }
}

struct Harness {
    orchestrator: FormOrchestrator,
    presenter: Arc<RecordingPresenter>,
}

fn harness(draws: impl IntoIterator<Item = f64>) -> Harness {
    let presenter = Arc::new(RecordingPresenter::default());
    let orchestrator = FormOrchestrator::new(
        &EngineConfig::default(),
        Arc::new(TokioTimer::new()),
        Arc::new(ScriptedRandom::new(draws)),
        presenter.clone(),
    );
    Harness {
        orchestrator,
        presenter,
    }
}

async fn fill_valid(orchestrator: &FormOrchestrator) {
    orchestrator
        .value_changed(TextField::Name, "Jane Smith")
        .await
        .unwrap();
    orchestrator
        .value_changed(TextField::Email, "jane@example.com")
        .await
        .unwrap();
    orchestrator
        .value_changed(TextField::Password, "SecurePass123!")
        .await
        .unwrap();
    orchestrator
        .value_changed(TextField::ConfirmPassword, "SecurePass123!")
        .await
        .unwrap();
    orchestrator
        .checkbox_toggled(Checkbox::Terms, true)
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn touched_empty_name_reports_required() {
    let Harness { orchestrator, .. } = harness([0.5]);

    let view = orchestrator.blurred(FieldId::Name).await.unwrap();
    assert_eq!(view.message(FieldId::Name), "Full name is required");
    assert!(view.field(FieldId::Name).unwrap().show_error);

    let view = orchestrator
        .value_changed(TextField::Name, "")
        .await
        .unwrap();
    assert_eq!(view.message(FieldId::Name), "Full name is required");
}

#[tokio::test(start_paused = true)]
async fn seven_character_password_scores_medium() {
    let Harness { orchestrator, .. } = harness([0.5]);

    let view = orchestrator
        .value_changed(TextField::Password, "Medium1")
        .await
        .unwrap();
    assert_eq!(view.strength.score, 3);
    assert_eq!(view.strength.label, StrengthLabel::Medium);
    assert_eq!(
        view.message(FieldId::Password),
        "Password must be at least 8 characters"
    );

    let view = orchestrator
        .value_changed(TextField::Password, "Medium12")
        .await
        .unwrap();
    assert_eq!(view.strength.label, StrengthLabel::Strong);
}

#[tokio::test(start_paused = true)]
async fn blurred_email_checks_availability_within_window() {
    // latency 1500ms, verdict taken
    let Harness {
        orchestrator,
        presenter,
    } = harness([0.5, 0.1]);
    orchestrator
        .value_changed(TextField::Email, "user@site.com")
        .await
        .unwrap();

    let start = Instant::now();
    let view = orchestrator.blurred(FieldId::Email).await.unwrap();
    assert_eq!(view.availability, AvailabilityStatus::Checking);
    assert_eq!(
        view.availability.status_text(),
        "⏳ Checking availability..."
    );

    let report = orchestrator.settle().await;
    assert!(start.elapsed() < Duration::from_millis(2500));
    assert_eq!(
        report.availability,
        vec![TaskOutcome::Resolved(AvailabilityStatus::Taken)]
    );

    let view = presenter.last();
    assert_eq!(view.availability, AvailabilityStatus::Taken);
    assert_eq!(
        view.message(FieldId::Email),
        "This email is already registered. Please use a different email."
    );
    assert!(view.field(FieldId::Email).unwrap().show_error);
}

#[tokio::test(start_paused = true)]
async fn available_email_keeps_field_valid() {
    let Harness {
        orchestrator,
        presenter,
    } = harness([0.0, 0.8]);
    orchestrator
        .value_changed(TextField::Email, "user@site.com")
        .await
        .unwrap();
    orchestrator.blurred(FieldId::Email).await.unwrap();
    orchestrator.settle().await;

    let view = presenter.last();
    assert_eq!(view.availability.status_text(), "✓ Email available");
    assert_eq!(view.message(FieldId::Email), "");
}

#[tokio::test(start_paused = true)]
async fn blank_email_blur_does_not_check() {
    let Harness { orchestrator, .. } = harness([0.5]);

    let view = orchestrator.blurred(FieldId::Email).await.unwrap();
    assert_eq!(view.availability, AvailabilityStatus::Idle);
    assert_eq!(view.message(FieldId::Email), "Email address is required");
    assert!(orchestrator.settle().await.availability.is_empty());
}

#[tokio::test(start_paused = true)]
async fn submission_shows_processing_then_error_from_pool() {
    // latency 1500ms, failure roll, message index 2
    let Harness {
        orchestrator,
        presenter,
    } = harness([0.0, 0.1, 0.5]);
    fill_valid(&orchestrator).await;
    assert!(presenter.last().submit_enabled);

    let start = Instant::now();
    let view = orchestrator.submit().await.unwrap();
    assert_eq!(view.submit_label, "Creating Account...");
    assert!(view.loading);
    assert!(!view.submit_enabled);

    let report = orchestrator.settle().await;
    assert!(start.elapsed() < Duration::from_millis(4500));
    assert_eq!(report.submission.len(), 1);

    let view = presenter.last();
    assert_eq!(view.panel, Panel::Error);
    let message = view.error_message.expect("error message");
    assert!(SUBMISSION_ERROR_MESSAGES.contains(&message.as_str()));
    assert_eq!(message, "Account creation failed. Please try again.");
}

#[tokio::test(start_paused = true)]
async fn successful_submission_shows_success_panel() {
    let Harness {
        orchestrator,
        presenter,
    } = harness([0.99, 0.9]);
    fill_valid(&orchestrator).await;

    let start = Instant::now();
    orchestrator.submit().await.unwrap();
    let report = orchestrator.settle().await;

    assert!(start.elapsed() < Duration::from_millis(4500));
    assert!(start.elapsed() >= Duration::from_millis(4400));
    assert_eq!(
        report.submission,
        vec![TaskOutcome::Resolved(SubmissionState::Success)]
    );
    assert_eq!(presenter.last().panel, Panel::Success);
}

#[tokio::test(start_paused = true)]
async fn confirm_mismatch_clears_once_values_match() {
    let Harness { orchestrator, .. } = harness([0.5]);

    orchestrator
        .value_changed(TextField::Password, "Y")
        .await
        .unwrap();
    let view = orchestrator
        .value_changed(TextField::ConfirmPassword, "X")
        .await
        .unwrap();
    assert_eq!(view.message(FieldId::ConfirmPassword), "Passwords do not match");

    let view = orchestrator
        .value_changed(TextField::ConfirmPassword, "Y")
        .await
        .unwrap();
    assert_eq!(view.message(FieldId::ConfirmPassword), "");
}

#[tokio::test(start_paused = true)]
async fn changing_password_revalidates_confirmation() {
    let Harness { orchestrator, .. } = harness([0.5]);
    fill_valid(&orchestrator).await;

    let view = orchestrator
        .value_changed(TextField::Password, "OtherPass123!")
        .await
        .unwrap();
    assert_eq!(view.message(FieldId::ConfirmPassword), "Passwords do not match");
    assert!(!view.submit_enabled);
}

#[tokio::test(start_paused = true)]
async fn second_blur_supersedes_first_check() {
    // first check: 2300ms available, second check: 500ms taken
    let Harness {
        orchestrator,
        presenter,
    } = harness([0.9, 0.9, 0.0, 0.1]);
    orchestrator
        .value_changed(TextField::Email, "user@site.com")
        .await
        .unwrap();
    orchestrator.blurred(FieldId::Email).await.unwrap();
    orchestrator.blurred(FieldId::Email).await.unwrap();

    let report = orchestrator.settle().await;
    assert_eq!(
        report.availability,
        vec![
            TaskOutcome::Superseded,
            TaskOutcome::Resolved(AvailabilityStatus::Taken)
        ]
    );
    assert_eq!(presenter.last().availability, AvailabilityStatus::Taken);
    assert_eq!(
        orchestrator.view().await.availability,
        AvailabilityStatus::Taken
    );
}

#[tokio::test(start_paused = true)]
async fn editing_email_during_check_discards_result() {
    let Harness { orchestrator, .. } = harness([0.5, 0.1]);
    orchestrator
        .value_changed(TextField::Email, "user@site.com")
        .await
        .unwrap();
    orchestrator.blurred(FieldId::Email).await.unwrap();

    let view = orchestrator
        .value_changed(TextField::Email, "other@site.com")
        .await
        .unwrap();
    assert_eq!(view.availability, AvailabilityStatus::Idle);

    let report = orchestrator.settle().await;
    assert_eq!(report.availability, vec![TaskOutcome::Superseded]);

    let view = orchestrator.view().await;
    assert_eq!(view.availability, AvailabilityStatus::Idle);
    assert_eq!(view.message(FieldId::Email), "");
}

#[tokio::test(start_paused = true)]
async fn taken_email_blocks_submission() {
    let Harness { orchestrator, .. } = harness([0.5, 0.1]);
    fill_valid(&orchestrator).await;
    orchestrator.blurred(FieldId::Email).await.unwrap();
    orchestrator.settle().await;

    let view = orchestrator.submit().await.unwrap();
    assert!(!view.submit_enabled);
    assert!(!view.loading);
    assert!(orchestrator.settle().await.submission.is_empty());
}

#[tokio::test(start_paused = true)]
async fn reset_during_submission_discards_result() {
    let Harness {
        orchestrator,
        presenter,
    } = harness([0.5, 0.9]);
    fill_valid(&orchestrator).await;
    orchestrator.submit().await.unwrap();

    let view = orchestrator.reset().await.unwrap();
    assert_eq!(view.panel, Panel::Form);
    assert!(!view.loading);
    assert_eq!(view.submit_label, "Create Account");

    let renders = presenter.count();
    let report = orchestrator.settle().await;
    assert_eq!(report.submission, vec![TaskOutcome::Superseded]);
    assert_eq!(presenter.count(), renders);

    let snapshot = orchestrator.snapshot().await;
    assert_eq!(snapshot.submission(), &SubmissionState::Idle);
    assert_eq!(snapshot.value(TextField::Name), "");
}

#[tokio::test(start_paused = true)]
async fn retry_keeps_values_and_reenables_submit() {
    let Harness {
        orchestrator,
        presenter,
    } = harness([0.0, 0.1, 0.0]);
    fill_valid(&orchestrator).await;
    orchestrator.submit().await.unwrap();
    orchestrator.settle().await;
    assert_eq!(presenter.last().panel, Panel::Error);

    let view = orchestrator.retry().await.unwrap();
    assert_eq!(view.panel, Panel::Form);
    assert!(view.submit_enabled);

    let snapshot = orchestrator.snapshot().await;
    assert_eq!(snapshot.value(TextField::Name), "Jane Smith");
    assert_eq!(snapshot.value(TextField::Email), "jane@example.com");
    assert!(snapshot.terms_accepted());
}

#[tokio::test(start_paused = true)]
async fn reset_after_success_returns_fresh_form() {
    let Harness { orchestrator, .. } = harness([0.0, 0.9]);
    fill_valid(&orchestrator).await;
    orchestrator
        .checkbox_toggled(Checkbox::Newsletter, true)
        .await
        .unwrap();
    orchestrator.submit().await.unwrap();
    orchestrator.settle().await;

    let view = orchestrator.reset().await.unwrap();
    assert_eq!(view.panel, Panel::Form);
    assert!(!view.submit_enabled);
    assert!(!view.terms_accepted);
    assert!(!view.newsletter);
    assert_eq!(view.strength.label, StrengthLabel::None);
    assert!(view.fields.iter().all(|field| field.message.is_empty()));
    assert!(view.fields.iter().all(|field| !field.show_error));
}

#[tokio::test(start_paused = true)]
async fn newsletter_never_affects_eligibility() {
    let Harness { orchestrator, .. } = harness([0.5]);
    fill_valid(&orchestrator).await;

    let on = orchestrator
        .checkbox_toggled(Checkbox::Newsletter, true)
        .await
        .unwrap();
    let off = orchestrator
        .checkbox_toggled(Checkbox::Newsletter, false)
        .await
        .unwrap();
    assert!(on.submit_enabled);
    assert!(off.submit_enabled);
}

#[tokio::test(start_paused = true)]
async fn unchecking_terms_disables_submit() {
    let Harness { orchestrator, .. } = harness([0.5]);
    fill_valid(&orchestrator).await;

    let view = orchestrator
        .checkbox_toggled(Checkbox::Terms, false)
        .await
        .unwrap();
    assert!(!view.submit_enabled);
    assert_eq!(
        view.message(FieldId::Terms),
        "You must accept the terms and conditions"
    );
}
