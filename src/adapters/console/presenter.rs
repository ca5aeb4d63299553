use std::fmt::Write as _;
use std::io::Write;
use std::sync::Mutex;

use anyhow::anyhow;
use sf_core::ports::FormPresenterPort;
use sf_core::{AvailabilityStatus, FieldId, FormView, Panel};

const SUCCESS_TEXT: &str = "Account created successfully! Welcome aboard.";

/// Renders every view as a text block on `W`.
pub struct ConsolePresenter<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> FormPresenterPort for ConsolePresenter<W> {
    async fn render(&self, view: &FormView) -> anyhow::Result<()> {
        let text = format_view(view);
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("console writer poisoned"))?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

fn field_label(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "Full name",
        FieldId::Email => "Email",
        FieldId::Password => "Password",
        FieldId::ConfirmPassword => "Confirm password",
        FieldId::Terms => "Terms",
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Text rendering of a view. Only the active panel is shown.
pub fn format_view(view: &FormView) -> String {
    let mut text = String::new();
    match view.panel {
        Panel::Success => {
            let _ = writeln!(text, "== {SUCCESS_TEXT} ==");
            let _ = writeln!(text, "(type 'reset' to register another account)");
        }
        Panel::Error => {
            let message = view.error_message.as_deref().unwrap_or_default();
            let _ = writeln!(text, "== Registration failed ==");
            let _ = writeln!(text, "{message}");
            let _ = writeln!(text, "(type 'retry' to go back to the form)");
        }
        Panel::Form => format_form(view, &mut text),
    }
    text
}

fn format_form(view: &FormView, text: &mut String) {
    let _ = writeln!(text, "-- Sign up --");
    for field in &view.fields {
        if field.field == FieldId::Terms {
            continue;
        }
        let marker = if field.show_error { "!" } else { " " };
        let _ = write!(text, "{marker} {:<17}", field_label(field.field));
        if !field.message.is_empty() {
            let _ = write!(text, " {}", field.message);
        }
        if field.field == FieldId::Email && view.availability != AvailabilityStatus::Idle {
            let _ = write!(text, " {}", view.availability.status_text());
        }
        if field.field == FieldId::Password {
            let _ = write!(
                text,
                " [{}/{}] {}",
                view.strength.score,
                sf_core::form::strength::MAX_SCORE,
                view.strength.label.as_str()
            );
        }
        text.push('\n');
    }

    let _ = write!(
        text,
        "  {} terms  {} newsletter",
        checkbox(view.terms_accepted),
        checkbox(view.newsletter)
    );
    let terms_message = view.message(FieldId::Terms);
    if !terms_message.is_empty() {
        let _ = write!(text, "  {terms_message}");
    }
    text.push('\n');

    let state = if view.loading {
        " (working...)"
    } else if view.submit_enabled {
        ""
    } else {
        " (disabled)"
    };
    let _ = writeln!(text, "  < {} >{state}", view.submit_label);
}
