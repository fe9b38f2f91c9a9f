//! Compose-form controller state.
//!
//! [`ComposeState`] orchestrates the three form fields, the attachment
//! list, the host-supplied input-method signal, and the one-shot initial
//! focus request. It owns all form state for the lifetime of the
//! application, so navigating away from the compose screen never loses
//! typed values. The body is edited through a `text_editor` buffer owned
//! by the shell; its text is mirrored into [`ComposeState::body`] after
//! every editor action, so submit and draft logic read fields uniformly.

use serde::{Deserialize, Serialize};

use outbox_core::{is_valid_address_list, MailMessage};

use crate::state::attachments::AttachmentList;
use crate::state::field::FieldState;

/// Identifies one of the compose fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    To,
    Subject,
    Body,
}

impl FormField {
    /// All fields in tab order.
    pub const fn all() -> &'static [FormField] {
        &[Self::To, Self::Subject, Self::Body]
    }

    /// The field after this one in tab order, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::To => Some(Self::Subject),
            Self::Subject => Some(Self::Body),
            Self::Body => None,
        }
    }

    /// The field before this one in tab order, if any.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::To => None,
            Self::Subject => Some(Self::To),
            Self::Body => Some(Self::Subject),
        }
    }
}

/// State of the compose-email form.
#[derive(Debug, Clone)]
pub struct ComposeState {
    pub to: FieldState,
    pub subject: FieldState,
    pub body: FieldState,
    pub attachments: AttachmentList,
    /// Host-supplied on-screen keyboard signal. While true the send row is
    /// hidden so the body can use the full area above the keyboard.
    input_method_visible: bool,
    /// Set once the initial focus request for the To field has been issued
    /// for the current mount.
    initial_focus_requested: bool,
    /// True while an attachment pick is outstanding; prevents stacking
    /// picker dialogs.
    pick_in_flight: bool,
}

impl ComposeState {
    pub fn new() -> Self {
        Self {
            to: FieldState::with_validator(is_valid_address_list),
            subject: FieldState::new(),
            body: FieldState::new(),
            attachments: AttachmentList::new(),
            input_method_visible: false,
            initial_focus_requested: false,
            pick_in_flight: false,
        }
    }

    // =========================================================================
    // SUBMIT
    // =========================================================================

    /// The form is submittable iff the To field holds a valid address list.
    /// Subject, body, and attachments are always optional.
    pub fn can_submit(&self) -> bool {
        self.to.is_valid()
    }

    /// Builds the outgoing message from the current form values.
    ///
    /// Returns `None` when the form is not submittable. The send button is
    /// already disabled in that case; this is the defensive double-check,
    /// not the primary gate.
    pub fn submit(&self) -> Option<MailMessage> {
        if !self.can_submit() {
            return None;
        }
        Some(MailMessage::from_form(
            self.to.value(),
            self.subject.value(),
            self.body.value(),
            self.attachments.to_vec(),
        ))
    }

    // =========================================================================
    // FOCUS
    // =========================================================================

    pub fn field(&self, field: FormField) -> &FieldState {
        match field {
            FormField::To => &self.to,
            FormField::Subject => &self.subject,
            FormField::Body => &self.body,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut FieldState {
        match field {
            FormField::To => &mut self.to,
            FormField::Subject => &mut self.subject,
            FormField::Body => &mut self.body,
        }
    }

    /// The currently focused field, if any.
    pub fn focused_field(&self) -> Option<FormField> {
        FormField::all()
            .iter()
            .copied()
            .find(|&f| self.field(f).is_focused())
    }

    /// Moves focus to `field`, blurring every other field so their deferred
    /// errors surface.
    pub fn focus_field(&mut self, field: FormField) {
        for &other in FormField::all() {
            if other != field && self.field(other).is_focused() {
                self.field_mut(other).set_focused(false);
            }
        }
        self.field_mut(field).set_focused(true);
    }

    /// Blurs whichever field is focused.
    pub fn blur_focused(&mut self) {
        if let Some(field) = self.focused_field() {
            self.field_mut(field).set_focused(false);
        }
    }

    /// Consumes the one-shot initial focus request for the To field.
    ///
    /// Returns true exactly once per mount: callers issue the actual focus
    /// task only on that first call, never on re-renders.
    pub fn take_initial_focus(&mut self) -> bool {
        if self.initial_focus_requested {
            return false;
        }
        self.initial_focus_requested = true;
        self.focus_field(FormField::To);
        true
    }

    /// Re-arms the initial focus request; called when the compose screen is
    /// mounted again after having been left.
    pub fn reset_initial_focus(&mut self) {
        self.initial_focus_requested = false;
    }

    // =========================================================================
    // INPUT METHOD
    // =========================================================================

    pub fn set_input_method_visible(&mut self, visible: bool) {
        self.input_method_visible = visible;
    }

    /// Whether the send row is shown. A pure function of the input-method
    /// signal, recomputed on every view pass rather than stored.
    pub fn show_send_affordance(&self) -> bool {
        !self.input_method_visible
    }

    // =========================================================================
    // ATTACHMENT PICK GUARD
    // =========================================================================

    /// Marks a pick as outstanding. Returns false (and changes nothing) if
    /// one is already in flight.
    pub fn begin_pick(&mut self) -> bool {
        if self.pick_in_flight {
            return false;
        }
        self.pick_in_flight = true;
        true
    }

    /// Clears the outstanding-pick flag when a result (or cancellation)
    /// arrives.
    pub fn finish_pick(&mut self) {
        self.pick_in_flight = false;
    }

    // =========================================================================
    // DRAFT SNAPSHOT
    // =========================================================================

    /// Captures the persistable form values. Transient focus and error
    /// flags are never part of the snapshot.
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            to: self.to.value().to_owned(),
            subject: self.subject.value().to_owned(),
            body: self.body.value().to_owned(),
        }
    }

    /// Restores persisted form values, re-deriving validity.
    pub fn restore_snapshot(&mut self, snapshot: &DraftSnapshot) {
        self.to.restore(snapshot.to.clone());
        self.subject.restore(snapshot.subject.clone());
        self.body.restore(snapshot.body.clone());
    }
}

impl Default for ComposeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted form values, written when the user leaves the compose screen
/// and restored at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl DraftSnapshot {
    /// An all-empty draft is not worth persisting.
    pub fn is_empty(&self) -> bool {
        self.to.is_empty() && self.subject.is_empty() && self.body.is_empty()
    }
}
