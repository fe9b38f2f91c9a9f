//! Editable text field state.
//!
//! Each compose field owns one [`FieldState`]: its current value, derived
//! validity, and the focus/error-visibility timing that defers validation
//! errors until the user leaves the field. Showing the error only after a
//! blur avoids flashing "invalid" on every keystroke while the user is
//! still typing, yet surfaces it the moment they move on without fixing it.

/// Validator injected into a field. The default accepts everything, used by
/// fields with no constraint (subject, body).
pub type Validator = fn(&str) -> bool;

fn always_valid(_value: &str) -> bool {
    true
}

/// State of a single editable text field.
///
/// Invariant: an error is never *visible* while the field is focused.
/// `show_error` is a latch set on blur; [`FieldState::error_visible`] is the
/// display predicate (`show_error && !is_focused`) and is what views must
/// consult - the two booleans are never read independently.
#[derive(Debug, Clone)]
pub struct FieldState {
    value: String,
    is_focused: bool,
    is_valid: bool,
    show_error: bool,
    validator: Validator,
}

impl FieldState {
    /// Creates an unconstrained field (always valid).
    pub fn new() -> Self {
        Self::with_validator(always_valid)
    }

    /// Creates a field validated by `validator`.
    ///
    /// Validity is derived immediately, so a validator that rejects the
    /// empty string starts the field out invalid (error still hidden until
    /// a blur).
    pub fn with_validator(validator: Validator) -> Self {
        Self {
            value: String::new(),
            is_focused: false,
            is_valid: validator(""),
            show_error: false,
            validator,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Updates the value and recomputes validity. Error visibility is not
    /// touched here; it changes only on focus transitions.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.is_valid = (self.validator)(&self.value);
    }

    /// Records a focus transition.
    ///
    /// Leaving the field latches the error state (`show_error = !is_valid`).
    /// Repeated calls with the same flag are idempotent.
    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
        if !focused {
            self.show_error = !self.is_valid;
        }
    }

    /// The display predicate for inline error text.
    pub fn error_visible(&self) -> bool {
        self.show_error && !self.is_focused
    }

    /// Restores a persisted value, resetting the transient focus and error
    /// flags. Only the value survives teardown; validity is re-derived.
    pub fn restore(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.is_valid = (self.validator)(&self.value);
        self.is_focused = false;
        self.show_error = false;
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn email_field() -> FieldState {
        FieldState::with_validator(outbox_core::is_valid_address_list)
    }

    #[test]
    fn test_unconstrained_field_is_always_valid() {
        let mut field = FieldState::new();
        assert!(field.is_valid());
        field.set_value("anything at all");
        assert!(field.is_valid());
    }

    #[test]
    fn test_error_deferred_until_blur() {
        let mut field = email_field();
        field.set_focused(true);
        field.set_value("not-an-address");
        assert!(!field.error_visible());

        field.set_focused(false);
        assert!(field.error_visible());
    }

    #[test]
    fn test_error_hidden_while_editing_again() {
        let mut field = email_field();
        field.set_focused(true);
        field.set_value("bad");
        field.set_focused(false);
        assert!(field.error_visible());

        // Returning to the field masks the error while the user edits.
        field.set_focused(true);
        assert!(!field.error_visible());
    }

    #[test]
    fn test_fixing_the_value_clears_error_on_next_blur() {
        let mut field = email_field();
        field.set_focused(true);
        field.set_value("bad");
        field.set_focused(false);
        assert!(field.error_visible());

        field.set_focused(true);
        field.set_value("a@b.com");
        field.set_focused(false);
        assert!(!field.error_visible());
    }

    #[test]
    fn test_set_focused_is_idempotent() {
        let mut field = email_field();
        field.set_focused(true);
        field.set_focused(true);
        assert!(!field.error_visible());

        field.set_value("bad");
        field.set_focused(false);
        let once = field.clone();
        field.set_focused(false);
        assert_eq!(field.error_visible(), once.error_visible());
        assert_eq!(field.is_focused(), once.is_focused());
    }

    #[test]
    fn test_restore_keeps_value_and_clears_transient_flags() {
        let mut field = email_field();
        field.set_focused(true);
        field.set_value("bad");
        field.set_focused(false);
        assert!(field.error_visible());

        field.restore("a@b.com");
        assert_eq!(field.value(), "a@b.com");
        assert!(field.is_valid());
        assert!(!field.is_focused());
        assert!(!field.error_visible());
    }

    #[derive(Debug, Clone)]
    enum Op {
        SetValue(String),
        SetFocused(bool),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z@. ,]{0,12}".prop_map(Op::SetValue),
            any::<bool>().prop_map(Op::SetFocused),
        ]
    }

    proptest! {
        /// The error is never visible while the field is focused, for any
        /// sequence of edits and focus transitions.
        #[test]
        fn error_never_visible_while_focused(ops in prop::collection::vec(op_strategy(), 0..32)) {
            let mut field = email_field();
            for op in ops {
                match op {
                    Op::SetValue(v) => field.set_value(v),
                    Op::SetFocused(f) => field.set_focused(f),
                }
                if field.is_focused() {
                    prop_assert!(!field.error_visible());
                }
            }
        }
    }
}
