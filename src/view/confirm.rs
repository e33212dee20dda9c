//! Delete-confirmation helper: prompt the user, conditionally submit a form,
//! always cancel the default action.

use super::Page;

/// Prompt shown when the caller supplies no message.
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Sei sicuro di voler eliminare?";

/// Blocking yes/no prompt capability supplied by the host shell.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Ask for confirmation and submit the form with `form_id` if accepted.
///
/// Always returns `false` so the result can be fed straight into a "cancel the
/// default action" slot, whatever the user answered. A missing form is a
/// no-op.
pub fn confirm_delete(
    prompt: &dyn ConfirmPrompt,
    page: &mut Page,
    message: Option<&str>,
    form_id: &str,
) -> bool {
    if prompt.confirm(message.unwrap_or(DEFAULT_CONFIRM_MESSAGE)) {
        if let Some(form) = page.form_mut(form_id) {
            form.submit();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::FormElement;

    struct StubPrompt {
        answer: bool,
    }

    impl ConfirmPrompt for StubPrompt {
        fn confirm(&self, _message: &str) -> bool {
            self.answer
        }
    }

    struct RecordingPrompt {
        seen: std::cell::RefCell<Vec<String>>,
    }

    impl ConfirmPrompt for RecordingPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.seen.borrow_mut().push(message.to_string());
            false
        }
    }

    fn page_with_form(id: &str) -> Page {
        let mut page = Page::new();
        page.forms.push(FormElement::new(id));
        page
    }

    #[test]
    fn returns_false_regardless_of_answer() {
        for answer in [true, false] {
            let mut page = page_with_form("delete-form");
            let prompt = StubPrompt { answer };
            assert!(!confirm_delete(&prompt, &mut page, None, "delete-form"));
        }
    }

    #[test]
    fn submits_form_only_when_confirmed() {
        let mut page = page_with_form("delete-form");
        confirm_delete(&StubPrompt { answer: false }, &mut page, None, "delete-form");
        assert!(!page.forms[0].submitted);

        confirm_delete(&StubPrompt { answer: true }, &mut page, None, "delete-form");
        assert!(page.forms[0].submitted);
    }

    #[test]
    fn missing_form_is_a_noop() {
        let mut page = Page::new();
        assert!(!confirm_delete(
            &StubPrompt { answer: true },
            &mut page,
            None,
            "no-such-form"
        ));
    }

    #[test]
    fn default_message_applies_when_none_given() {
        let prompt = RecordingPrompt {
            seen: std::cell::RefCell::new(Vec::new()),
        };
        let mut page = Page::new();
        confirm_delete(&prompt, &mut page, None, "f");
        confirm_delete(&prompt, &mut page, Some("Eliminare questo asset?"), "f");
        assert_eq!(
            *prompt.seen.borrow(),
            vec![
                DEFAULT_CONFIRM_MESSAGE.to_string(),
                "Eliminare questo asset?".to_string()
            ]
        );
    }
}
