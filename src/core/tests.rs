#[cfg(test)]
mod tests {
    use crate::core::effects::{
        anchor_scroll_top, navbar_elevated, parallax_offset, ripple_origin, stagger_delay_ms,
    };
    use crate::core::submit::{SubmissionError, SubmitWaitlist};
    use crate::core::waitlist::{
        ErrorBanner, FormPhase, JoinedStore, MemoryStore, RawSignup, SubmissionRecord,
        ValidationError, WaitlistController, is_valid_email, validate,
    };

    fn signup(name: &str, email: &str, specialty: &str) -> RawSignup {
        RawSignup {
            name: name.to_owned(),
            email: email.to_owned(),
            specialty: specialty.to_owned(),
        }
    }

    fn valid_signup() -> RawSignup {
        signup("Ada Lovelace", "ada@clinic.example", "Cardiology")
    }

    // ===== Validation =====

    #[test]
    fn test_validate_rejects_empty_fields() {
        let cases = [
            signup("", "ada@clinic.example", "Cardiology"),
            signup("Ada", "", "Cardiology"),
            signup("Ada", "ada@clinic.example", ""),
            signup("   ", "ada@clinic.example", "Cardiology"),
            signup("Ada", "\t\n", "Cardiology"),
            signup("Ada", "ada@clinic.example", "  "),
        ];
        for input in cases {
            assert_eq!(validate(&input), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn test_validate_missing_field_wins_over_bad_email() {
        // Short-circuit: presence is checked before email shape
        let input = signup("", "not-an-email", "Cardiology");
        assert_eq!(validate(&input), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_validate_rejects_bad_email_shapes() {
        for email in ["foo", "foo@bar", "@bar.com", "foo@", "a b@c.dk", "a@b@c.dk", "foo@bar."] {
            let input = signup("Ada", email, "Cardiology");
            assert_eq!(validate(&input), Err(ValidationError::InvalidEmail));
        }
    }

    #[test]
    fn test_validate_accepts_good_input_and_trims() {
        let input = signup("  Ada Lovelace  ", " ada@clinic.example ", "Cardiology");
        let record = validate(&input).unwrap();
        assert_eq!(
            record,
            SubmissionRecord {
                name: "Ada Lovelace".into(),
                email: "ada@clinic.example".into(),
                specialty: "Cardiology".into(),
            }
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("doc@mail.example.com"));
        assert!(is_valid_email("first.last@clinic.example"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("@bar.com"));
        assert!(!is_valid_email("foo@.com"));
        assert!(!is_valid_email("a@b .co"));
    }

    // ===== Controller state machine =====

    #[test]
    fn test_validation_failure_keeps_form_editable() {
        let mut controller = WaitlistController::new(MemoryStore::default());

        let outcome = controller.begin_submit(&signup("Ada", "foo", "Cardiology"));
        assert_eq!(outcome, Some(Err(ValidationError::InvalidEmail)));
        assert_eq!(controller.phase(), FormPhase::Editable);

        // Still resubmittable
        let outcome = controller.begin_submit(&valid_signup());
        assert!(matches!(outcome, Some(Ok(_))));
    }

    #[test]
    fn test_successful_submission_is_persisted_and_terminal() {
        let store = MemoryStore::default();
        let mut controller = WaitlistController::new(store.clone());

        let record = controller.begin_submit(&valid_signup()).unwrap().unwrap();
        assert_eq!(record.specialty, "Cardiology");
        assert_eq!(controller.phase(), FormPhase::Submitting);

        assert_eq!(controller.complete_submit(Ok(())), FormPhase::Success);
        assert!(store.load());

        // Success is terminal: further submits are ignored
        assert_eq!(controller.begin_submit(&valid_signup()), None);
        assert_eq!(controller.phase(), FormPhase::Success);
    }

    #[test]
    fn test_revisit_after_join_skips_the_form() {
        let store = MemoryStore::default();
        let mut controller = WaitlistController::new(store.clone());
        controller.begin_submit(&valid_signup()).unwrap().unwrap();
        controller.complete_submit(Ok(()));

        // Simulated page reload: fresh controller over the same storage
        let mut reloaded = WaitlistController::new(store);
        assert_eq!(reloaded.phase(), FormPhase::Editable);
        reloaded.restore();
        assert_eq!(reloaded.phase(), FormPhase::Success);
    }

    #[test]
    fn test_restore_without_flag_keeps_form_editable() {
        let mut controller = WaitlistController::new(MemoryStore::default());
        controller.restore();
        assert_eq!(controller.phase(), FormPhase::Editable);
    }

    #[test]
    fn test_rejected_submission_restores_editability() {
        let store = MemoryStore::default();
        let mut controller = WaitlistController::new(store.clone());
        controller.begin_submit(&valid_signup()).unwrap().unwrap();

        let phase = controller.complete_submit(Err(SubmissionError("backend offline".into())));
        assert_eq!(phase, FormPhase::Editable);
        assert!(!store.load());

        // Manual retry works after a rejection
        assert!(matches!(
            controller.begin_submit(&valid_signup()),
            Some(Ok(_))
        ));
    }

    #[test]
    fn test_no_concurrent_double_submit() {
        let mut controller = WaitlistController::new(MemoryStore::default());

        assert!(matches!(
            controller.begin_submit(&valid_signup()),
            Some(Ok(_))
        ));
        // Second attempt while the first is pending is blocked
        assert_eq!(controller.begin_submit(&valid_signup()), None);
        assert_eq!(controller.phase(), FormPhase::Submitting);
    }

    #[test]
    fn test_complete_submit_outside_submitting_is_a_no_op() {
        let store = MemoryStore::default();
        let mut controller = WaitlistController::new(store.clone());

        assert_eq!(controller.complete_submit(Ok(())), FormPhase::Editable);
        assert!(!store.load());
    }

    // ===== Backend contract =====

    struct StubBackend {
        fail: bool,
    }

    impl SubmitWaitlist for StubBackend {
        async fn submit(&self, _record: &SubmissionRecord) -> Result<(), SubmissionError> {
            if self.fail {
                Err(SubmissionError("simulated outage".into()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_backend_resolution_drives_success() {
        let store = MemoryStore::default();
        let mut controller = WaitlistController::new(store.clone());

        let record = controller.begin_submit(&valid_signup()).unwrap().unwrap();
        let outcome = StubBackend { fail: false }.submit(&record).await;
        assert_eq!(controller.complete_submit(outcome), FormPhase::Success);
        assert!(store.load());
    }

    #[tokio::test]
    async fn test_backend_rejection_drives_editable() {
        let mut controller = WaitlistController::new(MemoryStore::default());

        let record = controller.begin_submit(&valid_signup()).unwrap().unwrap();
        let outcome = StubBackend { fail: true }.submit(&record).await;
        assert_eq!(controller.complete_submit(outcome), FormPhase::Editable);
    }

    // ===== Inline error banner =====

    #[test]
    fn test_error_banner_auto_dismiss() {
        let mut banner = ErrorBanner::default();
        let token = banner.show("Please fill in all fields");
        assert_eq!(banner.message(), Some("Please fill in all fields"));

        banner.dismiss(token);
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn test_error_banner_superseding_error_survives_stale_dismiss() {
        let mut banner = ErrorBanner::default();
        let first = banner.show("Please fill in all fields");
        let second = banner.show("Please enter a valid email address");

        // The first error's scheduled dismiss fires after being superseded
        banner.dismiss(first);
        assert_eq!(banner.message(), Some("Please enter a valid email address"));

        banner.dismiss(second);
        assert_eq!(banner.message(), None);
    }

    // ===== Scroll / pointer math =====

    #[test]
    fn test_navbar_shadow_threshold() {
        assert!(!navbar_elevated(0.0));
        assert!(!navbar_elevated(50.0));
        assert!(navbar_elevated(50.1));
        assert!(navbar_elevated(900.0));
    }

    #[test]
    fn test_parallax_moves_at_half_scroll_speed() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(200.0), 100.0);
    }

    #[test]
    fn test_anchor_scroll_accounts_for_fixed_navbar() {
        assert_eq!(anchor_scroll_top(500.0), 420.0);
        // Sections above the navbar offset clamp to the top
        assert_eq!(anchor_scroll_top(30.0), 0.0);
    }

    #[test]
    fn test_reveal_stagger_steps() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(4), 400);
    }

    #[test]
    fn test_ripple_origin_is_button_relative() {
        assert_eq!(ripple_origin(320.0, 540.0, 300.0, 500.0), (20.0, 40.0));
    }
}
