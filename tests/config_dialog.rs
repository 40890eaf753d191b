use std::io::Cursor;

use screenz::dialog::{ConfigDialog, DialogError, DialogForm, DialogOutcome, TerminalDialog};
use screenz::{ConfigEntry, DisplaySet, Role, ScreenConfig};

const DISPLAY1: &str = "\\\\.\\DISPLAY1";
const DISPLAY2: &str = "\\\\.\\DISPLAY2";
const DISPLAY3: &str = "\\\\.\\DISPLAY3";
const DISPLAY9: &str = "\\\\.\\DISPLAY9";

/// Two live screens, the prompt screen is configured on a missing display
fn stale_setup() -> (DisplaySet, ScreenConfig) {
    let display_set = DisplaySet::from_names([DISPLAY1, DISPLAY2]);
    let config = ScreenConfig::new(vec![
        ConfigEntry::new(DISPLAY1, "主控屏"),
        ConfigEntry::new(DISPLAY9, "提示屏"),
    ]);
    (display_set, config)
}

fn run_terminal(form: DialogForm, input: &str) -> (DialogOutcome, String) {
    let mut dialog = TerminalDialog::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let outcome = dialog.show(form).expect("in-memory io does not fail");
    let (_, output) = dialog.into_inner();
    (outcome, String::from_utf8(output).expect("output is utf-8"))
}

#[test]
fn test_form_defaults_to_configuration() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (display_set, config) = stale_setup();
    let form = DialogForm::new(&display_set, &config);

    assert_eq!(form.devices(), &[DISPLAY1.to_string(), DISPLAY2.to_string()]);
    assert_eq!(form.selection(Role::Primary), DISPLAY1);
    assert_eq!(form.selection(Role::Prompt), DISPLAY9);
    assert_eq!(form.selection(Role::ElectronicWhiteboard), "");

    assert!(form.is_valid(Role::Primary));
    assert!(!form.is_valid(Role::Prompt));
    assert!(!form.is_valid(Role::ElectronicWhiteboard));
    assert_eq!(form.error_message(), None);
}

#[test]
fn test_commit_reports_first_invalid_role() {
    let (display_set, config) = stale_setup();
    let mut form = DialogForm::new(&display_set, &config);

    let err = form.commit().expect_err("prompt screen is stale");
    assert!(matches!(err, DialogError::InvalidSelection(Role::Prompt)));
    assert_eq!(
        form.error_message().as_deref(),
        Some("Prompt screen is not configured correctly")
    );

    form.select(Role::Prompt, DISPLAY2);
    let err = form.commit().expect_err("whiteboard screen is empty");
    assert!(matches!(
        err,
        DialogError::InvalidSelection(Role::ElectronicWhiteboard)
    ));

    form.select(Role::ElectronicWhiteboard, DISPLAY2);
    let mapping = form.commit().expect("all selections are live");
    assert_eq!(mapping.primary, DISPLAY1);
    assert_eq!(mapping.prompt, DISPLAY2);
    assert_eq!(mapping.electronic_whiteboard, DISPLAY2);
    assert_eq!(form.error_message(), None);
}

#[test]
fn test_unknown_role_is_not_selectable() {
    let (display_set, config) = stale_setup();
    let mut form = DialogForm::new(&display_set, &config);

    form.select(Role::Unknown, DISPLAY1);
    assert_eq!(form.selection(Role::Unknown), "");
}

#[test]
fn test_terminal_dialog_accepts_after_correction() {
    let (display_set, config) = stale_setup();
    let form = DialogForm::new(&display_set, &config);

    // first round keeps the stale prompt screen, second round fixes it
    let input = "\n\n2\n\n1\n\n";
    let (outcome, output) = run_terminal(form, input);

    match outcome {
        DialogOutcome::Accepted(mapping) => {
            assert_eq!(mapping.primary, DISPLAY1);
            assert_eq!(mapping.prompt, DISPLAY1);
            assert_eq!(mapping.electronic_whiteboard, DISPLAY2);
        }
        DialogOutcome::Cancelled => panic!("dialog was cancelled:\n{output}"),
    }
    assert!(output.contains("[1] \\\\.\\DISPLAY1"));
    assert!(output.contains("Error: Prompt screen is not configured correctly"));
}

#[test]
fn test_terminal_dialog_accepts_identifiers() {
    let display_set = DisplaySet::from_names([DISPLAY1, DISPLAY2, DISPLAY3]);
    let form = DialogForm::new(&display_set, &ScreenConfig::default());

    let input = format!("{DISPLAY3}\n{DISPLAY2}\n{DISPLAY1}\n");
    let (outcome, _) = run_terminal(form, &input);

    let DialogOutcome::Accepted(mapping) = outcome else {
        panic!("dialog was cancelled");
    };
    assert_eq!(mapping.get(Role::Primary), Some(DISPLAY3));
    assert_eq!(mapping.get(Role::Prompt), Some(DISPLAY2));
    assert_eq!(mapping.get(Role::ElectronicWhiteboard), Some(DISPLAY1));
}

#[test]
fn test_terminal_dialog_cancel() {
    let (display_set, config) = stale_setup();

    let (outcome, _) = run_terminal(DialogForm::new(&display_set, &config), "\nq\n");
    assert_eq!(outcome, DialogOutcome::Cancelled);

    // running out of input cancels as well
    let (outcome, _) = run_terminal(DialogForm::new(&display_set, &config), "\n\n\n");
    assert_eq!(outcome, DialogOutcome::Cancelled);
}

#[test]
fn test_outcome_display() {
    let (display_set, config) = stale_setup();
    let mut form = DialogForm::new(&display_set, &config);
    form.select(Role::Prompt, DISPLAY2);
    form.select(Role::ElectronicWhiteboard, DISPLAY2);

    let outcome = DialogOutcome::Accepted(form.commit().expect("valid selection"));
    assert_eq!(
        outcome.to_string(),
        format!("OK (primary={DISPLAY1}, prompt={DISPLAY2}, electronic-whiteboard={DISPLAY2})")
    );
    assert_eq!(DialogOutcome::Cancelled.to_string(), "Cancel");
}

#[test]
fn test_form_defaults_to_last_entry_of_a_role() {
    let display_set = DisplaySet::from_names([DISPLAY1, DISPLAY2]);
    let config = ScreenConfig::new(vec![
        ConfigEntry::new(DISPLAY1, "主控屏"),
        ConfigEntry::new(DISPLAY2, "主控屏"),
        ConfigEntry::new(DISPLAY2, "提示屏"),
        ConfigEntry::new(DISPLAY9, "提示屏"),
    ]);

    let form = DialogForm::new(&display_set, &config);
    assert_eq!(form.selection(Role::Primary), DISPLAY2);
    // a later entry on a detached display still overrides
    assert_eq!(form.selection(Role::Prompt), DISPLAY9);
    assert!(!form.is_valid(Role::Prompt));

    // resolution keeps using the first attached entry
    assert_eq!(config.screen_index(Role::Primary, &display_set), Some(0));
    assert_eq!(config.screen_index(Role::Prompt, &display_set), Some(1));
}
