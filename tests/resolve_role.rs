use screenz::{ConfigEntry, DisplaySet, Role, ScreenConfig};

const DISPLAY1: &str = "\\\\.\\DISPLAY1";
const DISPLAY2: &str = "\\\\.\\DISPLAY2";
const DISPLAY3: &str = "\\\\.\\DISPLAY3";

#[test]
fn test_resolve_roles_of_two_screen_setup() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = ScreenConfig::from_json(
        r#"{"screens":[
            {"DisplayName":"\\\\.\\DISPLAY1","NickName":"主控屏"},
            {"DisplayName":"\\\\.\\DISPLAY2","NickName":"提示屏"}
        ]}"#,
    )?;
    let display_set = DisplaySet::from_names([DISPLAY1, DISPLAY2]);

    assert!(config.is_compatible(&display_set));
    assert_eq!(config.screen_index(Role::Primary, &display_set), Some(0));
    assert_eq!(config.screen_index(Role::Prompt, &display_set), Some(1));
    assert_eq!(
        config.screen_index(Role::ElectronicWhiteboard, &display_set),
        None
    );

    Ok(())
}

#[test]
fn test_index_follows_live_order() {
    let config = ScreenConfig::new(vec![
        ConfigEntry::new(DISPLAY1, "主控屏"),
        ConfigEntry::new(DISPLAY3, "白板屏"),
    ]);
    let display_set = DisplaySet::from_names([DISPLAY3, DISPLAY2, DISPLAY1]);

    assert_eq!(config.screen_index(Role::Primary, &display_set), Some(2));
    assert_eq!(
        config.screen_index(Role::ElectronicWhiteboard, &display_set),
        Some(0)
    );
}

#[test]
fn test_configured_screen_not_attached() {
    let config = ScreenConfig::new(vec![ConfigEntry::new(DISPLAY3, "提示屏")]);
    let display_set = DisplaySet::from_names([DISPLAY1]);

    assert_eq!(config.screen_index(Role::Prompt, &display_set), None);
}

#[test]
fn test_first_attached_entry_wins() {
    let config = ScreenConfig::new(vec![
        ConfigEntry::new(DISPLAY3, "主控屏"),
        ConfigEntry::new(DISPLAY2, "主控屏"),
        ConfigEntry::new(DISPLAY1, "主控屏"),
    ]);
    let display_set = DisplaySet::from_names([DISPLAY1, DISPLAY2]);

    assert_eq!(config.screen_index(Role::Primary, &display_set), Some(1));
    assert_eq!(config.assigned_device(Role::Primary), Some(DISPLAY1));
}

#[test]
fn test_unknown_role_never_resolves() {
    let config = ScreenConfig::new(vec![ConfigEntry::new(DISPLAY1, "")]);
    let display_set = DisplaySet::from_names([DISPLAY1]);

    assert_eq!(config.screen_index(Role::Unknown, &display_set), None);
    assert_eq!(config.entries_for(Role::Unknown).count(), 0);
}

#[test]
fn test_display_role_lookup() {
    let config = ScreenConfig::new(vec![
        ConfigEntry::new(DISPLAY1, "提示屏"),
        ConfigEntry::new(DISPLAY2, "bogus"),
    ]);
    let display_set = DisplaySet::from_names([DISPLAY1, DISPLAY2, DISPLAY3]);

    let roles = display_set
        .displays()
        .map(|display| display.role(&config))
        .collect::<Vec<_>>();
    assert_eq!(roles, vec![Some(Role::Prompt), Some(Role::Unknown), None]);

    let found = display_set.find(DISPLAY2).map(|display| display.index());
    assert_eq!(found, Some(1));
}
