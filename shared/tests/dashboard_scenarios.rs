//! End-to-end walks through the dashboard models, the way the view drives them.

use iqb_shared::config::DEFAULT_MOUNT_ID;
use iqb_shared::{
    mount, DashboardAction, DashboardConfig, DashboardState, MountError, Selection, TabName,
    TabSelection, TabSet,
};

fn mount_view(config: &DashboardConfig) -> (DashboardState, TabSelection) {
    let tabs = TabSet::dashboard();
    let default_index = tabs.index_of(config.default_tab).unwrap_or(0);
    (
        DashboardState::from_config(config),
        TabSelection::new(tabs.len(), default_index),
    )
}

#[test]
fn initial_mount() {
    let tabs = TabSet::dashboard();
    let (state, selection) = mount_view(&DashboardConfig::default());

    assert!(!state.modal_open);
    assert!(state.notifications_enabled);
    assert_eq!(
        tabs.get(selection.selected()).map(|(name, _)| name),
        Some(TabName::Overview)
    );
}

#[test]
fn open_then_close_modal() {
    let (mut state, _) = mount_view(&DashboardConfig::default());

    state.apply(DashboardAction::OpenModal);
    assert!(state.modal_open);
    state.apply(DashboardAction::CloseModal);
    assert!(!state.modal_open);
    state.apply(DashboardAction::CloseModal);
    assert!(!state.modal_open);
}

#[test]
fn toggle_notifications() {
    let (mut state, _) = mount_view(&DashboardConfig::default());

    state.apply(DashboardAction::SetNotificationEnabled(false));
    assert!(!state.notifications_enabled);
    state.apply(DashboardAction::SetNotificationEnabled(true));
    assert!(state.notifications_enabled);
}

#[test]
fn missing_mount_point_is_not_fatal() {
    let config = DashboardConfig::default();
    let mut created = None;

    let result = mount::resolve::<(), _>(DEFAULT_MOUNT_ID, |_| None).map(|target| {
        created = Some(mount_view(&config));
        target
    });

    assert_eq!(
        result,
        Err(MountError::MissingMountPoint("root".to_string()))
    );
    assert!(created.is_none());
}

#[test]
fn tab_clicks_keep_exactly_one_selected() {
    let tabs = TabSet::dashboard();
    let (_, mut selection) = mount_view(&DashboardConfig::default());

    for (index, name) in tabs.names().enumerate() {
        selection.select(index).unwrap();
        assert_eq!(tabs.get(selection.selected()).map(|(n, _)| n), Some(name));
        let selected: Vec<_> = (0..tabs.len()).filter(|i| selection.is_selected(*i)).collect();
        assert_eq!(selected, vec![index]);
    }

    assert!(selection.select(tabs.len()).is_err());
    assert_eq!(selection.selected(), tabs.len() - 1);
}

#[test]
fn configured_default_tab() {
    let config = DashboardConfig {
        default_tab: TabName::Settings,
        ..Default::default()
    };
    let (_, selection) = mount_view(&config);
    assert_eq!(selection.selected(), 2);
}
