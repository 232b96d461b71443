use lightlog::core::add::AddLogic;
use lightlog::core::del::DeleteLogic;
use lightlog::core::settings::{ReminderCapability, SettingsLogic, parse_target_input};
use lightlog::core::store::{AVATAR_KEY, ENTRIES_KEY, REMINDERS_KEY, TARGET_KEY};
use lightlog::core::{AppState, StateChange, StateObserver, Tracker};
use lightlog::db::{KvStore, MemoryStore};
use lightlog::errors::AppError;
use lightlog::models::EntryType::{Diet, Workout};
use lightlog::models::settings::{DEFAULT_AVATAR, DEFAULT_TARGET};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

mod common;
use common::{at, at_hm, temp_out};

/// Records every notification it receives.
#[derive(Clone, Default)]
struct Recorder {
    seen: Rc<RefCell<Vec<(StateChange, usize)>>>,
}

impl StateObserver for Recorder {
    fn state_changed(&self, state: &AppState, change: &StateChange) {
        self.seen
            .borrow_mut()
            .push((change.clone(), state.entries.len()));
    }
}

struct FakeReminders {
    backend: Option<&'static str>,
    allow: bool,
}

impl ReminderCapability for FakeReminders {
    fn backend(&self) -> Option<String> {
        self.backend.map(str::to_string)
    }

    fn request_permission(&self) -> bool {
        self.allow
    }
}

fn tracker() -> Tracker<MemoryStore> {
    Tracker::open(MemoryStore::new()).unwrap()
}

#[test]
fn add_prepends_and_persists() {
    let mut t = tracker();
    AddLogic::add_entry_at(&mut t, "Oats", 300, Diet, None, at_hm(2025, 3, 10, 8, 0)).unwrap();
    let second =
        AddLogic::add_entry_at(&mut t, "Lunch", 650, Diet, None, at_hm(2025, 3, 10, 13, 0))
            .unwrap();

    assert_eq!(t.state().entries.len(), 2);
    assert_eq!(t.state().entries[0].id, second.id);

    let raw = t.store().raw(ENTRIES_KEY).unwrap();
    assert!(raw.contains("\"Lunch\""));
    assert!(raw.contains("\"DIET\""));

    let reopened = Tracker::open(t.into_store()).unwrap();
    assert_eq!(reopened.state().entries[0].name, "Lunch");
    assert_eq!(reopened.state().entries[1].name, "Oats");
}

#[test]
fn negative_calories_are_stored_as_absolute_value() {
    let mut t = tracker();
    let e = AddLogic::add_entry_at(&mut t, "Run", -300, Workout, Some(30), at(2025, 3, 10)).unwrap();
    assert_eq!(e.calories, 300);
    assert_eq!(e.duration, Some(30));
    assert_eq!(e.net_contribution(), -300);
}

#[test]
fn blank_name_gets_placeholder() {
    let mut t = tracker();
    let meal = AddLogic::add_entry_at(&mut t, "", 300, Diet, None, at(2025, 3, 10)).unwrap();
    let workout = AddLogic::add_entry_at(&mut t, "   ", 100, Workout, None, at(2025, 3, 10)).unwrap();
    assert_eq!(meal.name, "Unnamed meal");
    assert_eq!(workout.name, "Unnamed workout");
}

#[test]
fn diet_entries_drop_duration() {
    let mut t = tracker();
    let e = AddLogic::add_entry_at(&mut t, "Soup", 200, Diet, Some(15), at(2025, 3, 10)).unwrap();
    assert_eq!(e.duration, None);
    assert!(!t.store().raw(ENTRIES_KEY).unwrap().contains("duration"));
}

#[test]
fn ids_are_unique() {
    let mut t = tracker();
    let a = AddLogic::add_entry_at(&mut t, "A", 1, Diet, None, at(2025, 3, 10)).unwrap();
    let b = AddLogic::add_entry_at(&mut t, "A", 1, Diet, None, at(2025, 3, 10)).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn oversized_calories_are_rejected_without_mutation() {
    let mut t = tracker();
    let err = AddLogic::add_entry_at(&mut t, "Feast", i64::MAX, Diet, None, at(2025, 3, 10));
    assert!(matches!(err, Err(AppError::InvalidCalories(_))));
    assert!(t.state().entries.is_empty());
    assert!(t.store().raw(ENTRIES_KEY).is_none());
}

#[test]
fn delete_removes_exactly_one_entry() {
    let mut t = tracker();
    let keep = AddLogic::add_entry_at(&mut t, "Keep", 100, Diet, None, at(2025, 3, 10)).unwrap();
    let gone = AddLogic::add_entry_at(&mut t, "Gone", 200, Diet, None, at(2025, 3, 10)).unwrap();

    let removed = DeleteLogic::delete_entry(&mut t, &gone.id).unwrap();
    assert_eq!(removed.map(|e| e.id), Some(gone.id.clone()));
    assert_eq!(t.state().entries.len(), 1);
    assert_eq!(t.state().entries[0].id, keep.id);
    assert!(!t.store().raw(ENTRIES_KEY).unwrap().contains(&gone.id));
}

#[test]
fn deleting_unknown_id_is_a_no_op() {
    let mut t = tracker();
    AddLogic::add_entry_at(&mut t, "Keep", 100, Diet, None, at(2025, 3, 10)).unwrap();
    let before = t.state().clone();

    let removed = DeleteLogic::delete_entry(&mut t, "does-not-exist").unwrap();
    assert!(removed.is_none());
    assert_eq!(t.state(), &before);
}

#[test]
fn observers_see_each_committed_change() {
    let recorder = Recorder::default();
    let mut t = tracker();
    t.subscribe(Box::new(recorder.clone()));

    let e = AddLogic::add_entry_at(&mut t, "Toast", 150, Diet, None, at(2025, 3, 10)).unwrap();
    DeleteLogic::delete_entry(&mut t, "missing").unwrap();
    DeleteLogic::delete_entry(&mut t, &e.id).unwrap();
    SettingsLogic::set_target(&mut t, 1800).unwrap();

    let seen = recorder.seen.borrow();
    assert_eq!(
        *seen,
        vec![
            (StateChange::EntryAdded(e.id.clone()), 1),
            (StateChange::EntryDeleted(e.id.clone()), 0),
            (StateChange::TargetChanged(1800), 0),
        ]
    );
}

#[test]
fn target_input_falls_back_to_default() {
    assert_eq!(parse_target_input("1800"), 1800);
    assert_eq!(parse_target_input(" 2200 "), 2200);
    assert_eq!(parse_target_input("abc"), DEFAULT_TARGET);
    assert_eq!(parse_target_input(""), DEFAULT_TARGET);
    assert_eq!(parse_target_input("0"), DEFAULT_TARGET);
}

#[test]
fn target_is_persisted_as_decimal_text() {
    let mut t = tracker();
    SettingsLogic::set_target(&mut t, 1750).unwrap();
    assert_eq!(t.state().target, 1750);
    assert_eq!(t.store().raw(TARGET_KEY), Some("1750"));
}

#[test]
fn reminders_need_backend_and_permission() {
    let mut t = tracker();

    let none = FakeReminders {
        backend: None,
        allow: true,
    };
    assert!(matches!(
        SettingsLogic::set_reminders(&mut t, true, &none),
        Err(AppError::RemindersUnsupported)
    ));
    assert!(!t.state().settings.reminders_enabled);

    let denied = FakeReminders {
        backend: Some("notify-send"),
        allow: false,
    };
    assert!(matches!(
        SettingsLogic::set_reminders(&mut t, true, &denied),
        Err(AppError::RemindersDenied)
    ));
    assert!(!t.state().settings.reminders_enabled);

    let ok = FakeReminders {
        backend: Some("notify-send"),
        allow: true,
    };
    SettingsLogic::set_reminders(&mut t, true, &ok).unwrap();
    assert!(t.state().settings.reminders_enabled);
    assert_eq!(t.store().raw(REMINDERS_KEY), Some("true"));

    // turning off never consults the capability
    SettingsLogic::set_reminders(&mut t, false, &none).unwrap();
    assert_eq!(t.store().raw(REMINDERS_KEY), Some("false"));
}

#[test]
fn avatar_file_is_embedded_as_data_uri() {
    let path = temp_out("lifecycle_avatar", "png");
    fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let mut t = tracker();
    SettingsLogic::import_avatar(&mut t, path.as_ref()).unwrap();

    let avatar = &t.state().settings.avatar;
    assert_eq!(avatar, "data:image/png;base64,iVBORw==");
    assert_eq!(t.store().raw(AVATAR_KEY), Some(avatar.as_str()));
}

#[test]
fn oversized_avatar_is_rejected() {
    let path = temp_out("lifecycle_big_avatar", "jpg");
    fs::write(&path, vec![0u8; 2 * 1024 * 1024 + 1]).unwrap();

    let mut t = tracker();
    let err = SettingsLogic::import_avatar(&mut t, path.as_ref());
    assert!(matches!(err, Err(AppError::AvatarTooLarge { .. })));
    assert_eq!(t.state().settings.avatar, DEFAULT_AVATAR);
    assert!(t.store().raw(AVATAR_KEY).is_none());
}

#[test]
fn reset_restores_defaults() {
    let mut t = tracker();
    AddLogic::add_entry_at(&mut t, "A", 100, Diet, None, at(2025, 3, 10)).unwrap();
    AddLogic::add_entry_at(&mut t, "B", 200, Workout, None, at(2025, 3, 10)).unwrap();
    SettingsLogic::set_target(&mut t, 1500).unwrap();
    SettingsLogic::set_avatar(&mut t, "https://example.com/me.png").unwrap();

    let removed = DeleteLogic::reset(&mut t).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(t.state(), &AppState::default());

    let reopened = Tracker::open(t.into_store()).unwrap();
    assert_eq!(reopened.state(), &AppState::default());
}

#[test]
fn failed_save_rolls_back_state() {
    struct ReadOnly(MemoryStore);

    impl KvStore for ReadOnly {
        fn get(&self, key: &str) -> lightlog::errors::AppResult<Option<String>> {
            self.0.get(key)
        }
        fn set_many(&mut self, _pairs: &[(&str, String)]) -> lightlog::errors::AppResult<()> {
            Err(AppError::Other("read-only".into()))
        }
    }

    let recorder = Recorder::default();
    let mut t = Tracker::open(ReadOnly(MemoryStore::new())).unwrap();
    t.subscribe(Box::new(recorder.clone()));

    assert!(AddLogic::add_entry_at(&mut t, "A", 100, Diet, None, at(2025, 3, 10)).is_err());
    assert!(t.state().entries.is_empty());
    assert!(recorder.seen.borrow().is_empty());
}
