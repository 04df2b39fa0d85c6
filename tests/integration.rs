// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests over simulated time: notification lifecycles driven the
//! way the shell drives them (periodic ticks), plus persistence round trips.

use iced_beacon::config::{self, Config};
use iced_beacon::storage::Store;
use iced_beacon::ui::notifications::{
    notification::{DISPLAY_DURATION, ENTRANCE_DELAY, EXIT_DURATION},
    Kind, Manager, Phase,
};
use iced_beacon::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// Drives a manager with 100 ms ticks for `total`, collecting transitions.
fn run_ticks(manager: &mut Manager, start: Instant, total: Duration) -> Vec<Phase> {
    let mut phases = Vec::new();
    let mut elapsed = Duration::ZERO;
    let step = Duration::from_millis(100);
    while elapsed <= total {
        for transition in manager.tick(start + elapsed) {
            phases.push(transition.phase);
        }
        elapsed += step;
    }
    phases
}

#[test]
fn copy_feedback_scenario_runs_the_documented_schedule() {
    let start = Instant::now();
    let mut manager = Manager::new();
    let id = manager.notify_at("Скопировано в буфер обмена!", Kind::SUCCESS, start);

    // After the entrance delay the toast is visible and carries its category.
    manager.tick(start + ENTRANCE_DELAY);
    let toast = manager.get(id).expect("toast should be active");
    assert_eq!(toast.phase(), Phase::Visible);
    assert_eq!(toast.kind().class_name(), "notification-success");
    assert_eq!(toast.message(), "Скопировано в буфер обмена!");

    // Dismissal begins 3000 ms after creation, not after the entrance settles.
    manager.tick(start + DISPLAY_DURATION);
    assert_eq!(manager.get(id).expect("still active").phase(), Phase::Dismissing);

    // A further 300 ms later the toast is gone from the tree.
    manager.tick(start + DISPLAY_DURATION + EXIT_DURATION);
    assert!(manager.get(id).is_none());
    assert!(manager.is_empty());
}

#[test]
fn lifecycle_states_are_observed_exactly_once_in_order() {
    let start = Instant::now();
    let mut manager = Manager::new();
    manager.notify_at("Saved", Kind::default(), start);

    let phases = run_ticks(&mut manager, start, Duration::from_millis(3500));
    assert_eq!(
        phases,
        vec![Phase::Visible, Phase::Dismissing, Phase::Removed]
    );
}

#[test]
fn two_quick_notifications_run_independent_lifecycles() {
    let start = Instant::now();
    let gap = Duration::from_millis(300);
    let mut manager = Manager::new();
    let first = manager.notify_at("first", Kind::INFO, start);
    let second = manager.notify_at("second", Kind::INFO, start + gap);

    let mut first_removed_at = None;
    let mut second_removed_at = None;
    let step = Duration::from_millis(100);
    let mut elapsed = Duration::ZERO;
    while elapsed <= Duration::from_millis(4000) {
        for transition in manager.tick(start + elapsed) {
            if transition.phase == Phase::Removed {
                if transition.id == first {
                    first_removed_at = Some(elapsed);
                } else if transition.id == second {
                    second_removed_at = Some(elapsed);
                }
            }
        }
        elapsed += step;
    }

    let first_removed_at = first_removed_at.expect("first should be removed");
    let second_removed_at = second_removed_at.expect("second should be removed");
    // Each removal lands on its own schedule; the second trails by its gap.
    assert_eq!(first_removed_at, DISPLAY_DURATION + EXIT_DURATION);
    assert_eq!(second_removed_at, DISPLAY_DURATION + EXIT_DURATION + gap);
}

#[test]
fn markup_in_messages_stays_literal() {
    let start = Instant::now();
    let mut manager = Manager::new();
    let id = manager.notify_at("<script>x</script>", Kind::default(), start);

    let toast = manager.get(id).expect("toast should be active");
    assert_eq!(toast.message(), "<script>x</script>");
}

#[test]
fn theme_preference_survives_a_config_round_trip() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let saved = Config {
        theme: Some(ThemeMode::Dark),
        compact_width: Some(720.0),
    };
    config::save_to_path(&saved, &config_path).expect("failed to write config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert_eq!(loaded.theme, Some(ThemeMode::Dark));
    assert_eq!(loaded.compact_width, Some(720.0));
}

#[test]
fn store_state_survives_a_restart() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let mut store = Store::new();
    store.set("welcome_seen", &true).expect("set should succeed");
    store
        .set("contact.email", &"ada@example.com".to_string())
        .expect("set should succeed");
    assert!(store.save_to(base.clone()).is_none());

    // A fresh process would load the same values back.
    let (restored, warning) = Store::load_from(base);
    assert!(warning.is_none());
    assert_eq!(restored.get::<bool>("welcome_seen"), Some(true));
    assert_eq!(
        restored.get::<String>("contact.email"),
        Some("ada@example.com".to_string())
    );
}
