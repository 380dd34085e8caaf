//! Integration tests for the syllabus tree view against the bundled plans

use std::cell::RefCell;
use std::rc::Rc;
use syllabus_tree::catalog::SyllabusCatalog;
use syllabus_tree::models::StudentSyllabusProgress;
use syllabus_tree::tree::{HeaderIndicator, NodeStyle, Side, UnitStatus};
use syllabus_tree::view::{Interaction, SyllabusTreeView, ViewModel};
use syllabus_tree::viewer::{
    Modifiers, MouseEvent, Point, TouchEvent, ViewTransform, ViewerSettings, WheelEvent,
};

type Navigations = Rc<RefCell<Vec<(String, String)>>>;

fn recording_view(class_level: &str) -> (SyllabusTreeView<impl FnMut(&str, &str)>, Navigations) {
    let seen: Navigations = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let catalog = SyllabusCatalog::builtin().expect("bundled plans should parse");
    let view = SyllabusTreeView::new(catalog, class_level, move |subject: &str, chapter: &str| {
        sink.borrow_mut()
            .push((subject.to_string(), chapter.to_string()));
    });
    (view, seen)
}

fn assert_scale(view: &SyllabusTreeView<impl FnMut(&str, &str)>, expected: f64) {
    let scale = view.viewer().scale();
    assert!(
        (scale - expected).abs() < 1e-9,
        "scale {scale} != {expected}"
    );
}

#[test]
fn first_month_starts_expanded_and_others_locked() {
    let (view, _) = recording_view("10");
    let ViewModel::Tree(scene) = view.render() else {
        panic!("class 10 should have a plan");
    };

    assert_eq!(scene.badge, "Season Mode: Class 10");
    assert_eq!(scene.origin, "center top");
    assert_eq!(scene.transition, "transform 0.1s ease-out");

    let first = &scene.layout.branches[0];
    assert_eq!(first.side, Side::Left);
    assert_eq!(first.node, NodeStyle::Glow);
    assert_eq!(first.card.chapter_label(), "8 Chapters");
    assert_eq!(first.card.indicator, HeaderIndicator::Expanded);
    assert_eq!(first.card.status, UnitStatus::InProgress);
    assert!(!first.card.completed);
    assert!(first.card.body.is_some());

    for branch in &scene.layout.branches[1..] {
        assert_eq!(branch.side, Side::for_index(branch.index));
        assert_eq!(branch.node, NodeStyle::Muted);
        assert_eq!(branch.card.indicator, HeaderIndicator::Locked);
        assert_eq!(branch.card.status, UnitStatus::Locked);
        assert!(branch.card.body.is_none());
    }
}

#[test]
fn branches_follow_month_order_and_alternate() {
    let (view, _) = recording_view("11");
    let ViewModel::Tree(scene) = view.render() else {
        panic!("class 11 should have a plan");
    };
    let numbers: Vec<u32> = scene
        .layout
        .branches
        .iter()
        .map(|b| b.card.month_number)
        .collect();
    let mut sorted = numbers.clone();
    sorted.sort_unstable();
    assert_eq!(numbers, sorted);

    let sides: Vec<Side> = scene.layout.branches.iter().map(|b| b.side).collect();
    for pair in sides.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn chapter_click_reports_exact_strings() {
    let (mut view, seen) = recording_view("10");

    assert!(view.handle(Interaction::ClickChapter {
        month: 1,
        subject_index: 1,
        chapter_index: 4,
    }));
    assert!(view.handle(Interaction::ClickChapter {
        month: 1,
        subject_index: 0,
        chapter_index: 0,
    }));

    assert_eq!(view.expanded_month(), Some(1));
    assert_eq!(
        *seen.borrow(),
        vec![
            ("Science".to_string(), "Life Processes".to_string()),
            ("Mathematics".to_string(), "Real Numbers".to_string()),
        ]
    );
}

#[test]
fn locked_months_ignore_clicks() {
    let (mut view, seen) = recording_view("12");

    assert!(!view.handle(Interaction::ToggleMonth(2)));
    assert!(!view.handle(Interaction::ClickChapter {
        month: 2,
        subject_index: 0,
        chapter_index: 0,
    }));
    assert_eq!(view.expanded_month(), Some(1));
    assert!(seen.borrow().is_empty());
}

#[test]
fn collapsing_hides_rows() {
    let (mut view, seen) = recording_view("9");

    assert!(view.handle(Interaction::ToggleMonth(1)));
    assert_eq!(view.expanded_month(), None);
    assert!(!view.handle(Interaction::ClickChapter {
        month: 1,
        subject_index: 0,
        chapter_index: 0,
    }));
    assert!(seen.borrow().is_empty());

    assert!(view.handle(Interaction::ToggleMonth(1)));
    assert_eq!(view.expanded_month(), Some(1));
}

#[test]
fn progress_driven_policy_unlocks_more_months() {
    let mut progress = StudentSyllabusProgress::new("10".to_string());
    progress.mark_completed("Mathematics", "Real Numbers");

    let (view, _) = recording_view("10");
    let mut view = view
        .with_policy(|index: usize, progress: Option<&StudentSyllabusProgress>| {
            let completed = progress.map_or(0, |p| {
                p.completed_chapters.values().map(Vec::len).sum::<usize>()
            });
            index <= completed
        })
        .with_progress(Some(progress));

    assert!(view.progress().is_some());
    assert!(view.toggle_month(2));
    assert_eq!(view.expanded_month(), Some(2));
    assert!(!view.toggle_month(3));
    assert_eq!(view.expanded_month(), Some(2));
}

#[test]
fn nothing_unlocked_means_nothing_expanded() {
    let (view, _) = recording_view("10");
    let view = view.with_policy(|_: usize, _: Option<&StudentSyllabusProgress>| false);
    assert_eq!(view.expanded_month(), None);
}

#[test]
fn unknown_class_shows_empty_state() {
    let (mut view, _) = recording_view("8");
    match view.render() {
        ViewModel::Empty(empty) => {
            assert_eq!(empty.message, "No Season Plan available for Class 8");
            assert_eq!(empty.hint, "Select Class 9, 10, 11, or 12");
        }
        ViewModel::Tree(_) => panic!("class 8 has no plan"),
    }

    assert!(view.handle(Interaction::SetClassLevel("11".to_string())));
    assert!(matches!(view.render(), ViewModel::Tree(_)));
    assert_eq!(view.expanded_month(), Some(1));
}

#[test]
fn switching_class_keeps_transform() {
    let (mut view, _) = recording_view("10");
    view.handle(Interaction::ZoomIn);
    view.handle(Interaction::SetClassLevel("12".to_string()));
    assert_eq!(view.class_level(), "12");
    assert_scale(&view, 1.2);
}

#[test]
fn drag_then_wheel_then_reset() {
    let (mut view, _) = recording_view("10");

    assert!(view.handle(Interaction::MouseDown(MouseEvent::at(100.0, 100.0))));
    assert!(view.handle(Interaction::MouseMove(MouseEvent::at(150.0, 130.0))));
    assert!(view.handle(Interaction::MouseUp));
    assert_eq!(view.viewer().position(), Point::new(50.0, 30.0));

    // Moves after release do not pan
    assert!(!view.handle(Interaction::MouseMove(MouseEvent::at(500.0, 500.0))));
    assert_eq!(view.viewer().position(), Point::new(50.0, 30.0));

    assert!(view.handle(Interaction::Wheel(WheelEvent::new(
        -100.0,
        Modifiers::CTRL
    ))));
    assert_scale(&view, 2.0);

    let expanded = view.expanded_month();
    assert!(view.handle(Interaction::ResetView));
    assert_eq!(view.viewer().transform(), ViewTransform::IDENTITY);
    assert_eq!(view.expanded_month(), expanded);
}

#[test]
fn touch_pans_with_first_finger() {
    let (mut view, _) = recording_view("10");
    let start = TouchEvent::new(vec![Point::new(10.0, 10.0), Point::new(99.0, 99.0)])
        .expect("touch with points");
    let moved = TouchEvent::new(vec![Point::new(4.0, 30.0)]).expect("touch with points");

    view.handle(Interaction::TouchStart(start));
    if let ViewModel::Tree(scene) = view.render() {
        assert_eq!(scene.transition, "none");
    }
    view.handle(Interaction::TouchMove(moved));
    view.handle(Interaction::TouchEnd);
    assert_eq!(view.viewer().position(), Point::new(-6.0, 20.0));
    assert!(!view.viewer().is_dragging());
}

#[test]
fn zoom_never_leaves_bounds() {
    let (mut view, _) = recording_view("10");
    for _ in 0..50 {
        view.handle(Interaction::ZoomIn);
    }
    assert_scale(&view, ViewerSettings::MAX_SCALE);

    for _ in 0..50 {
        view.handle(Interaction::ZoomOut);
    }
    assert_scale(&view, ViewerSettings::MIN_SCALE);

    view.handle(Interaction::Wheel(WheelEvent::new(-1.0e6, Modifiers::CTRL)));
    assert_scale(&view, ViewerSettings::MAX_SCALE);
}

#[test]
fn wheel_without_modifier_does_nothing() {
    let (mut view, _) = recording_view("10");
    assert!(!view.handle(Interaction::Wheel(WheelEvent::new(
        -100.0,
        Modifiers::NONE
    ))));
    assert_eq!(view.viewer().transform(), ViewTransform::IDENTITY);
}

#[test]
fn custom_viewer_settings_apply() {
    let (view, _) = recording_view("10");
    let mut view = view.with_viewer_settings(ViewerSettings {
        min_scale: 0.25,
        max_scale: 1.5,
        zoom_step: 0.5,
        wheel_sensitivity: 0.01,
    });

    view.handle(Interaction::ZoomIn);
    view.handle(Interaction::ZoomIn);
    assert_scale(&view, 1.5);
    view.handle(Interaction::ResetView);
    view.handle(Interaction::ZoomOut);
    view.handle(Interaction::ZoomOut);
    assert_scale(&view, 0.25);
}
