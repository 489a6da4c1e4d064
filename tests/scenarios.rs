//! End-to-end timetable scenarios: course list → compose → render.

use u_timetable::axis::TimeAxis;
use u_timetable::color::{color_for, HashColorAssigner};
use u_timetable::compositor::{compose, CellPlan};
use u_timetable::config::TimetableConfig;
use u_timetable::models::{CourseEntry, CourseList, Day, EntryDraft};
use u_timetable::render::{html, text, RenderConfig};
use u_timetable::validation::EntryError;

fn add(list: &mut CourseList, name: &str, day: Day, start: usize, end: usize) {
    let axis = TimeAxis::standard();
    list.add_draft(&EntryDraft::new(name, day, start, end), &axis, &HashColorAssigner)
        .unwrap();
}

#[test]
fn test_scenario_empty_list() {
    let axis = TimeAxis::standard();
    let list = CourseList::new();
    let c = compose(list.snapshot(), &axis, &HashColorAssigner);

    assert!(c.layout.is_blank());
    for day in Day::ALL {
        for slot in 0..axis.len() {
            assert_eq!(c.conflict_count(day, slot), 0);
            assert_eq!(c.plan(day, slot), Some(&CellPlan::Empty));
        }
    }
}

#[test]
fn test_scenario_single_entry() {
    let axis = TimeAxis::standard();
    let mut list = CourseList::new();
    add(&mut list, "Algorithms", Day::Mon, 2, 4);
    let c = compose(list.snapshot(), &axis, &HashColorAssigner);

    let entry = list.get(0).unwrap().clone();
    assert_eq!(
        c.plan(Day::Mon, 2),
        Some(&CellPlan::SingleSpan {
            entry,
            span_len: 2,
            color: color_for("Algorithms"),
        })
    );
    assert_eq!(c.plan(Day::Mon, 3), Some(&CellPlan::Continuation));

    let non_empty = c
        .layout
        .grid()
        .iter()
        .filter(|(_, _, plan)| !plan.is_empty())
        .count();
    assert_eq!(non_empty, 2);
}

#[test]
fn test_scenario_partial_overlap() {
    let axis = TimeAxis::standard();
    let mut list = CourseList::new();
    add(&mut list, "A", Day::Mon, 2, 4);
    add(&mut list, "B", Day::Mon, 3, 5);
    let c = compose(list.snapshot(), &axis, &HashColorAssigner);
    let (a, b) = (list.get(0).unwrap().clone(), list.get(1).unwrap().clone());

    assert_eq!(c.plan(Day::Mon, 2).map(CellPlan::row_span), Some(1));
    assert_eq!(c.plan(Day::Mon, 2).unwrap().entries(), vec![&a]);
    assert_eq!(
        c.plan(Day::Mon, 3),
        Some(&CellPlan::Conflict {
            entries: vec![a, b.clone()]
        })
    );
    assert_eq!(c.plan(Day::Mon, 4).map(CellPlan::row_span), Some(1));
    assert_eq!(c.plan(Day::Mon, 4).unwrap().entries(), vec![&b]);

    assert_eq!(c.conflict_count(Day::Mon, 2), 1);
    assert_eq!(c.conflict_count(Day::Mon, 3), 2);
    assert_eq!(c.conflict_count(Day::Mon, 4), 1);
}

#[test]
fn test_scenario_add_then_remove_restores_layout() {
    let axis = TimeAxis::standard();
    let mut list = CourseList::new();
    add(&mut list, "Calculus", Day::Tue, 0, 4);
    add(&mut list, "Physics", Day::Thu, 6, 9);
    let before = compose(list.snapshot(), &axis, &HashColorAssigner);

    add(&mut list, "Chemistry", Day::Tue, 2, 6);
    let during = compose(list.snapshot(), &axis, &HashColorAssigner);
    assert_ne!(during.layout, before.layout);
    assert!(during.has_conflicts());

    let removed = list.remove(2).unwrap();
    assert_eq!(removed.name, "Chemistry");
    let after = compose(list.snapshot(), &axis, &HashColorAssigner);
    assert_eq!(after, before);
}

#[test]
fn test_rejected_drafts_never_reach_the_grid() {
    let axis = TimeAxis::standard();
    let mut list = CourseList::new();
    let colors = HashColorAssigner;

    assert_eq!(
        list.add_draft(&EntryDraft::new(" ", Day::Mon, 0, 2), &axis, &colors)
            .unwrap_err(),
        EntryError::EmptyName
    );
    assert_eq!(
        list.add_draft(&EntryDraft::new("Late", Day::Mon, 6, 2), &axis, &colors)
            .unwrap_err(),
        EntryError::InvalidInterval { start: 6, end: 2 }
    );

    let c = compose(list.snapshot(), &axis, &colors);
    assert!(c.layout.is_blank());
}

#[test]
fn test_form_labels_to_html() {
    let axis = TimeAxis::standard();
    let colors = HashColorAssigner;
    let mut list = CourseList::new();
    for (name, day, start, end) in [
        ("Databases", "월", "1 (09:00)", ".5 (10:30)"),
        ("Networks", "Mon", "2 (10:00)", "3 (11:00)"),
        ("Seminar", "Fri", "11 (19:00)", "12 (20:00)"),
    ] {
        let draft = EntryDraft::from_labels(name, day, start, end, &axis).unwrap();
        list.add_draft(&draft, &axis, &colors).unwrap();
    }

    let c = compose(list.snapshot(), &axis, &colors);
    assert_eq!(c.conflict_cells(), vec![(Day::Mon, 4)]);

    let page = html::render_table(&c, &axis, &RenderConfig::default());
    assert_eq!(page.matches("class='overlap'").count(), 1);
    assert!(page.contains("rowspan=2"));
    assert!(page.contains(">Seminar</td>"));

    let grid = text::render_grid(&c, &axis, &RenderConfig::default());
    assert_eq!(grid.cell(4, Day::Mon).unwrap().text, "Databases\nNetworks");

    assert_eq!(
        list.summaries(&axis),
        vec![
            "Databases: Mon 1 (09:00) ~ .5 (10:30)",
            "Networks: Mon 2 (10:00) ~ 3 (11:00)",
            "Seminar: Fri 11 (19:00) ~ 12 (20:00)",
        ]
    );
}

#[test]
fn test_configured_axis_end_to_end() {
    let config = TimetableConfig::from_toml_str(
        r#"
        [axis]
        first_start = "09:00"
        last_start = "12:00"
        step_minutes = 60

        [render]
        include_weekend = false
        "#,
    )
    .unwrap();
    let axis = config.time_axis().unwrap();
    assert_eq!(axis.len(), 4);

    let colors = HashColorAssigner;
    let entries = vec![CourseEntry::new("Morning", Day::Wed, 0, 4, &colors)];
    let c = compose(&entries, &axis, &colors);
    assert_eq!(c.plan(Day::Wed, 0).map(CellPlan::row_span), Some(4));

    let page = html::render_table(&c, &axis, &config.render);
    assert!(page.contains("<th>Fri</th>"));
    assert!(!page.contains("<th>Sat</th>"));
    assert!(page.contains(">3 (12:00)</td>"));
}
