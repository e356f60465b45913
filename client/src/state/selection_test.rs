use super::*;
use catalog::EntryKind;
use leptos::reactive::owner::Owner;

fn sample() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new(1, EntryKind::Site, "Sundarban", 4.8, 45.0),
        CatalogEntry::new(2, EntryKind::Site, "Khajuraho", 4.7, 30.0),
    ])
    .unwrap()
}

#[test]
fn handle_starts_with_no_detail() {
    Owner::new().with(|| {
        let handle = SelectionHandle::new();
        assert!(handle.get().is_none());
        assert!(handle.detail(&sample()).is_none());
    });
}

#[test]
fn click_opens_and_close_dismisses() {
    Owner::new().with(|| {
        let catalog = sample();
        let handle = SelectionHandle::new();

        handle.dispatch(Interaction::Click(EntryId(2)));
        assert!(handle.is_selected(EntryId(2)));
        assert_eq!(handle.detail(&catalog).unwrap().name, "Khajuraho");

        handle.dispatch(Interaction::Close);
        assert!(handle.detail(&catalog).is_none());
    });
}

#[test]
fn hover_leave_hides_tooltip() {
    Owner::new().with(|| {
        let catalog = sample();
        let handle = SelectionHandle::new();

        handle.dispatch(Interaction::HoverEnter(EntryId(1)));
        assert_eq!(handle.detail(&catalog).unwrap().name, "Sundarban");

        handle.dispatch(Interaction::HoverLeave);
        assert!(handle.get().is_none());
    });
}

#[test]
fn stale_id_renders_no_detail() {
    Owner::new().with(|| {
        let handle = SelectionHandle::new();
        handle.dispatch(Interaction::Click(EntryId(99)));
        assert!(handle.is_selected(EntryId(99)));
        assert!(handle.detail(&sample()).is_none());
    });
}

#[test]
fn copies_share_one_signal() {
    Owner::new().with(|| {
        let handle = SelectionHandle::new();
        let copy = handle;
        copy.dispatch(Interaction::Click(EntryId(1)));
        assert!(handle.is_selected(EntryId(1)));
    });
}

#[test]
fn hover_then_click_pins_tooltip_open() {
    Owner::new().with(|| {
        let catalog = sample();
        let handle = SelectionHandle::new();

        handle.dispatch(Interaction::HoverEnter(EntryId(1)));
        handle.dispatch(Interaction::Click(EntryId(1)));
        assert_eq!(handle.detail(&catalog).unwrap().name, "Sundarban");

        // Pointer moves from the marker onto the tooltip.
        handle.dispatch(Interaction::HoverLeave);
        assert!(handle.is_selected(EntryId(1)));

        handle.dispatch(Interaction::Close);
        assert!(handle.detail(&catalog).is_none());
    });
}

#[test]
fn second_click_on_hovered_marker_closes() {
    Owner::new().with(|| {
        let handle = SelectionHandle::new();
        handle.dispatch(Interaction::HoverEnter(EntryId(2)));
        handle.dispatch(Interaction::Click(EntryId(2)));
        handle.dispatch(Interaction::Click(EntryId(2)));
        assert!(handle.get().is_none());
    });
}
