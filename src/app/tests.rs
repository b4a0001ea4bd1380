use super::*;
use crate::catalog::STYLE_PRESETS;

#[test]
fn new_app_starts_on_the_first_preset() {
    let app = App::new(STYLE_PRESETS);
    assert_eq!(app.selected, 0);
    assert_eq!(app.selected_preset().unwrap().id, STYLE_PRESETS[0].id);
}

#[test]
fn selection_wraps_in_both_directions() {
    let mut app = App::new(STYLE_PRESETS);

    app.select_prev();
    assert_eq!(app.selected, STYLE_PRESETS.len() - 1);

    app.select_next();
    assert_eq!(app.selected, 0);

    for _ in 0..STYLE_PRESETS.len() {
        app.select_next();
    }
    assert_eq!(app.selected, 0);
}

#[test]
fn empty_catalog_is_harmless() {
    let mut app = App::new(&[]);
    app.select_next();
    app.select_prev();
    assert!(app.selected_preset().is_none());
}
