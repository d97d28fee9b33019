use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggle_twice_restores_closed() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.open);
    menu.toggle();
    assert_eq!(menu, MenuState::default());
}

#[test]
fn selecting_link_closes_open_menu() {
    let mut menu = MenuState::default();
    menu.toggle();
    menu.select_link();
    assert!(!menu.open);
}

#[test]
fn selecting_link_when_closed_stays_closed() {
    let mut menu = MenuState::default();
    menu.select_link();
    assert!(!menu.open);
}
