// tests/unit_selection.rs
//! Tests for the focus selection state machine.

use pedigree_core::session::{RadiusPolicy, Selection, SelectionState, Transition};
use pedigree_core::Radius;

fn radius(hops: u32) -> Radius {
    Radius::new(hops).unwrap()
}

fn state(policy: RadiusPolicy) -> SelectionState {
    SelectionState::new(Radius::default(), policy)
}

#[test]
fn test_starts_unfocused() {
    let s = state(RadiusPolicy::Carry);
    assert_eq!(s.current(), &Selection::Unfocused);
    assert!(s.current().focus().is_none());
}

#[test]
fn test_select_uses_default_radius() {
    let mut s = state(RadiusPolicy::Carry);
    assert_eq!(s.select("6110"), Transition::Changed);
    assert_eq!(s.current().focus(), Some(("6110", radius(3))));
}

#[test]
fn test_reselect_is_idempotent() {
    let mut s = state(RadiusPolicy::Carry);
    s.select("6110");
    s.set_radius(radius(5));
    let before = s.current().clone();
    assert_eq!(s.select("6110"), Transition::Unchanged);
    assert_eq!(s.current(), &before);
}

#[test]
fn test_radius_change_keeps_id() {
    let mut s = state(RadiusPolicy::Carry);
    s.select("6110");
    assert_eq!(s.set_radius(radius(7)), Transition::Changed);
    assert_eq!(s.current().focus(), Some(("6110", radius(7))));
    assert_eq!(s.set_radius(radius(7)), Transition::Unchanged);
}

#[test]
fn test_radius_ignored_while_unfocused() {
    let mut s = state(RadiusPolicy::Carry);
    assert_eq!(s.set_radius(radius(9)), Transition::Unchanged);
    assert_eq!(s.current(), &Selection::Unfocused);
    s.select("6110");
    assert_eq!(s.current().focus(), Some(("6110", radius(3))));
}

#[test]
fn test_switch_carries_radius() {
    let mut s = state(RadiusPolicy::Carry);
    s.select("6110");
    s.set_radius(radius(6));
    assert_eq!(s.select("6111"), Transition::Changed);
    assert_eq!(s.current().focus(), Some(("6111", radius(6))));
}

#[test]
fn test_switch_resets_radius_when_configured() {
    let mut s = SelectionState::new(radius(2), RadiusPolicy::Reset);
    assert_eq!(s.default_radius(), radius(2));
    s.select("6110");
    s.set_radius(radius(6));
    s.select("6111");
    assert_eq!(s.current().focus(), Some(("6111", s.default_radius())));
    assert_eq!(s.current().focus(), Some(("6111", radius(2))));
}

#[test]
fn test_reset_always_unfocuses() {
    let mut s = state(RadiusPolicy::Carry);
    s.select("6110");
    s.set_radius(radius(10));
    assert_eq!(s.reset(), Transition::Changed);
    assert_eq!(s.current(), &Selection::Unfocused);
    assert_eq!(s.reset(), Transition::Unchanged);

    s.select("6112");
    assert_eq!(s.current().focus(), Some(("6112", radius(3))), "reset forgets radius");
}
