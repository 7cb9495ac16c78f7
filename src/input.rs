//! Screen-space pointer routing.
//!
//! The renderer owns hit testing geometry; it publishes one rectangle per interactive element and
//! feeds raw pointer positions here. [`PointerTracker`] turns those into targeted enter/leave/down/up
//! events that the scene applies on the next frame.

use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::core::{Point, Rect};

/// Interactive element a pointer event is addressed to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum PointerTarget {
    /// Floating object by index in the scene object model.
    Object(usize),
    /// The overlay button.
    Button,
}

/// Targeted pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer moved into the target's hit region.
    Enter(PointerTarget),
    /// Pointer moved out of the target's hit region.
    Leave(PointerTarget),
    /// Pointer pressed while over the target.
    Down(PointerTarget),
    /// Pointer released after pressing the target.
    Up(PointerTarget),
    /// Active press cancelled.
    Cancel,
}

/// Screen-space hit rectangles by target.
#[derive(Clone, Debug, Default)]
pub struct HitRegions {
    regions: BTreeMap<PointerTarget, Rect>,
}

impl HitRegions {
    /// Empty region set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the rectangle for `target`.
    pub fn set(&mut self, target: PointerTarget, rect: Rect) {
        self.regions.insert(target, rect.abs());
    }

    /// Remove `target`'s rectangle.
    pub fn remove(&mut self, target: PointerTarget) -> Option<Rect> {
        self.regions.remove(&target)
    }

    /// Rectangle registered for `target`.
    pub fn get(&self, target: PointerTarget) -> Option<Rect> {
        self.regions.get(&target).copied()
    }

    /// Every target whose region contains `p`.
    pub fn hits(&self, p: Point) -> BTreeSet<PointerTarget> {
        self.regions
            .iter()
            .filter(|(_, r)| r.contains(p))
            .map(|(t, _)| *t)
            .collect()
    }
}

/// Tracks hover/press over [`HitRegions`] and emits boundary-crossing events.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    regions: HitRegions,
    position: Option<Point>,
    hovered: BTreeSet<PointerTarget>,
    pressed: BTreeSet<PointerTarget>,
}

impl PointerTracker {
    /// Tracker over `regions` with no pointer present.
    pub fn new(regions: HitRegions) -> Self {
        Self {
            regions,
            ..Self::default()
        }
    }

    /// Registered hit regions.
    pub fn regions(&self) -> &HitRegions {
        &self.regions
    }

    /// Targets currently under the pointer.
    pub fn hovered(&self) -> &BTreeSet<PointerTarget> {
        &self.hovered
    }

    /// Replace the hit regions and re-evaluate hover at the last known position.
    pub fn set_regions(&mut self, regions: HitRegions) -> Vec<PointerEvent> {
        self.regions = regions;
        match self.position {
            Some(p) => self.move_to(p),
            None => Vec::new(),
        }
    }

    /// Pointer moved to `p`. Leaves are reported before enters.
    pub fn move_to(&mut self, p: Point) -> Vec<PointerEvent> {
        self.position = Some(p);
        let next = self.regions.hits(p);
        let mut out: Vec<PointerEvent> = self
            .hovered
            .difference(&next)
            .map(|t| PointerEvent::Leave(*t))
            .collect();
        out.extend(next.difference(&self.hovered).map(|t| PointerEvent::Enter(*t)));
        self.hovered = next;
        out
    }

    /// Pointer pressed at `p`.
    pub fn down(&mut self, p: Point) -> Vec<PointerEvent> {
        let mut out = self.move_to(p);
        out.extend(self.hovered.iter().map(|t| PointerEvent::Down(*t)));
        self.pressed = self.hovered.clone();
        out
    }

    /// Pointer released at `p`. Every pressed target gets an `Up`, wherever the release lands.
    pub fn up(&mut self, p: Point) -> Vec<PointerEvent> {
        let mut out = self.move_to(p);
        out.extend(self.pressed.iter().map(|t| PointerEvent::Up(*t)));
        self.pressed.clear();
        out
    }

    /// Platform cancelled the active press.
    pub fn cancel(&mut self) -> Vec<PointerEvent> {
        if self.pressed.is_empty() {
            return Vec::new();
        }
        self.pressed.clear();
        vec![PointerEvent::Cancel]
    }

    /// Pointer left the viewport.
    pub fn leave(&mut self) -> Vec<PointerEvent> {
        self.position = None;
        let out = self.hovered.iter().map(|t| PointerEvent::Leave(*t)).collect();
        self.hovered.clear();
        out
    }
}

#[cfg(test)]
#[path = "../tests/unit/input.rs"]
mod tests;
