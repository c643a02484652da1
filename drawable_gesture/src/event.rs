// Copyright 2026 the Drawable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Screen-space contact points of a [`TouchEvent`].
pub type Contacts = SmallVec<[Point; 2]>;

/// Phase of a touch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A contact landed. `contacts` holds every active contact after it landed.
    Down,
    /// Contacts moved. `contacts` holds every active contact.
    Move,
    /// A contact lifted. `contacts` holds the contacts active before the
    /// lift, including the one lifting.
    Up,
    /// The host aborted the gesture; every contact is gone.
    Cancel,
}

/// One entry of the touch-event feed, in screen space.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// What happened.
    pub phase: TouchPhase,
    /// Screen-space contact positions; the first one is the primary contact.
    pub contacts: Contacts,
}

impl TouchEvent {
    /// Creates an event from a phase and its contacts.
    pub fn new(phase: TouchPhase, contacts: impl IntoIterator<Item = Point>) -> Self {
        Self {
            phase,
            contacts: contacts.into_iter().collect(),
        }
    }

    /// A contact landed; `contacts` are all active contacts.
    pub fn down(contacts: impl IntoIterator<Item = Point>) -> Self {
        Self::new(TouchPhase::Down, contacts)
    }

    /// Active contacts moved.
    pub fn moved(contacts: impl IntoIterator<Item = Point>) -> Self {
        Self::new(TouchPhase::Move, contacts)
    }

    /// A contact lifted; `contacts` are the contacts active before the lift.
    pub fn up(contacts: impl IntoIterator<Item = Point>) -> Self {
        Self::new(TouchPhase::Up, contacts)
    }

    /// The gesture was aborted.
    #[must_use]
    pub fn cancel() -> Self {
        Self::new(TouchPhase::Cancel, core::iter::empty())
    }

    /// Number of contacts listed in the event.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Number of contacts still down once this event has been handled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        match self.phase {
            TouchPhase::Down | TouchPhase::Move => self.contacts.len(),
            TouchPhase::Up => self.contacts.len().saturating_sub(1),
            TouchPhase::Cancel => 0,
        }
    }

    /// The first contact, if any.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.contacts.first().copied()
    }

    /// Distance between the first two contacts.
    #[must_use]
    pub fn pinch_span(&self) -> Option<f64> {
        match self.contacts.as_slice() {
            [a, b, ..] => Some(a.distance(*b)),
            _ => None,
        }
    }

    /// Midpoint of the first two contacts.
    #[must_use]
    pub fn pinch_midpoint(&self) -> Option<Point> {
        match self.contacts.as_slice() {
            [a, b, ..] => Some(a.midpoint(*b)),
            _ => None,
        }
    }

    /// Average position of all contacts.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        if self.contacts.is_empty() {
            return None;
        }
        let sum = self
            .contacts
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
        Some((sum / self.contacts.len() as f64).to_point())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{TouchEvent, TouchPhase};

    #[test]
    fn remaining_counts_follow_phase() {
        let two = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert_eq!(TouchEvent::down(two).remaining(), 2);
        assert_eq!(TouchEvent::moved(two).remaining(), 2);
        assert_eq!(TouchEvent::up(two).remaining(), 1);
        assert_eq!(TouchEvent::up(core::iter::empty()).remaining(), 0);
        assert_eq!(TouchEvent::cancel().remaining(), 0);
        assert_eq!(TouchEvent::cancel().phase, TouchPhase::Cancel);
    }

    #[test]
    fn pinch_geometry_uses_first_two_contacts() {
        let event = TouchEvent::moved([
            Point::new(0.0, 0.0),
            Point::new(30.0, 40.0),
            Point::new(1000.0, 1000.0),
        ]);
        assert_eq!(event.pinch_span(), Some(50.0));
        assert_eq!(event.pinch_midpoint(), Some(Point::new(15.0, 20.0)));
        assert_eq!(TouchEvent::moved([Point::ZERO]).pinch_span(), None);
    }

    #[test]
    fn centroid_averages_every_contact() {
        let event = TouchEvent::moved([
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(0.0, 30.0),
        ]);
        assert_eq!(event.centroid(), Some(Point::new(10.0, 10.0)));
        assert_eq!(event.primary(), Some(Point::ZERO));
        assert_eq!(TouchEvent::cancel().centroid(), None);
    }
}
