//! Viewport height as an injected collaborator.
//!
//! The controller never reads the window directly. Hosts hand it the current
//! height and forward changes from a [`ViewportHeightSource`] subscription,
//! which is released when the returned [`Subscription`] is dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Supplies the usable viewport height and notifies on change.
pub trait ViewportHeightSource {
    /// Latest known height in pixels.
    fn current(&self) -> f64;

    /// Register `callback` to receive every new height.
    fn subscribe(&self, callback: Box<dyn Fn(f64)>) -> Subscription;
}

// ============================================================================
// Subscription
// ============================================================================

/// Scoped registration returned by [`ViewportHeightSource::subscribe`].
///
/// Dropping the guard unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Release the registration now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

// ============================================================================
// ManualViewport
// ============================================================================

type Listener = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct ManualInner {
    height: f64,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// A viewport whose height is set by hand.
///
/// Used by native hosts and tests. Clones share the same state.
#[derive(Clone, Default)]
pub struct ManualViewport {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualViewport {
    pub fn new(height: f64) -> Self {
        let viewport = Self::default();
        viewport.inner.borrow_mut().height = height;
        viewport
    }

    /// Change the height and notify every subscriber.
    pub fn set_height(&self, height: f64) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            inner.height = height;
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        // Listeners run without the borrow held so they may read `current()`.
        for listener in listeners {
            listener(height);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ViewportHeightSource for ManualViewport {
    fn current(&self) -> f64 {
        self.inner.borrow().height
    }

    fn subscribe(&self, callback: Box<dyn Fn(f64)>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::from(callback)));
            id
        };

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

impl fmt::Debug for ManualViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualViewport")
            .field("height", &inner.height)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_current_height() {
        let viewport = ManualViewport::new(640.0);
        assert_eq!(viewport.current(), 640.0);
        viewport.set_height(700.0);
        assert_eq!(viewport.current(), 700.0);
    }

    #[test]
    fn test_subscribers_notified() {
        let viewport = ManualViewport::new(640.0);
        let seen = Rc::new(Cell::new(0.0));

        let sink = Rc::clone(&seen);
        let _sub = viewport.subscribe(Box::new(move |h: f64| sink.set(h)));

        viewport.set_height(812.0);
        assert_eq!(seen.get(), 812.0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let viewport = ManualViewport::new(640.0);
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let sub = viewport.subscribe(Box::new(move |_: f64| counter.set(counter.get() + 1)));
        assert_eq!(viewport.subscriber_count(), 1);

        viewport.set_height(500.0);
        sub.unsubscribe();
        viewport.set_height(400.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(viewport.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_outlives_viewport() {
        let viewport = ManualViewport::new(640.0);
        let sub = viewport.subscribe(Box::new(|_: f64| {}));
        drop(viewport);
        // Releasing after the source is gone is harmless
        drop(sub);
    }

    #[test]
    fn test_empty_subscription() {
        let sub = Subscription::empty();
        assert_eq!(format!("{:?}", sub), "Subscription { active: false }");
    }
}
