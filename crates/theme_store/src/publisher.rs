//! Single-threaded observer registry.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::{Rc, Weak},
};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

/// Registry of callbacks invoked synchronously, in registration order, on every publish.
pub struct Publisher<T> {
    registry: Rc<RefCell<Registry<T>>>,
    pending: RefCell<VecDeque<T>>,
    publishing: Cell<bool>,
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                subscribers: Vec::new(),
            })),
            pending: RefCell::new(VecDeque::new()),
            publishing: Cell::new(false),
        }
    }
}

impl<T: Clone + 'static> Publisher<T> {
    /// Registers `callback`. The registration lives until the returned [`Subscription`] is
    /// dropped or unsubscribed.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(callback);
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.subscribers.push((id, callback));
            id
        };

        let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        let dispose: Box<dyn FnOnce()> = Box::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .borrow_mut()
                    .subscribers
                    .retain(|(entry, _)| *entry != id);
            }
        });
        Subscription {
            dispose: Some(dispose),
        }
    }

    /// Notifies every current subscriber with `value`.
    ///
    /// Callbacks run against a snapshot of the registry, so they may subscribe or unsubscribe
    /// without deadlocking the registry. Subscribers added during a publish are first notified on
    /// the next value.
    ///
    /// A publish issued from inside a callback is queued: the value being delivered reaches every
    /// subscriber first, then queued values follow in order. Every subscriber therefore sees the
    /// same sequence and ends on the last published value.
    pub fn publish(&self, value: &T) {
        if self.publishing.get() {
            self.pending.borrow_mut().push_back(value.clone());
            return;
        }

        self.publishing.set(true);
        let mut next = Some(value.clone());
        while let Some(value) = next {
            let snapshot: Vec<Callback<T>> = self
                .registry
                .borrow()
                .subscribers
                .iter()
                .map(|(_, callback)| Rc::clone(callback))
                .collect();
            for callback in snapshot {
                callback(&value);
            }
            next = self.pending.borrow_mut().pop_front();
        }
        self.publishing.set(false);
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }
}

/// Disposer for a [`Publisher`] registration. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes; call `detach` to keep it"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Removes the registration now.
    pub fn unsubscribe(mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }

    /// Keeps the registration for the publisher's whole lifetime.
    pub fn detach(mut self) {
        self.dispose = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.dispose.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn subscribers_run_in_registration_order() {
        let publisher = Publisher::<u32>::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first_log = Rc::clone(&log);
        let _first = publisher.subscribe(move |v| first_log.borrow_mut().push(("first", *v)));
        let second_log = Rc::clone(&log);
        let _second = publisher.subscribe(move |v| second_log.borrow_mut().push(("second", *v)));

        publisher.publish(&7);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn dropping_the_subscription_unsubscribes() {
        let publisher = Publisher::<u32>::default();
        let seen = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&seen);
        let subscription = publisher.subscribe(move |_| *counter.borrow_mut() += 1);
        publisher.publish(&1);
        drop(subscription);
        publisher.publish(&2);

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(publisher.subscriber_count(), 0);
    }

    #[test]
    fn detached_subscriptions_stay_registered() {
        let publisher = Publisher::<u32>::default();
        let seen = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&seen);
        publisher
            .subscribe(move |_| *counter.borrow_mut() += 1)
            .detach();
        publisher.publish(&1);
        publisher.publish(&2);

        assert_eq!(*seen.borrow(), 2);
        assert_eq!(publisher.subscriber_count(), 1);
    }

    #[test]
    fn explicit_unsubscribe_only_removes_its_own_entry() {
        let publisher = Publisher::<u32>::default();
        let a = publisher.subscribe(|_| {});
        let _b = publisher.subscribe(|_| {});
        a.unsubscribe();
        assert_eq!(publisher.subscriber_count(), 1);
    }

    #[test]
    fn callbacks_may_subscribe_during_publish() {
        let publisher = Rc::new(Publisher::<u32>::default());
        let late = Rc::new(RefCell::new(Vec::new()));

        let inner_publisher = Rc::clone(&publisher);
        let inner_late = Rc::clone(&late);
        publisher
            .subscribe(move |v| {
                if *v == 1 {
                    let sink = Rc::clone(&inner_late);
                    inner_publisher
                        .subscribe(move |v| sink.borrow_mut().push(*v))
                        .detach();
                }
            })
            .detach();

        publisher.publish(&1);
        publisher.publish(&2);
        assert_eq!(*late.borrow(), vec![2]);
    }

    #[test]
    fn nested_publishes_are_delivered_after_the_current_value() {
        let publisher = Rc::new(Publisher::<u32>::default());
        let log = Rc::new(RefCell::new(Vec::new()));

        let inner_publisher = Rc::clone(&publisher);
        let first_log = Rc::clone(&log);
        publisher
            .subscribe(move |v| {
                first_log.borrow_mut().push(("first", *v));
                if *v == 1 {
                    inner_publisher.publish(&2);
                }
            })
            .detach();
        let second_log = Rc::clone(&log);
        publisher
            .subscribe(move |v| second_log.borrow_mut().push(("second", *v)))
            .detach();

        publisher.publish(&1);
        assert_eq!(
            *log.borrow(),
            vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]
        );

        log.borrow_mut().clear();
        publisher.publish(&3);
        assert_eq!(*log.borrow(), vec![("first", 3), ("second", 3)]);
    }

    #[test]
    fn subscription_outliving_publisher_is_harmless() {
        let publisher = Publisher::<u32>::default();
        let subscription = publisher.subscribe(|_| {});
        drop(publisher);
        subscription.unsubscribe();
    }
}
