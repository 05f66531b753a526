use std::cell::{Cell, RefCell};

/// A single-threaded observable value.
///
/// Every call to [`set`](Observable::set) notifies all subscribers in
/// registration order, including writes that store the value already
/// held. Subscribers that need change detection keep their own copy of
/// the previous value.
///
/// Notification rules:
/// - a callback reading the observable during notification sees the
///   newly written value;
/// - a callback may subscribe during notification, but the new
///   subscriber only starts receiving values from the next write;
/// - a callback may write the observable again, which updates the
///   value without starting a second notification pass.
pub struct Observable<T: Copy> {
    value: Cell<T>,
    subscribers: RefCell<Vec<Box<dyn FnMut(T)>>>,
}

impl<T: Copy> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Cell::new(value),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn set(&self, value: T) {
        self.value.set(value);
        self.notify(value);
    }

    pub fn subscribe(&self, callback: impl FnMut(T) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self, value: T) {
        // Detach the subscriber list while callbacks run so they can
        // freely call get(), set() and subscribe() on this observable.
        // A set() landing here while detached finds an empty list and
        // notifies nobody, which is what keeps notification from
        // re-entering.
        let mut active = std::mem::take(&mut *self.subscribers.borrow_mut());

        for callback in active.iter_mut() {
            callback(value);
        }

        // Anything subscribed while detached is queued behind the
        // original subscribers.
        let mut subscribers = self.subscribers.borrow_mut();
        let added = std::mem::take(&mut *subscribers);
        *subscribers = active;
        subscribers.extend(added);
    }
}
