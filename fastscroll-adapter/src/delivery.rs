use core::fmt;

/// A value that can be read exactly once.
///
/// Result observers may run more than once for the same value (re-subscription, configuration
/// changes); `take` hands the value out on the first call only.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery<T> {
    value: Option<T>,
}

impl<T> Delivery<T> {
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Returns the value on the first call, `None` afterwards.
    pub fn take(&mut self) -> Option<T> {
        let value = self.value.take();
        if value.is_none() {
            atrace!("Delivery::take: already delivered");
        }
        value
    }

    /// Looks at the value without consuming it. `None` once delivered.
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_delivered(&self) -> bool {
        self.value.is_none()
    }

    /// Passes the value to `f` if it has not been delivered yet. Returns whether `f` ran.
    pub fn deliver_to(&mut self, f: impl FnOnce(T)) -> bool {
        match self.take() {
            Some(value) => {
                f(value);
                true
            }
            None => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Delivery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => f.debug_tuple("Delivery").field(v).finish(),
            None => f.write_str("Delivery(<delivered>)"),
        }
    }
}
