/// A cancelable one-shot deadline driven by the adapter's clock.
///
/// At most one deadline is pending at a time: [`HideTimer::schedule`] always drops the previous
/// one before arming the new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HideTimer {
    deadline_ms: Option<u64>,
}

impl HideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) {
        if self.cancel() {
            ftrace!(now_ms, "HideTimer: replacing pending deadline");
        }
        let deadline = now_ms.saturating_add(delay_ms);
        ftrace!(now_ms, delay_ms, deadline, "HideTimer::schedule");
        self.deadline_ms = Some(deadline);
    }

    /// Drops the pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Returns `true` exactly once when the deadline has been reached.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn restore(deadline_ms: Option<u64>) -> Self {
        Self { deadline_ms }
    }
}
