use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Intent {
    Start,
    Flap,
}

/// Pending intents recorded between two frames.
///
/// Intents are edge-triggered: however many arrive before the next frame, each kind is honoured at most once. Flaps
/// reset velocity rather than add to it, so a burst of flaps and a single flap are indistinguishable anyway.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntentLatch {
    start: bool,
    flap: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub start: bool,
    pub flap: bool,
}

impl IntentLatch {
    pub fn record(&mut self, intent: Intent) {
        match intent {
            Intent::Start => self.start = true,
            Intent::Flap => self.flap = true,
        }
    }

    /// Consumes everything recorded so far.
    pub fn take(&mut self) -> Pending {
        let pending = Pending { start: self.start, flap: self.flap };
        *self = IntentLatch::default();
        pending
    }
}
