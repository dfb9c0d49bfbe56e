use std::future::Future;
use std::time::Duration;

use dioxus::prelude::*;

/// Pause between clearing the live region and writing the message, so screen
/// readers notice a repeated message as a change.
pub const ANNOUNCE_DELAY: Duration = Duration::from_millis(10);

/// Text sink backing an `aria-live` element.
pub trait LiveRegion {
    fn set_text(&mut self, text: String);
}

impl LiveRegion for Signal<String> {
    fn set_text(&mut self, text: String) {
        self.set(text);
    }
}

/// Clear-then-write announcer for a polite live region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeferredAnnouncer<R> {
    region: R,
    delay: Duration,
}

impl<R> DeferredAnnouncer<R>
where
    R: LiveRegion + Clone + 'static,
{
    #[must_use]
    pub fn new(region: R) -> Self {
        Self {
            region,
            delay: ANNOUNCE_DELAY,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Clear the region now and return the delivery of `message`.
    ///
    /// The caller decides where the returned future runs; it is never awaited
    /// by the announcer itself.
    pub fn announce(&mut self, message: &str) -> impl Future<Output = ()> + use<R> {
        self.region.set_text(String::new());
        let mut region = self.region.clone();
        let message = message.to_owned();
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            region.set_text(message);
        }
    }
}
