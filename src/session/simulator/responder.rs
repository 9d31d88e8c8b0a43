//! Canned-reply response simulator.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::session::core::config::SimulatorConfig;
use crate::session::core::errors::{SessionError, SessionResult};
use crate::session::simulator::ports::{Clock, RandomSource, ThreadRandom, TokioClock};

/// Boxed future returned by [`Responder::generate`].
pub type ReplyFuture = Pin<Box<dyn Future<Output = SessionResult<String>> + Send + 'static>>;

/// Something that produces one assistant reply per request.
///
/// The session controller only depends on this trait, so a real backend can
/// replace the simulator without touching the state machine.
pub trait Responder: Send + Sync {
    /// Produce the reply for one submission.
    ///
    /// # Errors
    /// Returns an error if the reply cannot be produced.
    fn generate(&self) -> ReplyFuture;
}

/// Replies the simulator picks from.
pub const DEFAULT_RESPONSES: [&str; 5] = [
    "I'm a demo version of ChatGPT. This is a simulated response to show the interface functionality.",
    "Hello! I'm here to help. Please note this is a clone interface for demonstration purposes.",
    "Thanks for your message! This is a sample response from the ChatGPT clone interface.",
    "I understand you're testing the interface. Everything seems to be working correctly!",
    "This is a demonstration of how the ChatGPT interface works. The actual AI functionality would require integration with OpenAI's API.",
];

/// Stand-in backend: waits a random delay, then returns a random canned reply.
#[derive(Clone, Debug)]
pub struct ResponseSimulator {
    config: SimulatorConfig,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
    corpus: Arc<[String]>,
}

impl ResponseSimulator {
    /// Create a simulator with the default corpus and explicit ports.
    #[must_use]
    pub fn new(
        config: SimulatorConfig,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            clock,
            random,
            corpus: DEFAULT_RESPONSES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Create a simulator on the tokio clock and thread RNG.
    #[must_use]
    pub fn with_defaults(config: SimulatorConfig) -> Self {
        Self::new(config, Arc::new(TokioClock), Arc::new(ThreadRandom))
    }

    /// Replace the reply corpus.
    ///
    /// # Errors
    /// Returns an error if `corpus` is empty.
    pub fn with_corpus(mut self, corpus: Vec<String>) -> SessionResult<Self> {
        if corpus.is_empty() {
            return Err(SessionError::InvalidConfig(
                "response corpus must not be empty".to_string(),
            ));
        }
        self.corpus = corpus.into();
        Ok(self)
    }

    /// Replies this simulator picks from.
    #[must_use]
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    /// Draw the delay for one reply, uniform in `[min, min + jitter)`.
    #[must_use]
    pub fn next_delay(&self) -> Duration {
        let extra = self.random.below(self.config.jitter_ms);
        Duration::from_millis(self.config.min_delay_ms.saturating_add(extra))
    }

    fn pick(&self) -> String {
        let len = self.corpus.len() as u64;
        let index = usize::try_from(self.random.below(len)).unwrap_or_default();
        self.corpus.get(index).cloned().unwrap_or_default()
    }
}

impl Responder for ResponseSimulator {
    fn generate(&self) -> ReplyFuture {
        let delay = self.next_delay();
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let sleep = self.clock.sleep(delay);
        let this = self.clone();
        Box::pin(async move {
            tracing::debug!(delay_ms, "Simulating assistant reply");
            sleep.await;
            Ok(this.pick())
        })
    }
}
