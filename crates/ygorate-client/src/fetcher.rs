use crate::api::{CardApi, CardDetail, CardKey};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Result of a background detail fetch, delivered to the UI thread.
///
/// Outcomes carry the generation they were issued under; consumers drop
/// anything that is no longer current. Superseded tasks are aborted and
/// never deliver at all, so cancellation produces no outcome, not an error.
#[derive(Debug)]
pub enum FetchOutcome {
    Loaded {
        generation: u64,
        card: Box<CardDetail>,
    },
    Failed {
        generation: u64,
        key: CardKey,
        message: String,
    },
}

impl FetchOutcome {
    pub fn generation(&self) -> u64 {
        match self {
            FetchOutcome::Loaded { generation, .. } => *generation,
            FetchOutcome::Failed { generation, .. } => *generation,
        }
    }
}

/// One in-flight card-detail request at a time.
///
/// `request` aborts whatever was running before and spawns a fresh task for
/// the new key; dropping the fetcher aborts the outstanding task. The
/// receiver side is a plain std channel so a synchronous UI loop can drain
/// it between frames.
pub struct DetailFetcher {
    api: Arc<CardApi>,
    handle: Handle,
    tx: Sender<FetchOutcome>,
    in_flight: Option<JoinHandle<()>>,
    generation: u64,
}

impl DetailFetcher {
    pub fn new(api: CardApi, handle: Handle) -> (Self, Receiver<FetchOutcome>) {
        let (tx, rx) = channel();
        (
            Self {
                api: Arc::new(api),
                handle,
                tx,
                in_flight: None,
                generation: 0,
            },
            rx,
        )
    }

    /// Start fetching the card behind `key`, superseding any earlier request.
    /// Returns the generation tag the outcome will carry.
    pub fn request(&mut self, key: CardKey) -> u64 {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.in_flight = Some(self.handle.spawn(async move {
            let outcome = match api.fetch(&key).await {
                Ok(card) => FetchOutcome::Loaded {
                    generation,
                    card: Box::new(card),
                },
                Err(e) => FetchOutcome::Failed {
                    generation,
                    key,
                    message: e.to_string(),
                },
            };
            // The receiver may already be gone on shutdown.
            let _ = tx.send(outcome);
        }));
        generation
    }

    /// Abort the outstanding request, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }

    /// Whether an outcome tagged with `generation` is still the one the
    /// display is waiting for.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

impl Drop for DetailFetcher {
    fn drop(&mut self) {
        self.cancel();
    }
}
