// Trailing-edge debouncer for meta keys
//
// Every call replaces the pending callback. Only the most recent one fires,
// after `after` has passed without another call. A single worker thread
// sleeps until the pending deadline and is woken early whenever a newer call
// moves it.

use std::fmt;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

type Callback = Box<dyn FnOnce() + Send>;

struct Pending {
    deadline: Instant,
    callback: Callback,
}

#[derive(Default)]
struct State {
    pending: Option<Pending>,
    shutdown: bool,
}

#[derive(Default)]
struct Shared {
    state: Mutex<State>,
    wake: Condvar,
}

/// Collapses bursts of calls into a single delayed callback
///
/// Dropping the debouncer stops its worker and discards a callback that has
/// not fired yet.
pub struct Debouncer {
    after: Duration,
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(after: Duration) -> Self {
        let shared = Arc::new(Shared::default());
        let worker = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || run(&shared))
        };
        Self {
            after,
            shared,
            worker: Some(worker),
        }
    }

    /// Quiet period before the pending callback fires
    pub fn delay(&self) -> Duration {
        self.after
    }

    /// Schedule `f`, replacing any callback still waiting
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(mut state) = self.shared.state.lock() else {
            log::warn!("Debouncer lock poisoned, dropping callback");
            return;
        };
        // The superseded callback is dropped here
        state.pending = Some(Pending {
            deadline: Instant::now() + self.after,
            callback: Box::new(f),
        });
        drop(state);
        self.shared.wake.notify_one();
    }
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("after", &self.after)
            .finish_non_exhaustive()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        match self.shared.state.lock() {
            Ok(mut state) => {
                state.shutdown = true;
                state.pending = None;
            }
            Err(_) => log::warn!("Debouncer lock poisoned during shutdown"),
        }
        self.shared.wake.notify_one();

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("Debouncer worker panicked");
            }
        }
    }
}

/// Worker loop: wait for a deadline, fire the callback outside the lock
fn run(shared: &Shared) {
    let Ok(mut state) = shared.state.lock() else {
        return;
    };

    loop {
        if state.shutdown {
            return;
        }

        let now = Instant::now();
        state = match state.pending.as_ref().map(|pending| pending.deadline) {
            None => match shared.wake.wait(state) {
                Ok(state) => state,
                Err(_) => return,
            },
            Some(deadline) if deadline > now => {
                match shared.wake.wait_timeout(state, deadline - now) {
                    Ok((state, _)) => state,
                    Err(_) => return,
                }
            }
            Some(_) => {
                let callback = state.pending.take().map(|pending| pending.callback);
                drop(state);
                if let Some(callback) = callback {
                    callback();
                }
                match shared.state.lock() {
                    Ok(state) => state,
                    Err(_) => return,
                }
            }
        };
    }
}
