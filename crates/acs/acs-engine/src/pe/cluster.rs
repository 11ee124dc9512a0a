//! Host PE cluster: each secondary PE is an OS thread woken through its own
//! channel.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{unbounded, Sender};

use acs_core::errors::PeError;

use super::rendezvous::{run_payload, PeSignal, PeSlots};

#[derive(Debug, Clone, Copy)]
enum Wake {
    Run,
    Shutdown,
}

/// Secondary PEs 1..num_pe as threads. PE 0 is the calling thread.
pub struct ThreadCluster {
    senders: Vec<Sender<Wake>>,
    handles: Vec<JoinHandle<()>>,
}

impl ThreadCluster {
    /// Spawn one thread per secondary slot in `slots`.
    pub fn spawn(slots: Arc<PeSlots>) -> Result<Self, PeError> {
        let num_pe = slots.num_pe();
        let mut senders = Vec::with_capacity(num_pe.saturating_sub(1));
        let mut handles = Vec::with_capacity(num_pe.saturating_sub(1));

        for index in 1..num_pe {
            let (tx, rx) = unbounded::<Wake>();
            let slots = Arc::clone(&slots);
            let handle = std::thread::Builder::new()
                .name(format!("acs-pe-{index}"))
                .spawn(move || {
                    while let Ok(Wake::Run) = rx.recv() {
                        run_assignment(&slots, index);
                    }
                })
                .map_err(|e| PeError::SignalFailed {
                    index,
                    message: e.to_string(),
                })?;
            senders.push(tx);
            handles.push(handle);
        }

        tracing::debug!(target: "acs::pe", num_pe, "host PE cluster started");
        Ok(Self { senders, handles })
    }

    /// Number of secondary threads.
    pub fn secondaries(&self) -> usize {
        self.senders.len()
    }
}

fn run_assignment(slots: &PeSlots, index: usize) {
    let Some(assignment) = slots.assignment(index) else {
        tracing::warn!(target: "acs::pe", pe_index = index, "woken with no assignment");
        return;
    };
    run_payload(slots, index, &assignment.payload, assignment.test_id, assignment.arg);
}

impl PeSignal for ThreadCluster {
    fn signal(&self, index: usize) -> Result<(), PeError> {
        let sender = index
            .checked_sub(1)
            .and_then(|i| self.senders.get(i))
            .ok_or(PeError::IndexOutOfRange {
                index,
                num_pe: self.senders.len() + 1,
            })?;
        sender.send(Wake::Run).map_err(|e| PeError::SignalFailed {
            index,
            message: e.to_string(),
        })
    }
}

impl Drop for ThreadCluster {
    fn drop(&mut self) {
        for tx in &self.senders {
            let _ = tx.send(Wake::Shutdown);
        }
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

impl std::fmt::Debug for ThreadCluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadCluster")
            .field("secondaries", &self.senders.len())
            .finish()
    }
}
