//! Single-writer-per-slot rendezvous between the primary PE and its
//! secondaries.
//!
//! The primary owns each slot's assignment until it signals the PE. Each PE
//! owns its own status word. The primary reads status words with `Acquire`
//! and PEs publish them with `Release`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use smallvec::SmallVec;

use acs_core::constants::DEFAULT_PE_TIMEOUT_ITERATIONS;
use acs_core::errors::PeError;
use acs_core::events::{EventDispatcher, PeTimeoutEvent};

use super::status::{PeState, PeStatus};

/// Work run on each PE.
pub type Payload = Arc<dyn Fn(&PeContext<'_>) + Send + Sync>;

/// What the primary hands to a secondary before waking it.
#[derive(Clone)]
pub struct Assignment {
    pub payload: Payload,
    pub arg: u64,
    pub test_id: u16,
}

impl std::fmt::Debug for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assignment")
            .field("arg", &self.arg)
            .field("test_id", &self.test_id)
            .finish()
    }
}

#[derive(Default)]
struct PeSlot {
    assignment: Mutex<Option<Assignment>>,
    status: AtomicU32,
}

/// One shared slot per PE. Index 0 is the primary.
pub struct PeSlots {
    slots: Vec<PeSlot>,
}

impl PeSlots {
    pub fn new(num_pe: usize) -> Self {
        Self {
            slots: (0..num_pe).map(|_| PeSlot::default()).collect(),
        }
    }

    pub fn num_pe(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, index: usize) -> Result<&PeSlot, PeError> {
        self.slots.get(index).ok_or(PeError::IndexOutOfRange {
            index,
            num_pe: self.slots.len(),
        })
    }

    /// Mark PE `index` pending for `test_id`.
    pub fn reset(&self, index: usize, test_id: u16) -> Result<(), PeError> {
        self.slot(index)?
            .status
            .store(PeStatus::pending(test_id).to_word(), Ordering::Release);
        Ok(())
    }

    pub fn assign(&self, index: usize, assignment: Assignment) -> Result<(), PeError> {
        let slot = self.slot(index)?;
        *slot.assignment.lock().unwrap_or_else(PoisonError::into_inner) = Some(assignment);
        Ok(())
    }

    /// The current assignment for PE `index`. Left in place; it is read-only
    /// until the primary assigns the next rule.
    pub fn assignment(&self, index: usize) -> Option<Assignment> {
        self.slots
            .get(index)?
            .assignment
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn status_word(&self, index: usize) -> Option<u32> {
        self.slots.get(index).map(|s| s.status.load(Ordering::Acquire))
    }

    pub fn status(&self, index: usize) -> Option<PeStatus> {
        self.status_word(index).map(PeStatus::from_word)
    }

    /// Snapshot of the first `num_pe` status words.
    pub fn snapshot(&self, num_pe: usize) -> Vec<u32> {
        self.slots
            .iter()
            .take(num_pe)
            .map(|s| s.status.load(Ordering::Acquire))
            .collect()
    }

    /// Publish a payload's result for PE `index`.
    ///
    /// Rejected when the word belongs to a different test or was already
    /// forced to the timeout checkpoint, so a late PE cannot overwrite a
    /// verdict the primary has moved past.
    pub fn report(&self, index: usize, status: PeStatus) -> bool {
        let Some(slot) = self.slots.get(index) else {
            return false;
        };
        let new = status.to_word();
        slot.status
            .fetch_update(Ordering::Release, Ordering::Acquire, |current| {
                let current = PeStatus::from_word(current);
                (current.test_id == status.test_id && !current.is_timeout()).then_some(new)
            })
            .is_ok()
    }

    /// Force PE `index` to FAIL at the timeout checkpoint if it is still
    /// pending on `test_id`. Returns whether the word was changed.
    pub fn force_timeout(&self, index: usize, test_id: u16) -> bool {
        let Some(slot) = self.slots.get(index) else {
            return false;
        };
        let pending = PeStatus::pending(test_id).to_word();
        slot.status
            .compare_exchange(
                pending,
                PeStatus::timed_out(test_id).to_word(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

impl std::fmt::Debug for PeSlots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeSlots")
            .field("num_pe", &self.slots.len())
            .finish()
    }
}

/// A payload's view of the PE it runs on.
pub struct PeContext<'a> {
    slots: &'a PeSlots,
    index: usize,
    test_id: u16,
    arg: u64,
}

impl<'a> PeContext<'a> {
    pub fn new(slots: &'a PeSlots, index: usize, test_id: u16, arg: u64) -> Self {
        Self {
            slots,
            index,
            test_id,
            arg,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_primary(&self) -> bool {
        self.index == 0
    }

    pub fn num_pe(&self) -> usize {
        self.slots.num_pe()
    }

    pub fn test_id(&self) -> u16 {
        self.test_id
    }

    pub fn arg(&self) -> u64 {
        self.arg
    }

    /// Publish this PE's status. Returns false if the primary already gave up
    /// on this PE.
    pub fn set_status(&self, state: PeState, checkpoint: u16) -> bool {
        self.slots
            .report(self.index, PeStatus::reported(state, self.test_id, checkpoint))
    }

    pub fn set_pass(&self) -> bool {
        self.set_status(PeState::Pass, 0)
    }

    pub fn set_fail(&self, checkpoint: u16) -> bool {
        self.set_status(PeState::Fail, checkpoint)
    }

    pub fn set_skip(&self, checkpoint: u16) -> bool {
        self.set_status(PeState::Skip, checkpoint)
    }
}

/// Run `payload` as PE `index`. A panicking payload fails its PE.
pub(crate) fn run_payload(
    slots: &PeSlots,
    index: usize,
    payload: &Payload,
    test_id: u16,
    arg: u64,
) {
    let ctx = PeContext::new(slots, index, test_id, arg);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| (**payload)(&ctx)));
    if result.is_err() {
        tracing::error!(target: "acs::pe", pe_index = index, test_id, "payload panicked");
        ctx.set_status(PeState::Fail, 0);
    }
}

/// Wakes a secondary PE once its slot holds an assignment.
pub trait PeSignal: Send + Sync {
    fn signal(&self, index: usize) -> Result<(), PeError>;
}

/// Signal for a system with only the primary PE.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSecondaries;

impl PeSignal for NoSecondaries {
    fn signal(&self, index: usize) -> Result<(), PeError> {
        Err(PeError::IndexOutOfRange { index, num_pe: 1 })
    }
}

/// Result of one fan-out/fan-in round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanIn {
    /// Final status word of each PE.
    pub words: Vec<u32>,
    /// PEs forced to FAIL because they never left PENDING.
    pub timed_out: SmallVec<[usize; 8]>,
}

/// Runs payloads across PEs with a bounded fan-in.
pub struct PeRendezvous {
    slots: Arc<PeSlots>,
    signal: Box<dyn PeSignal>,
    timeout_iterations: u64,
    events: EventDispatcher,
}

impl PeRendezvous {
    pub fn new(slots: Arc<PeSlots>, signal: Box<dyn PeSignal>) -> Self {
        Self {
            slots,
            signal,
            timeout_iterations: DEFAULT_PE_TIMEOUT_ITERATIONS,
            events: EventDispatcher::new(),
        }
    }

    /// A rendezvous with only the primary PE.
    pub fn single() -> Self {
        Self::new(Arc::new(PeSlots::new(1)), Box::new(NoSecondaries))
    }

    /// Set the fan-in poll bound.
    pub fn with_timeout(mut self, iterations: u64) -> Self {
        self.timeout_iterations = iterations;
        self
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn set_events(&mut self, events: EventDispatcher) {
        self.events = events;
    }

    pub fn num_pe(&self) -> usize {
        self.slots.num_pe()
    }

    pub fn slots(&self) -> &Arc<PeSlots> {
        &self.slots
    }

    /// Run `payload` on the first `num_pe` PEs.
    ///
    /// The primary runs it inline first. Each secondary then gets the
    /// assignment and a wake-up signal, and the primary polls until every PE
    /// has left PENDING or the poll bound runs out.
    pub fn run_on_pes(
        &self,
        test_id: u16,
        num_pe: usize,
        payload: Payload,
        arg: u64,
    ) -> Result<FanIn, PeError> {
        if num_pe == 0 || num_pe > self.slots.num_pe() {
            return Err(PeError::InvalidCount(num_pe));
        }
        for index in 0..num_pe {
            self.slots.reset(index, test_id)?;
        }

        run_payload(&self.slots, 0, &payload, test_id, arg);

        if num_pe == 1 {
            return Ok(FanIn {
                words: self.slots.snapshot(1),
                timed_out: SmallVec::new(),
            });
        }

        let mut unreachable: SmallVec<[usize; 8]> = SmallVec::new();
        for index in 1..num_pe {
            self.slots.assign(
                index,
                Assignment {
                    payload: Arc::clone(&payload),
                    arg,
                    test_id,
                },
            )?;
            if let Err(e) = self.signal.signal(index) {
                tracing::error!(target: "acs::pe", "{e}");
                unreachable.push(index);
            }
        }
        // A PE that could not be woken will never report.
        for &index in &unreachable {
            if self.slots.force_timeout(index, test_id) {
                self.emit_timeout(test_id, index);
            }
        }

        let mut timed_out = self.wait_for_completion(test_id, num_pe);
        timed_out.extend(unreachable);
        timed_out.sort_unstable();
        timed_out.dedup();

        Ok(FanIn {
            words: self.slots.snapshot(num_pe),
            timed_out,
        })
    }

    /// Poll until no PE is pending, up to the configured bound. On expiry,
    /// force every still-pending PE to FAIL at the timeout checkpoint.
    pub fn wait_for_completion(&self, test_id: u16, num_pe: usize) -> SmallVec<[usize; 8]> {
        let any_pending = || {
            (0..num_pe).any(|i| self.slots.status(i).is_some_and(|s| s.is_pending()))
        };

        let mut iterations: u64 = 0;
        while any_pending() {
            if iterations >= self.timeout_iterations {
                break;
            }
            iterations += 1;
            std::hint::spin_loop();
            // Host threads share cores with the primary.
            if iterations % 1024 == 0 {
                std::thread::yield_now();
            }
        }

        let mut timed_out = SmallVec::new();
        for index in 0..num_pe {
            if self.slots.force_timeout(index, test_id) {
                self.emit_timeout(test_id, index);
                timed_out.push(index);
            }
        }
        timed_out
    }

    fn emit_timeout(&self, test_id: u16, pe_index: usize) {
        tracing::warn!(target: "acs::pe", test_id, pe_index, "PE did not complete before timeout");
        self.events.emit_pe_timeout(&PeTimeoutEvent { test_id, pe_index });
    }
}

impl std::fmt::Debug for PeRendezvous {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeRendezvous")
            .field("num_pe", &self.slots.num_pe())
            .field("timeout_iterations", &self.timeout_iterations)
            .finish()
    }
}
