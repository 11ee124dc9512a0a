//! PE fan-out/fan-in: run a payload on every PE and collect one status
//! word per PE.

pub mod aggregation;
pub mod cluster;
pub mod rendezvous;
pub mod status;

pub use aggregation::{aggregate, PeVerdict};
pub use cluster::ThreadCluster;
pub use rendezvous::{
    Assignment, FanIn, NoSecondaries, Payload, PeContext, PeRendezvous, PeSignal, PeSlots,
};
pub use status::{PeState, PeStatus};
