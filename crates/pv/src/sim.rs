//! In-process simulated provider.
//!
//! `SimHost` registers named variables; `SimPv` handles are cloneable and
//! share state through an `Arc<Mutex<…>>`, so a playback thread can put
//! values while the UI thread holds handles to the same variables. This is
//! the stand-in tests and the demo use for the live control system.

use std::collections::HashMap;
use std::mem;
use std::sync::{Arc, Mutex};

use crate::error::PvError;
use crate::source::{Monitor, ProcessVariable};
use crate::value::{PvMetadata, PvUpdate, PvValue};

struct SimShared {
    value: PvValue,
    metadata: PvMetadata,
    monitors: Vec<Monitor>,
    connected: bool,
}

/// Cloneable handle to one simulated process variable.
#[derive(Clone)]
pub struct SimPv {
    name: Arc<str>,
    shared: Arc<Mutex<SimShared>>,
}

/// Registry of simulated process variables.
#[derive(Default)]
pub struct SimHost {
    pvs: HashMap<String, SimPv>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable and return a handle to it.
    pub fn add_pv(&mut self, name: &str, value: PvValue, metadata: PvMetadata) -> SimPv {
        let pv = SimPv {
            name: Arc::from(name),
            shared: Arc::new(Mutex::new(SimShared {
                value,
                metadata,
                monitors: Vec::new(),
                connected: true,
            })),
        };
        self.pvs.insert(name.to_string(), pv.clone());
        pv
    }

    /// Look up a registered variable by name.
    pub fn pv(&self, name: &str) -> Result<SimPv, PvError> {
        self.pvs
            .get(name)
            .cloned()
            .ok_or_else(|| PvError::UnknownPv(name.to_string()))
    }
}

impl SimPv {
    /// Simulate a connection drop (or restore). Disconnected variables fail
    /// every operation until reconnected.
    pub fn set_connected(&self, connected: bool) {
        let mut shared = self.shared.lock().expect("pv state poisoned");
        shared.connected = connected;
    }
}

impl ProcessVariable for SimPv {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self) -> Result<PvValue, PvError> {
        let shared = self.shared.lock().expect("pv state poisoned");
        if !shared.connected {
            return Err(PvError::Disconnected(self.name.to_string()));
        }
        Ok(shared.value.clone())
    }

    fn put(&mut self, value: PvValue) -> Result<(), PvError> {
        let mut shared = self.shared.lock().expect("pv state poisoned");
        if !shared.connected {
            return Err(PvError::Disconnected(self.name.to_string()));
        }
        if mem::discriminant(&shared.value) != mem::discriminant(&value) {
            return Err(PvError::TypeMismatch(self.name.to_string()));
        }

        log::trace!(target: "pv.sim", "put {}: {value:?}", self.name);
        shared.value = value;

        // Monitors run under the lock; they only post to a queue, and the
        // handle contract forbids them calling back into this variable.
        let update = PvUpdate {
            value: shared.value.clone(),
            metadata: shared.metadata.clone(),
        };
        for monitor in &shared.monitors {
            monitor(&update);
        }
        Ok(())
    }

    fn metadata(&self) -> Result<PvMetadata, PvError> {
        let shared = self.shared.lock().expect("pv state poisoned");
        if !shared.connected {
            return Err(PvError::Disconnected(self.name.to_string()));
        }
        Ok(shared.metadata.clone())
    }

    fn add_monitor(&mut self, monitor: Monitor) {
        let mut shared = self.shared.lock().expect("pv state poisoned");
        shared.monitors.push(monitor);
    }

    fn duplicate(&self) -> Box<dyn ProcessVariable> {
        Box::new(self.clone())
    }
}
