//! Signal-driven shutdown flag.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Cloneable view of a process-wide "please stop" flag.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Flag that nothing but [`ShutdownHandle::signal`] sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag that SIGINT and SIGTERM also set.
    pub fn install() -> io::Result<Self> {
        let handle = Self::new();
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&handle.flag))?;
        }
        Ok(handle)
    }

    pub fn signal(&self) {
        if !self.flag.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown requested");
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
