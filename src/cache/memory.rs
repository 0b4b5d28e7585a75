//! Memory Probe Module
//!
//! Abstracts "current process heap usage in MB" so the eviction policy
//! can be driven by an injected reading instead of the store measuring
//! memory itself.

// == Memory Probe Trait ==
/// Source of the current process memory reading.
///
/// A probe that cannot produce a reading returns `None`, which the
/// store treats as "no memory pressure".
pub trait MemoryProbe: Send + Sync {
    /// Current process memory usage in megabytes, if measurable.
    fn used_mb(&self) -> Option<f64>;
}

// == Process Probe ==
/// Reads resident set size from `/proc/self/status` (VmRSS).
///
/// On platforms without procfs the probe reports `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcStatusProbe;

impl MemoryProbe for ProcStatusProbe {
    #[cfg(target_os = "linux")]
    fn used_mb(&self) -> Option<f64> {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        status
            .lines()
            .find(|line| line.starts_with("VmRSS:"))
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|kb| kb.parse::<f64>().ok())
            .map(|kb| kb / 1024.0)
    }

    #[cfg(not(target_os = "linux"))]
    fn used_mb(&self) -> Option<f64> {
        None
    }
}

// == Fixed Probe ==
/// Probe returning a fixed reading; used to exercise the memory-pressure
/// path deterministically in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub Option<f64>);

impl MemoryProbe for FixedProbe {
    fn used_mb(&self) -> Option<f64> {
        self.0
    }
}
