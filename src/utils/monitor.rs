#[cfg(feature = "cli")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct ProcessStats {
    pub cpu_usage: f32,
    pub memory_usage_kb: u64,
    pub peak_memory_kb: u64,
    pub elapsed_time: Duration,
}

/// Per-phase process statistics, logged only when enabled.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: RefCell<System>,
    pid: Option<Pid>,
    start_time: Instant,
    peak_memory: Cell<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let pid = if enabled {
            sysinfo::get_current_pid()
                .map_err(|e| tracing::warn!("Process monitoring unavailable: {}", e))
                .ok()
        } else {
            None
        };

        Self {
            system: RefCell::new(System::new()),
            pid,
            start_time: Instant::now(),
            peak_memory: Cell::new(0),
            enabled: enabled && pid.is_some(),
        }
    }

    pub fn get_stats(&self) -> Option<ProcessStats> {
        if !self.enabled {
            return None;
        }
        let pid = self.pid?;

        let mut system = self.system.borrow_mut();
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let process = system.process(pid)?;

        // 課堂規模的檔案，用 KB 比較有意義
        let memory_kb = process.memory() / 1024;
        if memory_kb > self.peak_memory.get() {
            self.peak_memory.set(memory_kb);
        }

        Some(ProcessStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_kb: memory_kb,
            peak_memory_kb: self.peak_memory.get(),
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}KB, Peak: {}KB, Time: {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_usage_kb,
                stats.peak_memory_kb,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}KB",
                stats.elapsed_time,
                stats.peak_memory_kb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 非 CLI 環境提供空實現
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
