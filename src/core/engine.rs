use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct RegisterEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RegisterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load. A failed extract stops the run
    /// before any report is rendered.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting register load");
        self.monitor.log_stats("Start");

        // Extract
        let register = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} students and {} courses",
            register.students().len(),
            register.courses().len()
        );
        self.monitor.log_stats("Extract");

        // Transform
        let report = self.pipeline.transform(register)?;
        tracing::info!(
            "Rendered {:?} report: {} enrollments, {} skipped",
            report.format,
            report.enrollment_count,
            report.warning_count
        );
        self.monitor.log_stats("Transform");

        // Load
        let destination = self.pipeline.load(report)?;
        tracing::info!("Report written to: {}", destination);
        self.monitor.log_final_stats();

        Ok(destination)
    }
}
