use crate::core::Pipeline;
use crate::domain::model::ScrubReport;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ScrubEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ScrubEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<ScrubReport> {
        println!("Starting project scrub...");

        // Extract
        println!("Reading project file...");
        let text = self.pipeline.extract().await?;
        println!("Read {} bytes", text.len());
        self.monitor.log_stats("Extract");

        // Transform
        println!("Applying deletion rules...");
        let result = self.pipeline.transform(text).await?;
        println!(
            "{} of {} rules matched, {} occurrence(s) removed",
            result.report.rules_fired(),
            result.report.outcomes.len(),
            result.report.total_matches
        );
        self.monitor.log_stats("Transform");

        // Load
        println!("Writing project file...");
        let report = self.pipeline.load(result).await?;
        if report.written {
            println!("Project file updated: {}", report.file);
        } else {
            println!("Write skipped (dry run): {}", report.file);
        }
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(report)
    }
}
