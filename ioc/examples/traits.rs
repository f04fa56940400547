use injector::{bind, install, resolve, Component, Registry};
use std::sync::Arc;

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation and mark it as a component
#[derive(Component)]
struct ConsoleLogger;

impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. Define a service whose field is injected with the abstraction
#[derive(Component)]
struct ReportService {
  #[inject]
  logger: Arc<dyn Logger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Starting report generation.");
    self.logger.log("Finished report generation.");
  }
}

fn main() {
  // --- Registration ---
  let mut registry = Registry::new();
  registry.component::<ConsoleLogger>().component::<ReportService>();
  // The container caches Arc<ConsoleLogger> and serves it as Arc<dyn Logger>.
  bind!(registry, Logger => ConsoleLogger);

  install(registry.build()).expect("nothing was installed before");

  // --- Resolution and Usage ---
  println!("Resolving the high-level service...");
  let report_service = resolve!(ReportService);

  println!("Using the service...");
  report_service.generate_report();
}
