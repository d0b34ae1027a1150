use request_bag_ioc::{resolve_from, Container};
use std::sync::Arc;

// 1. The abstraction.
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. A concrete implementation.
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. A service that depends on the abstraction.
struct ReportService {
  logger: Arc<dyn Logger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Starting report generation.");
    self.logger.log("Finished report generation.");
  }
}

fn main() {
  let container = Arc::new(Container::new());

  // The container stores Arc<ConsoleLogger> but serves it as Arc<dyn Logger>.
  container.add_singleton_trait::<dyn Logger>(|| Arc::new(ConsoleLogger));

  // The factory resolves its own dependency from the container it captured.
  let c = Arc::clone(&container);
  container.add_singleton(move || ReportService {
    logger: resolve_from!(c, trait Logger),
  });

  let report_service = resolve_from!(container, ReportService);
  report_service.generate_report();
}
