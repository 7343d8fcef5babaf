use std::time::Instant;

/// Prints bracketed progress lines so `--nocapture` output reads as a trace.
pub struct TestLogger {
    test_name: String,
    start_time: Instant,
}

impl TestLogger {
    pub fn new(test_name: &str) -> Self {
        println!("\n[TEST START] {test_name}");
        Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
        }
    }

    pub fn step(&self, description: &str) {
        println!(
            "[STEP +{:?}] {}: {}",
            self.start_time.elapsed(),
            self.test_name,
            description
        );
    }

    pub fn log_value<T: std::fmt::Debug>(&self, name: &str, value: &T) {
        println!("[VALUE] {name}: {value:?}");
    }

    pub fn pass(&self) {
        println!(
            "[RESULT] {} PASSED in {:?}\n",
            self.test_name,
            self.start_time.elapsed()
        );
    }
}
