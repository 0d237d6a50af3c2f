//! Regression test parameters and operations

use pixproc_core::ImageView;

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the index of the
/// current comparison, and every failure seen so far. Comparisons record
/// failures instead of panicking so one run reports all of them.
pub struct RegParams {
    /// Name of the test (e.g., "blur")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "blur")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record(msg);
            false
        } else {
            true
        }
    }

    /// Compare two packed pixels for exact equality
    pub fn compare_pixels(&mut self, expected: u32, actual: u32) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: pixel comparison for index {}\n\
                 expected = {:#010x}, actual = {:#010x}",
                self.test_name, self.index, expected, actual
            );
            self.record(msg);
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the images have the same shape and identical pixels.
    pub fn compare_views(&mut self, expected: &ImageView<'_>, actual: &ImageView<'_>) -> bool {
        self.index += 1;

        if expected.dimensions() != actual.dimensions() {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - dimension mismatch \
                 {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.dimensions(),
                actual.dimensions()
            );
            self.record(msg);
            return false;
        }

        for row in 0..expected.height() {
            for col in 0..expected.width() {
                let p1 = expected.get(row, col);
                let p2 = actual.get(row, col);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: image comparison for index {} - pixel mismatch \
                         at (row {}, col {}): {:#010x} vs {:#010x}",
                        self.test_name, self.index, row, col, p1, p2
                    );
                    self.record(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
