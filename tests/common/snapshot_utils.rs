//! Utilities for snapshot testing with insta

use counter_demo::Verdict;
use insta::{assert_snapshot, assert_yaml_snapshot, Settings};

/// Configure insta settings for consistent snapshots
pub fn with_settings<F>(f: F)
where
    F: FnOnce(),
{
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path("../snapshots");
    settings.set_prepend_module_to_snapshot(false);
    settings.bind(f);
}

/// Snapshot console output, ignoring the final newline
pub fn assert_output_snapshot(name: &str, output: &str) {
    let output = output.trim_end_matches('\n');
    with_settings(|| {
        assert_snapshot!(name, output);
    });
}

/// Snapshot classification results in structured form
pub fn assert_verdicts_snapshot(name: &str, verdicts: &[Verdict]) {
    with_settings(|| {
        assert_yaml_snapshot!(name, verdicts);
    });
}
