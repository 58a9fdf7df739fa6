#![allow(dead_code)]

pub mod snapshot_utils;

use counter_demo::{Config, CounterDemo};

/// Run the demo with `config` and capture everything it writes
pub fn run_demo(config: Config) -> String {
    let demo = CounterDemo::with_config(config);
    let mut out = Vec::new();
    demo.run(&mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("demo output is ASCII")
}

/// The 30 lines the default run must print, written out by hand
pub fn expected_default_output() -> String {
    let mut lines: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
    lines.extend(std::iter::repeat("test".to_string()).take(10));
    lines.extend(
        [
            "Not divisible by 3 or 5: 1",
            "Not divisible by 3 or 5: 2",
            "Divisible by 3: 3",
            "Not divisible by 3 or 5: 4",
            "Divisible by 5: 5",
            "Divisible by 3: 6",
            "Not divisible by 3 or 5: 7",
            "Not divisible by 3 or 5: 8",
            "Divisible by 3: 9",
            "Divisible by 5: 10",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
