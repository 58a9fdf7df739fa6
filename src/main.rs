use std::process;

use counter_demo::ErrorFormatter;

fn main() {
    match counter_demo::run() {
        Ok(()) => {}
        // Nobody is reading any more, so there is nothing left to report.
        Err(err) if err.is_broken_pipe() => {}
        Err(err) => {
            eprintln!("{}", ErrorFormatter::new(&err).format());
            process::exit(1);
        }
    }
}
