use std::borrow::Cow;

use indicatif::{ProgressBar, ProgressStyle};
use lprojkit::ProgressSink;

/// Engine progress sink that prints each message to stdout.
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn log(&self, message: &str) {
        println!("{}", message);
    }
}

/// Create a spinner for a scan or parse phase.
pub fn spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap(),
    );
    progress_bar.set_message(message);
    progress_bar
}
