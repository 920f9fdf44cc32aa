use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TEMPLATE: &str = "  {spinner:.cyan} {msg}";
const SPINNER_TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// A step that has been announced but not yet completed.
struct ActiveStep {
    description: String,
    started: Instant,
    bar: ProgressBar,
}

/// Numbered spinner steps on stderr, each closed with its duration and the
/// work it covered.
pub struct StepSpinner {
    started: Instant,
    total_steps: u8,
    completed: u8,
    active: Option<ActiveStep>,
}

impl StepSpinner {
    pub fn new(total_steps: u8) -> Self {
        Self {
            started: Instant::now(),
            total_steps,
            completed: 0,
            active: None,
        }
    }

    pub fn step(&mut self, description: &str) {
        self.clear_active();

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            bar.set_style(style.tick_chars(SPINNER_TICKS));
        }
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message(running_message(
            self.completed + 1,
            self.total_steps,
            description,
        ));

        self.active = Some(ActiveStep {
            description: description.to_string(),
            started: Instant::now(),
            bar,
        });
    }

    /// Closes the running step. Does nothing if no step is running.
    pub fn complete_step(&mut self, substeps: &[String]) {
        let Some(active) = self.active.take() else {
            return;
        };
        active.bar.finish_and_clear();
        self.completed += 1;

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{}",
            completed_line(&active.description, active.started.elapsed())
        );
        for substep in substeps {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", substep);
        }
    }

    pub fn finish(mut self) {
        self.clear_active();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "{}",
            footer_line(self.completed, self.started.elapsed())
        );
        let _ = writeln!(stderr);
    }

    fn clear_active(&mut self) {
        if let Some(active) = self.active.take() {
            active.bar.finish_and_clear();
        }
    }
}

fn running_message(step: u8, total_steps: u8, description: &str) -> String {
    format!("[{}/{}] {}...", step, total_steps, description)
}

fn completed_line(description: &str, elapsed: Duration) -> String {
    format!(
        "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
        description,
        elapsed.as_secs_f64()
    )
}

fn footer_line(steps: u8, elapsed: Duration) -> String {
    let summary = format!(
        "Configuration dispatched ({} step{})",
        steps,
        if steps == 1 { "" } else { "s" }
    );
    format!(
        "  \x1b[32m✓\x1b[0m {:<44} {:>5.2}s",
        summary,
        elapsed.as_secs_f64()
    )
}

/// Step reporting that adapts to whether stderr is interactive.
pub enum Progress {
    Interactive(StepSpinner),
    Silent,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        if interactive {
            Self::Interactive(StepSpinner::new(total_steps))
        } else {
            Self::Silent
        }
    }

    pub fn step(&mut self, description: &str) {
        if let Self::Interactive(s) = self {
            s.step(description);
        }
    }

    pub fn complete_step(&mut self, substeps: &[String]) {
        if let Self::Interactive(s) = self {
            s.complete_step(substeps);
        }
    }

    pub fn finish(self) {
        if let Self::Interactive(s) = self {
            s.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_message_numbers_the_step() {
        assert_eq!(
            running_message(1, 2, "Resolving options"),
            "[1/2] Resolving options..."
        );
    }

    #[test]
    fn completed_line_shows_description_and_seconds() {
        let line = completed_line("Resolving options", Duration::from_millis(1250));
        assert!(line.contains("Resolving options"));
        assert!(line.ends_with("  1.2s") || line.ends_with("  1.3s"));
    }

    #[test]
    fn footer_counts_completed_steps() {
        assert!(footer_line(1, Duration::ZERO).contains("(1 step)"));
        assert!(footer_line(2, Duration::from_secs(3)).contains("(2 steps)"));
        assert!(footer_line(2, Duration::from_secs(3)).ends_with("3.00s"));
    }

    #[test]
    fn completing_without_a_running_step_is_a_no_op() {
        let mut spinner = StepSpinner::new(2);
        spinner.complete_step(&[]);
        assert_eq!(spinner.completed, 0);
    }

    #[test]
    fn silent_progress_ignores_every_call() {
        let mut progress = Progress::new(false, 2);
        assert!(matches!(progress, Progress::Silent));
        progress.step("Resolving options");
        progress.complete_step(&["ignored".to_string()]);
        progress.finish();
    }
}
