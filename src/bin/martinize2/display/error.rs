use std::io::{self, Write};

use anyhow::Error;

use crate::pipeline::ManifestError;
use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut collector = HintCollector::default();

    collector.collect_option_hints(err);
    collector.collect_manifest_hints(err);

    if !collector.has_typed_hints {
        collector.collect_fallback_hints(err);
    }

    collector.hints
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_option_hints(&mut self, err: &Error) {
        use martinize::Error as OptionError;

        let Some(option_err) = err.downcast_ref::<OptionError>() else {
            return;
        };

        self.mark_typed();

        match option_err {
            OptionError::InvalidOption { option, .. } => {
                self.add_option_grammar_hints(option);
            }

            OptionError::ConflictingOptions { options } => {
                self.add(format!("Keep only one of {}", options.join(", ")));
                if options.contains(&"-dssp") {
                    self.add("-dssp derives secondary structure from the input coordinates");
                }
                if options.contains(&"-ss") {
                    self.add("-ss takes one secondary structure letter per residue");
                }
                if options.contains(&"-collagen") {
                    self.add("-collagen is only meaningful for collagen structures");
                }
            }
        }
    }

    fn add_option_grammar_hints(&mut self, option: &str) {
        match option {
            "-cys" => {
                self.add("Use '-cys auto' to detect bridges from side-chain geometry");
                self.add("Use '-cys none' to skip bridges, or give a cutoff in nm (e.g. 0.24)");
            }

            "-maxwarn" => {
                self.add("'-maxwarn 3' tolerates three warnings of any type");
                self.add("'-maxwarn general' tolerates every 'general' warning");
                self.add("'-maxwarn general:3' tolerates three 'general' warnings");
            }

            _ => {
                self.add(format!("Run with -h to see the accepted values for {}", option));
            }
        }
    }

    fn collect_manifest_hints(&mut self, err: &Error) {
        let Some(manifest_err) = err.downcast_ref::<ManifestError>() else {
            return;
        };

        self.mark_typed();

        match manifest_err {
            ManifestError::Serialize(_) => {
                self.add("The resolved configuration could not be written as TOML");
                self.add("This may indicate a bug; please report if reproducible");
            }

            ManifestError::Create { source, .. } | ManifestError::Write(source) => {
                self.collect_std_io_hints(source);
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("The manifest directory does not exist");
                self.add("Create it first or choose another -manifest path");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied writing the manifest");
                self.add("Check directory permissions with `ls -la`");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: the manifest consumer terminated early");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
            }

            _ => {
                self.add("Check the -manifest path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        } else if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the path is correct");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_options_suggest_keeping_one() {
        let err = Error::new(martinize::Error::ConflictingOptions {
            options: vec!["-ss", "-collagen"],
        });
        let hints = collect_hints(&err);
        assert_eq!(hints[0], "Keep only one of -ss, -collagen");
        assert_eq!(hints.len(), 3);
    }

    #[test]
    fn invalid_cys_hints_show_accepted_forms() {
        let err = Error::new(martinize::parse_cys("sometimes").unwrap_err());
        let hints = collect_hints(&err);
        assert!(hints.iter().any(|h| h.contains("-cys auto")));
    }

    #[test]
    fn manifest_io_errors_get_io_hints() {
        let err = Error::new(ManifestError::Create {
            target: "out/run.toml".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        let hints = collect_hints(&err);
        assert_eq!(hints[0], "The manifest directory does not exist");
    }

    #[test]
    fn untyped_errors_fall_back_to_message_hints() {
        let err = anyhow::anyhow!("Permission denied while doing something");
        assert_eq!(
            collect_hints(&err),
            vec!["Check file permissions with `ls -la`".to_string()]
        );
    }
}
