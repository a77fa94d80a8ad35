//! Human-readable report rendering.

use crate::checklist::{next_steps, MANIFEST_FILE};
use crate::validator::{Progress, Section, ValidationOutcome};

const RULE_WIDTH: usize = 50;
const ERROR_MARK: &str = "❌";
const WARNING_MARK: &str = "⚠️ ";

/// Renders progress lines, the summary block and any warnings.
pub fn render_report(outcome: &ValidationOutcome) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    push_line(&mut out, "🔍 Validating browser extension...");
    push_line(&mut out, &rule);

    for item in &outcome.progress {
        match item {
            Progress::Section(section) => push_line(&mut out, section_heading(*section)),
            Progress::FilePassed { path, size } => {
                push_line(&mut out, &format!("  ✅ {path} ({size} bytes)"));
            }
            Progress::FileFound { path } => push_line(&mut out, &format!("  ✅ {path} found")),
            Progress::ManifestChecked => {
                push_line(&mut out, &format!("✅ {MANIFEST_FILE} is valid"));
            }
        }
    }

    push_line(&mut out, "");
    push_line(&mut out, &rule);
    push_line(&mut out, "📊 VALIDATION RESULTS");
    push_line(&mut out, &rule);

    if outcome.is_success() {
        push_line(
            &mut out,
            "🎉 SUCCESS! Extension structure is valid and ready to load.",
        );
        push_line(&mut out, "");
        push_line(&mut out, "📝 Next steps:");
        for (index, step) in next_steps().iter().enumerate() {
            push_line(&mut out, &format!("   {}. {step}", index + 1));
        }
    } else {
        push_line(&mut out, "❌ ERRORS FOUND - Extension cannot be loaded:");
        for error in &outcome.errors {
            push_line(&mut out, &format!("   {ERROR_MARK} {error}"));
        }
    }

    if !outcome.warnings.is_empty() {
        push_line(&mut out, "");
        push_line(
            &mut out,
            &format!("⚠️  WARNINGS ({}):", outcome.warnings.len()),
        );
        for warning in &outcome.warnings {
            push_line(&mut out, &format!("   {WARNING_MARK} {warning}"));
        }
    }

    out
}

fn section_heading(section: Section) -> &'static str {
    match section {
        Section::Manifest => "📄 Checking manifest.json...",
        Section::Icons => "🎨 Checking icon files...",
        Section::Structure => "\n📁 Checking file structure...",
        Section::DevFiles => "\n📦 Checking development files...",
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::render_report;
    use crate::validator::{Progress, Section, ValidationOutcome};

    #[test]
    fn success_report_lists_next_steps() {
        let outcome = ValidationOutcome {
            progress: vec![
                Progress::Section(Section::Structure),
                Progress::FilePassed {
                    path: "popup/popup.js".to_string(),
                    size: 42,
                },
            ],
            ..ValidationOutcome::default()
        };
        let report = render_report(&outcome);

        assert!(report.contains("  ✅ popup/popup.js (42 bytes)"));
        assert!(report.contains("🎉 SUCCESS!"));
        assert!(report.contains("   1. Open Chrome and go to chrome://extensions/"));
        assert!(report.contains("   4. Select this directory"));
        assert!(!report.contains("ERRORS FOUND"));
        assert!(!report.contains("WARNINGS"));
    }

    #[test]
    fn failure_report_lists_errors_and_warnings() {
        let outcome = ValidationOutcome {
            errors: vec!["manifest.json not found".to_string()],
            warnings: vec![
                "README.md not found".to_string(),
                "Empty file: utils/config.js".to_string(),
            ],
            progress: Vec::new(),
        };
        let report = render_report(&outcome);

        assert!(report.contains("ERRORS FOUND"));
        assert!(report.contains("   ❌ manifest.json not found"));
        assert!(report.contains("⚠️  WARNINGS (2):"));
        assert!(report.contains("Empty file: utils/config.js"));
        assert!(!report.contains("Next steps"));
    }

    #[test]
    fn warnings_are_printed_on_success_too() {
        let outcome = ValidationOutcome {
            warnings: vec!["README.md not found".to_string()],
            ..ValidationOutcome::default()
        };
        let report = render_report(&outcome);
        assert!(report.contains("SUCCESS"));
        assert!(report.contains("WARNINGS (1)"));
    }
}
