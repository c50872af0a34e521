//! Non-interactive commands

use std::io::Write;
use std::path::Path;

use crate::config::{PlannerPaths, Settings};
use crate::display::{format_summary, SummaryReport};
use crate::error::PlannerResult;
use crate::session::Session;

/// Load `file` into the session and print its summary
pub fn handle_summary_command<W: Write>(
    session: &mut Session,
    file: &Path,
    json: bool,
    out: &mut W,
) -> PlannerResult<()> {
    session.load(file)?;

    if json {
        let report = SummaryReport::new(session.store());
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(out, "{}", format_summary(session.store()))?;
    }

    Ok(())
}

/// Print resolved paths and settings
pub fn handle_config_command<W: Write>(
    paths: &PlannerPaths,
    settings: &Settings,
    out: &mut W,
) -> PlannerResult<()> {
    writeln!(out, "Budget Planner Configuration")?;
    writeln!(out, "============================")?;
    writeln!(out, "Config directory: {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
    writeln!(out, "Default file:     {}", settings.data_file(paths).display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Schema version: {}", settings.schema_version)?;
    writeln!(out, "  Show banner:    {}", settings.show_banner)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session(temp_dir: &TempDir) -> Session {
        Session::new(
            PlannerPaths::with_base_dir(temp_dir.path().to_path_buf()),
            Settings::default(),
        )
    }

    #[test]
    fn test_summary_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.txt");
        std::fs::write(&path, "800\n1\nFurniture\nSofa\n2\n300\n600\n").unwrap();

        let mut out = Vec::new();
        handle_summary_command(&mut session(&temp_dir), &path, false, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Item     : Sofa"));
        assert!(out.contains("Remaining Budget: $200.00"));
    }

    #[test]
    fn test_summary_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.txt");
        std::fs::write(&path, "800\n1\nFurniture\nSofa\n2\n500\n1000\n").unwrap();

        let mut out = Vec::new();
        handle_summary_command(&mut session(&temp_dir), &path, true, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["total_budget"], 800.0);
        assert_eq!(json["budget_status"]["status"], "over");
        assert_eq!(json["expenses"][0]["quantity"], 2);
    }

    #[test]
    fn test_summary_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        let result = handle_summary_command(
            &mut session(&temp_dir),
            &temp_dir.path().join("missing.txt"),
            false,
            &mut out,
        );
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_config_output() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut out = Vec::new();
        handle_config_command(&paths, &Settings::default(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("config.json"));
        assert!(out.contains("expenses.txt"));
        assert!(out.contains("Show banner:    true"));
    }
}
