//! Template materialization
//!
//! Writes a planned render to disk under the destination root, applying the
//! collision and overwrite policy.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::Result;
use crate::expansion::ExpandedVariables;

use super::outcome::{RenderFailure, RenderOutcome};
use super::planner::{PlannedFile, first_level_entries, plan_render, render_text};

/// Renders the template at `template_root` into `destination_root`
///
/// Placeholders are resolved in relative paths and in text contents; binary
/// files are copied as they are. With `overwrite` off, the render is aborted
/// before any write when an entry it would create directly under the
/// destination already exists, and every file is created exclusively.
///
/// Files are written one by one. The first failure stops the render; files
/// written before it stay on disk.
///
/// # Errors
/// Only request-level problems are errors: a missing template, an
/// unreadable template tree or a rendered path that would leave the
/// destination. Write problems are reported in the returned outcome.
pub fn render(
    template_root: &Path,
    destination_root: &Path,
    variables: &ExpandedVariables,
    overwrite: bool,
) -> Result<RenderOutcome> {
    let plan = plan_render(template_root, variables)?;

    if !overwrite && let Some(path) = find_collision(destination_root, &plan) {
        warn!("Refusing to overwrite existing entry: {}", path.display());
        return Ok(RenderOutcome::collision(path));
    }

    let mut outcome = RenderOutcome::default();
    for planned in &plan {
        let target = destination_root.join(&planned.target);
        match write_planned_file(planned, &target, variables, overwrite) {
            Ok(()) => {
                debug!("Created {}", target.display());
                outcome.record_written(target);
            }
            Err(failure) => {
                warn!(
                    "Stopped after {} file(s): {failure}",
                    outcome.files_written()
                );
                outcome.stop(failure);
                break;
            }
        }
    }

    info!(
        "Wrote {} of {} file(s) to {}",
        outcome.files_written(),
        plan.len(),
        destination_root.display()
    );

    Ok(outcome)
}

/// First already-existing entry among those the plan creates directly under
/// `destination_root`
fn find_collision(destination_root: &Path, plan: &[PlannedFile]) -> Option<PathBuf> {
    first_level_entries(plan)
        .into_iter()
        .map(|entry| destination_root.join(entry))
        .find(|path| fs::symlink_metadata(path).is_ok())
}

fn write_planned_file(
    planned: &PlannedFile,
    target: &Path,
    variables: &ExpandedVariables,
    overwrite: bool,
) -> std::result::Result<(), RenderFailure> {
    let bytes = fs::read(&planned.source.path).map_err(|source| RenderFailure::Io {
        path: planned.source.path.clone(),
        source,
    })?;
    let content = match String::from_utf8(bytes) {
        Ok(text) => render_text(&text, variables).into_bytes(),
        Err(binary) => binary.into_bytes(),
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|source| RenderFailure::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    write_file(target, &content, overwrite).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            RenderFailure::WriteConflict {
                path: target.to_path_buf(),
            }
        } else {
            RenderFailure::Io {
                path: target.to_path_buf(),
                source,
            }
        }
    })
}

/// Writes `content` to `target`; without `overwrite` the file must not exist yet
///
/// An existing symlink at `target` is replaced, never written through.
fn write_file(target: &Path, content: &[u8], overwrite: bool) -> io::Result<()> {
    if overwrite {
        if fs::symlink_metadata(target).is_ok_and(|meta| meta.file_type().is_symlink()) {
            fs::remove_file(target)?;
        }
        return fs::write(target, content);
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)?;
    file.write_all(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::ModifierRegistry;
    use crate::expansion::{UserVariables, expand_variables};
    use tempfile::tempdir;

    fn variables(name: &str) -> ExpandedVariables {
        let mut user_vars = UserVariables::new();
        user_vars.insert("name".to_string(), name.to_string());
        expand_variables(&user_vars, &ModifierRegistry::standard())
    }

    #[test]
    fn test_write_file_exclusive_refuses_existing() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a.txt");
        fs::write(&target, "old").unwrap();

        let error = write_file(&target, b"new", false).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&target).unwrap(), "old");

        write_file(&target, b"new", true).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_find_collision_checks_first_level_only() {
        let template = tempdir().unwrap();
        let destination = tempdir().unwrap();
        fs::create_dir_all(template.path().join("{{name}}")).unwrap();
        fs::write(template.path().join("{{name}}/a.txt"), "").unwrap();

        let plan = plan_render(template.path(), &variables("widget")).unwrap();
        assert_eq!(find_collision(destination.path(), &plan), None);

        fs::create_dir(destination.path().join("widget")).unwrap();
        assert_eq!(
            find_collision(destination.path(), &plan),
            Some(destination.path().join("widget"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_counts_as_collision() {
        let template = tempdir().unwrap();
        let destination = tempdir().unwrap();
        fs::write(template.path().join("a.txt"), "a").unwrap();
        fs::write(template.path().join("b.txt"), "b").unwrap();
        std::os::unix::fs::symlink(
            destination.path().join("nowhere"),
            destination.path().join("b.txt"),
        )
        .unwrap();

        let outcome = render(template.path(), destination.path(), &variables("x"), false).unwrap();

        assert!(matches!(
            outcome.failure(),
            Some(RenderFailure::Collision { path }) if path.ends_with("b.txt")
        ));
        assert_eq!(outcome.files_written(), 0);
        assert!(!destination.path().join("a.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_replaces_symlink_instead_of_following_it() {
        let template = tempdir().unwrap();
        let destination = tempdir().unwrap();
        let outside = tempdir().unwrap();
        let outside_file = outside.path().join("victim.txt");
        fs::write(&outside_file, "untouched").unwrap();
        fs::write(template.path().join("b.txt"), "new b").unwrap();
        std::os::unix::fs::symlink(&outside_file, destination.path().join("b.txt")).unwrap();

        let outcome = render(template.path(), destination.path(), &variables("x"), true).unwrap();

        assert!(outcome.is_complete());
        assert_eq!(fs::read_to_string(&outside_file).unwrap(), "untouched");
        let target = destination.path().join("b.txt");
        assert!(!fs::symlink_metadata(&target).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "new b");
    }

    #[test]
    fn test_binary_content_is_copied_verbatim() {
        let template = tempdir().unwrap();
        let destination = tempdir().unwrap();
        let bytes = [0x89, b'P', b'N', b'G', 0xff, 0x00, b'{', b'{'];
        fs::write(template.path().join("{{name}}.png"), bytes).unwrap();

        let outcome = render(template.path(), destination.path(), &variables("logo"), false).unwrap();

        assert!(outcome.is_complete());
        assert_eq!(fs::read(destination.path().join("logo.png")).unwrap(), bytes);
    }
}
