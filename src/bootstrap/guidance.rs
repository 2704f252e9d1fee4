//! Post-build PATH guidance.

use std::path::{Path, PathBuf};

use super::Bootstrapper;
use crate::shell::ShellType;

/// Everything printed after a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGuidance {
    /// The built executable.
    pub artifact: PathBuf,
    /// Directory to add to PATH.
    pub bin_dir: PathBuf,
    /// Shell the instructions are written for.
    pub shell: ShellType,
    /// Line that adds `bin_dir` to PATH.
    pub export_line: String,
    /// Startup file the line belongs in, when the shell has one and home
    /// is known.
    pub rc_file: Option<PathBuf>,
}

/// Format PATH guidance for `artifact`. Pure; never fails.
pub fn path_guidance(artifact: &Path, shell: ShellType, home: Option<&Path>) -> PathGuidance {
    let bin_dir = artifact
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    PathGuidance {
        artifact: artifact.to_path_buf(),
        export_line: shell.path_export(&bin_dir),
        rc_file: shell.rc_path(home),
        bin_dir,
        shell,
    }
}

impl Bootstrapper<'_> {
    /// Print where the executable is and how to put it on PATH.
    pub fn emit_path_guidance(&mut self, artifact: &Path) {
        let shell = ShellType::detect(&self.config.env);
        let home = self.config.home_dir();
        let guidance = path_guidance(artifact, shell, home.as_deref());

        self.ui
            .success(&format!("Executable ready: {}", guidance.artifact.display()));
        self.ui.message(&format!(
            "To run it from anywhere, add {} to your PATH:",
            guidance.bin_dir.display()
        ));
        self.ui.show_hint(&guidance.export_line);
        match &guidance.rc_file {
            Some(rc) => self.ui.message(&format!(
                "Add that line to {} to make it permanent.",
                rc.display()
            )),
            None => self.ui.message(&format!(
                "Add it to your {} profile to make it permanent.",
                guidance.shell.name()
            )),
        }
        self.ui
            .show_hint(&format!("Or run it directly: {}", guidance.artifact.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_guidance_points_at_bashrc() {
        let g = path_guidance(
            Path::new("/work/dist/report"),
            ShellType::Bash,
            Some(Path::new("/home/dev")),
        );

        assert_eq!(g.bin_dir, PathBuf::from("/work/dist"));
        assert_eq!(g.export_line, "export PATH=\"$PATH:/work/dist\"");
        assert_eq!(g.rc_file, Some(PathBuf::from("/home/dev/.bashrc")));
    }

    #[test]
    fn fish_uses_fish_add_path() {
        let g = path_guidance(
            Path::new("/work/dist/report"),
            ShellType::Fish,
            Some(Path::new("/home/dev")),
        );

        assert_eq!(g.export_line, "fish_add_path \"/work/dist\"");
        assert_eq!(
            g.rc_file,
            Some(PathBuf::from("/home/dev/.config/fish/config.fish"))
        );
    }

    #[test]
    fn unknown_home_has_no_rc_file() {
        let g = path_guidance(Path::new("/work/dist/report"), ShellType::Zsh, None);
        assert_eq!(g.rc_file, None);
        assert!(g.export_line.starts_with("export PATH="));
    }

    #[test]
    fn bare_artifact_name_uses_current_dir() {
        let g = path_guidance(Path::new("report"), ShellType::Unknown, None);
        assert_eq!(g.bin_dir, PathBuf::from("."));
        assert_eq!(g.rc_file, None);
    }
}
