//! Shell detection for PATH guidance.

use std::path::{Path, PathBuf};

use crate::config::EnvSnapshot;

/// Known shell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Cmd,
    Unknown,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Self {
        let name = Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => ShellType::Bash,
            "zsh" => ShellType::Zsh,
            "fish" => ShellType::Fish,
            "powershell" | "pwsh" => ShellType::PowerShell,
            "cmd" => ShellType::Cmd,
            _ => ShellType::Unknown,
        }
    }

    /// Detect the operator's shell from the environment snapshot.
    pub fn detect(env: &EnvSnapshot) -> Self {
        if let Some(shell) = env.get("SHELL") {
            return Self::from_executable(shell);
        }
        if cfg!(windows) {
            if env.get("PSModulePath").is_some() {
                return ShellType::PowerShell;
            }
            return ShellType::Cmd;
        }
        ShellType::Unknown
    }

    /// The startup file where a PATH change belongs, relative to home.
    pub fn rc_file(&self) -> Option<&'static str> {
        match self {
            ShellType::Bash => Some(".bashrc"),
            ShellType::Zsh => Some(".zshrc"),
            ShellType::Fish => Some(".config/fish/config.fish"),
            ShellType::Unknown => Some(".profile"),
            ShellType::PowerShell | ShellType::Cmd => None,
        }
    }

    /// Full path of the startup file, if home is known.
    pub fn rc_path(&self, home: Option<&Path>) -> Option<PathBuf> {
        Some(home?.join(self.rc_file()?))
    }

    /// Line that appends `dir` to PATH in this shell's syntax.
    pub fn path_export(&self, dir: &Path) -> String {
        let dir = dir.display();
        match self {
            ShellType::Fish => format!("fish_add_path \"{}\"", dir),
            ShellType::PowerShell => format!("$env:Path += \";{}\"", dir),
            ShellType::Cmd => format!("setx PATH \"%PATH%;{}\"", dir),
            ShellType::Bash | ShellType::Zsh | ShellType::Unknown => {
                format!("export PATH=\"$PATH:{}\"", dir)
            }
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
            ShellType::PowerShell => "powershell",
            ShellType::Cmd => "cmd",
            ShellType::Unknown => "sh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_type_from_executable() {
        assert_eq!(ShellType::from_executable("/bin/bash"), ShellType::Bash);
        assert_eq!(ShellType::from_executable("/usr/bin/zsh"), ShellType::Zsh);
        assert_eq!(
            ShellType::from_executable("/opt/homebrew/bin/fish"),
            ShellType::Fish
        );
        assert_eq!(ShellType::from_executable("pwsh"), ShellType::PowerShell);
        assert_eq!(ShellType::from_executable("/bin/dash"), ShellType::Unknown);
    }

    #[test]
    fn detect_reads_shell_variable() {
        let env = EnvSnapshot::from_pairs([("SHELL", "/bin/zsh")]);
        assert_eq!(ShellType::detect(&env), ShellType::Zsh);
    }

    #[cfg(unix)]
    #[test]
    fn detect_without_shell_is_unknown() {
        assert_eq!(
            ShellType::detect(&EnvSnapshot::default()),
            ShellType::Unknown
        );
    }

    #[test]
    fn rc_path_joins_home() {
        let path = ShellType::Zsh.rc_path(Some(Path::new("/home/dev")));
        assert_eq!(path, Some(PathBuf::from("/home/dev/.zshrc")));
        assert_eq!(ShellType::Bash.rc_path(None), None);
        assert_eq!(ShellType::Cmd.rc_path(Some(Path::new("C:\\Users\\dev"))), None);
    }

    #[test]
    fn path_export_uses_shell_syntax() {
        let dir = Path::new("/work/dist");
        assert_eq!(
            ShellType::Bash.path_export(dir),
            "export PATH=\"$PATH:/work/dist\""
        );
        assert_eq!(
            ShellType::Fish.path_export(dir),
            "fish_add_path \"/work/dist\""
        );
    }
}
