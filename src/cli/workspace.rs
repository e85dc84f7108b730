use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::core::destination::{DestinationKind, Host};
use crate::core::workspace::Workspace;
use crate::symbols::*;
use crate::WorkspaceCommands;

/// Handle workspace subcommands
pub async fn handle_workspace_command(command: WorkspaceCommands, config: &Config) -> Result<()> {
    match command {
        WorkspaceCommands::Init { workspace, force } => {
            let path = workspace_path(workspace, config);
            init_workspace(&path, force).await
        }
        WorkspaceCommands::Show { workspace } => {
            let path = workspace_path(workspace, config);
            let workspace = Workspace::load_from_file(&path).await?;
            print!("{}", render_workspace(&workspace));
            Ok(())
        }
    }
}

fn workspace_path(cli_path: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_path.unwrap_or_else(|| config.get_workspace_file())
}

/// Writes the starter workspace, refusing to clobber an existing file unless forced
pub async fn init_workspace(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(anyhow!(
            "Workspace file {} already exists (use --force to overwrite)",
            path.display()
        ));
    }

    Workspace::sample().save_to_file(path).await?;
    info!(
        "{SYMBOL_INDICATOR_SUCCESS} Created workspace at {}",
        path.display()
    );
    Ok(())
}

/// Renders every destination, marking the ones a dispatch would consider
pub fn render_workspace(workspace: &Workspace) -> String {
    let mut output = String::new();
    let active = workspace.active_destination();
    let marker = |kind: DestinationKind| if kind == active { " (active)" } else { "" };

    output.push_str(&format!(
        "{} Text buffers{}\n",
        DestinationKind::TextBuffer.icon(),
        marker(DestinationKind::TextBuffer)
    ));
    let active_text = workspace.active_text_buffer();
    for text in &workspace.texts {
        let current = active_text.as_ref().is_some_and(|h| h.as_str() == text.name);
        output.push_str(&format!(
            "  {} {:<16} {:?}\n",
            if current { "*" } else { " " },
            text.name,
            text.body
        ));
    }

    output.push_str(&format!(
        "{} Timeline strips{}\n",
        DestinationKind::TimelineStrip.icon(),
        marker(DestinationKind::TimelineStrip)
    ));
    let active_strip = workspace.active_strip();
    for strip in &workspace.strips {
        let current = active_strip
            .as_ref()
            .is_some_and(|(h, _)| h.as_str() == strip.name);
        output.push_str(&format!(
            "  {} {:<16} {:<10} {:?}\n",
            if current { "*" } else { " " },
            strip.name,
            format!("{:?}", strip.kind).to_lowercase(),
            strip.text
        ));
    }

    output.push_str(&format!(
        "{} Scene objects{}\n",
        DestinationKind::SceneTextObject.icon(),
        marker(DestinationKind::SceneTextObject)
    ));
    let target = workspace
        .objects
        .iter()
        .position(|object| object.kind.holds_text());
    for (index, object) in workspace.objects.iter().enumerate() {
        output.push_str(&format!(
            "  {} {:<16} {:<10} {:?}\n",
            if Some(index) == target { "*" } else { " " },
            object.name,
            format!("{:?}", object.kind).to_lowercase(),
            object.body
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_sample_workspace() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("workspace.toml");

        init_workspace(&path, false).await?;
        let workspace = Workspace::load_from_file(&path).await?;
        assert_eq!(workspace, Workspace::sample());

        Ok(())
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("workspace.toml");
        tokio::fs::write(&path, "active_space = \"view-3d\"").await?;

        assert!(init_workspace(&path, false).await.is_err());
        assert_eq!(
            tokio::fs::read_to_string(&path).await?,
            "active_space = \"view-3d\""
        );

        init_workspace(&path, true).await?;
        assert_eq!(Workspace::load_from_file(&path).await?, Workspace::sample());

        Ok(())
    }

    #[test]
    fn test_render_workspace_marks_active_and_targets() {
        let mut workspace = Workspace::sample();
        workspace.active_space = DestinationKind::SceneTextObject;
        let rendered = render_workspace(&workspace);

        assert!(rendered.contains("Scene objects (active)"));
        assert!(!rendered.contains("Text buffers (active)"));
        assert!(rendered.contains("* notes.txt"));
        assert!(rendered.contains("* Title"));
        assert!(rendered.contains("  Background"));
        assert!(rendered.contains("* Text"));
        assert!(rendered.contains("  Cube"));
    }
}
