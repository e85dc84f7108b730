use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::core::destination::{
    DestinationKind, Handle, Host, ObjectKind, StripKind, TextTarget,
};

/// Errors raised while reading or writing a workspace file
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("failed to read workspace file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse workspace file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("workspace file {path} has more than one {collection} named '{name}'")]
    DuplicateName {
        path: PathBuf,
        collection: &'static str,
        name: String,
    },
    #[error("failed to serialize workspace")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write workspace file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An editable text document with a cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextBuffer {
    pub name: String,
    #[serde(default)]
    pub body: String,
    /// Insertion point as a char index; end of the body when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<usize>,
}

impl TextBuffer {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            cursor: None,
        }
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.body
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.body.len())
    }
}

impl TextTarget for TextBuffer {
    fn text(&self) -> &str {
        &self.body
    }

    fn insert_text(&mut self, symbol: &str) {
        match self.cursor {
            Some(cursor) => {
                let length = self.body.chars().count();
                let cursor = cursor.min(length);
                let offset = self.byte_offset(cursor);
                self.body.insert_str(offset, symbol);
                self.cursor = Some(cursor + symbol.chars().count());
            }
            None => self.body.push_str(symbol),
        }
    }
}

/// A timeline strip; only text strips carry editable text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Strip {
    pub name: String,
    pub kind: StripKind,
    #[serde(default)]
    pub text: String,
}

impl TextTarget for Strip {
    fn text(&self) -> &str {
        &self.text
    }

    fn insert_text(&mut self, symbol: &str) {
        self.text.push_str(symbol);
    }
}

/// A scene object; font objects carry a text body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    #[serde(default)]
    pub body: String,
}

impl TextTarget for SceneObject {
    fn text(&self) -> &str {
        &self.body
    }

    fn insert_text(&mut self, symbol: &str) {
        self.body.push_str(symbol);
    }
}

fn default_active_space() -> DestinationKind {
    DestinationKind::TextBuffer
}

/// File-backed host holding text buffers, timeline strips and scene objects
///
/// Names act as handles. An `active_text` or `active_strip` naming something
/// that does not exist is treated as nothing being active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Workspace {
    /// Which destination kind receives insertions
    #[serde(default = "default_active_space")]
    pub active_space: DestinationKind,

    /// Name of the text buffer open in the text editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_text: Option<String>,

    /// Name of the active timeline strip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_strip: Option<String>,

    #[serde(default)]
    pub texts: Vec<TextBuffer>,

    #[serde(default)]
    pub strips: Vec<Strip>,

    /// Scene objects in scene order
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            active_space: default_active_space(),
            active_text: None,
            active_strip: None,
            texts: Vec::new(),
            strips: Vec::new(),
            objects: Vec::new(),
        }
    }
}

impl Workspace {
    /// Starter workspace with one destination of each kind
    pub fn sample() -> Self {
        Self {
            active_space: DestinationKind::TextBuffer,
            active_text: Some("notes.txt".to_string()),
            active_strip: Some("Title".to_string()),
            texts: vec![TextBuffer::new("notes.txt", "")],
            strips: vec![
                Strip {
                    name: "Title".to_string(),
                    kind: StripKind::Text,
                    text: String::new(),
                },
                Strip {
                    name: "Background".to_string(),
                    kind: StripKind::Color,
                    text: String::new(),
                },
            ],
            objects: vec![
                SceneObject {
                    name: "Cube".to_string(),
                    kind: ObjectKind::Mesh,
                    body: String::new(),
                },
                SceneObject {
                    name: "Text".to_string(),
                    kind: ObjectKind::Font,
                    body: "Text".to_string(),
                },
            ],
        }
    }

    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WorkspaceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| WorkspaceError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let workspace: Workspace =
            toml::from_str(&content).map_err(|source| WorkspaceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some((collection, name)) = workspace.duplicate_name() {
            return Err(WorkspaceError::DuplicateName {
                path: path.to_path_buf(),
                collection,
                name: name.to_string(),
            });
        }

        debug!("Loaded workspace from {}", path.display());
        Ok(workspace)
    }

    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WorkspaceError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| WorkspaceError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        fs::write(path, content)
            .await
            .map_err(|source| WorkspaceError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Saved workspace to {}", path.display());
        Ok(())
    }

    /// First name used twice within texts, strips or objects
    fn duplicate_name(&self) -> Option<(&'static str, &str)> {
        fn first_repeat<'a>(names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
            let mut seen = HashSet::new();
            names.into_iter().find(|name| !seen.insert(*name))
        }

        first_repeat(self.texts.iter().map(|text| text.name.as_str()))
            .map(|name| ("text", name))
            .or_else(|| {
                first_repeat(self.strips.iter().map(|strip| strip.name.as_str()))
                    .map(|name| ("strip", name))
            })
            .or_else(|| {
                first_repeat(self.objects.iter().map(|object| object.name.as_str()))
                    .map(|name| ("object", name))
            })
    }

    pub fn text(&self, name: &str) -> Option<&TextBuffer> {
        self.texts.iter().find(|text| text.name == name)
    }

    pub fn strip(&self, name: &str) -> Option<&Strip> {
        self.strips.iter().find(|strip| strip.name == name)
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }
}

impl Host for Workspace {
    fn active_destination(&self) -> DestinationKind {
        self.active_space
    }

    fn active_text_buffer(&self) -> Option<Handle> {
        let name = self.active_text.as_deref()?;
        self.text(name).map(|text| Handle::new(&text.name))
    }

    fn active_strip(&self) -> Option<(Handle, StripKind)> {
        let name = self.active_strip.as_deref()?;
        self.strip(name)
            .map(|strip| (Handle::new(&strip.name), strip.kind))
    }

    fn scene_objects(&self) -> Vec<(Handle, ObjectKind)> {
        self.objects
            .iter()
            .map(|object| (Handle::new(&object.name), object.kind))
            .collect()
    }

    fn text_buffer_mut(&mut self, handle: &Handle) -> Option<&mut dyn TextTarget> {
        self.texts
            .iter_mut()
            .find(|text| text.name == handle.as_str())
            .map(|text| text as &mut dyn TextTarget)
    }

    fn strip_mut(&mut self, handle: &Handle) -> Option<&mut dyn TextTarget> {
        self.strips
            .iter_mut()
            .find(|strip| strip.name == handle.as_str() && strip.kind.accepts_text())
            .map(|strip| strip as &mut dyn TextTarget)
    }

    fn scene_object_mut(&mut self, handle: &Handle) -> Option<&mut dyn TextTarget> {
        self.objects
            .iter_mut()
            .find(|object| object.name == handle.as_str() && object.kind.holds_text())
            .map(|object| object as &mut dyn TextTarget)
    }
}
