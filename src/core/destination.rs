use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::symbols::*;

/// Host-assigned identifier of a text buffer, strip or scene object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Handle(pub String);

impl Handle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Handle {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The destination kind the host declares active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DestinationKind {
    /// Plain text document editor
    #[serde(alias = "text-editor")]
    TextBuffer,
    /// Video sequence timeline
    #[serde(alias = "sequence-editor")]
    TimelineStrip,
    /// 3D scene
    #[serde(alias = "view-3d")]
    SceneTextObject,
}

impl DestinationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            DestinationKind::TextBuffer => SYMBOL_DESTINATION_TEXT,
            DestinationKind::TimelineStrip => SYMBOL_DESTINATION_STRIP,
            DestinationKind::SceneTextObject => SYMBOL_DESTINATION_SCENE,
        }
    }
}

impl std::fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DestinationKind::TextBuffer => write!(f, "text buffer"),
            DestinationKind::TimelineStrip => write!(f, "timeline strip"),
            DestinationKind::SceneTextObject => write!(f, "scene text object"),
        }
    }
}

/// Kind tag carried by a timeline strip. Only `Text` accepts insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StripKind {
    Text,
    Color,
    Image,
    Movie,
    Sound,
    Scene,
    Adjustment,
    Meta,
    /// Any other strip type the host reports
    #[serde(other)]
    Other,
}

impl StripKind {
    pub fn accepts_text(&self) -> bool {
        matches!(self, StripKind::Text)
    }
}

/// Kind tag carried by a scene object. Only `Font` holds a text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Mesh,
    Font,
    Curve,
    Camera,
    Light,
    Empty,
    Armature,
    /// Any other object type the host reports
    #[serde(other)]
    Other,
}

impl ObjectKind {
    pub fn holds_text(&self) -> bool {
        matches!(self, ObjectKind::Font)
    }
}

/// Point-in-time description of where an insertion should land
///
/// Derived fresh from host state for every request and never cached. Each
/// variant only carries handles and kind tags; the text itself is reached
/// through [`Host`] when the insertion is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationContext {
    /// Active text buffer, if any
    TextBuffer { buffer: Option<Handle> },
    /// Active timeline strip and its kind, if any
    TimelineStrip { strip: Option<(Handle, StripKind)> },
    /// Scene objects in host enumeration order
    SceneTextObject { objects: Vec<(Handle, ObjectKind)> },
}

impl DestinationContext {
    pub fn kind(&self) -> DestinationKind {
        match self {
            DestinationContext::TextBuffer { .. } => DestinationKind::TextBuffer,
            DestinationContext::TimelineStrip { .. } => DestinationKind::TimelineStrip,
            DestinationContext::SceneTextObject { .. } => DestinationKind::SceneTextObject,
        }
    }
}

/// Editable text with an insertion point, measured in chars
pub trait TextTarget {
    fn text(&self) -> &str;

    /// Inserts `symbol` at the target's insertion point
    fn insert_text(&mut self, symbol: &str);
}

/// What the dispatcher needs from the application that owns the destinations
pub trait Host {
    /// Destination kind the user is currently working in
    fn active_destination(&self) -> DestinationKind;

    /// Handle of the active text buffer, if a document is open
    fn active_text_buffer(&self) -> Option<Handle>;

    /// Handle and kind of the active timeline strip, if one is active
    fn active_strip(&self) -> Option<(Handle, StripKind)>;

    /// Every scene object with its kind, in the host's own order
    fn scene_objects(&self) -> Vec<(Handle, ObjectKind)>;

    /// Derives a fresh context for `kind` from current host state
    fn context_for(&self, kind: DestinationKind) -> DestinationContext {
        match kind {
            DestinationKind::TextBuffer => DestinationContext::TextBuffer {
                buffer: self.active_text_buffer(),
            },
            DestinationKind::TimelineStrip => DestinationContext::TimelineStrip {
                strip: self.active_strip(),
            },
            DestinationKind::SceneTextObject => DestinationContext::SceneTextObject {
                objects: self.scene_objects(),
            },
        }
    }

    /// Derives a fresh context for the active destination kind
    fn destination_context(&self) -> DestinationContext {
        self.context_for(self.active_destination())
    }

    /// Mutable access to a text buffer, `None` if the handle no longer resolves
    fn text_buffer_mut(&mut self, handle: &Handle) -> Option<&mut dyn TextTarget>;

    /// Mutable access to a timeline strip
    fn strip_mut(&mut self, handle: &Handle) -> Option<&mut dyn TextTarget>;

    /// Mutable access to a scene object's text body
    fn scene_object_mut(&mut self, handle: &Handle) -> Option<&mut dyn TextTarget>;
}
