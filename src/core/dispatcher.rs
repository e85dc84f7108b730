use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::destination::{DestinationContext, DestinationKind, Handle, Host, TextTarget};
use crate::symbols::*;


/// Why an insertion request did not change anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    NoTextBuffer,
    NotATextStrip,
    NoTextObject,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NoTextBuffer => "no active text buffer",
            SkipReason::NotATextStrip => "select a text strip first",
            SkipReason::NoTextObject => "no text object in scene",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single insertion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionOutcome {
    Inserted {
        destination: DestinationKind,
        target: Handle,
    },
    Skipped(SkipReason),
}

impl InsertionOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertionOutcome::Inserted { .. })
    }
}

/// The only fatal dispatch condition: a handle stopped resolving between
/// building the context and applying the mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    #[error("{kind} '{handle}' no longer exists")]
    DestinationGone {
        kind: DestinationKind,
        handle: Handle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// User-facing message produced by a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Channel back to the user for info and warning messages
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in memory, used by tests and callers that render them later
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Reports notices through the tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => info!("{SYMBOL_INDICATOR_INFO} {}", notice.message),
            NoticeLevel::Warning => warn!("{SYMBOL_INDICATOR_WARNING} {}", notice.message),
        }
    }
}

/// Tunables for the dispatcher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DispatchOptions {
    /// Warn when a symbol is sent to the text editor with no document open
    #[serde(default)]
    pub report_missing_text_buffer: bool,
}

/// Routes a symbol to the destination the context declares active
///
/// Holds no state between calls. Every call re-reads the context it is given
/// and touches at most one destination.
#[derive(Debug, Clone, Default)]
pub struct InsertionDispatcher {
    options: DispatchOptions,
}

impl InsertionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DispatchOptions) -> Self {
        Self { options }
    }

    /// Inserts `symbol` into the destination described by `context`
    ///
    /// A missing or unsuitable destination is reported as
    /// [`InsertionOutcome::Skipped`]. Only a handle that no longer resolves on
    /// the host is an error.
    pub fn insert<H>(
        &self,
        host: &mut H,
        context: &DestinationContext,
        symbol: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<InsertionOutcome, InsertError>
    where
        H: Host + ?Sized,
    {
        debug!("Dispatching '{symbol}' to {}", context.kind());

        match context {
            DestinationContext::TextBuffer { buffer } => {
                let Some(handle) = buffer else {
                    if self.options.report_missing_text_buffer {
                        notifier.notify(Notice::warning(
                            "Please open a text document to add the character.",
                        ));
                    }
                    return Ok(InsertionOutcome::Skipped(SkipReason::NoTextBuffer));
                };

                let target = resolve(host.text_buffer_mut(handle), context.kind(), handle)?;
                target.insert_text(symbol);
                Ok(inserted(context.kind(), handle))
            }
            DestinationContext::TimelineStrip { strip } => match strip {
                Some((handle, kind)) if kind.accepts_text() => {
                    let target = resolve(host.strip_mut(handle), context.kind(), handle)?;
                    target.insert_text(symbol);
                    Ok(inserted(context.kind(), handle))
                }
                _ => {
                    notifier.notify(Notice::warning(
                        "Please select a text strip to add the character.",
                    ));
                    Ok(InsertionOutcome::Skipped(SkipReason::NotATextStrip))
                }
            },
            DestinationContext::SceneTextObject { objects } => {
                // First match in host order wins, selection state is not consulted
                let Some((handle, _)) = objects.iter().find(|(_, kind)| kind.holds_text()) else {
                    notifier.notify(Notice::warning(
                        "Please select a text object in the 3D Viewport.",
                    ));
                    return Ok(InsertionOutcome::Skipped(SkipReason::NoTextObject));
                };

                let target = resolve(host.scene_object_mut(handle), context.kind(), handle)?;
                target.insert_text(symbol);
                notifier.notify(Notice::info(format!(
                    "Unicode added to 3D Viewport text object '{handle}'."
                )));
                Ok(inserted(context.kind(), handle))
            }
        }
    }
}

fn resolve<'a>(
    target: Option<&'a mut dyn TextTarget>,
    kind: DestinationKind,
    handle: &Handle,
) -> Result<&'a mut dyn TextTarget, InsertError> {
    target.ok_or_else(|| InsertError::DestinationGone {
        kind,
        handle: handle.clone(),
    })
}

fn inserted(destination: DestinationKind, handle: &Handle) -> InsertionOutcome {
    debug!("Inserted into {destination} '{handle}'");
    InsertionOutcome::Inserted {
        destination,
        target: handle.clone(),
    }
}
