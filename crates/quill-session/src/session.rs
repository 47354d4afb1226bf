//! Editing session - the (document, selection, history) triple for one surface

use std::fmt;

use chrono::{DateTime, Utc};
use quill_core::{EditorConfig, FormatCommand, Selection, SessionId, TextBuffer};
use quill_format::apply_command;
use quill_history::{History, HistoryStatus};
use tracing::{debug, info};

use crate::error::Result;
use crate::shortcuts::{self, ShortcutAction};

/// Callback invoked with the new document after every committed edit
pub type ChangeListener = Box<dyn FnMut(&str)>;

/// One editing session
///
/// Every committed edit (free typing, a formatting command, undo or redo)
/// updates the buffer, keeps the history's current snapshot equal to the
/// displayed text, and notifies change listeners once. Rejected commands and
/// no-op undo/redo change nothing and notify nobody.
pub struct EditorSession {
    id: SessionId,
    buffer: TextBuffer,
    history: History,
    preview: bool,
    listeners: Vec<ChangeListener>,
    last_edited: Option<DateTime<Utc>>,
}

impl EditorSession {
    /// Start a session with default configuration
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_config(initial, &EditorConfig::default())
    }

    /// Start a session with custom configuration
    pub fn with_config(initial: impl Into<String>, config: &EditorConfig) -> Self {
        let buffer = TextBuffer::from_text(initial);
        let history = History::with_config(buffer.content(), &config.history);
        let id = SessionId::new();
        debug!(session = %id, chars = buffer.len_chars(), "Started editing session");
        Self {
            id,
            buffer,
            history,
            preview: config.preview.enabled_on_start,
            listeners: Vec::new(),
            last_edited: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    pub fn selection(&self) -> Selection {
        self.buffer.selection()
    }

    /// Move the caret or selection; out-of-range values are clamped
    pub fn set_selection(&mut self, selection: Selection) {
        self.buffer.set_selection(selection);
    }

    pub fn selected_text(&self) -> &str {
        self.buffer.selected_text()
    }

    /// Register a listener for committed edits
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Commit free-typed text
    pub fn edit(&mut self, content: impl Into<String>) {
        self.commit(content.into());
        debug!(session = %self.id, "Committed text edit");
    }

    /// Commit free-typed text together with the caret position the host reports
    pub fn edit_with_selection(&mut self, content: impl Into<String>, selection: Selection) {
        self.edit(content);
        self.buffer.set_selection(selection);
    }

    /// Apply a formatting command at the current selection
    ///
    /// Returns the new selection, which is also stored in the session.
    pub fn apply(&mut self, command: &FormatCommand) -> Result<Selection> {
        let edit = match apply_command(command, self.buffer.content(), self.buffer.selection()) {
            Ok(edit) => edit,
            Err(e) => {
                info!(session = %self.id, command = %command.kind(), "Rejected command: {}", e);
                return Err(e.into());
            }
        };

        self.commit(edit.content);
        self.buffer.set_selection(edit.selection);
        debug!(
            session = %self.id,
            command = %command.kind(),
            start = edit.selection.start,
            end = edit.selection.end,
            "Applied command"
        );
        Ok(edit.selection)
    }

    /// Apply a parameter-free command by identifier (e.g. "bold")
    pub fn apply_named(&mut self, id: &str) -> Result<Selection> {
        let command: FormatCommand = id.parse()?;
        self.apply(&command)
    }

    /// Step back one snapshot; returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        let Some(content) = self.history.undo().map(str::to_owned) else {
            return false;
        };
        self.restore(content);
        debug!(session = %self.id, index = self.history.index(), "Undo");
        true
    }

    /// Step forward one snapshot; returns false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        let Some(content) = self.history.redo().map(str::to_owned) else {
            return false;
        };
        self.restore(content);
        debug!(session = %self.id, index = self.history.index(), "Redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_status(&self) -> HistoryStatus {
        self.history.status()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Dispatch a key chord such as "Ctrl+B"
    ///
    /// Returns true if the chord was bound and did something. Chords bound to
    /// commands that need host-collected parameters are left to the host.
    pub fn handle_shortcut(&mut self, chord: &str) -> bool {
        match shortcuts::resolve(chord) {
            Some(ShortcutAction::Undo) => self.undo(),
            Some(ShortcutAction::Redo) => self.redo(),
            Some(ShortcutAction::Command(kind)) => match FormatCommand::try_from(kind) {
                Ok(command) => self.apply(&command).is_ok(),
                Err(_) => false,
            },
            None => false,
        }
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn set_preview(&mut self, enabled: bool) {
        self.preview = enabled;
    }

    /// Flip the preview toggle and return the new state
    pub fn toggle_preview(&mut self) -> bool {
        self.preview = !self.preview;
        debug!(session = %self.id, preview = self.preview, "Toggled preview");
        self.preview
    }

    /// Rendered HTML when the preview is active
    pub fn preview(&self) -> Option<String> {
        self.preview.then(|| self.render())
    }

    /// Render the current document regardless of the preview toggle
    pub fn render(&self) -> String {
        quill_render::render(self.buffer.content())
    }

    /// When the last committed edit happened
    pub fn last_edited(&self) -> Option<DateTime<Utc>> {
        self.last_edited
    }

    /// Replace the document and record it as a new snapshot
    fn commit(&mut self, content: String) {
        self.history.record(content.as_str());
        self.buffer.set_content(content);
        self.last_edited = Some(Utc::now());
        self.notify();
    }

    /// Show a snapshot that is already in the history
    fn restore(&mut self, content: String) {
        self.buffer.set_content(content);
        self.last_edited = Some(Utc::now());
        self.notify();
    }

    fn notify(&mut self) {
        let content = self.buffer.content();
        for listener in self.listeners.iter_mut() {
            listener(content);
        }
    }
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("id", &self.id)
            .field("buffer", &self.buffer)
            .field("history_index", &self.history.index())
            .field("preview", &self.preview)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
