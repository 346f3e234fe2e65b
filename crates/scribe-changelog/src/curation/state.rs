//! Curation state and its transition function

use scribe_core::{Config, CurationError};

use crate::types::ParsedCommit;

/// Types offered for retyping beyond the configured ones
const BUILTIN_TYPES: &[&str] = &["feat", "fix", "chore", "refactor", "docs", "test", "perf"];

/// Input mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Moving around and toggling items
    #[default]
    Normal,
    /// Editing the description of the current item
    Edit,
}

/// A commit under review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurationItem {
    pub commit: ParsedCommit,
    pub included: bool,
}

/// Everything the operator can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    ToggleInclude,
    CycleType,
    BeginEdit,
    Confirm,
    Abort,
    InsertChar(char),
    DeleteChar,
    CommitEdit,
    CancelEdit,
}

/// What the session should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Confirmed,
    Aborted,
}

/// Section types followed by the built-in types, deduplicated
pub fn allowed_types(config: &Config) -> Vec<String> {
    let mut types = config.allowed_types();
    for builtin in BUILTIN_TYPES {
        if !types.iter().any(|t| t == builtin) {
            types.push(builtin.to_string());
        }
    }
    types
}

/// State of an interactive review.
///
/// Items never change position; the operator only flips inclusion and edits
/// types and descriptions in place.
#[derive(Debug, Clone)]
pub struct CurationState {
    items: Vec<CurationItem>,
    cursor: usize,
    mode: Mode,
    edit_buffer: String,
    allowed_types: Vec<String>,
    flow: Flow,
}

impl CurationState {
    /// Start a review with every commit included and the cursor on the first
    pub fn new(commits: Vec<ParsedCommit>, allowed_types: Vec<String>) -> Self {
        Self {
            items: commits
                .into_iter()
                .map(|commit| CurationItem {
                    commit,
                    included: true,
                })
                .collect(),
            cursor: 0,
            mode: Mode::Normal,
            edit_buffer: String::new(),
            allowed_types,
            flow: Flow::Continue,
        }
    }

    pub fn items(&self) -> &[CurationItem] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    pub fn allowed_types(&self) -> &[String] {
        &self.allowed_types
    }

    /// Current flow; anything but `Continue` is final
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Apply one action and report whether the session goes on.
    ///
    /// Actions that do not belong to the current mode are ignored, as is
    /// everything after the session has finished.
    pub fn apply(&mut self, action: Action) -> Flow {
        if self.flow != Flow::Continue {
            return self.flow;
        }

        match (self.mode, action) {
            (Mode::Normal, Action::CursorUp) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            (Mode::Normal, Action::CursorDown) => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
            }
            (Mode::Normal, Action::ToggleInclude) => {
                if let Some(item) = self.items.get_mut(self.cursor) {
                    item.included = !item.included;
                }
            }
            (Mode::Normal, Action::CycleType) => self.cycle_type(),
            (Mode::Normal, Action::BeginEdit) => {
                if let Some(item) = self.items.get(self.cursor) {
                    self.edit_buffer = item.commit.description.clone();
                    self.mode = Mode::Edit;
                }
            }
            (Mode::Normal, Action::Confirm) => self.flow = Flow::Confirmed,
            (Mode::Normal, Action::Abort) => self.flow = Flow::Aborted,
            (Mode::Edit, Action::InsertChar(c)) => self.edit_buffer.push(c),
            (Mode::Edit, Action::DeleteChar) => {
                self.edit_buffer.pop();
            }
            (Mode::Edit, Action::CommitEdit) => {
                if let Some(item) = self.items.get_mut(self.cursor) {
                    item.commit.description = self.edit_buffer.trim().to_string();
                }
                self.leave_edit();
            }
            (Mode::Edit, Action::CancelEdit) => self.leave_edit(),
            _ => {}
        }

        self.flow
    }

    /// The included commits, in original order, with their edits.
    ///
    /// Only a confirmed session yields commits; an aborted or unfinished one
    /// yields [`CurationError::Aborted`].
    pub fn into_curated(self) -> Result<Vec<ParsedCommit>, CurationError> {
        if self.flow != Flow::Confirmed {
            return Err(CurationError::Aborted);
        }

        Ok(self
            .items
            .into_iter()
            .filter(|item| item.included)
            .map(|item| item.commit)
            .collect())
    }

    fn cycle_type(&mut self) {
        let Some(item) = self.items.get_mut(self.cursor) else {
            return;
        };
        let Some(first) = self.allowed_types.first() else {
            return;
        };

        let next = match self
            .allowed_types
            .iter()
            .position(|t| *t == item.commit.commit_type)
        {
            Some(idx) => &self.allowed_types[(idx + 1) % self.allowed_types.len()],
            None => first,
        };
        item.commit.commit_type = next.clone();
    }

    fn leave_edit(&mut self) {
        self.edit_buffer.clear();
        self.mode = Mode::Normal;
    }
}
