//! Interactive review of parsed commits
//!
//! The session is split into a pure [`CurationState`] driven by
//! [`Action`]s, a [`Keymap`] turning key presses into actions, and the
//! terminal plumbing in [`terminal`]. Only [`run_session`] ties them
//! together, so everything but the terminal itself can be driven from tests.

mod keymap;
mod state;
pub mod terminal;
pub mod view;

pub use keymap::Keymap;
pub use state::{allowed_types, Action, CurationItem, CurationState, Flow, Mode};
pub use terminal::{EventSource, Screen, ScriptedEvents, TermScreen, TerminalEvents};

use scribe_core::{Config, CurationError};
use tracing::{debug, info, instrument};

use crate::types::ParsedCommit;

/// Let the operator review `commits` on the terminal.
///
/// Returns the included commits in their original order, with any edits
/// applied. Aborting yields [`CurationError::Aborted`].
pub fn curate(commits: Vec<ParsedCommit>, config: &Config) -> Result<Vec<ParsedCommit>, CurationError> {
    let mut events = TerminalEvents::stderr()?;
    let mut screen = TermScreen::stderr();
    let state = CurationState::new(commits, allowed_types(config));
    run_session(state, &Keymap::new(), &mut events, &mut screen)
}

/// Drive `state` with keys from `events` until it is confirmed or aborted
#[instrument(skip_all, fields(items = state.items().len()))]
pub fn run_session<E: EventSource, S: Screen>(
    mut state: CurationState,
    keymap: &Keymap,
    events: &mut E,
    screen: &mut S,
) -> Result<Vec<ParsedCommit>, CurationError> {
    let result = drive(&mut state, keymap, events, screen);
    screen.finish()?;
    let flow = result?;

    info!(?flow, "curation finished");
    state.into_curated()
}

fn drive<E: EventSource, S: Screen>(
    state: &mut CurationState,
    keymap: &Keymap,
    events: &mut E,
    screen: &mut S,
) -> Result<Flow, CurationError> {
    loop {
        screen.draw(&view::render_frame(state))?;

        let key = events.next_key()?.ok_or(CurationError::InputClosed)?;
        let Some(action) = keymap.decode(state.mode(), &key) else {
            debug!(?key, "unbound key");
            continue;
        };

        match state.apply(action) {
            Flow::Continue => {}
            flow => return Ok(flow),
        }
    }
}
