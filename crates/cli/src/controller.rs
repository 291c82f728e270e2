//! The interactive controller: a flat state machine over blocking key input
//! and the remote actions API.
//!
//! Responsibilities:
//! - Drive the Menu/Add/Remove/Macro workflow, one step per loop iteration.
//! - Own the binding table; it is mutated only by Add and Remove steps.
//! - Perform the Add flow's release/reacquire dance around line input.
//!
//! Error policy:
//! - Key-device errors and catalog-fetch errors propagate out of [`Controller::run`]
//!   and end the session.
//! - Action-execution failures are reported to the user and the loop continues.
//! - Unparseable index input and unbound keys are silent; each step returns
//!   an explicit outcome so tests can still observe them.

use std::io::{self, BufRead};

use keydeck_client::ActionCatalog;
use tracing::{debug, warn};

use crate::bindings::{Binding, BindingTable};
use crate::keys::{KeyPress, KeySource};
use crate::term;

/// Remote operations the controller depends on.
///
/// [`keydeck_client::ActionClient`] implements this; tests substitute a
/// recording fake.
pub trait ActionApi {
    async fn get_actions(&self) -> keydeck_client::Result<ActionCatalog>;
    async fn do_action(&self, id: &str) -> keydeck_client::Result<()>;
}

impl ActionApi for keydeck_client::ActionClient {
    async fn get_actions(&self) -> keydeck_client::Result<ActionCatalog> {
        keydeck_client::ActionClient::get_actions(self).await
    }

    async fn do_action(&self, id: &str) -> keydeck_client::Result<()> {
        keydeck_client::ActionClient::do_action(self, id).await
    }
}

/// Controller states. Every non-menu state returns to `Menu` when its
/// operation completes or is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Menu,
    Add,
    Remove,
    Macro,
}

/// What a menu step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Quit,
    EnterAdd,
    EnterRemove,
    EnterMacro,
    Ignored,
}

/// What an add step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Bound { key: char, action_name: String },
    /// The index line did not parse; silently back to the menu.
    InvalidIndexInput,
    /// The index parsed but exceeds the fetched catalog; reported, back to
    /// the menu.
    IndexOutOfRange { index: usize, count: usize },
    /// Cancel key at the key-assignment prompt; nothing bound.
    Cancelled,
}

/// What a remove step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(char),
    /// The pressed key had no binding; silently a no-op.
    NotBound(char),
    Cancelled,
}

/// What a macro step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroOutcome {
    BackToMenu,
    Executed(char),
    /// The server answered with something other than 204, or the request
    /// failed in transport. Reported once; state unchanged.
    ExecutionFailed(char),
    /// The pressed key has no binding; silently ignored.
    Unbound(char),
    /// A non-character, non-cancel key; ignored.
    Ignored,
}

/// The interactive state machine.
pub struct Controller<A, K, R> {
    api: A,
    keys: K,
    input: R,
    bindings: BindingTable,
    state: State,
}

impl<A, K, R> Controller<A, K, R>
where
    A: ActionApi,
    K: KeySource,
    R: BufRead,
{
    pub fn new(api: A, keys: K, input: R) -> Self {
        Self {
            api,
            keys,
            input,
            bindings: BindingTable::new(),
            state: State::Menu,
        }
    }

    /// Run the control loop until the user quits from the menu or an
    /// unrecoverable error occurs.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.keys.acquire()?;
        term::say("Press ESC to quit");

        let result = self.run_loop().await;

        // Best-effort release on every exit path, error or not.
        let _ = self.keys.release();
        result
    }

    async fn run_loop(&mut self) -> anyhow::Result<()> {
        loop {
            match self.state {
                State::Menu => {
                    if self.menu_step()? == MenuOutcome::Quit {
                        break;
                    }
                }
                State::Add => {
                    self.add_step().await?;
                }
                State::Remove => {
                    self.remove_step()?;
                }
                State::Macro => {
                    self.macro_step().await?;
                }
            }
        }
        term::say("Exiting");
        Ok(())
    }

    /// Show the menu and dispatch on one key press.
    fn menu_step(&mut self) -> io::Result<MenuOutcome> {
        term::say("a...Add");
        term::say("r...Remove");
        term::say("m...Macros");

        let outcome = match self.keys.read_key()? {
            KeyPress::Esc => MenuOutcome::Quit,
            KeyPress::Char('a') => {
                self.state = State::Add;
                MenuOutcome::EnterAdd
            }
            KeyPress::Char('r') => {
                self.state = State::Remove;
                MenuOutcome::EnterRemove
            }
            KeyPress::Char('m') => {
                term::say("Macro mode active");
                self.state = State::Macro;
                MenuOutcome::EnterMacro
            }
            _ => MenuOutcome::Ignored,
        };
        Ok(outcome)
    }

    /// Fetch the catalog, let the user pick an action by index, and bind it
    /// to one key. A failed fetch propagates and ends the session.
    async fn add_step(&mut self) -> anyhow::Result<AddOutcome> {
        // Whichever way this operation ends, the next step is the menu.
        self.state = State::Menu;

        let catalog = self.api.get_actions().await?;
        term::say("Available Actions:");
        for (i, action) in catalog.actions.iter().enumerate() {
            term::say(&format!("{i}) {}", action.name));
        }

        let index = match self.read_index()? {
            Some(index) => index,
            None => {
                debug!("index input did not parse, returning to menu");
                return Ok(AddOutcome::InvalidIndexInput);
            }
        };

        let count = catalog.actions.len();
        let Some(action) = catalog.actions.get(index) else {
            term::say(&format!("Index {index} is out of range ({count} actions)"));
            return Ok(AddOutcome::IndexOutOfRange { index, count });
        };

        term::ask("Enter key to assign: ");
        let Some(key) = self.read_char_key()? else {
            return Ok(AddOutcome::Cancelled);
        };
        term::say(&key.to_string());

        self.bindings.set(
            key,
            Binding {
                action_id: action.id.clone(),
                action_name: action.name.clone(),
            },
        );
        debug!(key = %key, action_id = %action.id, "bound key");
        Ok(AddOutcome::Bound {
            key,
            action_name: action.name.clone(),
        })
    }

    /// List current bindings and delete the one whose key is pressed.
    fn remove_step(&mut self) -> io::Result<RemoveOutcome> {
        self.state = State::Menu;

        for (key, binding) in self.bindings.list() {
            term::say(&format!("{key} -> {}", binding.action_name));
        }

        term::ask("Enter key of mapping to remove: ");
        let Some(key) = self.read_char_key()? else {
            return Ok(RemoveOutcome::Cancelled);
        };
        term::say(&key.to_string());

        if self.bindings.remove(key) {
            Ok(RemoveOutcome::Removed(key))
        } else {
            Ok(RemoveOutcome::NotBound(key))
        }
    }

    /// Dispatch one key press as a remote action execution.
    async fn macro_step(&mut self) -> anyhow::Result<MacroOutcome> {
        let key = match self.keys.read_key()? {
            KeyPress::Esc => {
                self.state = State::Menu;
                return Ok(MacroOutcome::BackToMenu);
            }
            KeyPress::Char(c) => c,
            KeyPress::Other => return Ok(MacroOutcome::Ignored),
        };

        term::say(&format!("Pressed: {key}"));
        let Some(binding) = self.bindings.get(key) else {
            return Ok(MacroOutcome::Unbound(key));
        };

        match self.api.do_action(&binding.action_id).await {
            Ok(()) => Ok(MacroOutcome::Executed(key)),
            Err(err) => {
                warn!(error = %err, action_id = %binding.action_id, "action execution failed");
                term::say("Error while sending request");
                Ok(MacroOutcome::ExecutionFailed(key))
            }
        }
    }

    /// Release the key source for one line of buffered input, then reacquire
    /// it. Raw key capture and line-oriented stdin reads are mutually
    /// exclusive, and reacquisition must happen on every exit path,
    /// including read errors.
    fn read_index(&mut self) -> anyhow::Result<Option<usize>> {
        self.keys.release()?;
        term::ask("Enter index: ");

        let mut line = String::new();
        let read = self.input.read_line(&mut line);
        let reacquired = self.keys.acquire();
        read?;
        reacquired?;

        Ok(line.trim().parse::<usize>().ok())
    }

    /// Read key presses until a character or the cancel key arrives.
    fn read_char_key(&mut self) -> io::Result<Option<char>> {
        loop {
            match self.keys.read_key()? {
                KeyPress::Char(c) => return Ok(Some(c)),
                KeyPress::Esc => return Ok(None),
                KeyPress::Other => {}
            }
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> State {
        self.state
    }

    #[allow(dead_code)]
    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }
}
