use crate::routes::view_state::{AppView, NavAction, ShellState, Transition};
use leptos::prelude::*;

/// Application-wide state, provided once at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub shell: RwSignal<ShellState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            shell: RwSignal::new(ShellState::new()),
        }
    }

    pub fn current_view(&self) -> AppView {
        self.shell.with(|s| s.view)
    }

    pub fn is_registered_vendor(&self) -> bool {
        self.shell.with(|s| s.has_registered_as_vendor)
    }

    pub fn dispatch(&self, action: NavAction) {
        let mut next = self.shell.get_untracked();
        match next.dispatch(action) {
            Transition::Moved { from, to } => {
                log::info!("view {} -> {} ({:?})", from.key(), to.key(), action);
                self.shell.set(next);
            }
            Transition::Ignored => {
                log::debug!("ignored {:?} in view {}", action, next.view.key());
            }
        }
    }

    /// Callback that raises `action`, for component props
    pub fn action(&self, action: NavAction) -> Callback<()> {
        let this = *self;
        Callback::new(move |_| this.dispatch(action))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
