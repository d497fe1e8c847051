use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::auth::application::domain::entities::AuthState;
use crate::profile::application::services::view_model_builder::build_template_view;
use crate::profile::application::use_cases::resolve_profile::{
    Resolution, ResolveProfileUseCase, ResolveStatus,
};
use crate::profile::domain::templates::TemplateSpec;
use crate::profile::domain::view_model::ViewModel;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedView {
    pub resolution: Resolution,
    pub view_model: ViewModel,
}

/// `Idle -> Loading -> {Ready, Failed, Demo}`; any trigger re-enters `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Ready(ResolvedView),
    Failed(ResolvedView),
    Demo(ResolvedView),
}

impl ViewState {
    fn settle(view: ResolvedView) -> Self {
        match view.resolution.status {
            ResolveStatus::Success => ViewState::Ready(view),
            ResolveStatus::Demo => ViewState::Demo(view),
            _ => ViewState::Failed(view),
        }
    }

    pub fn view(&self) -> Option<&ResolvedView> {
        match self {
            ViewState::Ready(v) | ViewState::Failed(v) | ViewState::Demo(v) => Some(v),
            ViewState::Idle | ViewState::Loading => None,
        }
    }
}

#[derive(Default)]
struct Slot {
    state: Option<ViewState>,
    last_inputs: Option<(Option<String>, AuthState)>,
}

/// The single view-model slot behind one rendered template.
///
/// For embedding callers that keep a template on screen and re-trigger it
/// (identity or session change, "try again"). The HTTP handlers resolve once
/// per request and do not need it.
///
/// Every `load`/`retry` takes a fresh generation; a resolution that comes
/// back after a newer trigger started is dropped, so the latest trigger wins.
pub struct ProfileViewSession {
    resolver: Arc<dyn ResolveProfileUseCase + Send + Sync>,
    template: &'static TemplateSpec,
    generation: AtomicU64,
    slot: Mutex<Slot>,
}

impl fmt::Debug for ProfileViewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileViewSession")
            .field("resolver", &"<dyn ResolveProfileUseCase>")
            .field("template", &self.template.id)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

impl ProfileViewSession {
    pub fn new(
        resolver: Arc<dyn ResolveProfileUseCase + Send + Sync>,
        template: &'static TemplateSpec,
    ) -> Self {
        Self {
            resolver,
            template,
            generation: AtomicU64::new(0),
            slot: Mutex::new(Slot::default()),
        }
    }

    pub async fn state(&self) -> ViewState {
        self.slot
            .lock()
            .await
            .state
            .clone()
            .unwrap_or(ViewState::Idle)
    }

    pub async fn load(&self, identity: Option<&str>, auth: &AuthState) -> ViewState {
        // Generation and last inputs are updated under one lock.
        let generation = {
            let mut slot = self.slot.lock().await;
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            slot.state = Some(ViewState::Loading);
            slot.last_inputs = Some((identity.map(str::to_string), auth.clone()));
            generation
        };

        let resolution = self.resolver.resolve(identity, auth).await;

        let mut slot = self.slot.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(
                "Dropping stale {:?} resolution for template {} (generation {})",
                resolution.status, self.template.id, generation
            );
            return slot.state.clone().unwrap_or(ViewState::Idle);
        }

        let view_model = build_template_view(resolution.record.as_ref(), self.template);
        let state = ViewState::settle(ResolvedView {
            resolution,
            view_model,
        });
        slot.state = Some(state.clone());
        state
    }

    /// Re-run the last trigger's inputs. Without a previous trigger this is a
    /// no-op returning the current state.
    pub async fn retry(&self) -> ViewState {
        let inputs = self.slot.lock().await.last_inputs.clone();
        match inputs {
            Some((identity, auth)) => self.load(identity.as_deref(), &auth).await,
            None => self.state().await,
        }
    }
}
