//! Per-frame gizmo orchestration
//!
//! [`GizmoController`] owns the handles, their meshes and the interaction
//! state. The host owns the target pose and camera and lends them to
//! [`GizmoController::update`] once per frame.

use glam::Vec2;
use te_core::constants::HANDLE_COUNT;
use te_core::{HandleId, Pose};
use te_renderer::config::{ConfigError, DragConfig, GizmoConfig};
use te_renderer::gizmo::{GizmoMeshes, GizmoRenderState, HandleInstance};
use te_renderer::ViewCamera;
use uuid::Uuid;

use crate::handle::Handle;
use crate::session::DragSession;
use crate::solver;
use crate::state::{Effect, Interaction, InteractionState, PointerSample, step};
use crate::visibility::VisibilityConfig;

/// Transform gizmo attached to at most one target
#[derive(Debug)]
pub struct GizmoController {
    config: GizmoConfig,
    handles: [Handle; HANDLE_COUNT],
    visibility: VisibilityConfig,
    target: Option<Uuid>,
    state: InteractionState,
    meshes: Option<GizmoMeshes>,
    generation: u64,
    /// Gizmo frame, synchronized to the target pose every frame
    frame: Pose,
    render_state: GizmoRenderState,
}

impl GizmoController {
    /// Create a detached controller
    pub fn new(config: GizmoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let handles = Handle::build_all(&config);

        Ok(Self {
            config,
            handles,
            visibility: VisibilityConfig::default(),
            target: None,
            state: InteractionState::Idle,
            meshes: None,
            generation: 0,
            frame: Pose::IDENTITY,
            render_state: GizmoRenderState::default(),
        })
    }

    /// Attach to a target.
    ///
    /// Calling this again with identical arguments does nothing. A changed
    /// configuration rebuilds the handles and replaces the meshes, a changed
    /// target resets any hover or drag, and a changed visibility only updates
    /// which handles are shown.
    pub fn attach(
        &mut self,
        target: Uuid,
        config: GizmoConfig,
        visibility: VisibilityConfig,
    ) -> Result<(), ConfigError> {
        let config_changed = config != self.config;
        if config_changed {
            config.validate()?;
        }

        if !config_changed
            && self.target == Some(target)
            && self.visibility == visibility
            && self.meshes.is_some()
        {
            return Ok(());
        }

        if config_changed || self.meshes.is_none() {
            // Release the previous meshes before generating new ones
            self.meshes = None;
            self.config = config;
            self.handles = Handle::build_all(&self.config);
            self.generation += 1;
            self.meshes = Some(GizmoMeshes::generate(&self.config.geometry, self.generation));
            self.state = InteractionState::Idle;
            tracing::info!(generation = self.generation, "Generated gizmo handle meshes");
        }

        if self.target != Some(target) {
            self.target = Some(target);
            self.reset_interaction();
            tracing::info!(%target, "Gizmo attached");
        }

        self.visibility = visibility;
        self.refresh_visibility();
        self.clear_hidden_hover();
        self.rebuild_render_state();
        Ok(())
    }

    /// Detach from the current target and release the meshes
    pub fn detach(&mut self) {
        if let Some(target) = self.target.take() {
            tracing::info!(%target, "Gizmo detached");
        }
        self.reset_interaction();
        self.meshes = None;
        self.rebuild_render_state();
    }

    /// Run one frame.
    ///
    /// Does nothing unless the gizmo is attached and both a target pose and a
    /// camera are available. Otherwise syncs the gizmo frame to the target,
    /// refreshes handle visibility, advances the state machine and writes any
    /// dragged pose back to the target.
    pub fn update<C: ViewCamera>(
        &mut self,
        target: Option<&mut Pose>,
        camera: Option<&C>,
        pointer: PointerSample,
    ) {
        if self.target.is_none() {
            return;
        }
        let (Some(target), Some(camera)) = (target, camera) else {
            tracing::trace!("Gizmo update skipped: target or camera unavailable");
            return;
        };

        self.frame = *target;
        self.refresh_visibility();

        let state = std::mem::take(&mut self.state);
        let mut ctx = FrameContext {
            handles: &self.handles,
            frame: self.frame,
            camera,
            pointer: pointer.position,
            drag: &self.config.drag,
        };
        let (next, effects) = step(state, pointer.button, &mut ctx);
        self.state = next;

        for effect in effects {
            self.apply(effect, target);
        }

        self.rebuild_render_state();
    }

    fn apply(&mut self, effect: Effect, target: &mut Pose) {
        match effect {
            Effect::Highlight(id) => {
                tracing::debug!(handle = id.name(), "Gizmo handle hovered");
                self.handles[id.to_index()].highlighted = true;
            }
            Effect::Unhighlight(id) => self.handles[id.to_index()].highlighted = false,
            Effect::DragStarted(id) => {
                tracing::debug!(handle = id.name(), "Gizmo drag started");
            }
            Effect::DragEnded(id) => {
                tracing::debug!(handle = id.name(), "Gizmo drag ended");
            }
            Effect::SetPose(pose) => {
                *target = pose;
                self.frame = pose;
            }
        }
    }

    fn reset_interaction(&mut self) {
        self.state = InteractionState::Idle;
        for handle in &mut self.handles {
            handle.highlighted = false;
        }
    }

    fn refresh_visibility(&mut self) {
        for handle in &mut self.handles {
            handle.visible = self.visibility.is_visible(handle.id());
        }
    }

    /// Drop a hover on a handle that is no longer shown
    fn clear_hidden_hover(&mut self) {
        if let InteractionState::Hovering(id) = self.state {
            let handle = &mut self.handles[id.to_index()];
            if !handle.is_visible() {
                handle.highlighted = false;
                self.state = InteractionState::Idle;
            }
        }
    }

    fn rebuild_render_state(&mut self) {
        let transform = self.frame.to_matrix();
        let attached = self.target.is_some();
        let colors = &self.config.colors;

        self.render_state = GizmoRenderState {
            instances: std::array::from_fn(|i| {
                let handle = &self.handles[i];
                HandleInstance::new(
                    transform,
                    handle.base_color(),
                    attached && handle.is_visible(),
                    handle.is_highlighted(),
                    colors,
                )
            }),
            active: self.state.active_handle(),
            mesh_generation: self.meshes.as_ref().map_or(0, |m| m.generation),
        };
    }

    /// Hovered or dragged handle
    pub fn active_handle(&self) -> Option<HandleId> {
        self.state.active_handle()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn handles(&self) -> &[Handle; HANDLE_COUNT] {
        &self.handles
    }

    pub fn handle(&self, id: HandleId) -> &Handle {
        &self.handles[id.to_index()]
    }

    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// Per-handle render data for the latest frame
    pub fn render_state(&self) -> &GizmoRenderState {
        &self.render_state
    }

    /// Handle meshes, present while attached
    pub fn meshes(&self) -> Option<&GizmoMeshes> {
        self.meshes.as_ref()
    }

    pub fn visibility(&self) -> &VisibilityConfig {
        &self.visibility
    }

    /// Live access to the enable flags; applied on the next update
    pub fn visibility_mut(&mut self) -> &mut VisibilityConfig {
        &mut self.visibility
    }
}

/// Borrowed view of one frame, answering the state machine's queries
struct FrameContext<'a, C> {
    handles: &'a [Handle; HANDLE_COUNT],
    frame: Pose,
    camera: &'a C,
    pointer: Vec2,
    drag: &'a DragConfig,
}

impl<C: ViewCamera> Interaction for FrameContext<'_, C> {
    fn hover_scan(&mut self) -> Option<HandleId> {
        HandleId::HOVER_ORDER.into_iter().find(|id| {
            let handle = &self.handles[id.to_index()];
            handle.is_visible() && handle.hit_test(&self.frame, self.camera, self.pointer)
        })
    }

    fn begin_drag(&mut self, handle: HandleId) -> Option<DragSession> {
        let ray = self.camera.screen_to_ray(self.pointer);
        let session = solver::begin_drag(&self.handles[handle.to_index()], &self.frame, ray);
        if session.is_none() {
            tracing::trace!(handle = handle.name(), "Drag could not be anchored");
        }
        session
    }

    fn drag(&mut self, session: &mut DragSession) -> Option<Pose> {
        let ray = self.camera.screen_to_ray(self.pointer);
        solver::solve(session, &ray, self.drag)
    }
}
