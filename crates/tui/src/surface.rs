//! Dashboard surface lifecycle.
//!
//! [`Dashboard`] is the explicit owner of the single dashboard surface: a
//! Closed/Open state machine passed by reference to whoever needs it, never
//! ambient global state. It captures the prior surface's display options on
//! open and restores them exactly on close, and its generation counter is
//! what makes stale deferred resize steps harmless.

use portico_model::{LayoutCategory, LayoutMode};
use tracing::debug;

use crate::animate::ResizeAnimation;
use crate::geometry;
use crate::host::{BufferId, Host, HostError, Notice, SurfaceId, SurfaceOptions};
use crate::render::{RenderError, RenderInputs, render_pass};
use crate::theme::ContentProvider;

/// What `create` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The dashboard surface was created.
    Opened,
    /// The dashboard was already visible; nothing changed.
    AlreadyOpen,
}

/// What one animation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Geometry was applied and more steps remain.
    Applied,
    /// The final geometry was applied.
    Finished,
    /// The step was stale or the surface is gone; nothing was touched.
    Cancelled,
}

/// The live half of the state machine.
#[derive(Debug, Clone, Copy)]
pub struct OpenState {
    /// The dashboard surface.
    pub surface: SurfaceId,
    /// The dashboard content buffer.
    pub buffer: BufferId,
    /// Current surface geometry.
    pub dims: portico_model::Dimensions,
    /// Category of the last layout pass.
    pub category: LayoutCategory,
    /// The layout mode the dashboard opened in.
    pub mode: LayoutMode,
    saved: SurfaceOptions,
}

/// Errors from lifecycle transitions.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// A host allocation or handle operation failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// A render pass failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A specialized Result type for lifecycle operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;

/// The dashboard lifecycle state machine.
///
/// At most one dashboard surface exists: `create` on an open dashboard is a
/// reported no-op, never a duplicate.
#[derive(Debug, Default)]
pub struct Dashboard {
    open: Option<OpenState>,
    generation: u64,
}

impl Dashboard {
    /// Creates a closed dashboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dashboard surface exists.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The open-state snapshot, if open.
    #[must_use]
    pub fn open_state(&self) -> Option<&OpenState> {
        self.open.as_ref()
    }

    /// The current generation; stale deferred steps carry an older one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Closed → Open: creates the dashboard surface and renders into it.
    ///
    /// Captures the current surface options first and restores them if
    /// anything fails, so a failed open leaves no trace. When already open
    /// this reports "already visible" and changes nothing.
    ///
    /// A failing first render is reported through the host notification
    /// channel but keeps the surface open (empty); allocation failures
    /// abort the open entirely.
    ///
    /// # Errors
    ///
    /// Returns an error when buffer or surface allocation fails. Partially
    /// allocated resources are released before returning.
    pub fn create(
        &mut self,
        host: &mut dyn Host,
        provider: &dyn ContentProvider,
        inputs: &RenderInputs<'_>,
    ) -> Result<CreateOutcome> {
        if self.open.is_some() {
            host.notify(Notice::Info, "dashboard already visible");
            return Ok(CreateOutcome::AlreadyOpen);
        }

        let mode = inputs.config.layout.mode;
        let saved = host.options();
        let buffer = host.create_buffer()?;

        let layout = geometry::compute(host.viewport(), mode);
        let surface = match mode {
            LayoutMode::Full => {
                let base = host.base_surface();
                if let Err(e) = host.replace_buffer(base, buffer) {
                    let _ = host.release_buffer(buffer);
                    return Err(e.into());
                }
                base
            }
            LayoutMode::Floating => match host.open_surface(buffer, &layout.dims) {
                Ok(surface) => surface,
                Err(e) => {
                    let _ = host.release_buffer(buffer);
                    return Err(e.into());
                }
            },
        };

        host.apply_options(&SurfaceOptions::dashboard());
        self.generation += 1;
        self.open = Some(OpenState {
            surface,
            buffer,
            dims: layout.dims,
            category: layout.category,
            mode,
            saved,
        });
        debug!(?mode, category = ?layout.category, "dashboard opened");

        if let Err(e) = render_pass(host, buffer, layout.dims, provider, inputs) {
            host.notify(Notice::Error, &format!("dashboard render failed: {e}"));
        }
        Ok(CreateOutcome::Opened)
    }

    /// Open → Closed: tears the surface down and restores prior options.
    ///
    /// In full mode a fresh blank buffer is substituted before the dashboard
    /// buffer is released, so the surface never points at a dead buffer.
    /// Pending animation steps become stale. A no-op when already closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the replacement blank buffer cannot be allocated
    /// (the dashboard then stays open) or a host handle has gone invalid.
    pub fn destroy(&mut self, host: &mut dyn Host) -> Result<()> {
        let Some(state) = self.open.take() else {
            return Ok(());
        };
        self.generation += 1;

        match state.mode {
            LayoutMode::Full => {
                let blank = match host.create_buffer() {
                    Ok(blank) => blank,
                    Err(e) => {
                        self.open = Some(state);
                        return Err(e.into());
                    }
                };
                host.replace_buffer(state.surface, blank)?;
                host.release_buffer(state.buffer)?;
            }
            LayoutMode::Floating => {
                host.close_surface(state.surface)?;
                host.release_buffer(state.buffer)?;
            }
        }

        host.apply_options(&state.saved);
        debug!("dashboard closed");
        Ok(())
    }

    /// Open → Open: re-runs the render pass without changing surface
    /// identity. A no-op when closed.
    ///
    /// # Errors
    ///
    /// Returns the render failure; the prior rendered state stays visible.
    pub fn redraw(
        &mut self,
        host: &mut dyn Host,
        provider: &dyn ContentProvider,
        inputs: &RenderInputs<'_>,
    ) -> std::result::Result<(), RenderError> {
        match &self.open {
            Some(state) => render_pass(host, state.buffer, state.dims, provider, inputs),
            None => Ok(()),
        }
    }

    /// Recomputes geometry for the current viewport.
    ///
    /// Returns a stepped animation when one should run (floating mode,
    /// animation enabled, extent changed); otherwise the surface snaps to
    /// the new geometry immediately. Either way, older pending animations
    /// become stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the snap resize or its render pass fails.
    pub fn resize(
        &mut self,
        host: &mut dyn Host,
        provider: &dyn ContentProvider,
        inputs: &RenderInputs<'_>,
    ) -> Result<Option<ResizeAnimation>> {
        let Some(state) = &mut self.open else {
            return Ok(None);
        };

        let layout = geometry::compute(host.viewport(), state.mode);
        if layout.dims == state.dims {
            return Ok(None);
        }

        self.generation += 1;
        state.category = layout.category;

        let animate = inputs.config.layout.animate
            && state.mode == LayoutMode::Floating
            && !state.dims.same_extent(&layout.dims);
        if animate {
            debug!(target = ?layout.dims, "starting stepped resize");
            return Ok(Some(ResizeAnimation::new(
                state.dims,
                layout.dims,
                inputs.config.layout.animation_steps,
                self.generation,
            )));
        }

        host.resize_surface(state.surface, &layout.dims)?;
        state.dims = layout.dims;
        let (buffer, dims) = (state.buffer, state.dims);
        render_pass(host, buffer, dims, provider, inputs)?;
        Ok(None)
    }

    /// Applies one step of a stepped resize.
    ///
    /// A step from an older generation, or one whose surface is no longer
    /// valid, is dropped without touching anything.
    ///
    /// # Errors
    ///
    /// Returns an error if applying the geometry or re-rendering fails.
    pub fn animation_step(
        &mut self,
        host: &mut dyn Host,
        animation: &mut ResizeAnimation,
        provider: &dyn ContentProvider,
        inputs: &RenderInputs<'_>,
    ) -> Result<StepOutcome> {
        let Some(state) = &mut self.open else {
            return Ok(StepOutcome::Cancelled);
        };
        if animation.generation() != self.generation || !host.surface_valid(state.surface) {
            return Ok(StepOutcome::Cancelled);
        }

        match animation.tick() {
            Some(dims) => {
                host.resize_surface(state.surface, &dims)?;
                state.dims = dims;
                let buffer = state.buffer;
                render_pass(host, buffer, dims, provider, inputs)?;
                Ok(if animation.is_done() {
                    StepOutcome::Finished
                } else {
                    StepOutcome::Applied
                })
            }
            None => Ok(StepOutcome::Finished),
        }
    }
}
