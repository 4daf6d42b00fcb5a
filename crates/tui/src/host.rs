//! The host display abstraction.
//!
//! The dashboard core never touches the terminal directly. It talks to a
//! [`Host`]: buffers hold text lines, surfaces display buffers at some
//! geometry, style spans paint display-column ranges, and notifications go
//! to a host-level channel instead of crashing anything. [`MemoryHost`] is
//! the canonical implementation; the front end renders its state each frame
//! and tests drive it directly.

use std::collections::HashMap;

use portico_model::{Dimensions, StyleSpan, Viewport};

/// Handle to a content buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u32);

/// Handle to a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u32);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Informational message.
    Info,
    /// Something degraded but the dashboard carries on.
    Warning,
    /// An operation failed.
    Error,
}

/// The mutable display options of the surface under the dashboard.
///
/// Captured before the dashboard opens and reapplied on close so the prior
/// editing surface is restored exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// Whether the status line is shown.
    pub status_line: bool,
    /// Whether line numbers are shown.
    pub line_numbers: bool,
    /// Whether the sign column is shown.
    pub sign_column: bool,
    /// Whether the cursor line is decorated.
    pub cursor_line: bool,
}

impl Default for SurfaceOptions {
    /// Options of an ordinary editing surface.
    fn default() -> Self {
        Self {
            status_line: true,
            line_numbers: true,
            sign_column: true,
            cursor_line: true,
        }
    }
}

impl SurfaceOptions {
    /// Options the dashboard runs with: every decoration off.
    #[must_use]
    pub fn dashboard() -> Self {
        Self {
            status_line: false,
            line_numbers: false,
            sign_column: false,
            cursor_line: false,
        }
    }
}

/// Errors surfaced by host operations.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The host refused to allocate another resource.
    #[error("host resource exhausted: {resource}")]
    Exhausted {
        /// What could not be allocated.
        resource: &'static str,
    },

    /// A buffer handle did not resolve.
    #[error("unknown buffer handle")]
    UnknownBuffer,

    /// A surface handle did not resolve.
    #[error("unknown surface handle")]
    UnknownSurface,
}

/// A specialized Result type for host operations.
pub type Result<T> = std::result::Result<T, HostError>;

/// The display capabilities the dashboard core consumes.
///
/// Single-threaded by contract: every call happens on the main thread in
/// response to a discrete event, so implementations need no locking.
pub trait Host {
    /// Current viewport geometry; read fresh on every layout pass.
    fn viewport(&self) -> Viewport;

    /// The pre-existing surface the dashboard replaces in full mode.
    fn base_surface(&self) -> SurfaceId;

    /// Current mutable display options of the base surface.
    fn options(&self) -> SurfaceOptions;

    /// Applies display options to the base surface.
    fn apply_options(&mut self, options: &SurfaceOptions);

    /// Allocates an empty content buffer.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Exhausted`] when the host is out of buffers.
    fn create_buffer(&mut self) -> Result<BufferId>;

    /// Releases a buffer and its style spans.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn release_buffer(&mut self, buffer: BufferId) -> Result<()>;

    /// Opens a floating surface displaying `buffer` at `dims`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Exhausted`] when the host is out of surfaces,
    /// or an error if the buffer handle does not resolve.
    fn open_surface(&mut self, buffer: BufferId, dims: &Dimensions) -> Result<SurfaceId>;

    /// Closes a floating surface. The base surface cannot be closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn close_surface(&mut self, surface: SurfaceId) -> Result<()>;

    /// Moves/resizes a surface to new geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn resize_surface(&mut self, surface: SurfaceId, dims: &Dimensions) -> Result<()>;

    /// Points a surface at a different buffer (full-surface mode).
    ///
    /// # Errors
    ///
    /// Returns an error if either handle does not resolve.
    fn replace_buffer(&mut self, surface: SurfaceId, buffer: BufferId) -> Result<()>;

    /// Whether a surface handle still resolves (stale-callback guard).
    fn surface_valid(&self, surface: SurfaceId) -> bool;

    /// The buffer a surface currently displays.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn surface_buffer(&self, surface: SurfaceId) -> Result<BufferId>;

    /// Replaces the full text of a buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn set_lines(&mut self, buffer: BufferId, lines: Vec<String>) -> Result<()>;

    /// Reads the text of a buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle does not resolve.
    fn lines(&self, buffer: BufferId) -> Result<&[String]>;

    /// Clears every style span previously applied to a buffer.
    fn clear_spans(&mut self, buffer: BufferId);

    /// Applies one style span to a buffer. Styling only; text is untouched.
    fn add_span(&mut self, buffer: BufferId, span: StyleSpan);

    /// Executes a host command.
    fn execute(&mut self, command: &str);

    /// Posts a notification to the host-level channel.
    fn notify(&mut self, level: Notice, message: &str);
}

#[derive(Debug, Default, Clone)]
struct BufferRecord {
    lines: Vec<String>,
    spans: Vec<StyleSpan>,
}

#[derive(Debug, Clone)]
struct SurfaceRecord {
    buffer: BufferId,
    dims: Dimensions,
}

/// In-memory host model.
///
/// Holds buffers, surfaces, options, spans, executed commands, and
/// notifications as plain state. The front end renders from it; tests assert
/// on it.
///
/// # Examples
///
/// ```
/// use portico_model::Viewport;
/// use portico_tui::host::{Host, MemoryHost};
///
/// let mut host = MemoryHost::new(Viewport::new(80, 24));
/// let buffer = host.create_buffer().unwrap();
/// host.set_lines(buffer, vec!["hello".to_string()]).unwrap();
/// assert_eq!(host.lines(buffer).unwrap(), ["hello".to_string()]);
/// ```
#[derive(Debug)]
pub struct MemoryHost {
    viewport: Viewport,
    buffers: HashMap<BufferId, BufferRecord>,
    surfaces: HashMap<SurfaceId, SurfaceRecord>,
    surface_order: Vec<SurfaceId>,
    next_buffer: u32,
    next_surface: u32,
    base: SurfaceId,
    options: SurfaceOptions,
    buffer_quota: Option<usize>,
    surface_quota: Option<usize>,
    commands: Vec<String>,
    notices: Vec<(Notice, String)>,
}

impl MemoryHost {
    /// Creates a host with one base surface spanning the viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let base_buffer = BufferId(0);
        let base = SurfaceId(0);
        let mut buffers = HashMap::new();
        buffers.insert(base_buffer, BufferRecord::default());
        let mut surfaces = HashMap::new();
        surfaces.insert(
            base,
            SurfaceRecord {
                buffer: base_buffer,
                dims: Dimensions::new(viewport.width, viewport.height, 0, 0),
            },
        );

        Self {
            viewport,
            buffers,
            surfaces,
            surface_order: vec![base],
            next_buffer: 1,
            next_surface: 1,
            base,
            options: SurfaceOptions::default(),
            buffer_quota: None,
            surface_quota: None,
            commands: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Updates the viewport geometry (terminal resize).
    ///
    /// The base surface tracks the viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(record) = self.surfaces.get_mut(&self.base) {
            record.dims = Dimensions::new(viewport.width, viewport.height, 0, 0);
        }
    }

    /// Caps the number of live buffers; further allocations fail.
    ///
    /// Exists so tests can exercise the resource-exhaustion path.
    pub fn limit_buffers(&mut self, quota: usize) {
        self.buffer_quota = Some(quota);
    }

    /// Caps the number of live surfaces; further allocations fail.
    pub fn limit_surfaces(&mut self, quota: usize) {
        self.surface_quota = Some(quota);
    }

    /// Surfaces in paint order: base first, overlays in creation order.
    #[must_use]
    pub fn paint_order(&self) -> Vec<SurfaceId> {
        self.surface_order.clone()
    }

    /// Geometry of a surface.
    #[must_use]
    pub fn surface_dims(&self, surface: SurfaceId) -> Option<Dimensions> {
        self.surfaces.get(&surface).map(|r| r.dims)
    }

    /// Style spans currently applied to a buffer.
    #[must_use]
    pub fn spans(&self, buffer: BufferId) -> &[StyleSpan] {
        self.buffers.get(&buffer).map_or(&[], |r| r.spans.as_slice())
    }

    /// Host commands executed so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Notifications posted so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[(Notice, String)] {
        &self.notices
    }

    /// The most recent notification, if any.
    #[must_use]
    pub fn last_notice(&self) -> Option<&(Notice, String)> {
        self.notices.last()
    }

    /// Number of live buffers.
    #[must_use]
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Number of live surfaces (including the base surface).
    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }
}

impl Host for MemoryHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn base_surface(&self) -> SurfaceId {
        self.base
    }

    fn options(&self) -> SurfaceOptions {
        self.options
    }

    fn apply_options(&mut self, options: &SurfaceOptions) {
        self.options = *options;
    }

    fn create_buffer(&mut self) -> Result<BufferId> {
        if let Some(quota) = self.buffer_quota
            && self.buffers.len() >= quota
        {
            return Err(HostError::Exhausted { resource: "buffer" });
        }
        let id = BufferId(self.next_buffer);
        self.next_buffer += 1;
        self.buffers.insert(id, BufferRecord::default());
        Ok(id)
    }

    fn release_buffer(&mut self, buffer: BufferId) -> Result<()> {
        self.buffers
            .remove(&buffer)
            .map(|_| ())
            .ok_or(HostError::UnknownBuffer)
    }

    fn open_surface(&mut self, buffer: BufferId, dims: &Dimensions) -> Result<SurfaceId> {
        if !self.buffers.contains_key(&buffer) {
            return Err(HostError::UnknownBuffer);
        }
        if let Some(quota) = self.surface_quota
            && self.surfaces.len() >= quota
        {
            return Err(HostError::Exhausted {
                resource: "surface",
            });
        }
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(
            id,
            SurfaceRecord {
                buffer,
                dims: *dims,
            },
        );
        self.surface_order.push(id);
        Ok(id)
    }

    fn close_surface(&mut self, surface: SurfaceId) -> Result<()> {
        if surface == self.base {
            return Err(HostError::UnknownSurface);
        }
        self.surfaces
            .remove(&surface)
            .ok_or(HostError::UnknownSurface)?;
        self.surface_order.retain(|s| *s != surface);
        Ok(())
    }

    fn resize_surface(&mut self, surface: SurfaceId, dims: &Dimensions) -> Result<()> {
        let record = self
            .surfaces
            .get_mut(&surface)
            .ok_or(HostError::UnknownSurface)?;
        record.dims = *dims;
        Ok(())
    }

    fn replace_buffer(&mut self, surface: SurfaceId, buffer: BufferId) -> Result<()> {
        if !self.buffers.contains_key(&buffer) {
            return Err(HostError::UnknownBuffer);
        }
        let record = self
            .surfaces
            .get_mut(&surface)
            .ok_or(HostError::UnknownSurface)?;
        record.buffer = buffer;
        Ok(())
    }

    fn surface_valid(&self, surface: SurfaceId) -> bool {
        self.surfaces.contains_key(&surface)
    }

    fn surface_buffer(&self, surface: SurfaceId) -> Result<BufferId> {
        self.surfaces
            .get(&surface)
            .map(|r| r.buffer)
            .ok_or(HostError::UnknownSurface)
    }

    fn set_lines(&mut self, buffer: BufferId, lines: Vec<String>) -> Result<()> {
        let record = self
            .buffers
            .get_mut(&buffer)
            .ok_or(HostError::UnknownBuffer)?;
        record.lines = lines;
        Ok(())
    }

    fn lines(&self, buffer: BufferId) -> Result<&[String]> {
        self.buffers
            .get(&buffer)
            .map(|r| r.lines.as_slice())
            .ok_or(HostError::UnknownBuffer)
    }

    fn clear_spans(&mut self, buffer: BufferId) {
        if let Some(record) = self.buffers.get_mut(&buffer) {
            record.spans.clear();
        }
    }

    fn add_span(&mut self, buffer: BufferId, span: StyleSpan) {
        if let Some(record) = self.buffers.get_mut(&buffer) {
            record.spans.push(span);
        }
    }

    fn execute(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }

    fn notify(&mut self, level: Notice, message: &str) {
        self.notices.push((level, message.to_string()));
    }
}
