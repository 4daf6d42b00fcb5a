//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the dashboard
//! lifecycle: event handling, state updates, rendering, and the deferred
//! resize animation.

use std::path::Path;

use portico_config::{Config, Settings};
use portico_data::{Projects, RecentFiles, Sessions};
use portico_model::{AppReaction, MenuItem, Message, Viewport};
use tracing::debug;

use crate::animate::ResizeAnimation;
use crate::event::{event_to_message, poll_event};
use crate::host::{Host, MemoryHost, Notice};
use crate::keymap::{DisplayKeymap, display_keymaps};
use crate::render::{RenderInputs, SectionSource};
use crate::surface::{Dashboard, StepOutcome};
use crate::terminal::AppTerminal;
use crate::theme::compose::{Region, compose};
use crate::theme::{ProviderRegistry, RenderContext, Section, effective_menu};
use crate::view::render_host;

/// Builds the data-source list for a render pass.
///
/// Free-standing so call sites borrow individual `App` fields instead of the
/// whole struct.
fn build_sources<'a>(
    config: &'a Config,
    recent: &'a RecentFiles,
    sessions: &'a Sessions,
    projects: &'a Projects,
) -> [SectionSource<'a>; 3] {
    [
        SectionSource {
            source: recent,
            limit: config.lists.recent_limit,
        },
        SectionSource {
            source: sessions,
            limit: config.lists.session_limit,
        },
        SectionSource {
            source: projects,
            limit: config.lists.project_limit,
        },
    ]
}

/// The main application struct.
///
/// Owns the host model, the dashboard lifecycle, the provider registry, the
/// settings store, and the data sources, and drives them from the event
/// loop.
pub struct App {
    host: MemoryHost,
    dashboard: Dashboard,
    registry: ProviderRegistry,
    settings: Settings,
    keymaps: Vec<DisplayKeymap>,
    recent: RecentFiles,
    sessions: Sessions,
    projects: Projects,
    selected: usize,
    animation: Option<ResizeAnimation>,
    should_quit: bool,
}

impl App {
    /// Creates the application from a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The validated application configuration.
    /// * `data_dir` - Directory holding the provider list files.
    #[must_use]
    pub fn new(config: Config, data_dir: &Path) -> Self {
        let mut host = MemoryHost::new(Viewport::new(80, 24));
        let mut registry = ProviderRegistry::with_defaults();
        if registry.set_current(&config.theme).is_err() {
            host.notify(
                Notice::Warning,
                &format!("unknown theme `{}`, using `glyph`", config.theme),
            );
        }

        Self {
            host,
            dashboard: Dashboard::new(),
            registry,
            settings: Settings::new(config),
            keymaps: display_keymaps(),
            recent: RecentFiles::new(data_dir),
            sessions: Sessions::new(data_dir),
            projects: Projects::new(data_dir),
            selected: 0,
            animation: None,
            should_quit: false,
        }
    }

    /// Returns the settings store.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the host model.
    #[must_use]
    pub fn host(&self) -> &MemoryHost {
        &self.host
    }

    /// Returns whether the dashboard surface is open.
    #[must_use]
    pub fn is_dashboard_open(&self) -> bool {
        self.dashboard.is_open()
    }

    /// Index of the selected menu item.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The effective menu for the current configuration and theme.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuItem> {
        effective_menu(self.settings.config(), self.registry.current())
    }

    /// Opens the dashboard surface.
    ///
    /// Failures are reported through the host notification channel; the
    /// application keeps running either way.
    pub fn open_dashboard(&mut self) {
        let sources = build_sources(
            self.settings.config(),
            &self.recent,
            &self.sessions,
            &self.projects,
        );
        let inputs = RenderInputs {
            config: self.settings.config(),
            keymaps: &self.keymaps,
            sources: &sources,
            selected: Some(self.selected),
        };
        if let Err(e) = self
            .dashboard
            .create(&mut self.host, self.registry.current(), &inputs)
        {
            self.host
                .notify(Notice::Error, &format!("failed to open dashboard: {e}"));
        }
    }

    /// Closes the dashboard surface.
    pub fn close_dashboard(&mut self) {
        self.animation = None;
        if let Err(e) = self.dashboard.destroy(&mut self.host) {
            self.host
                .notify(Notice::Error, &format!("failed to close dashboard: {e}"));
        }
    }

    /// Re-runs the render pass with fresh content.
    fn redraw_dashboard(&mut self) {
        let sources = build_sources(
            self.settings.config(),
            &self.recent,
            &self.sessions,
            &self.projects,
        );
        let inputs = RenderInputs {
            config: self.settings.config(),
            keymaps: &self.keymaps,
            sources: &sources,
            selected: Some(self.selected),
        };
        if let Err(e) = self
            .dashboard
            .redraw(&mut self.host, self.registry.current(), &inputs)
        {
            // Prior rendered state stays visible
            self.host
                .notify(Notice::Warning, &format!("refresh skipped: {e}"));
        }
    }

    /// Recomputes geometry after a viewport change.
    fn resize_dashboard(&mut self) {
        let sources = build_sources(
            self.settings.config(),
            &self.recent,
            &self.sessions,
            &self.projects,
        );
        let inputs = RenderInputs {
            config: self.settings.config(),
            keymaps: &self.keymaps,
            sources: &sources,
            selected: Some(self.selected),
        };
        match self
            .dashboard
            .resize(&mut self.host, self.registry.current(), &inputs)
        {
            Ok(Some(animation)) => self.animation = Some(animation),
            Ok(None) => {}
            Err(e) => self
                .host
                .notify(Notice::Error, &format!("resize failed: {e}")),
        }
    }

    /// Advances a pending resize animation by one step.
    ///
    /// Called once per event-loop round; each step yields back to the loop,
    /// so the transition never blocks input handling.
    pub fn advance_animation(&mut self) {
        let Some(mut animation) = self.animation.take() else {
            return;
        };

        let sources = build_sources(
            self.settings.config(),
            &self.recent,
            &self.sessions,
            &self.projects,
        );
        let inputs = RenderInputs {
            config: self.settings.config(),
            keymaps: &self.keymaps,
            sources: &sources,
            selected: Some(self.selected),
        };
        match self.dashboard.animation_step(
            &mut self.host,
            &mut animation,
            self.registry.current(),
            &inputs,
        ) {
            Ok(StepOutcome::Applied) => self.animation = Some(animation),
            Ok(StepOutcome::Finished | StepOutcome::Cancelled) => {}
            Err(e) => self
                .host
                .notify(Notice::Error, &format!("resize step failed: {e}")),
        }
    }

    /// Whether a resize animation is pending.
    #[must_use]
    pub fn has_pending_animation(&self) -> bool {
        self.animation.is_some()
    }

    /// Applies a callback or command reaction.
    fn apply_reaction(&mut self, reaction: AppReaction) {
        if let Some(command) = &reaction.command {
            self.host.execute(command);
            self.host
                .notify(Notice::Info, &format!("executed: {command}"));
        }
        if reaction.refresh {
            self.redraw_dashboard();
        }
        if reaction.quit {
            self.close_dashboard();
            self.should_quit = true;
        }
    }

    /// Maps a click to the menu row under it, if any.
    ///
    /// Rebuilds the composed content for the current state and looks the
    /// clicked row up in it, the same way the render pass placed it.
    fn menu_index_at(&self, column: u16, row: u16) -> Option<usize> {
        let state = self.dashboard.open_state()?;
        if row < state.dims.row
            || row >= state.dims.row + state.dims.height
            || column < state.dims.col
            || column >= state.dims.col + state.dims.width
        {
            return None;
        }

        let sections: Vec<Section> = build_sources(
            self.settings.config(),
            &self.recent,
            &self.sessions,
            &self.projects,
        )
        .iter()
        .map(|s| {
            Ok(Section {
                title: s.source.title().to_string(),
                data: s.source.section(s.limit)?,
            })
        })
        .collect::<portico_data::Result<_>>()
        .ok()?;

        let ctx = RenderContext {
            dims: state.dims,
            config: self.settings.config(),
            keymaps: &self.keymaps,
            sections: &sections,
            selected: Some(self.selected),
        };
        let block = self.registry.current().content(&ctx).ok()?;
        let composed = compose(&block, state.dims);

        let content_row = usize::from(row - state.dims.row);
        let origin = composed.origins.get(content_row).copied().flatten()?;
        if origin.region != Region::Center {
            return None;
        }
        // Menu rows are the leading center rows in every shipped theme
        let menu_len = self.menu().len();
        (origin.index < menu_len).then_some(origin.index)
    }

    /// Updates the application state based on a message.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Quit => {
                self.close_dashboard();
                self.should_quit = true;
            }
            Message::Escape => {
                // Contextual escape: close the dashboard first, then quit
                if self.dashboard.is_open() {
                    self.close_dashboard();
                } else {
                    self.should_quit = true;
                }
            }
            Message::NavigateUp => {
                let len = self.menu().len();
                if len > 0 {
                    self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
                    self.redraw_dashboard();
                }
            }
            Message::NavigateDown => {
                let len = self.menu().len();
                if len > 0 {
                    self.selected = (self.selected + 1) % len;
                    self.redraw_dashboard();
                }
            }
            Message::Select => {
                if let Some(item) = self.menu().get(self.selected) {
                    debug!(description = %item.description, "menu item selected");
                    self.apply_reaction(item.action.react());
                }
            }
            Message::Refresh => {
                self.redraw_dashboard();
            }
            Message::CycleTheme => {
                let name = self.registry.cycle();
                let len = self.menu().len();
                self.selected = self.selected.min(len.saturating_sub(1));
                self.host.notify(Notice::Info, &format!("theme: {name}"));
                self.redraw_dashboard();
            }
            Message::Resized { width, height } => {
                self.host.set_viewport(Viewport::new(width, height));
                self.resize_dashboard();
            }
            Message::ClickAt { column, row } => {
                if let Some(index) = self.menu_index_at(column, row) {
                    self.selected = index;
                    if let Some(item) = self.menu().get(index) {
                        self.apply_reaction(item.action.react());
                    }
                }
            }
        }
    }

    /// Renders the application UI to the given frame.
    pub fn view(&self, frame: &mut ratatui::Frame) {
        render_host(&self.host, frame);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, renders the UI, and advances any
    /// pending resize animation one step per round.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        let size = terminal.size()?;
        self.host.set_viewport(Viewport::new(size.width, size.height));
        self.open_dashboard();

        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Poll for events (keyboard, mouse, and resize)
            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event)
            {
                self.update(msg);
            }

            // One deferred step per round; control yields between steps
            self.advance_animation();

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
