//! Text-only content provider.
//!
//! No art, no gradient, no icons. This is both the minimal theme and the
//! degraded alternative when glyph coverage is unavailable.

use portico_model::{ContentBlock, MenuItem, StyleName, StyleSpan};

use super::compose::{Composed, Region};
use super::{ContentProvider, RenderContext, Result, effective_menu};

/// The plain theme.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTheme;

impl PlainTheme {
    /// Creates the theme.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Center rows: menu first, then non-empty sections.
    ///
    /// Returns the lines and, for menu rows, their menu index.
    fn center_rows(&self, ctx: &RenderContext<'_>) -> (Vec<String>, Vec<Option<usize>>) {
        let mut lines = Vec::new();
        let mut menu_indices = Vec::new();

        for (index, item) in effective_menu(ctx.config, self).iter().enumerate() {
            lines.push(format!("[{}] {}", item.key, item.description));
            menu_indices.push(Some(index));
        }

        for section in ctx.sections {
            if section.data.items.is_empty() {
                continue;
            }
            lines.push(String::new());
            menu_indices.push(None);
            lines.push(format!("{}:", section.title));
            menu_indices.push(None);
            for item in &section.data.items {
                let line = match &item.detail {
                    Some(detail) => format!("{} ({detail})", item.label),
                    None => item.label.clone(),
                };
                lines.push(line);
                menu_indices.push(None);
            }
        }

        (lines, menu_indices)
    }
}

impl ContentProvider for PlainTheme {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn default_menu(&self, _icons: bool) -> Vec<MenuItem> {
        fn quit(reaction: &mut portico_model::AppReaction) {
            reaction.quit = true;
        }

        // Text-only: this provider never renders icons
        vec![
            MenuItem {
                icon: None,
                description: "New file".to_string(),
                key: "n".to_string(),
                action: portico_model::Action::Command("edit new".to_string()),
            },
            MenuItem {
                icon: None,
                description: "Find file".to_string(),
                key: "f".to_string(),
                action: portico_model::Action::Command("picker files".to_string()),
            },
            MenuItem {
                icon: None,
                description: "Restore session".to_string(),
                key: "s".to_string(),
                action: portico_model::Action::Command("session restore".to_string()),
            },
            MenuItem {
                icon: None,
                description: "Quit".to_string(),
                key: "q".to_string(),
                action: portico_model::Action::Callback(quit),
            },
        ]
    }

    fn content(&self, ctx: &RenderContext<'_>) -> Result<ContentBlock> {
        let (center, _) = self.center_rows(ctx);

        let footer = match &ctx.config.sections.footer.text {
            Some(text) => text.clone(),
            None => ctx
                .keymaps
                .iter()
                .map(|m| format!("{} {}", m.label, m.description))
                .collect::<Vec<_>>()
                .join("  "),
        };

        Ok(ContentBlock {
            header: vec!["portico".to_string(), "start screen".to_string()],
            center,
            footer: vec![footer],
        })
    }

    fn highlights(
        &self,
        ctx: &RenderContext<'_>,
        _block: &ContentBlock,
        composed: &Composed,
    ) -> Vec<StyleSpan> {
        // Text-only theme: the selection bar is the one visual cue
        let Some(selected) = ctx.selected else {
            return Vec::new();
        };
        let (_, menu_indices) = self.center_rows(ctx);

        let mut spans = Vec::new();
        for (row, origin) in composed.origins.iter().enumerate() {
            if let Some(origin) = origin
                && origin.region == Region::Center
                && menu_indices.get(origin.index) == Some(&Some(selected))
            {
                spans.push(StyleSpan::new(
                    StyleName::Selected,
                    row,
                    composed.offsets[row],
                    composed.line_width(row),
                ));
            }
        }
        spans
    }
}
