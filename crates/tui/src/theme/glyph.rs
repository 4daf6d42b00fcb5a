//! The default content provider: block-glyph header art with a gradient,
//! icon menu, and list sections.

use portico_model::{
    ContentBlock, MenuItem, StyleName, StyleSpan,
};
use unicode_width::UnicodeWidthStr;

use super::compose::{Composed, Region};
use super::{ContentProvider, ProviderError, RenderContext, Result, effective_menu};

/// Wide header variant, picked when the content area fits it comfortably.
const WIDE_ART: &[&str] = &[
    "██████╗  ██████╗ ██████╗ ████████╗██╗ ██████╗ ██████╗ ",
    "██╔══██╗██╔═══██╗██╔══██╗╚══██╔══╝██║██╔════╝██╔═══██╗",
    "██████╔╝██║   ██║██████╔╝   ██║   ██║██║     ██║   ██║",
    "██╔═══╝ ██║   ██║██╔══██╗   ██║   ██║██║     ██║   ██║",
    "██║     ╚██████╔╝██║  ██║   ██║   ██║╚██████╗╚██████╔╝",
    "╚═╝      ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝ ╚═════╝ ╚═════╝ ",
];

/// Narrow header variant for tight content areas.
const NARROW_ART: &[&str] = &[
    "┌─┐┌─┐┬─┐┌┬┐┬┌─┐┌─┐",
    "├─┘│ │├┬┘ │ ││  │ │",
    "┴  └─┘┴└─ ┴ ┴└─┘└─┘",
];

/// Extra columns of slack the wide art needs before it is chosen.
const ART_MARGIN: u16 = 4;

/// Widest a menu row is allowed to grow.
const MENU_MAX_WIDTH: u16 = 50;

/// Narrowest menu row we bother aligning key labels within.
const MENU_MIN_WIDTH: u16 = 24;

/// Semantic tag of one center row, with local display-column geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    /// A section title line.
    Title,
    /// A menu row.
    Menu {
        /// Index into the effective menu.
        index: usize,
        /// Display width of the icon, zero when absent.
        icon_width: u16,
        /// Start column of the description.
        desc_start: u16,
        /// End column of the description.
        desc_end: u16,
        /// Start column of the key label.
        key_start: u16,
        /// End column of the key label.
        key_end: u16,
    },
    /// A data-section entry row.
    Entry {
        /// End column of the label.
        label_end: u16,
        /// Start column of the detail, when present.
        detail_start: u16,
        /// End column of the detail.
        detail_end: u16,
    },
    /// A spacer row inside the center block.
    Blank,
}

/// The center block plus its per-row semantics.
#[derive(Debug, Clone)]
struct Built {
    block: ContentBlock,
    rows: Vec<RowKind>,
}

/// The default theme.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlyphTheme;

impl GlyphTheme {
    /// Creates the theme.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Builds the full content and row semantics for one pass.
    ///
    /// Both `content` and `highlights` go through here, so the spans always
    /// describe the lines that were actually produced.
    fn build(&self, ctx: &RenderContext<'_>) -> Result<Built> {
        if ctx.keymaps.is_empty() && ctx.config.sections.footer.text.is_none() {
            return Err(ProviderError::Unavailable {
                what: "keymap display provider",
            });
        }

        let header = pick_art(ctx.dims.width)
            .iter()
            .map(|s| (*s).to_string())
            .collect();

        let mut center = Vec::new();
        let mut rows = Vec::new();

        let menu = effective_menu(ctx.config, self);
        let menu_width = menu_row_width(ctx.dims.width);
        for (index, item) in menu.iter().enumerate() {
            let (line, kind) = menu_row(index, item, menu_width);
            center.push(line);
            rows.push(kind);
        }

        for section in ctx.sections {
            if section.data.items.is_empty() {
                continue;
            }
            center.push(String::new());
            rows.push(RowKind::Blank);

            center.push(section.title.clone());
            rows.push(RowKind::Title);

            for item in &section.data.items {
                let (line, kind) = entry_row(&item.label, item.detail.as_deref());
                center.push(line);
                rows.push(kind);
            }
        }

        let footer_text = match &ctx.config.sections.footer.text {
            Some(text) => text.clone(),
            None => footer_from_keymaps(ctx.keymaps),
        };

        Ok(Built {
            block: ContentBlock {
                header,
                center,
                footer: vec![footer_text],
            },
            rows,
        })
    }
}

impl ContentProvider for GlyphTheme {
    fn name(&self) -> &'static str {
        "glyph"
    }

    fn default_menu(&self, icons: bool) -> Vec<MenuItem> {
        fn quit(reaction: &mut portico_model::AppReaction) {
            reaction.quit = true;
        }

        let items = vec![
            MenuItem::command("", "New file", "n", "edit new"),
            MenuItem::command("", "Find file", "f", "picker files"),
            MenuItem::command("󰈭", "Live grep", "g", "picker grep"),
            MenuItem::command("", "Restore session", "s", "session restore"),
            MenuItem::command("", "Projects", "p", "picker projects"),
            MenuItem::command("", "Settings", "c", "config open"),
            MenuItem::callback("󰩈", "Quit", "q", quit),
        ];

        if icons {
            items
        } else {
            items.iter().map(MenuItem::without_icon).collect()
        }
    }

    fn content(&self, ctx: &RenderContext<'_>) -> Result<ContentBlock> {
        Ok(self.build(ctx)?.block)
    }

    fn highlights(
        &self,
        ctx: &RenderContext<'_>,
        _block: &ContentBlock,
        composed: &Composed,
    ) -> Vec<StyleSpan> {
        let Ok(built) = self.build(ctx) else {
            return Vec::new();
        };

        let mut spans = Vec::new();
        for (row, origin) in composed.origins.iter().enumerate() {
            let Some(origin) = origin else { continue };
            let offset = composed.offsets[row];
            let width = composed.line_width(row);

            match origin.region {
                Region::Header => {
                    spans.push(StyleSpan::new(
                        StyleName::gradient(origin.index),
                        row,
                        offset,
                        width,
                    ));
                }
                Region::Footer => {
                    spans.push(StyleSpan::new(StyleName::Footer, row, offset, width));
                }
                Region::Center => {
                    let Some(kind) = built.rows.get(origin.index) else {
                        continue;
                    };
                    match *kind {
                        RowKind::Blank => {}
                        RowKind::Title => {
                            spans.push(StyleSpan::new(StyleName::SectionTitle, row, offset, width));
                        }
                        RowKind::Menu {
                            index,
                            icon_width,
                            desc_start,
                            desc_end,
                            key_start,
                            key_end,
                        } => {
                            if icon_width > 0 {
                                spans.push(StyleSpan::new(
                                    StyleName::Icon,
                                    row,
                                    offset,
                                    offset + icon_width,
                                ));
                            }
                            spans.push(StyleSpan::new(
                                StyleName::Description,
                                row,
                                offset + desc_start,
                                offset + desc_end,
                            ));
                            spans.push(StyleSpan::new(
                                StyleName::KeyLabel,
                                row,
                                offset + key_start,
                                offset + key_end,
                            ));
                            if ctx.selected == Some(index) {
                                spans.push(StyleSpan::new(StyleName::Selected, row, offset, width));
                            }
                        }
                        RowKind::Entry {
                            label_end,
                            detail_start,
                            detail_end,
                        } => {
                            spans.push(StyleSpan::new(
                                StyleName::EntryLabel,
                                row,
                                offset,
                                offset + label_end,
                            ));
                            if detail_end > detail_start {
                                spans.push(StyleSpan::new(
                                    StyleName::EntryDetail,
                                    row,
                                    offset + detail_start,
                                    offset + detail_end,
                                ));
                            }
                        }
                    }
                }
            }
        }
        spans
    }
}

/// Chooses the header art variant for the available content width.
fn pick_art(width: u16) -> &'static [&'static str] {
    let wide_width = display_width(WIDE_ART[0]);
    if width >= wide_width + ART_MARGIN {
        WIDE_ART
    } else {
        NARROW_ART
    }
}

/// The menu row width for a content area.
fn menu_row_width(content_width: u16) -> u16 {
    content_width
        .saturating_sub(4)
        .clamp(MENU_MIN_WIDTH, MENU_MAX_WIDTH)
}

/// Formats one menu row and records its column geometry.
fn menu_row(index: usize, item: &MenuItem, row_width: u16) -> (String, RowKind) {
    let icon = item.icon.as_deref().unwrap_or("");
    let icon_width = display_width(icon);
    let icon_part_width = if icon_width > 0 { icon_width + 2 } else { 0 };

    let desc_width = display_width(&item.description);
    let key_width = display_width(&item.key);

    let desc_start = icon_part_width;
    let desc_end = desc_start + desc_width;

    // Right-align the key label, keeping at least two columns of gap
    let key_start = row_width.max(desc_end + 2 + key_width) - key_width;
    let gap = usize::from(key_start - desc_end);

    let mut line = String::new();
    if icon_width > 0 {
        line.push_str(icon);
        line.push_str("  ");
    }
    line.push_str(&item.description);
    line.push_str(&" ".repeat(gap));
    line.push_str(&item.key);

    (
        line,
        RowKind::Menu {
            index,
            icon_width,
            desc_start,
            desc_end,
            key_start,
            key_end: key_start + key_width,
        },
    )
}

/// Formats one data-section entry row.
fn entry_row(label: &str, detail: Option<&str>) -> (String, RowKind) {
    let label_end = display_width(label);
    match detail {
        Some(detail) if !detail.is_empty() => {
            let line = format!("{label}  {detail}");
            let detail_start = label_end + 2;
            (
                line,
                RowKind::Entry {
                    label_end,
                    detail_start,
                    detail_end: detail_start + display_width(detail),
                },
            )
        }
        _ => (
            label.to_string(),
            RowKind::Entry {
                label_end,
                detail_start: label_end,
                detail_end: label_end,
            },
        ),
    }
}

/// Builds the footer line from shortcut hints.
fn footer_from_keymaps(keymaps: &[crate::keymap::DisplayKeymap]) -> String {
    keymaps
        .iter()
        .map(|m| format!("{} {}", m.label, m.description))
        .collect::<Vec<_>>()
        .join("   ")
}

fn display_width(s: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(s)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::display_keymaps;
    use crate::theme::Section;
    use chrono::{TimeZone, Utc};
    use portico_config::Config;
    use portico_model::{Dimensions, DisplayKind, SectionData, SectionItem};

    fn sections() -> Vec<Section> {
        vec![Section {
            title: "Recent files".to_string(),
            data: SectionData {
                items: vec![SectionItem::new(
                    "main.rs",
                    Some("/src".to_string()),
                    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
                )],
                display: DisplayKind::List,
            },
        }]
    }

    fn ctx<'a>(
        config: &'a Config,
        keymaps: &'a [crate::keymap::DisplayKeymap],
        sections: &'a [Section],
        width: u16,
    ) -> RenderContext<'a> {
        RenderContext {
            dims: Dimensions::new(width, 30, 0, 0),
            config,
            keymaps,
            sections,
            selected: Some(0),
        }
    }

    #[test]
    fn wide_art_chosen_on_wide_content() {
        let config = Config::default();
        let keymaps = display_keymaps();
        let secs = sections();
        let theme = GlyphTheme::new();

        let block = theme.content(&ctx(&config, &keymaps, &secs, 80)).unwrap();
        assert_eq!(block.header.len(), WIDE_ART.len());
    }

    #[test]
    fn narrow_art_chosen_on_tight_content() {
        let config = Config::default();
        let keymaps = display_keymaps();
        let secs = sections();
        let theme = GlyphTheme::new();

        let block = theme.content(&ctx(&config, &keymaps, &secs, 40)).unwrap();
        assert_eq!(block.header.len(), NARROW_ART.len());
    }

    #[test]
    fn content_includes_menu_sections_and_footer() {
        let config = Config::default();
        let keymaps = display_keymaps();
        let secs = sections();
        let theme = GlyphTheme::new();

        let block = theme.content(&ctx(&config, &keymaps, &secs, 80)).unwrap();
        let center = block.center.join("\n");
        assert!(center.contains("Find file"));
        assert!(center.contains("Recent files"));
        assert!(center.contains("main.rs"));
        assert_eq!(block.footer.len(), 1);
        assert!(block.footer[0].contains("quit"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let config = Config::default();
        let keymaps = display_keymaps();
        let secs = vec![Section {
            title: "Sessions".to_string(),
            data: SectionData::default(),
        }];
        let theme = GlyphTheme::new();

        let block = theme.content(&ctx(&config, &keymaps, &secs, 80)).unwrap();
        assert!(!block.center.join("\n").contains("Sessions"));
    }

    #[test]
    fn missing_keymaps_without_footer_override_fails() {
        let config = Config::default();
        let secs = sections();
        let theme = GlyphTheme::new();

        let err = theme.content(&ctx(&config, &[], &secs, 80)).unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable { .. }));
    }

    #[test]
    fn footer_override_lifts_keymap_requirement() {
        let mut config = Config::default();
        config.sections.footer.text = Some("custom footer".to_string());
        let secs = sections();
        let theme = GlyphTheme::new();

        let block = theme.content(&ctx(&config, &[], &secs, 80)).unwrap();
        assert_eq!(block.footer[0], "custom footer");
    }

    #[test]
    fn content_is_idempotent() {
        let config = Config::default();
        let keymaps = display_keymaps();
        let secs = sections();
        let theme = GlyphTheme::new();
        let c = ctx(&config, &keymaps, &secs, 80);

        assert_eq!(theme.content(&c).unwrap(), theme.content(&c).unwrap());
    }

    #[test]
    fn highlights_cover_gradient_menu_and_selection() {
        use crate::theme::compose::compose;

        let config = Config::default();
        let keymaps = display_keymaps();
        let secs = sections();
        let theme = GlyphTheme::new();
        let c = ctx(&config, &keymaps, &secs, 80);

        let block = theme.content(&c).unwrap();
        let composed = compose(&block, c.dims);
        let spans = theme.highlights(&c, &block, &composed);

        // Every header line carries its gradient slot
        let gradient_count = spans
            .iter()
            .filter(|s| matches!(s.style, StyleName::HeaderGradient(_)))
            .count();
        assert_eq!(gradient_count, block.header.len());

        // The selected menu row carries a selection span
        assert!(spans.iter().any(|s| s.style == StyleName::Selected));
        // Key labels are painted
        assert!(spans.iter().any(|s| s.style == StyleName::KeyLabel));
        // All spans index composed lines
        assert!(spans.iter().all(|s| s.line < composed.lines.len()));
    }

    #[test]
    fn menu_row_right_aligns_key() {
        let item = MenuItem::command("", "Find file", "f", "picker files");
        let (line, kind) = menu_row(0, &item, 30);
        assert_eq!(display_width(&line), 30);
        let RowKind::Menu {
            key_start, key_end, ..
        } = kind
        else {
            panic!("expected menu row");
        };
        assert_eq!(key_end, 30);
        assert_eq!(key_end - key_start, 1);
    }

    #[test]
    fn menu_row_without_icon_starts_at_description() {
        let item = MenuItem::command("x", "Quit", "q", "quit").without_icon();
        let (_, kind) = menu_row(0, &item, 30);
        let RowKind::Menu {
            icon_width,
            desc_start,
            ..
        } = kind
        else {
            panic!("expected menu row");
        };
        assert_eq!(icon_width, 0);
        assert_eq!(desc_start, 0);
    }
}
