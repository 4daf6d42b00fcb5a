//! The render orchestrator.
//!
//! One [`render_pass`] is: gather data sections → fetch content → compose →
//! compute highlight spans → write lines → paint. Everything fallible runs
//! before the first buffer mutation, so a failing pass leaves the prior
//! rendered state fully intact.

use portico_config::Config;
use portico_data::DataSource;
use portico_model::Dimensions;

use crate::highlight::paint;
use crate::host::{BufferId, Host, HostError};
use crate::keymap::DisplayKeymap;
use crate::theme::compose::compose;
use crate::theme::{ContentProvider, ProviderError, RenderContext, Section};

/// One data source plus the entry limit to query it with.
pub struct SectionSource<'a> {
    /// The data source.
    pub source: &'a dyn DataSource,
    /// Maximum entries to request.
    pub limit: usize,
}

/// Everything a render pass reads.
pub struct RenderInputs<'a> {
    /// The active configuration.
    pub config: &'a Config,
    /// Shortcut hints for footer rendering.
    pub keymaps: &'a [DisplayKeymap],
    /// Data sources in display order.
    pub sources: &'a [SectionSource<'a>],
    /// Index of the selected menu item, if any.
    pub selected: Option<usize>,
}

/// Errors that abort a render pass.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The content provider reported a missing collaborator.
    #[error("content provider failed: {0}")]
    Provider(#[from] ProviderError),

    /// A data source could not be read.
    #[error("data source failed: {0}")]
    Data(#[from] portico_data::Error),

    /// A host operation failed.
    #[error("host operation failed: {0}")]
    Host(#[from] HostError),
}

/// A specialized Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Runs one full render pass into `buffer` at `dims`.
///
/// On any failure the remaining steps are skipped; the buffer keeps its
/// prior lines and spans.
///
/// # Errors
///
/// Returns the first failure from a data source, the content provider, or
/// the host.
pub fn render_pass(
    host: &mut dyn Host,
    buffer: BufferId,
    dims: Dimensions,
    provider: &dyn ContentProvider,
    inputs: &RenderInputs<'_>,
) -> Result<()> {
    let sections = inputs
        .sources
        .iter()
        .map(|s| {
            Ok(Section {
                title: s.source.title().to_string(),
                data: s.source.section(s.limit)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let ctx = RenderContext {
        dims,
        config: inputs.config,
        keymaps: inputs.keymaps,
        sections: &sections,
        selected: inputs.selected,
    };

    // Everything that can fail happens before the first buffer mutation
    let block = provider.content(&ctx)?;
    let composed = compose(&block, dims);
    let spans = provider.highlights(&ctx, &block, &composed);

    host.set_lines(buffer, composed.lines)?;
    paint(host, buffer, &spans);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::keymap::display_keymaps;
    use crate::theme::ProviderRegistry;
    use portico_model::Viewport;

    struct BrokenSource;

    impl DataSource for BrokenSource {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn title(&self) -> &'static str {
            "Broken"
        }

        fn section(&self, _limit: usize) -> portico_data::Result<portico_model::SectionData> {
            Err(portico_data::Error::NoDataDirectory)
        }
    }

    fn setup() -> (MemoryHost, BufferId) {
        let mut host = MemoryHost::new(Viewport::new(100, 40));
        let buffer = host.create_buffer().unwrap();
        (host, buffer)
    }

    #[test]
    fn pass_writes_lines_and_spans() {
        let (mut host, buffer) = setup();
        let registry = ProviderRegistry::with_defaults();
        let config = Config::default();
        let keymaps = display_keymaps();
        let inputs = RenderInputs {
            config: &config,
            keymaps: &keymaps,
            sources: &[],
            selected: Some(0),
        };
        let dims = Dimensions::new(80, 30, 5, 10);

        render_pass(&mut host, buffer, dims, registry.current(), &inputs).unwrap();

        assert_eq!(host.lines(buffer).unwrap().len(), 30);
        assert!(!host.spans(buffer).is_empty());
    }

    #[test]
    fn two_passes_are_byte_identical() {
        let (mut host, buffer) = setup();
        let registry = ProviderRegistry::with_defaults();
        let config = Config::default();
        let keymaps = display_keymaps();
        let inputs = RenderInputs {
            config: &config,
            keymaps: &keymaps,
            sources: &[],
            selected: Some(2),
        };
        let dims = Dimensions::new(80, 30, 0, 0);

        render_pass(&mut host, buffer, dims, registry.current(), &inputs).unwrap();
        let first_lines = host.lines(buffer).unwrap().to_vec();
        let first_spans = host.spans(buffer).to_vec();

        render_pass(&mut host, buffer, dims, registry.current(), &inputs).unwrap();
        assert_eq!(host.lines(buffer).unwrap(), first_lines.as_slice());
        assert_eq!(host.spans(buffer), first_spans.as_slice());
    }

    #[test]
    fn failing_source_leaves_prior_content_intact() {
        let (mut host, buffer) = setup();
        let registry = ProviderRegistry::with_defaults();
        let config = Config::default();
        let keymaps = display_keymaps();
        let dims = Dimensions::new(80, 30, 0, 0);

        // First pass succeeds with no sources
        let good = RenderInputs {
            config: &config,
            keymaps: &keymaps,
            sources: &[],
            selected: None,
        };
        render_pass(&mut host, buffer, dims, registry.current(), &good).unwrap();
        let lines_before = host.lines(buffer).unwrap().to_vec();
        let spans_before = host.spans(buffer).to_vec();

        // Second pass fails while gathering sections
        let broken = BrokenSource;
        let sources = [SectionSource {
            source: &broken,
            limit: 5,
        }];
        let bad = RenderInputs {
            config: &config,
            keymaps: &keymaps,
            sources: &sources,
            selected: None,
        };
        let err = render_pass(&mut host, buffer, dims, registry.current(), &bad).unwrap_err();
        assert!(matches!(err, RenderError::Data(_)));

        assert_eq!(host.lines(buffer).unwrap(), lines_before.as_slice());
        assert_eq!(host.spans(buffer), spans_before.as_slice());
    }

    #[test]
    fn failing_provider_leaves_prior_content_intact() {
        let (mut host, buffer) = setup();
        let registry = ProviderRegistry::with_defaults();
        let config = Config::default();
        let keymaps = display_keymaps();
        let dims = Dimensions::new(80, 30, 0, 0);

        let good = RenderInputs {
            config: &config,
            keymaps: &keymaps,
            sources: &[],
            selected: None,
        };
        render_pass(&mut host, buffer, dims, registry.current(), &good).unwrap();
        let lines_before = host.lines(buffer).unwrap().to_vec();

        // Empty keymaps with no footer override makes the glyph provider fail
        let bad = RenderInputs {
            config: &config,
            keymaps: &[],
            sources: &[],
            selected: None,
        };
        let err = render_pass(&mut host, buffer, dims, registry.current(), &bad).unwrap_err();
        assert!(matches!(err, RenderError::Provider(_)));

        assert_eq!(host.lines(buffer).unwrap(), lines_before.as_slice());
    }
}
