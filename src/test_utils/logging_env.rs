use tracing_forest::Processor;
use tracing_forest::processor::Result as ProcessorResult;
use tracing_forest::tree::Tree;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Overrides the default test log filter, e.g. `alpaca_device::client=trace`.
const LOG_ENV_VAR: &str = "ALPACA_DEVICE_TEST_LOG";

fn has_events(tree: &Tree) -> bool {
    match tree {
        Tree::Span(span) => span.nodes().iter().any(has_events),
        Tree::Event(_) => true,
    }
}

// Requests that logged nothing would only add empty "Alpaca transaction" spans.
struct SkipSilentSpans<P>(P);

impl<P: Processor> Processor for SkipSilentSpans<P> {
    fn process(&self, tree: Tree) -> ProcessorResult {
        if has_events(&tree) {
            self.0.process(tree)
        } else {
            Ok(())
        }
    }
}

fn module_icon(module: &str) -> Option<char> {
    Some(match module.split("::").collect::<Vec<_>>().as_slice() {
        ["client", "transaction", ..] => '🔁',
        ["client", "response", ..] => '📥',
        ["client", ..] => '📡',
        [.., "test" | "tests"] => '🧪',
        _ => return None,
    })
}

fn module_tag(event: &tracing::Event<'_>) -> Option<tracing_forest::Tag> {
    let metadata = event.metadata();
    let module = metadata.target().strip_prefix("alpaca_device::")?;

    let builder = tracing_forest::Tag::builder()
        .prefix(module)
        .level(*metadata.level());

    Some(match module_icon(module) {
        Some(icon) => builder.icon(icon).build(),
        None => builder.build(),
    })
}

#[ctor::ctor]
fn prepare_test_env() {
    unsafe {
        std::env::set_var("RUST_BACKTRACE", "full");
    }

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("warn,alpaca_device=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_forest::ForestLayer::new(
            SkipSilentSpans(tracing_forest::printer::TestCapturePrinter::new()),
            module_tag,
        ))
        .with(tracing_error::ErrorLayer::default())
        .init();

    color_eyre::config::HookBuilder::default()
        .add_frame_filter(Box::new(|frames| {
            // Backtraces through reqwest and wiremock internals are noise here.
            frames.retain(|frame| {
                frame
                    .filename
                    .as_ref()
                    .is_some_and(|filename| filename.starts_with(env!("CARGO_MANIFEST_DIR")))
            });
        }))
        .install()
        .expect("Failed to install color_eyre");
}
