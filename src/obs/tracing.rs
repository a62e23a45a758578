// self
use crate::{_prelude::*, obs::SourceKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedResolve<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedResolve<F> = F;

/// A span builder used by resolution attempts.
#[derive(Clone, Debug)]
pub struct ResolveSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResolveSpan {
	/// Creates a new span tagged with the provided source kind + stage.
	pub fn new(kind: SourceKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("oauth2_resolver.resolve", source = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedResolve<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits the non-fatal notice naming the source that satisfied a resolution.
///
/// Suppressed entirely when the resolver runs in quiet mode, keeping test output
/// deterministic.
pub fn notice_source_selected(kind: SourceKind, name: &'static str) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(source = kind.as_str(), "Resolved OAuth client credentials via `{name}`.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, name);
	}
}
