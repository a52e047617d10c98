// self
use crate::_prelude::*;

/// A span wrapped around each registry validation.
#[derive(Clone, Debug)]
pub struct ValidationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ValidationSpan {
	/// Creates a new span tagged with the endpoint name.
	pub fn new(endpoint: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("api_registry.validate", endpoint);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = endpoint;

			Self {}
		}
	}

	/// Enters the span until the returned guard drops.
	pub fn entered(self) -> ValidationSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ValidationSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ValidationSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ValidationSpan::entered`].
pub struct ValidationSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ValidationSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ValidationSpanGuard(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn validation_span_enters_with_or_without_tracing() {
		let _guard = ValidationSpan::new("statuses/update").entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}
}
