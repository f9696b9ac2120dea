//! Logging helpers pairing console output with structured tracing events
//!
//! Console lines are for the person running the deployment; the tracing
//! events carry the same facts as fields for `RUST_LOG` driven debugging.

use crate::cli::output::Display;
use tracing::{error, info, warn};

/// Operation completed, shown to the user and recorded
///
/// # Arguments
/// * `operation` - Name of the operation that completed
/// * `details` - Message shown to the user and attached to the event
pub fn operation_success(operation: &str, details: &str) {
	Display::success(details);
	info!(
		operation = operation,
		details = details,
		"Operation completed successfully"
	);
}

/// Fatal operation failure, shown on stderr and recorded
///
/// # Arguments
/// * `operation` - Name of the operation that failed
/// * `error` - Error that caused the failure, printed with its context chain
pub fn operation_error(operation: &str, error: &anyhow::Error) {
	Display::error(&format!("{} failed: {:#}", operation, error));
	error!(
		operation = operation,
		error = %format!("{:#}", error),
		"Operation failed"
	);
}

/// Non-fatal problem, shown as a warning and recorded
///
/// # Arguments
/// * `operation` - Name of the operation raising the warning
/// * `message` - Warning shown to the user
/// * `context` - Extra detail for the log only
pub fn operation_warning(operation: &str, message: &str, context: &str) {
	Display::warning(message);
	warn!(
		operation = operation,
		message = message,
		context = context,
		"Operation warning"
	);
}

/// Step of a running operation; logged only, keeps the console clean
pub fn operation_progress(operation: &str, step: &str) {
	info!(operation = operation, step = step, "Operation step");
}

/// Operation started
pub fn operation_start(operation: &str, context: &str) {
	info!(
		operation = operation,
		context = context,
		"Operation started"
	);
}

/// Operation finished with its duration
pub fn operation_complete(operation: &str, duration_ms: u64) {
	info!(
		operation = operation,
		duration_ms = duration_ms,
		"Operation completed"
	);
}
