//! Warning text shown next to suspicious links.

use crate::config::WARNING_PREFIX;
use crate::security::Reason;

/// Renders the tooltip for a suspicious link.
///
/// ```
/// use safelink::app::warning_tooltip;
/// use safelink::security::Reason;
///
/// assert_eq!(
///     warning_tooltip(Reason::Imposter),
///     "SafeLink Warning: This link is suspicious.\nReason: Imposter"
/// );
/// ```
pub fn warning_tooltip(reason: Reason) -> String {
    format!("{WARNING_PREFIX}: This link is suspicious.\nReason: {reason}")
}
