use crate::warning::{MAP_ENTRIES_WARNING, OnceWarning};

/// Configuration knobs for a children traversal.
#[derive(Clone, Copy, Debug)]
pub struct TraverseOptions<'w> {
    /// Guard that limits the map entries warning to a single emission.
    pub map_warning: &'w OnceWarning,
    /// Whether iterating map entries should log a warning at all.
    pub warn_on_map_entries: bool,
}

impl Default for TraverseOptions<'static> {
    fn default() -> Self {
        Self {
            map_warning: &MAP_ENTRIES_WARNING,
            warn_on_map_entries: true,
        }
    }
}
