/// Command counts at or above this value enable frizbee's prefilter.
pub const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Maximum number of ranked results handed back to the palette.
pub const MAX_RANKED_RESULTS: usize = 2_000;
