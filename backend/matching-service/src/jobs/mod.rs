// ============================================
// Background Jobs Module
// ============================================
//
// Contains background job runners for:
// 1. Completeness refresh (recompute the cached completeness on profiles)
//
// Run once at startup by the service binary, or on a schedule by whatever
// owns the store.

pub mod completeness_refresh;

pub use completeness_refresh::{CompletenessRefreshJob, RefreshStats};
