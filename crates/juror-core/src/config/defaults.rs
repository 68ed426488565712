// Single source of truth for all default values.

// --- EM ---
pub const DEFAULT_SWITCH_THRESHOLD: f64 = 0.05;
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.000_01;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

// --- Discovery ---
pub const DEFAULT_DISCOVERY_CONVERGENCE_THRESHOLD: f64 = 0.000_01;
pub const DEFAULT_DISCOVERY_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_CATD_SIGNIFICANCE: f64 = 0.05;

// --- Quality ---
pub const DEFAULT_QUALITY_ALPHA: f64 = 1.0;

// --- Batch ---
pub const DEFAULT_WORKER_THREADS: usize = 0; // 0 = rayon picks
pub const DEFAULT_CACHE_CAPACITY: u64 = 64;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
