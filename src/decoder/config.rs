use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_f32(name: &str, default: f32) -> f32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

static MAX_TRIANGLE_ERROR: OnceLock<f32> = OnceLock::new();

pub(crate) fn max_triangle_error() -> f32 {
    *MAX_TRIANGLE_ERROR
        .get_or_init(|| parse_env_f32("BARCODE_MAX_TRIANGLE_ERROR", 0.5).clamp(0.0, 2.0))
}

static ROW_STEP_SHIFT: OnceLock<usize> = OnceLock::new();

pub(crate) fn row_step_shift() -> usize {
    *ROW_STEP_SHIFT.get_or_init(|| parse_env_usize("BARCODE_ROW_STEP_SHIFT", 5).clamp(1, 8))
}

static MAX_ROWS: OnceLock<Option<usize>> = OnceLock::new();

/// Cap on rows tried by a multi-row scan; `None` tries every sampled row
pub(crate) fn max_rows() -> Option<usize> {
    *MAX_ROWS.get_or_init(|| match parse_env_usize("BARCODE_MAX_ROWS", 0) {
        0 => None,
        n => Some(n),
    })
}
