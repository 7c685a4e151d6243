pub struct LimitResult<T> {
    pub selected: Vec<T>,
    pub excluded_by_limit: usize,
}

/// Keep the first `max` candidates in their given order. `None` keeps all.
pub fn apply_limit<T>(candidates: Vec<T>, max: Option<usize>) -> LimitResult<T> {
    let mut selected = candidates;
    let mut excluded_by_limit = 0;

    if let Some(max) = max {
        if selected.len() > max {
            excluded_by_limit = selected.len() - max;
            selected.truncate(max);
        }
    }

    LimitResult {
        selected,
        excluded_by_limit,
    }
}
