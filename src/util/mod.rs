use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod config;
pub mod number;
pub mod telemetry;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

#[cfg(test)]
mod tests {
    use super::generate_id;

    #[test]
    fn ids_are_unique() {
        let first = generate_id("item");
        let second = generate_id("item");
        assert_ne!(first, second);
        assert!(first.starts_with("item-"));
    }
}
