//! Configuration access port trait.

/// Typed key lookup over a sectioned configuration source. Missing keys fall
/// back to the supplied default except for strings, where absence is
/// meaningful to callers.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_usize(&self, section: &str, key: &str, default: usize) -> usize;
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;
}
