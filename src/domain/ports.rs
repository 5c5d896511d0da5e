use crate::domain::model::Venue;

/// Read-only access to the venues of a city.
pub trait VenueLookup: Send + Sync {
    /// Venues of `city` in catalog order, or `None` for an unknown city.
    /// The match on `city` is exact and case-sensitive.
    fn venues(&self, city: &str) -> Option<&[Venue]>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;
}
