use time::{Date, OffsetDateTime};

/// Source of the current instant. Everything that depends on "today" asks one of these.
pub trait Clock: 'static + Sync + Send {
    fn now(&self) -> OffsetDateTime;

    fn today(&self) -> Date {
        self.now().date()
    }
}

pub trait DependOnClock: 'static + Sync + Send {
    type Clock: Clock;
    fn clock(&self) -> &Self::Clock;
}
