use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct IsRewound(bool);

impl IsRewound {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

impl Default for IsRewound {
    fn default() -> Self {
        Self(true)
    }
}
