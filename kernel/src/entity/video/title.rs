use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct VideoTitle(String);

impl VideoTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets the availability map be queried with a plain `&str`.
impl Borrow<str> for VideoTitle {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for VideoTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
