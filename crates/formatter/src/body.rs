//! Space separated `key=value` builder

use std::fmt::{Display, Write};

use contracts::Location;

use crate::java_double;

pub(crate) struct Body(String);

impl Body {
    pub(crate) fn action(action: &str) -> Self {
        Self(format!("action={action}"))
    }

    pub(crate) fn field(&mut self, key: &str, value: impl Display) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = write!(self.0, " {key}={value}");
        self
    }

    /// Free text in double quotes; embedded quotes are left as is.
    pub(crate) fn quoted(&mut self, key: &str, value: &str) -> &mut Self {
        let _ = write!(self.0, " {key}=\"{value}\"");
        self
    }

    /// `world= x= y= z= game_time=`
    pub(crate) fn location(&mut self, location: &Location) -> &mut Self {
        self.field("world", &location.world)
            .field("x", java_double(location.x))
            .field("y", java_double(location.y))
            .field("z", java_double(location.z))
            .field("game_time", location.game_time)
    }

    pub(crate) fn finish(self) -> String {
        self.0
    }
}
