#[cfg(not(feature = "logging"))]
mod log {
    macro_rules! trace { ($($t:tt)*) => {}}
    macro_rules! debug { ($($t:tt)*) => {}}

    pub(crate) use {debug, trace};
}

#[cfg(feature = "logging")]
mod log {
    pub(crate) use tracing::{debug, trace};
}

pub(crate) use log::{debug, trace};
