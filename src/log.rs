#![allow(unused, reason = "logger")]

// Each macro forwards to whichever logging backends are enabled. Format
// strings must stay within the subset both `defmt` and `log` accept.

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($tt)*);
        #[cfg(feature = "log")]
        ::log::trace!($($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($tt)*);
        #[cfg(feature = "log")]
        ::log::debug!($($tt)*);
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($tt)*);
        #[cfg(feature = "log")]
        ::log::warn!($($tt)*);
    };
}

pub(crate) use {debug, trace, warning};
