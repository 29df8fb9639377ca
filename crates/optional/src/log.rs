/// Records a null rejection and evaluates to the matching error.
macro_rules! reject {
    ($what:expr) => {{
        #[cfg(feature = "log")]
        {
            ::log::debug!("null {} rejected", $what);
        }
        $crate::error::OptionalError::NullRejected { what: $what }
    }};
}

/// Records an unwrap attempt on an absent optional and evaluates to the matching error.
macro_rules! absent {
    ($op:expr) => {{
        #[cfg(feature = "log")]
        {
            ::log::trace!("{} called on Optional.empty", $op);
        }
        $crate::error::OptionalError::NoSuchElement
    }};
}
