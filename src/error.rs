use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Triple clicks are only reachable through a double click.
    TripleClickWithoutDoubleClick,
    /// A click window or threshold too long for wrapping millisecond ticks.
    DurationTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TripleClickWithoutDoubleClick => {
                f.write_str("double click must be enabled to use triple click")
            }
            ConfigError::DurationTooLong => {
                f.write_str("click window or threshold must be under 2^31 ms")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitError {
    /// Nothing to wait for: an empty gesture set or an empty selection.
    EmptySelection,
    /// A selection named an input the composite was not built with.
    UnknownInput,
    /// A selection named the same input twice.
    DuplicateInput,
}

impl fmt::Display for WaitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitError::EmptySelection => f.write_str("no gesture kinds selected"),
            WaitError::UnknownInput => f.write_str("selection names an unknown input"),
            WaitError::DuplicateInput => f.write_str("selection names an input twice"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiButtonError {
    NoInputs,
    DuplicateName,
}

impl fmt::Display for MultiButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultiButtonError::NoInputs => f.write_str("multi button needs at least one input"),
            MultiButtonError::DuplicateName => f.write_str("input names must be unique"),
        }
    }
}
