//! Interactive terminal detection for output sinks.
//!
//! Only sinks backed by an OS file descriptor can ever be a terminal; for those
//! the descriptor is queried through [`IsTerminal`]. In-memory sinks report
//! `false`.

use std::fs::File;
use std::io::{self, BufWriter, Cursor, IsTerminal, LineWriter, Write};

/// A destination the formatters can write to.
pub trait Sink: Write {
    /// Whether the sink is attached to an interactive terminal.
    fn is_terminal(&self) -> bool {
        false
    }
}

impl Sink for Vec<u8> {}

impl<T> Sink for Cursor<T> where Cursor<T>: Write {}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

impl<S: Sink> Sink for BufWriter<S> {
    fn is_terminal(&self) -> bool {
        self.get_ref().is_terminal()
    }
}

impl<S: Sink> Sink for LineWriter<S> {
    fn is_terminal(&self) -> bool {
        self.get_ref().is_terminal()
    }
}

macro_rules! fd_sink {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sink for $ty {
                fn is_terminal(&self) -> bool {
                    IsTerminal::is_terminal(self)
                }
            }
        )*
    };
}

fd_sink!(
    io::Stdout,
    io::StdoutLock<'_>,
    io::Stderr,
    io::StderrLock<'_>,
    File,
);

/// Default terminal predicate handed to the renderers.
pub fn is_interactive<S: Sink + ?Sized>(sink: &S) -> bool {
    sink.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sinks_are_never_interactive() {
        assert!(!is_interactive(&Vec::<u8>::new()));
        assert!(!is_interactive(&Cursor::new(Vec::<u8>::new())));
    }

    #[test]
    fn regular_file_is_not_interactive() {
        let file = tempfile::tempfile().unwrap();
        assert!(!is_interactive(&file));
    }

    #[test]
    fn buffered_sinks_ask_the_inner_sink() {
        assert!(!is_interactive(&BufWriter::new(Vec::<u8>::new())));
        assert!(!is_interactive(&LineWriter::new(Vec::<u8>::new())));

        let file = tempfile::tempfile().unwrap();
        let expected = IsTerminal::is_terminal(&file);
        let buffered = BufWriter::new(file);
        assert_eq!(is_interactive(&buffered), expected);
        assert_eq!(
            is_interactive(&LineWriter::new(buffered.into_inner().unwrap())),
            expected
        );
    }

    #[test]
    fn boxed_sink_delegates() {
        let boxed: Box<dyn Sink> = Box::new(Vec::<u8>::new());
        assert!(!is_interactive(&boxed));
    }
}
