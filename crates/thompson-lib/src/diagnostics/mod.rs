//! Rendering of pattern errors for terminals.

mod printer;

#[cfg(test)]
mod printer_tests;

pub use printer::ErrorPrinter;
