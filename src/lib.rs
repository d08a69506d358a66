//! Fixed-rate loan amortization: payment math and CSV output.

pub mod loan;
pub mod writer;
