use log::trace;
use std::fmt;

/// Terms of a fixed-rate loan repaid in equal monthly installments.
///
/// Fields are taken as given: nothing here rejects a zero term or a negative
/// principal, so callers that need guardrails must validate before building a
/// schedule. The CLI front end does exactly that.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loan {
    pub principal: f64,   // amount borrowed
    pub annual_rate: f64, // annual interest rate in percent (6.0 means 6%)
    pub years: u32,       // repayment term
}

impl Loan {
    pub fn new(principal: f64, annual_rate: f64, years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            years,
        }
    }

    /// Monthly interest rate as a fraction (annual percent / 12 / 100).
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12. / 100.
    }

    /// Total number of monthly payments over the term.
    pub fn payment_count(&self) -> u32 {
        self.years * 12
    }

    /// Fixed payment per month, from the standard annuity formula.
    ///
    /// A zero-rate loan has no annuity factor; its payment is the principal
    /// split evenly across the term, with zero interest in every period.
    pub fn monthly_payment(&self) -> f64 {
        let monthly_rate = self.monthly_rate();
        let payments = f64::from(self.payment_count());

        if monthly_rate == 0. {
            return self.principal / payments;
        }

        let factor = (1. + monthly_rate).powf(payments);
        (self.principal * monthly_rate * factor) / (factor - 1.)
    }

    /// Builds the full amortization schedule in one pass.
    ///
    /// Each month accrues interest on the running balance, the rest of the
    /// fixed payment retires principal, and the row records the balance left
    /// after that reduction. The final balance is whatever floating-point
    /// residue the iteration leaves; it is not forced to zero.
    pub fn amortization_schedule(&self) -> Schedule {
        let monthly_rate = self.monthly_rate();
        let payment = self.monthly_payment();
        let payments = self.payment_count();
        trace!(
            "amortizing {} over {} payments of {:.4} at monthly rate {}",
            self.principal,
            payments,
            payment,
            monthly_rate
        );

        let mut rows = Vec::with_capacity(payments as usize);
        let mut balance = self.principal;

        for month in 1..=payments {
            let interest_portion = balance * monthly_rate;
            let principal_portion = payment - interest_portion;
            balance -= principal_portion;
            trace!(
                "month {}: interest {:.4}, principal {:.4}, balance {:.4}",
                month,
                interest_portion,
                principal_portion,
                balance
            );

            rows.push(AmortizationRow {
                month,
                payment,
                principal_portion,
                interest_portion,
                remaining_balance: balance,
            });
        }

        Schedule { payment, rows }
    }
}

/// One month of the ledger: how the fixed payment splits between interest and
/// principal, and what remains owed afterward. Values are unrounded; the CSV
/// writer applies two-decimal formatting.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    pub remaining_balance: f64,
}

impl fmt::Display for AmortizationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "month {}, payment ${:.4}, principal ${:.4}, interest ${:.4}, balance ${:.4}",
            self.month,
            self.payment,
            self.principal_portion,
            self.interest_portion,
            self.remaining_balance
        )
    }
}

/// An ordered run of monthly rows plus the constant payment behind them.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    payment: f64,
    rows: Vec<AmortizationRow>,
}

impl Schedule {
    /// The fixed monthly payment shared by every row.
    pub fn payment(&self) -> f64 {
        self.payment
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[AmortizationRow] {
        &self.rows
    }

    /// Looks up a row by its 1-based month number.
    pub fn row(&self, month: u32) -> Option<&AmortizationRow> {
        month
            .checked_sub(1)
            .and_then(|index| self.rows.get(index as usize))
    }

    /// Sum of every month's principal portion; approximates the principal.
    pub fn total_principal(&self) -> f64 {
        self.rows.iter().map(|row| row.principal_portion).sum()
    }

    /// Sum of every month's interest portion, the cost of the loan.
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|row| row.interest_portion).sum()
    }
}
