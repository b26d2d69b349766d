use serde::{Deserialize, Serialize};

/// One credit-card applicant, as eight raw numeric attributes.
///
/// The two flag fields (`credit_mix`, `payment_of_min_amount`) are expected to
/// be 0 or 1; that restriction is enforced by the caller, not here. The
/// scoring tables are total over the real line, so any finite value bins to
/// some weight.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Applicant {
    /// Gross annual salary.
    pub annual_income: f64,
    /// Average credit-card interest rate, in percent.
    pub interest_rate: f64,
    /// Days the applicant's invoice is overdue.
    pub delay_from_due_date: f64,
    /// How many times the credit limit was changed.
    pub changed_credit_limit: f64,
    /// Credit inquiries over the last months.
    pub num_credit_inquiries: f64,
    /// 1 = good mix of credit products, 0 = bad.
    pub credit_mix: f64,
    /// Total debt (principal plus interest) not yet paid.
    pub outstanding_debt: f64,
    /// 1 = pays only the minimum invoice amount, 0 = pays more.
    pub payment_of_min_amount: f64,
}
