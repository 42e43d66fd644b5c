use crate::types::{LoanResult, RepaymentScheme};

/// amortization calculator for one repayment scheme
#[derive(Debug, Clone, Copy)]
pub struct AmortizationCalculator {
    scheme: RepaymentScheme,
}

impl AmortizationCalculator {
    pub fn new(scheme: RepaymentScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> RepaymentScheme {
        self.scheme
    }

    /// monthly payment and total repayment
    ///
    /// Callers guarantee `principal > 0`, `term_years >= 1` and
    /// `annual_rate_percent >= 0`; the validation gate enforces this before
    /// any request reaches here. Nothing is rounded.
    pub fn calculate(
        &self,
        principal: f64,
        term_years: u32,
        annual_rate_percent: f64,
    ) -> LoanResult {
        let monthly_rate = annual_rate_percent / 12.0 / 100.0;
        let periods = f64::from(term_years) * 12.0;

        let result = match self.scheme {
            RepaymentScheme::Repayment => {
                self.calculate_repayment(principal, monthly_rate, periods)
            }
            RepaymentScheme::InterestOnly => {
                self.calculate_interest_only(principal, monthly_rate, periods)
            }
        };

        tracing::debug!(
            scheme = %self.scheme,
            principal,
            term_years,
            annual_rate_percent,
            monthly_payment = result.monthly_payment,
            total_repayment = result.total_repayment,
            "computed repayment"
        );

        result
    }

    /// level annuity payment that retires the principal over the term
    ///
    /// `P * r * (1 + r)^n / ((1 + r)^n - 1)` rewritten as
    /// `P * r / (1 - (1 + r)^-n)`, with the power taken through `ln_1p` and
    /// `exp_m1`. This stays finite when `1 + r` rounds to 1 and when
    /// `(1 + r)^n` would overflow; the payment tends to `P / n` and `P * r`
    /// at those ends.
    fn calculate_repayment(&self, principal: f64, monthly_rate: f64, n: f64) -> LoanResult {
        if monthly_rate == 0.0 {
            return LoanResult {
                monthly_payment: principal / n,
                total_repayment: principal,
            };
        }

        let discount = -(-n * monthly_rate.ln_1p()).exp_m1();
        let monthly_payment = principal * monthly_rate / discount;

        LoanResult {
            monthly_payment,
            total_repayment: monthly_payment * n,
        }
    }

    /// interest each month, principal as a balloon at term end
    fn calculate_interest_only(
        &self,
        principal: f64,
        monthly_rate: f64,
        periods: f64,
    ) -> LoanResult {
        let monthly_payment = principal * monthly_rate;

        LoanResult {
            monthly_payment,
            total_repayment: principal + monthly_payment * periods,
        }
    }
}

/// compute the summary figures for a loan
pub fn compute_repayment(
    principal: f64,
    term_years: u32,
    annual_rate_percent: f64,
    scheme: RepaymentScheme,
) -> LoanResult {
    AmortizationCalculator::new(scheme).calculate(principal, term_years, annual_rate_percent)
}
