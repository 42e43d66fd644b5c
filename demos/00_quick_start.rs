/// quick start - validate form text, compute and format
use mortgage_calculator::{format_for_display, validate_form, RepaymentScheme};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a $200,000 repayment mortgage over 25 years at 5.5%
    let request = validate_form("200,000", "25", "5.5", RepaymentScheme::Repayment)?;
    let result = request.compute();

    println!(
        "{} over {} months at {} a year",
        request.principal(),
        request.periods(),
        request.annual_rate()
    );

    println!("monthly repayments: {}", format_for_display(Some(result.monthly_payment)));
    println!("total repaid:       {}", format_for_display(Some(result.total_repayment)));

    // a bad submission never reaches the formula
    if let Err(e) = validate_form("-100", "25", "5.5", RepaymentScheme::Repayment) {
        println!("rejected ({}): {}", e, e.user_message());
    }

    Ok(())
}
