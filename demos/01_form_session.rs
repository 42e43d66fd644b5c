/// form session - keystrokes into the amount field, submit, clear
use mortgage_calculator::{CalculatorForm, RepaymentScheme};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut form = CalculatorForm::new();

    // the field re-renders with separators after every keystroke
    for typed in ["3", "30", "300", "3000", "3,0000", "300,000", "300,000.5"] {
        let entry = form.set_amount(typed);
        println!(
            "typed {:>10} -> shows {:>11} (raw {})",
            typed,
            entry.display_value(),
            entry.raw_value()
        );
    }

    form.set_term("30");
    form.set_rate("4.25");
    form.set_scheme(RepaymentScheme::InterestOnly);
    form.submit()?;
    println!("{}", form.json());

    form.set_rate("");
    if let Err(e) = form.submit() {
        println!("{}", e.user_message());
    }

    form.clear();
    println!("{}", form.json());

    Ok(())
}
