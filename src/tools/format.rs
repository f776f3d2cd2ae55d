//! Display rounding for tool responses

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Calories are shown as whole numbers
pub fn round_calories(kcal: f64) -> f64 {
    kcal.round()
}

/// Protein grams are shown with one decimal
pub fn round_protein(grams: f64) -> f64 {
    round_to(grams, 1)
}

/// BMI and body weights are shown with two decimals
pub fn round_measure(value: f64) -> f64 {
    round_to(value, 2)
}

/// "100 g", "1 cup", "0.5 cup"
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    let amount = if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        let s = format!("{:.2}", quantity);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    if unit.is_empty() {
        amount
    } else {
        format!("{} {}", amount, unit)
    }
}
