//! Utilidades de presentación
//!
//! Helpers de formato para montos, fechas y etiquetas de vehículos tal como
//! los muestra el panel.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rusty_money::{iso, Money};

/// Formatear un monto como moneda en dólares, estilo en-US ("$1,234.56")
pub fn format_currency(amount: Decimal) -> String {
    Money::from_decimal(amount, iso::USD).to_string()
}

/// Formatear una fecha estilo "Jan 15, 2024"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Etiqueta corta de un vehículo: "2024 Tesla Model S"
pub fn vehicle_label(year: i32, make: &str, model: &str) -> String {
    format!("{} {} {}", year, make, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::new(250, 2)), "$2.50");
        assert_eq!(format_currency(Decimal::new(123456, 2)), "$1,234.56");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
    }

    #[test]
    fn test_vehicle_label() {
        assert_eq!(vehicle_label(2024, "Tesla", "Model S"), "2024 Tesla Model S");
    }
}
