//! pt-BR display formatting for monetary values and quantities.
//!
//! Purely presentational: the wire format carries plain JSON numbers, only
//! the TUI renders `R$ 1.234,56` style strings.

use rust_decimal::Decimal;

/// Formats a monetary value in Brazilian-Portuguese currency style:
/// `R$` symbol, `.` thousands separator, `,` decimal separator, two
/// decimal places.
pub fn formatar_valor(valor: Decimal) -> String {
    let arredondado = valor.round_dp(2);
    let negativo = arredondado.is_sign_negative();
    let texto = format!("{:.2}", arredondado.abs());
    let (inteiro, centavos) = texto.split_once('.').unwrap_or((texto.as_str(), "00"));

    let agrupado = agrupar_milhares(inteiro);
    if negativo {
        format!("-R$ {agrupado},{centavos}")
    } else {
        format!("R$ {agrupado},{centavos}")
    }
}

/// Formats a quantity, dropping a trailing `.0` scale so whole quantities
/// render as integers.
pub fn formatar_quantidade(quantidade: Decimal) -> String {
    quantidade.normalize().to_string().replace('.', ",")
}

/// Inserts `.` thousands separators into an unsigned integer string.
fn agrupar_milhares(digitos: &str) -> String {
    let mut invertido = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (i, c) in digitos.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            invertido.push('.');
        }
        invertido.push(c);
    }
    invertido.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn formats_small_values() {
        assert_eq!(formatar_valor(dec!(0)), "R$ 0,00");
        assert_eq!(formatar_valor(dec!(9.9)), "R$ 9,90");
        assert_eq!(formatar_valor(dec!(75.50)), "R$ 75,50");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(formatar_valor(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(formatar_valor(dec!(1000000)), "R$ 1.000.000,00");
        assert_eq!(formatar_valor(dec!(987654321.09)), "R$ 987.654.321,09");
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        assert_eq!(formatar_valor(dec!(10.005)), "R$ 10,00");
        assert_eq!(formatar_valor(dec!(10.015)), "R$ 10,02");
    }

    #[test]
    fn negative_values_keep_the_sign_outside() {
        assert_eq!(formatar_valor(dec!(-1234.5)), "-R$ 1.234,50");
    }

    #[test]
    fn quantities_drop_trailing_zero_scale() {
        assert_eq!(formatar_quantidade(dec!(2.00)), "2");
        assert_eq!(formatar_quantidade(dec!(1.5)), "1,5");
    }
}
