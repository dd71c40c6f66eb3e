//! Comprehensive unit tests for the Money module
//!
//! Tests cover construction from minor units and decimal strings, decimal
//! projection, currency-checked arithmetic, equality and serialization.

use shared_kernel::{Currency, Money, MoneyError};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of(money: &Money) -> u64 {
    let mut hasher = DefaultHasher::new();
    money.hash(&mut hasher);
    hasher.finish()
}

mod creation {
    use super::*;

    #[test]
    fn test_from_minor_wraps_amount_unchanged() {
        let m = Money::from_minor(10050, Currency::USD).unwrap();
        assert_eq!(m.amount(), 10050);
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_from_minor_accepts_zero() {
        let m = Money::from_minor(0, Currency::EUR).unwrap();
        assert!(m.is_zero());
    }

    #[test]
    fn test_from_minor_rejects_negative() {
        let result = Money::from_minor(-1, Currency::USD);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_from_minor_with_code_resolves_currency() {
        let m = Money::from_minor_with_code(500, "jpy").unwrap();
        assert_eq!(m.currency(), Currency::JPY);
    }

    #[test]
    fn test_from_minor_with_unknown_code() {
        let result = Money::from_minor_with_code(500, "ABC");
        assert!(matches!(result, Err(MoneyError::InvalidCurrency(_))));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::COP);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::COP);
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_cop_scales_to_centavos() {
        assert_eq!(Money::cop("1500.00").unwrap().amount(), 150_000);
    }

    #[test]
    fn test_usd_exact_two_digits() {
        assert_eq!(Money::usd("10.99").unwrap().amount(), 1099);
    }

    #[test]
    fn test_integer_input() {
        assert_eq!(Money::usd("1500").unwrap().amount(), 150_000);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(Money::eur("  12.30 ").unwrap().amount(), 1230);
    }

    #[test]
    fn test_zero_fraction_digit_currency() {
        let m = Money::from_decimal_str("2500", Currency::JPY).unwrap();
        assert_eq!(m.amount(), 2500);
    }

    #[test]
    fn test_three_fraction_digit_currency() {
        let m = Money::from_decimal_str("1.234", Currency::KWD).unwrap();
        assert_eq!(m.amount(), 1234);
    }

    #[test]
    fn test_with_code() {
        let m = Money::from_decimal_str_with_code("10.00", "COP").unwrap();
        assert_eq!(m, Money::cop("10.00").unwrap());
    }

    #[test]
    fn test_with_unknown_code() {
        let result = Money::from_decimal_str_with_code("10.00", "XXX");
        assert!(matches!(result, Err(MoneyError::InvalidCurrency(_))));
    }

    #[test]
    fn test_blank_input_rejected() {
        assert!(matches!(Money::usd(""), Err(MoneyError::InvalidAmount(_))));
        assert!(matches!(Money::usd("   "), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_unparsable_input_rejected() {
        for input in ["abc", "10,00", "1.2.3", "1_000", "$10"] {
            assert!(
                matches!(Money::usd(input), Err(MoneyError::InvalidAmount(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_excess_precision_rejected() {
        assert!(matches!(Money::usd("10.999"), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_fraction_rejected_for_zero_digit_currency() {
        let result = Money::from_decimal_str("100.5", Currency::JPY);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_negative_decimal_rejected() {
        assert!(matches!(Money::usd("-0.01"), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let result = Money::usd("92233720368547758.08");
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_largest_representable_amount() {
        let m = Money::usd("92233720368547758.07").unwrap();
        assert_eq!(m.amount(), i64::MAX);
    }

    #[test]
    fn test_scientific_notation_accepted() {
        assert_eq!(Money::usd("1.099e1").unwrap().amount(), 1099);
        assert_eq!(Money::usd("1E+2").unwrap().amount(), 10_000);
        assert_eq!(Money::usd("1099e-2").unwrap().amount(), 1099);
        let m = Money::from_decimal_str("1234000e-6", Currency::KWD).unwrap();
        assert_eq!(m.amount(), 1234);
    }

    #[test]
    fn test_scientific_notation_excess_precision_rejected() {
        assert!(matches!(Money::usd("10.999e0"), Err(MoneyError::InvalidAmount(_))));
        assert!(matches!(Money::usd("1099e-3"), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_mantissa_beyond_decimal_precision_is_not_rounded() {
        for input in [
            "1.00000000000000000000000000001e1",
            "10.9900000000000000000000000001e0",
            "1099.00000000000000000000000001e-2",
        ] {
            assert!(
                matches!(Money::usd(input), Err(MoneyError::InvalidAmount(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_trailing_fraction_zeros_do_not_count_as_precision() {
        assert_eq!(
            Money::usd("10.990000000000000000000000000000").unwrap().amount(),
            1099
        );
        assert_eq!(Money::usd("0.000000000000000000000000000000").unwrap().amount(), 0);
        assert_eq!(Money::usd("1.10000000000000000000000000000e1").unwrap().amount(), 1100);
    }

    #[test]
    fn test_malformed_exponent_or_point_rejected() {
        for input in ["1e", "e5", "1e2.5", "1e2e3", "1.2.00", "1.e"] {
            assert!(
                matches!(Money::usd(input), Err(MoneyError::InvalidAmount(_))),
                "expected {:?} to be rejected",
                input
            );
        }
    }
}

mod projection {
    use super::*;

    #[test]
    fn test_round_trip_keeps_canonical_form() {
        assert_eq!(Money::usd("1500.00").unwrap().to_decimal_string(), "1500.00");
        assert_eq!(Money::usd("1500").unwrap().to_decimal_string(), "1500.00");
        assert_eq!(Money::usd("10.9").unwrap().to_decimal_string(), "10.90");
    }

    #[test]
    fn test_small_amounts_keep_leading_zero() {
        let m = Money::from_minor(5, Currency::USD).unwrap();
        assert_eq!(m.to_decimal_string(), "0.05");
    }

    #[test]
    fn test_zero_digit_currency_has_no_point() {
        let m = Money::from_minor(12345, Currency::JPY).unwrap();
        assert_eq!(m.to_decimal_string(), "12345");
    }

    #[test]
    fn test_display_string() {
        assert_eq!(Money::usd("10.99").unwrap().to_display_string(), "$ 10.99");
        assert_eq!(Money::cop("1500.00").unwrap().to_string(), "COL$ 1500.00");
        let yen = Money::from_minor(12345, Currency::JPY).unwrap();
        assert_eq!(format!("{}", yen), "¥ 12345");
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::usd("100.00").unwrap();
        let b = Money::usd("50.25").unwrap();
        let result = a.checked_add(&b).unwrap();
        assert_eq!(result.amount(), 15_025);
        assert_eq!(result.currency(), Currency::USD);
    }

    #[test]
    fn test_checked_add_leaves_operands_unchanged() {
        let a = Money::usd("1.00").unwrap();
        let b = Money::usd("2.00").unwrap();
        let _ = a.checked_add(&b).unwrap();
        assert_eq!(a.amount(), 100);
        assert_eq!(b.amount(), 200);
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let usd = Money::usd("10.00").unwrap();
        let cop = Money::cop("10.00").unwrap();
        let err = usd.checked_add(&cop).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot operate on different currencies: USD vs COP"
        );
    }

    #[test]
    fn test_checked_sub_same_currency() {
        let a = Money::usd("100.00").unwrap();
        let b = Money::usd("30.00").unwrap();
        assert_eq!(a.checked_sub(&b).unwrap().amount(), 7_000);
    }

    #[test]
    fn test_checked_sub_to_zero() {
        let ten = Money::usd("10.00").unwrap();
        assert_eq!(ten.checked_sub(&ten).unwrap().amount(), 0);
    }

    #[test]
    fn test_checked_sub_cannot_go_negative() {
        let five = Money::usd("5.00").unwrap();
        let ten = Money::usd("10.00").unwrap();
        assert_eq!(
            five.checked_sub(&ten),
            Err(MoneyError::NegativeResult(Currency::USD))
        );
    }

    #[test]
    fn test_checked_sub_checks_currency_first() {
        let five = Money::usd("5.00").unwrap();
        let ten = Money::eur("10.00").unwrap();
        assert!(matches!(
            five.checked_sub(&ten),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_sum() {
        let parts = vec![
            Money::cop("100.00").unwrap(),
            Money::cop("200.50").unwrap(),
            Money::cop("0.50").unwrap(),
        ];
        let total = Money::sum(Currency::COP, parts).unwrap();
        assert_eq!(total, Money::cop("301.00").unwrap());
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total = Money::sum(Currency::EUR, Vec::<Money>::new()).unwrap();
        assert_eq!(total, Money::zero(Currency::EUR));
    }

    #[test]
    fn test_sum_rejects_foreign_currency() {
        let parts = vec![Money::usd("1.00").unwrap(), Money::eur("1.00").unwrap()];
        assert!(matches!(
            Money::sum(Currency::USD, parts),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_checked_cmp() {
        let a = Money::usd("1.00").unwrap();
        let b = Money::usd("2.00").unwrap();
        assert_eq!(a.checked_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(b.checked_cmp(&a).unwrap(), Ordering::Greater);
        assert_eq!(a.checked_cmp(&a).unwrap(), Ordering::Equal);
        assert!(a.checked_cmp(&Money::cop("1.00").unwrap()).is_err());
    }
}

mod equality {
    use super::*;

    #[test]
    fn test_equal_amount_and_currency() {
        assert_eq!(Money::usd("10.00").unwrap(), Money::usd("10.00").unwrap());
        assert_eq!(
            hash_of(&Money::usd("10.00").unwrap()),
            hash_of(&Money::usd("10").unwrap())
        );
    }

    #[test]
    fn test_same_minor_amount_different_currency() {
        let usd = Money::usd("10.00").unwrap();
        let cop = Money::cop("10.00").unwrap();
        assert_eq!(usd.amount(), cop.amount());
        assert_ne!(usd, cop);
    }

    #[test]
    fn test_hash_set_keeps_currencies_apart() {
        let set: HashSet<Money> = [
            Money::usd("10.00").unwrap(),
            Money::cop("10.00").unwrap(),
            Money::usd("10.00").unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_serializes_minor_amount_and_code() {
        let json = serde_json::to_value(Money::usd("10.99").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "amount": 1099, "currency": "USD" }));
    }

    #[test]
    fn test_deserializes_valid_money() {
        let m: Money = serde_json::from_str(r#"{"amount":150000,"currency":"COP"}"#).unwrap();
        assert_eq!(m, Money::cop("1500.00").unwrap());
    }

    #[test]
    fn test_deserialization_rejects_negative_amount() {
        let result = serde_json::from_str::<Money>(r#"{"amount":-5,"currency":"USD"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialization_rejects_unknown_currency() {
        let result = serde_json::from_str::<Money>(r#"{"amount":5,"currency":"ZZZ"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialization_resolves_currency_like_from_code() {
        let m: Money = serde_json::from_str(r#"{"amount":5,"currency":"usd"}"#).unwrap();
        assert_eq!(m, Money::from_minor(5, Currency::USD).unwrap());
        assert_eq!(m, Money::from_minor_with_code(5, "usd").unwrap());
    }
}
