use serde::{ser, Serialize, Serializer};

use crate::error::Error;
use crate::service::rate::RateSnapshot;

pub const BTC: &str = "BTC";
pub const ETH: &str = "ETH";

pub const BTC_SHARE: f64 = 0.7;
pub const ETH_SHARE: f64 = 0.3;

/// Amount of each coin bought for its share of the investment.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    #[serde(serialize_with = "amount")]
    pub btc: f64,
    #[serde(serialize_with = "amount")]
    pub eth: f64,
}

/// Splits `amount` dollars 70/30 between BTC and ETH at the given rates.
///
/// `amount` is expected to be validated by the caller. Fails if either rate
/// is missing, unparseable or not positive.
pub fn compute_allocation(amount: f64, rates: &RateSnapshot) -> Result<Allocation, Error> {
    let btc_rate = rates.rate(BTC)?;
    let eth_rate = rates.rate(ETH)?;

    Ok(Allocation {
        btc: BTC_SHARE * amount * btc_rate,
        eth: ETH_SHARE * amount * eth_rate,
    })
}

// whole numbers are written without a trailing ".0" while they fit an f64 mantissa
fn amount<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if !value.is_finite() {
        return Err(<S::Error as ser::Error>::custom(format!("amount {value} is not a finite number")));
    }

    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        s.serialize_i64(*value as i64)
    } else {
        s.serialize_f64(*value)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::error::Error;
    use crate::service::allocator::{compute_allocation, Allocation};
    use crate::service::rate::RateSnapshot;

    fn rates(btc: &str, eth: &str) -> RateSnapshot {
        RateSnapshot::new("USD".into(), HashMap::from([
            ("BTC".to_string(), btc.to_string()),
            ("ETH".to_string(), eth.to_string()),
            ("EUR".to_string(), "0.92".to_string()),
        ]))
    }

    #[test]
    fn splits_seventy_thirty() {
        let res = compute_allocation(1000.0, &rates("50000", "3000")).unwrap();

        assert_eq!(res, Allocation { btc: 35_000_000.0, eth: 900_000.0 });
        assert_eq!(serde_json::to_string(&res).unwrap(), r#"{"btc":35000000,"eth":900000}"#);
    }

    #[test]
    fn matches_formula_for_fractional_inputs() {
        let cases = [
            (1623.56, "0.0000154", "0.00031"),
            (0.01, "0.000016", "0.0004"),
            (1e6, "1.5e-5", "2.9e-4"),
        ];

        for (amount, btc, eth) in cases {
            let res = compute_allocation(amount, &rates(btc, eth)).unwrap();
            let btc: f64 = btc.parse().unwrap();
            let eth: f64 = eth.parse().unwrap();

            assert!((res.btc - 0.7 * amount * btc).abs() <= f64::EPSILON * res.btc.abs());
            assert!((res.eth - 0.3 * amount * eth).abs() <= f64::EPSILON * res.eth.abs());
        }
    }

    #[test]
    fn fractional_amounts_keep_decimals() {
        let res = Allocation { btc: 0.025004, eth: 0.15 };

        assert_eq!(serde_json::to_string(&res).unwrap(), r#"{"btc":0.025004,"eth":0.15}"#);
    }

    #[test]
    fn overflowing_amount_fails_to_encode() {
        let res = compute_allocation(1e10, &rates("1e300", "3000")).unwrap();

        assert!(res.btc.is_infinite());
        assert!(serde_json::to_string(&res).is_err());
    }

    #[test]
    fn zero_rate() {
        let res = compute_allocation(100.5, &rates("0", "3000"));

        match res {
            Err(Error::InvalidRate { code, .. }) => assert_eq!(code, "BTC"),
            other => panic!("expected invalid BTC rate, got {other:?}"),
        }
    }

    #[test]
    fn bad_eth_rate() {
        for eth in ["-3000", "three thousand", ""] {
            match compute_allocation(100.5, &rates("50000", eth)) {
                Err(Error::InvalidRate { code, .. }) => assert_eq!(code, "ETH"),
                other => panic!("expected invalid ETH rate for '{eth}', got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_rate() {
        let snapshot = RateSnapshot::new("USD".into(), HashMap::from([
            ("BTC".to_string(), "50000".to_string()),
        ]));

        assert!(matches!(compute_allocation(10.0, &snapshot), Err(Error::InvalidRate { .. })));
    }
}
