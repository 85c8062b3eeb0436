use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

pub trait BigDecimalHelpers {
    fn to_f64_or_zero(&self) -> f64;
}

impl BigDecimalHelpers for BigDecimal {
    fn to_f64_or_zero(&self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }
}

impl BigDecimalHelpers for Option<BigDecimal> {
    fn to_f64_or_zero(&self) -> f64 {
        self.as_ref()
            .map(|bd| bd.to_f64().unwrap_or(0.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64_or_zero() {
        assert_eq!(BigDecimal::from(150).to_f64_or_zero(), 150.0);
        assert_eq!(None::<BigDecimal>.to_f64_or_zero(), 0.0);
        assert_eq!(Some(BigDecimal::from(7)).to_f64_or_zero(), 7.0);
    }
}
