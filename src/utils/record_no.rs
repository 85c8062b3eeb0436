// utils/record_no.rs
use rand::Rng;

/// Generate a display reference for a finance record, e.g. FIN-48291047.
pub fn generate_record_no() -> String {
    let mut rng = rand::rng();
    format!("FIN-{:08}", rng.random_range(10000000..99999999))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_no_format() {
        let record_no = generate_record_no();
        assert!(record_no.starts_with("FIN-"));
        assert_eq!(record_no.len(), 12);
        assert!(record_no[4..].chars().all(|c| c.is_ascii_digit()));
    }
}
