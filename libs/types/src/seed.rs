//! Records present at process start

use chrono::{DateTime, Utc};

use crate::trade::Trade;
use crate::user::{Degree, DegreeType, User};

/// The four seeded users. `created_at` stamps the single expert degree.
pub fn users(created_at: DateTime<Utc>) -> Vec<User> {
    vec![
        User::new(1, "admin", "John"),
        User::new(2, "investor", "Andrey"),
        User::new(3, "trader", "Alex"),
        User::new(4, "trader", "Justin")
            .with_degree(Degree::new(1, created_at, DegreeType::Expert)),
    ]
}

/// The ten seeded trades, ids 1 through 10 in order.
pub fn trades() -> Vec<Trade> {
    vec![
        Trade::new(1, 1, "BTC", "buy", 2.5),
        Trade::new(2, 2, "BTC", "buy", 2.3),
        Trade::new(3, 2, "BTC", "buy", 4.0),
        Trade::new(4, 2, "ETH", "sell", 5.5),
        Trade::new(5, 1, "BTC", "buy", 1.9),
        Trade::new(6, 1, "ETH", "sell", 2.1),
        Trade::new(7, 2, "BTC", "buy", 7.0),
        Trade::new(8, 2, "ETH", "sell", 5.211),
        Trade::new(9, 1, "BTC", "sell", 1.33),
        Trade::new(10, 1, "ETH", "sell", 6.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Validate;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(users(Utc::now()).len(), 4);
        assert_eq!(trades().len(), 10);
    }

    #[test]
    fn test_seed_trades_pass_validation() {
        assert!(trades().validate().is_ok());
    }

    #[test]
    fn test_only_justin_has_a_degree() {
        let users = users(Utc::now());
        let with_degree: Vec<_> = users.iter().filter(|u| !u.degree.is_empty()).collect();

        assert_eq!(with_degree.len(), 1);
        assert_eq!(with_degree[0].name, "Justin");
        assert_eq!(with_degree[0].degree[0].type_degree, DegreeType::Expert);
    }
}
