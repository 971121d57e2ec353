//! Loading balances and prices from local JSON files.
//!
//! Balance files hold an array of records:
//!
//! ```json
//! [{ "currency": "OSMO", "blockchain": "Osmosis", "amount": 10.5 }]
//! ```
//!
//! Price files hold either an object keyed by currency or an array of
//! `{ "currency", "price" }` entries.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{WalletBalance, WalletError};
use crate::pricing::{PriceEntry, PriceTable};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceFile {
    Map(HashMap<String, f64>),
    List(Vec<PriceEntry>),
}

/// Loads wallet balances from `path`.
///
/// Records on unrecognized chains are kept as [`Blockchain::Unknown`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// balance records.
///
/// [`Blockchain::Unknown`]: crate::domain::Blockchain::Unknown
pub fn load_balances(path: &Path) -> Result<Vec<WalletBalance>, WalletError> {
    let balances: Vec<WalletBalance> = read_json(path)?;
    let unknown = balances
        .iter()
        .filter(|balance| !balance.chain.is_known())
        .count();
    if unknown > 0 {
        tracing::warn!(
            path = %path.display(),
            unknown,
            "Balances on unrecognized chains mapped to Unknown"
        );
    }
    tracing::info!(path = %path.display(), count = balances.len(), "Loaded balances");
    Ok(balances)
}

/// Loads a price table from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or has neither supported
/// shape.
pub fn load_prices(path: &Path) -> Result<PriceTable, WalletError> {
    let table = match read_json::<PriceFile>(path)? {
        PriceFile::Map(prices) => prices.into_iter().collect::<PriceTable>(),
        PriceFile::List(entries) => PriceTable::from(entries),
    };
    if table.is_empty() {
        tracing::warn!(path = %path.display(), "Price file holds no usable prices");
    }
    tracing::info!(path = %path.display(), count = table.len(), "Loaded prices");
    Ok(table)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, WalletError> {
    let content = fs::read_to_string(path).map_err(|e| WalletError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| WalletError::parse(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Blockchain;
    use crate::pricing::PriceOracle;
    use crate::test_utils::TempFile;

    #[test]
    fn test_load_balances() {
        let file = TempFile::with_content(
            "balances.json",
            r#"[
                {"currency": "OSMO", "blockchain": "Osmosis", "amount": 10},
                {"currency": "SOL", "blockchain": "Solana", "amount": 3}
            ]"#,
        );

        let balances = load_balances(file.path()).unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].chain, Blockchain::Osmosis);
        assert_eq!(balances[1].chain, Blockchain::Unknown);
    }

    #[test]
    fn test_load_prices_both_shapes() {
        let map = TempFile::with_content("prices-map.json", r#"{"OSMO": 0.37, "ETH": 1645.9}"#);
        let list = TempFile::with_content(
            "prices-list.json",
            r#"[{"currency": "OSMO", "price": 0.37}, {"currency": "BAD", "price": -2}]"#,
        );

        let from_map = load_prices(map.path()).unwrap();
        assert_eq!(from_map.price_of("ETH"), 1645.9);

        let from_list = load_prices(list.path()).unwrap();
        assert_eq!(from_list.price_of("OSMO"), 0.37);
        assert_eq!(from_list.get("BAD"), None);
    }

    #[test]
    fn test_load_errors() {
        let missing = load_balances(Path::new("/nonexistent/balances.json"));
        assert!(matches!(missing, Err(WalletError::Io { .. })));

        let malformed = TempFile::with_content("bad.json", r#"{"not": "an array"}"#);
        let err = load_balances(malformed.path()).unwrap_err();
        assert!(matches!(err, WalletError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }
}
