use std::fmt;

use ethers::types::U256;
use serde::{
    de::{self, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// Sentinel address carried by the native coin record.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub const ERC20_TOKEN_TYPE: &str = "ERC-20";

/// Uniform balance shape handed to clients of both read paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    pub id: String,
    pub address: String,
    pub display_amount: String,
    /// Display name. Hidden-token matching compares against this field.
    pub token: String,
    pub market_data: MarketData,
    pub token_list_entry: TokenListEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub id: String,
    pub percent_change: f64,
    pub value: f64,
    pub value_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenListEntry {
    pub id: String,
    pub address: String,
    pub logo: String,
    pub name: String,
    pub symbol: String,
}

/// One entry of `GET /addresses/{addr}/token-balances`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTokenRecord {
    pub token: RawToken,
    #[serde(default, deserialize_with = "base_units")]
    pub value: U256,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawToken {
    #[serde(rename = "type")]
    pub token_type: String,
    #[serde(alias = "address_hash")]
    pub address: String,
    #[serde(default, deserialize_with = "token_decimals")]
    pub decimals: Option<u8>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Subset of `GET /addresses/{addr}` this service reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AddressInfo {
    #[serde(default, deserialize_with = "base_units")]
    pub coin_balance: U256,
}

// Blockscout encodes big integers as decimal strings, but JSON numbers and
// nulls show up too. Numbers past u64 reach us as f64.
struct BaseUnitsVisitor;

impl<'de> Visitor<'de> for BaseUnitsVisitor {
    type Value = Option<U256>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer as a number or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(U256::from(v)))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(Some(U256::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(|v| Some(U256::from(v)))
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        integral_f64_to_u256(v)
            .map(Some)
            .ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        U256::from_dec_str(v.trim())
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Exact conversion of a whole, non-negative f64 that fits in 256 bits.
fn integral_f64_to_u256(v: f64) -> Option<U256> {
    if !v.is_finite() || v < 0.0 || v.fract() != 0.0 {
        return None;
    }
    if v == 0.0 {
        return Some(U256::zero());
    }

    let bits = v.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);

    if exponent >= 0 {
        // mantissa carries 53 significant bits
        if exponent > 256 - 53 {
            return None;
        }
        Some(U256::from(mantissa) << exponent as usize)
    } else {
        Some(U256::from(mantissa >> (-exponent) as u32))
    }
}

fn base_units<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserializer
        .deserialize_any(BaseUnitsVisitor)?
        .unwrap_or_default())
}

fn token_decimals<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    match deserializer.deserialize_any(BaseUnitsVisitor)? {
        None => Ok(None),
        Some(v) if v <= U256::from(u8::MAX) => Ok(Some(v.as_u32() as u8)),
        Some(v) => Err(de::Error::custom(format!("decimals out of range: {}", v))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_accepts_string_and_number_amounts() {
        let records: Vec<RawTokenRecord> = serde_json::from_str(
            r#"[
                {"token": {"type": "ERC-20", "address": "0xAA", "decimals": "6", "name": "USD Coin", "symbol": "USDC"}, "value": "5000000"},
                {"token": {"type": "ERC-20", "address": "0xBB", "decimals": 18, "name": "Wrapped", "symbol": "WNZT"}, "value": 42}
            ]"#,
        )
        .unwrap();

        assert_eq!(records[0].value, U256::from(5_000_000u64));
        assert_eq!(records[0].token.decimals, Some(6));
        assert_eq!(records[1].value, U256::from(42u64));
        assert_eq!(records[1].token.decimals, Some(18));
    }

    #[test]
    fn test_raw_token_tolerates_nulls() {
        let record: RawTokenRecord = serde_json::from_str(
            r#"{"token": {"type": "ERC-721", "address_hash": "0xCC", "decimals": null, "name": null, "symbol": null}, "value": null}"#,
        )
        .unwrap();

        assert_eq!(record.token.address, "0xCC");
        assert_eq!(record.token.decimals, None);
        assert_eq!(record.token.name, None);
        assert_eq!(record.value, U256::zero());
    }

    #[test]
    fn test_address_info_defaults_missing_coin_balance() {
        let info: AddressInfo = serde_json::from_str(r#"{"hash": "0x77"}"#).unwrap();
        assert_eq!(info, AddressInfo::default());

        let info: AddressInfo =
            serde_json::from_str(r#"{"coin_balance": 2000000000000000000}"#).unwrap();
        assert_eq!(info.coin_balance, U256::from(2_000_000_000_000_000_000u64));
    }

    #[test]
    fn test_amounts_past_u64_keep_their_digits() {
        let info: AddressInfo =
            serde_json::from_str(r#"{"coin_balance": 100000000000000000000}"#).unwrap();
        assert_eq!(
            info.coin_balance,
            U256::from_dec_str("100000000000000000000").unwrap()
        );

        let record: RawTokenRecord = serde_json::from_str(
            r#"{"token": {"type": "ERC-20", "address": "0xAA", "decimals": 18}, "value": 25000000000000000000}"#,
        )
        .unwrap();
        assert_eq!(
            record.value,
            U256::from_dec_str("25000000000000000000").unwrap()
        );

        let info: AddressInfo =
            serde_json::from_str(r#"{"coin_balance": "123456789012345678901234567890"}"#).unwrap();
        assert_eq!(info.coin_balance.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn test_whole_float_literal_is_accepted() {
        let info: AddressInfo = serde_json::from_str(r#"{"coin_balance": 5000000.0}"#).unwrap();
        assert_eq!(info.coin_balance, U256::from(5_000_000u64));
    }

    #[test]
    fn test_malformed_amounts_are_rejected() {
        assert!(serde_json::from_str::<AddressInfo>(r#"{"coin_balance": "1e21"}"#).is_err());
        assert!(serde_json::from_str::<AddressInfo>(r#"{"coin_balance": -5}"#).is_err());
        assert!(serde_json::from_str::<AddressInfo>(r#"{"coin_balance": 1.5}"#).is_err());
        assert!(serde_json::from_str::<RawToken>(
            r#"{"type": "ERC-20", "address": "0xAA", "decimals": 300}"#
        )
        .is_err());
    }

    #[test]
    fn test_token_balance_serializes_camel_case() {
        let balance = TokenBalance {
            id: "0xAA".to_string(),
            address: "0xAA".to_string(),
            display_amount: "5".to_string(),
            token: "USD Coin( USDC )".to_string(),
            market_data: MarketData {
                id: "0xAA".to_string(),
                percent_change: 0.0,
                value: 0.0,
                value_change: 0.0,
            },
            token_list_entry: TokenListEntry {
                id: "0xAA".to_string(),
                address: "0xAA".to_string(),
                logo: "https://example.org/logo.png".to_string(),
                name: "USD Coin".to_string(),
                symbol: "USDC".to_string(),
            },
        };

        let json = serde_json::to_value(&balance).unwrap();
        assert_eq!(json["displayAmount"], "5");
        assert_eq!(json["marketData"]["valueChange"], 0.0);
        assert_eq!(json["tokenListEntry"]["symbol"], "USDC");
    }
}
