use std::fmt;

use serde::{Deserialize, Serialize};

/// A 20-byte account address in 0x-hex form, normalized to lowercase so
/// equality never depends on checksum casing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        let hex_part = trimmed
            .strip_prefix("0x")
            .ok_or_else(|| format!("Address must start with 0x: {}", trimmed))?;
        let bytes = hex::decode(hex_part)
            .map_err(|e| format!("Address is not valid hex: {}", e))?;
        if bytes.len() != 20 {
            return Err(format!(
                "Address must be 20 bytes, got {}: {}",
                bytes.len(),
                trimmed
            ));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex payload without the 0x prefix.
    pub fn hex_body(&self) -> &str {
        &self.0[2..]
    }

    /// Truncated form for headers: 0x1234…abcd
    pub fn short(&self) -> String {
        format!("{}…{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wallet session as reported by the injected provider. Owned by the wallet
/// hook; everything else reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletSession {
    pub address: Option<Address>,
    pub chain_id: Option<u64>,
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}

/// A wallet connection method offered on the disconnected screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    pub id: String,
    pub name: String,
    pub ready: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_case() {
        let a = Address::parse("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266").unwrap();
        let b = Address::parse("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(Address::parse("f39fd6e51aad88f6f4ce6ab8827279cfffb92266").is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Address::parse("0x1234").is_err());
        assert!(Address::parse("0xf39fd6e51aad88f6f4ce6ab8827279cfffb9226600").is_err());
    }

    #[test]
    fn rejects_non_hex() {
        assert!(Address::parse("0xzzzzd6e51aad88f6f4ce6ab8827279cfffb92266").is_err());
    }

    #[test]
    fn short_form() {
        let a = Address::parse("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap();
        assert_eq!(a.short(), "0xf39f…2266");
    }
}
