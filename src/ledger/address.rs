use crate::game::GameError;

/// An EVM account address: `0x` followed by 40 hex digits.
#[derive(Debug, Clone, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl TryFrom<&str> for Address {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.strip_prefix("0x") {
            Some(digits) if digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
                Ok(Self(s.to_string()))
            }
            _ => Err(GameError::InvalidAddress(s.to_string())),
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mixed_case() {
        let s = "0xAbCdEf0123456789abcdef0123456789ABCDEF01";
        assert_eq!(Address::try_from(s).map(|a| a.to_string()), Ok(s.to_string()));
    }
    #[test]
    fn rejects_malformed() {
        for s in [
            "",
            "0x",
            "1234567890123456789012345678901234567890",
            "0x123456789012345678901234567890123456789",
            "0x12345678901234567890123456789012345678901",
            "0xg234567890123456789012345678901234567890",
        ] {
            assert!(Address::try_from(s).is_err(), "{}", s);
        }
    }
}
