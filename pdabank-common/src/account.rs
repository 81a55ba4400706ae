use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::constants::BANK_ACCOUNT_TYPE;
use crate::errors::BankError;
use crate::idl::value::{decode_struct, IdlValue};
use crate::idl::{account_discriminator, Idl, IdlTypeDefTy, DISCRIMINATOR_LEN};

/// Snapshot of a bank account owned by the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRecord {
    #[serde(with = "serde_pubkey")]
    pub address: Pubkey,
    pub name: String,
    pub balance: u64,
    #[serde(default, with = "serde_opt_pubkey", skip_serializing_if = "Option::is_none")]
    pub owner: Option<Pubkey>,
}

impl BankRecord {
    /// Decodes raw account data as the IDL `Bank` account type.
    pub fn decode(idl: &Idl, address: Pubkey, data: &[u8]) -> Result<Self, BankError> {
        let value = decode_account(idl, BANK_ACCOUNT_TYPE, data)?;

        let name = value
            .field("name")
            .and_then(IdlValue::as_str)
            .ok_or_else(|| BankError::Decode("Bank account has no string `name`".to_string()))?
            .to_string();
        let balance = value
            .field("balance")
            .and_then(IdlValue::as_u64)
            .ok_or_else(|| BankError::Decode("Bank account has no u64 `balance`".to_string()))?;
        let owner = value.field("owner").and_then(IdlValue::as_pubkey);

        Ok(Self { address, name, balance, owner })
    }
}

/// Checks the account discriminator and decodes the struct body.
pub fn decode_account(idl: &Idl, type_name: &str, data: &[u8]) -> Result<IdlValue, BankError> {
    let def = idl.account(type_name)?;
    let IdlTypeDefTy::Struct { fields } = &def.ty else {
        return Err(BankError::UnsupportedType(format!("account {} is not a struct", type_name)));
    };

    if data.len() < DISCRIMINATOR_LEN {
        return Err(BankError::Decode(format!("account data is only {} bytes", data.len())));
    }
    let (tag, mut body) = data.split_at(DISCRIMINATOR_LEN);
    let expected = account_discriminator(type_name);
    if tag != expected.as_slice() {
        return Err(BankError::DiscriminatorMismatch {
            expected: hex::encode(expected),
            found: hex::encode(tag),
        });
    }

    // Anchor allocates fixed space, so trailing bytes are expected.
    decode_struct(fields, &mut body, idl)
}

mod serde_pubkey {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&key.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(serde::de::Error::custom)
    }
}

mod serde_opt_pubkey {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(key: &Option<Pubkey>, serializer: S) -> Result<S::Ok, S::Error> {
        match key {
            Some(k) => serializer.serialize_some(&k.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Pubkey>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| Pubkey::from_str(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use borsh::BorshSerialize;

    fn bank_data(name: &str, balance: u64, owner: &Pubkey) -> Vec<u8> {
        let mut data = account_discriminator("Bank").to_vec();
        BorshSerialize::serialize(&name.to_string(), &mut data).unwrap();
        BorshSerialize::serialize(&balance, &mut data).unwrap();
        data.extend_from_slice(owner.as_ref());
        data
    }

    #[test]
    fn test_decodes_bank_account() {
        let idl = Idl::bundled().unwrap();
        let address = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut data = bank_data("WsoS Bank", 1_500_000_000, &owner);
        // zero padding left by fixed-size allocation
        data.extend_from_slice(&[0u8; 32]);

        let record = BankRecord::decode(&idl, address, &data).unwrap();

        assert_eq!(record.address, address);
        assert_eq!(record.name, "WsoS Bank");
        assert_eq!(record.balance, 1_500_000_000);
        assert_eq!(record.owner, Some(owner));
    }

    #[test]
    fn test_rejects_foreign_account_type() {
        let idl = Idl::bundled().unwrap();
        let mut data = bank_data("x", 1, &Pubkey::new_unique());
        data[0] ^= 0xff;

        let err = BankRecord::decode(&idl, Pubkey::new_unique(), &data).unwrap_err();
        assert!(matches!(err, BankError::DiscriminatorMismatch { .. }));
    }

    #[test]
    fn test_rejects_short_data() {
        let idl = Idl::bundled().unwrap();
        assert!(matches!(
            BankRecord::decode(&idl, Pubkey::new_unique(), &[1, 2, 3]),
            Err(BankError::Decode(_))
        ));

        let truncated = &bank_data("name", 1, &Pubkey::new_unique())[..14];
        assert!(matches!(
            BankRecord::decode(&idl, Pubkey::new_unique(), truncated),
            Err(BankError::Decode(_))
        ));
    }

    #[test]
    fn test_record_serializes_addresses_as_base58() {
        let record = BankRecord {
            address: Pubkey::new_unique(),
            name: "WsoS Bank".into(),
            balance: 10,
            owner: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["address"], record.address.to_string());
        assert!(json.get("owner").is_none());

        let back: BankRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
