//!
//! The signed transaction.
//!

use anyhow::Context;

///
/// The signed transaction, ready to be submitted.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// The RLP-encoded signed transaction.
    pub raw: web3::types::Bytes,
    /// The transaction hash.
    pub hash: web3::types::H256,
    /// The nonce the transaction was signed with.
    pub nonce: web3::types::U256,
    /// The chain ID the transaction was signed for.
    pub chain_id: u64,
}

///
/// The fields recovered from a legacy RLP-encoded transaction.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedFields {
    /// The nonce.
    pub nonce: web3::types::U256,
    /// The gas price.
    pub gas_price: web3::types::U256,
    /// The gas limit.
    pub gas: web3::types::U256,
    /// The recipient. Is `None` for contract creation.
    pub to: Option<web3::types::Address>,
    /// The transferred value.
    pub value: web3::types::U256,
    /// The chain ID recovered from the EIP-155 `v` value.
    pub chain_id: Option<u64>,
}

impl SignedTransaction {
    /// The number of items in a legacy transaction list.
    const LEGACY_ITEM_COUNT: usize = 9;

    /// The index of the nonce item.
    const NONCE_INDEX: usize = 0;

    /// The index of the gas price item.
    const GAS_PRICE_INDEX: usize = 1;

    /// The index of the gas limit item.
    const GAS_INDEX: usize = 2;

    /// The index of the recipient item.
    const TO_INDEX: usize = 3;

    /// The index of the value item.
    const VALUE_INDEX: usize = 4;

    /// The index of the `v` item.
    const V_INDEX: usize = 6;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        raw: web3::types::Bytes,
        hash: web3::types::H256,
        nonce: web3::types::U256,
        chain_id: u64,
    ) -> Self {
        Self {
            raw,
            hash,
            nonce,
            chain_id,
        }
    }

    ///
    /// Decodes the plain fields and the chain ID from a legacy RLP-encoded transaction.
    ///
    pub fn decode_fields(raw: &[u8]) -> anyhow::Result<DecodedFields> {
        let rlp = rlp::Rlp::new(raw);
        let item_count = rlp.item_count().context("Not an RLP list")?;
        if item_count != Self::LEGACY_ITEM_COUNT {
            anyhow::bail!(
                "Expected {} items in a legacy transaction, found {item_count}",
                Self::LEGACY_ITEM_COUNT
            );
        }

        let nonce = Self::decode_u256(&rlp, Self::NONCE_INDEX, "nonce")?;
        let gas_price = Self::decode_u256(&rlp, Self::GAS_PRICE_INDEX, "gas price")?;
        let gas = Self::decode_u256(&rlp, Self::GAS_INDEX, "gas")?;
        let value = Self::decode_u256(&rlp, Self::VALUE_INDEX, "value")?;

        let to = Self::item_data(&rlp, Self::TO_INDEX, "recipient")?;
        let to = match to.len() {
            0 => None,
            20 => Some(web3::types::Address::from_slice(to)),
            length => anyhow::bail!("The recipient is {length} bytes long"),
        };

        let v: u64 = rlp.val_at(Self::V_INDEX).context("Invalid `v` item")?;
        let chain_id = if v >= 35 { Some((v - 35) / 2) } else { None };

        Ok(DecodedFields {
            nonce,
            gas_price,
            gas,
            to,
            value,
            chain_id,
        })
    }

    fn item_data<'a>(
        rlp: &rlp::Rlp<'a>,
        index: usize,
        name: &str,
    ) -> anyhow::Result<&'a [u8]> {
        rlp.at(index)
            .and_then(|item| item.data())
            .with_context(|| format!("Invalid {name} item"))
    }

    fn decode_u256(
        rlp: &rlp::Rlp<'_>,
        index: usize,
        name: &str,
    ) -> anyhow::Result<web3::types::U256> {
        let data = Self::item_data(rlp, index, name)?;
        if data.len() > 32 {
            anyhow::bail!("The {name} is longer than 32 bytes");
        }
        Ok(web3::types::U256::from_big_endian(data))
    }

    ///
    /// Checks that the encoded payload carries the nonce and chain ID it was signed with.
    ///
    pub fn verify_encoding(&self) -> anyhow::Result<()> {
        let decoded = Self::decode_fields(self.raw.0.as_slice())
            .context("Failed to decode the signed transaction")?;

        if decoded.nonce != self.nonce {
            anyhow::bail!(
                "The signed transaction nonce {} differs from the requested {}",
                decoded.nonce,
                self.nonce
            );
        }
        if decoded.chain_id != Some(self.chain_id) {
            anyhow::bail!(
                "The signed transaction chain ID {:?} differs from the requested {}",
                decoded.chain_id,
                self.chain_id
            );
        }

        Ok(())
    }
}
