//! Event payloads (`solana_messages`).
//!
//! All binary identifiers (addresses, mints, signatures, order ids) travel
//! as raw bytes; rendering them is the consumer's business.
//!
//! Tags follow `solana/dex_block_message.proto`, `solana/block_message.proto`,
//! `solana/token_block_message.proto` and `solana/parsed_idl_block_message.proto`;
//! see the crate docs for provenance.

// ─── Shared context ──────────────────────────────────────────────────────────

/// Block the event was included in.
#[derive(Clone, PartialEq, prost::Message)]
pub struct BlockHeader {
    #[prost(uint64, tag = "1")]
    pub slot: u64,
    #[prost(bytes = "vec", tag = "2")]
    pub hash: Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub parent_slot: u64,
    #[prost(uint64, tag = "4")]
    pub height: u64,
    #[prost(int64, tag = "5")]
    pub timestamp: i64,
}

/// An account referenced by a transaction.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Account {
    #[prost(bytes = "vec", tag = "1")]
    pub address: Vec<u8>,
    #[prost(bool, tag = "2")]
    pub is_signer: bool,
    #[prost(bool, tag = "3")]
    pub is_writable: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TransactionStatus {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub error_message: String,
}

/// Fee payer, signer and the full account list of a transaction.
#[derive(Clone, PartialEq, prost::Message)]
pub struct TransactionHeader {
    #[prost(uint64, tag = "1")]
    pub fee: u64,
    #[prost(bytes = "vec", tag = "2")]
    pub fee_payer: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub recent_blockhash: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub signer: Vec<u8>,
    #[prost(message, repeated, tag = "5")]
    pub accounts: Vec<Account>,
}

/// Transaction context attached to DEX, transfer and balance events.
#[derive(Clone, PartialEq, prost::Message)]
pub struct TransactionInfo {
    #[prost(uint32, tag = "1")]
    pub index: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub status: Option<TransactionStatus>,
    #[prost(message, optional, tag = "4")]
    pub header: Option<TransactionHeader>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Currency {
    #[prost(bytes = "vec", tag = "1")]
    pub mint_address: Vec<u8>,
    #[prost(uint32, tag = "2")]
    pub decimals: u32,
    #[prost(string, tag = "3")]
    pub symbol: String,
    #[prost(string, tag = "4")]
    pub name: String,
}

/// The DEX program that produced an event.
#[derive(Clone, PartialEq, prost::Message)]
pub struct DexInfo {
    #[prost(bytes = "vec", tag = "1")]
    pub program_address: Vec<u8>,
    #[prost(string, tag = "2")]
    pub protocol_name: String,
    #[prost(string, tag = "3")]
    pub protocol_family: String,
}

/// A pool / market and its currency pair.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Market {
    #[prost(bytes = "vec", tag = "1")]
    pub market_address: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub base_currency: Option<Currency>,
    #[prost(message, optional, tag = "3")]
    pub quote_currency: Option<Currency>,
}

// ─── DEX trades ──────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct TradeSide {
    #[prost(uint64, tag = "1")]
    pub amount: u64,
    #[prost(message, optional, tag = "2")]
    pub currency: Option<Currency>,
    #[prost(message, optional, tag = "3")]
    pub account: Option<Account>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DexTradeEvent {
    #[prost(uint32, tag = "1")]
    pub instruction_index: u32,
    #[prost(message, optional, tag = "2")]
    pub dex: Option<DexInfo>,
    #[prost(message, optional, tag = "3")]
    pub market: Option<Market>,
    #[prost(message, optional, tag = "4")]
    pub buy: Option<TradeSide>,
    #[prost(message, optional, tag = "5")]
    pub sell: Option<TradeSide>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DexTradeEventMessage {
    #[prost(message, optional, tag = "1")]
    pub block: Option<BlockHeader>,
    #[prost(message, optional, tag = "2")]
    pub transaction: Option<TransactionInfo>,
    #[prost(message, optional, tag = "3")]
    pub trade: Option<DexTradeEvent>,
}

// ─── DEX orders ──────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct DexOrder {
    #[prost(bytes = "vec", tag = "1")]
    pub order_id: Vec<u8>,
    #[prost(bool, tag = "2")]
    pub buy_side: bool,
    #[prost(uint64, tag = "3")]
    pub limit_price: u64,
    #[prost(uint64, tag = "4")]
    pub limit_amount: u64,
    #[prost(bytes = "vec", tag = "5")]
    pub account: Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub owner: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DexOrderEvent {
    #[prost(uint32, tag = "1")]
    pub instruction_index: u32,
    #[prost(message, optional, tag = "2")]
    pub dex: Option<DexInfo>,
    #[prost(message, optional, tag = "3")]
    pub market: Option<Market>,
    #[prost(message, optional, tag = "4")]
    pub order: Option<DexOrder>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DexOrderEventMessage {
    #[prost(message, optional, tag = "1")]
    pub block: Option<BlockHeader>,
    #[prost(message, optional, tag = "2")]
    pub transaction: Option<TransactionInfo>,
    #[prost(message, optional, tag = "3")]
    pub order: Option<DexOrderEvent>,
}

// ─── DEX pool events ─────────────────────────────────────────────────────────

/// One leg of a pool liquidity change.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PoolSide {
    #[prost(message, optional, tag = "1")]
    pub currency: Option<Currency>,
    #[prost(int64, tag = "2")]
    pub change_amount: i64,
    #[prost(uint64, tag = "3")]
    pub post_amount: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DexPoolEvent {
    #[prost(uint32, tag = "1")]
    pub instruction_index: u32,
    #[prost(message, optional, tag = "2")]
    pub dex: Option<DexInfo>,
    #[prost(message, optional, tag = "3")]
    pub market: Option<Market>,
    #[prost(message, optional, tag = "4")]
    pub base_currency: Option<PoolSide>,
    #[prost(message, optional, tag = "5")]
    pub quote_currency: Option<PoolSide>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DexPoolEventMessage {
    #[prost(message, optional, tag = "1")]
    pub block: Option<BlockHeader>,
    #[prost(message, optional, tag = "2")]
    pub transaction: Option<TransactionInfo>,
    #[prost(message, optional, tag = "3")]
    pub pool_event: Option<DexPoolEvent>,
}

// ─── Parsed transactions ─────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct ParsedIdlInstruction {
    #[prost(uint32, tag = "1")]
    pub index: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub program_address: Vec<u8>,
    #[prost(string, tag = "3")]
    pub method: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ParsedIdlTransaction {
    #[prost(uint32, tag = "1")]
    pub index: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub status: Option<TransactionStatus>,
    #[prost(message, optional, tag = "4")]
    pub header: Option<TransactionHeader>,
    #[prost(message, repeated, tag = "5")]
    pub parsed_idl_instructions: Vec<ParsedIdlInstruction>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ParsedIdlTransactionMessage {
    #[prost(message, optional, tag = "1")]
    pub block: Option<BlockHeader>,
    #[prost(message, optional, tag = "2")]
    pub transaction: Option<ParsedIdlTransaction>,
}

// ─── Transfers ───────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct Transfer {
    #[prost(uint32, tag = "1")]
    pub instruction_index: u32,
    #[prost(uint64, tag = "2")]
    pub amount: u64,
    #[prost(message, optional, tag = "3")]
    pub currency: Option<Currency>,
    #[prost(message, optional, tag = "4")]
    pub sender: Option<Account>,
    #[prost(message, optional, tag = "5")]
    pub receiver: Option<Account>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TransferTxMessage {
    #[prost(message, optional, tag = "1")]
    pub block: Option<BlockHeader>,
    #[prost(message, optional, tag = "2")]
    pub transaction: Option<TransactionInfo>,
    #[prost(message, optional, tag = "3")]
    pub transfer: Option<Transfer>,
}

// ─── Balance updates ─────────────────────────────────────────────────────────

/// Pre/post balance of the account at `account_index` in the
/// transaction header's account list.
#[derive(Clone, PartialEq, prost::Message)]
pub struct BalanceUpdate {
    #[prost(uint32, tag = "1")]
    pub account_index: u32,
    #[prost(uint64, tag = "2")]
    pub pre_balance: u64,
    #[prost(uint64, tag = "3")]
    pub post_balance: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BalanceUpdateEvent {
    #[prost(message, optional, tag = "1")]
    pub balance_update: Option<BalanceUpdate>,
    #[prost(message, optional, tag = "2")]
    pub currency: Option<Currency>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BalanceUpdateTxMessage {
    #[prost(message, optional, tag = "1")]
    pub block: Option<BlockHeader>,
    #[prost(message, optional, tag = "2")]
    pub transaction: Option<TransactionInfo>,
    #[prost(message, optional, tag = "3")]
    pub balance_update: Option<BalanceUpdateEvent>,
}
