// crates/iiko-client/src/models/accounts.rs
// ============================================================================
// Module: Account Models
// Description: Chart-of-accounts entries.
// Purpose: Decode `/v2/entities/accounts/list` payloads.
// Dependencies: serde
// ============================================================================

//! Chart-of-accounts entries with a closed account type enumeration.

use serde::Deserialize;
use serde::Serialize;

/// Root type reported for every account entity.
pub const ACCOUNT_ROOT_TYPE: &str = "Account";

/// Account classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Cash desk.
    Cash,
    /// Receivables.
    AccountsReceivable,
    /// Employee debts.
    DebtsOfEmployees,
    /// Current asset.
    CurrentAsset,
    /// Other current asset.
    OtherCurrentAsset,
    /// Inventory.
    InventoryAssets,
    /// Liabilities to employees.
    EmployeesLiability,
    /// Payables.
    AccountsPayable,
    /// Liabilities to clients.
    ClientsLiability,
    /// Other current liability.
    OtherCurrentLiability,
    /// Long-term liability.
    LongTermLiability,
    /// Equity.
    Equity,
    /// Cost of goods sold.
    CostOfGoodsSold,
    /// Income.
    Income,
    /// Expenses.
    Expenses,
    /// Other income.
    OtherIncome,
    /// Other expenses.
    OtherExpenses,
}

impl AccountType {
    /// Every account type, in server order.
    pub const ALL: [Self; 17] = [
        Self::Cash,
        Self::AccountsReceivable,
        Self::DebtsOfEmployees,
        Self::CurrentAsset,
        Self::OtherCurrentAsset,
        Self::InventoryAssets,
        Self::EmployeesLiability,
        Self::AccountsPayable,
        Self::ClientsLiability,
        Self::OtherCurrentLiability,
        Self::LongTermLiability,
        Self::Equity,
        Self::CostOfGoodsSold,
        Self::Income,
        Self::Expenses,
        Self::OtherIncome,
        Self::OtherExpenses,
    ];
}

/// Account entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    /// Entity root type; always `Account`.
    pub root_type: String,
    /// Account identifier.
    pub id: String,
    /// Account code.
    pub code: String,
    /// Deletion flag.
    pub deleted: bool,
    /// Display name.
    pub name: String,
    /// Classification.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Built-in account.
    pub system: bool,
    /// Manual transactions allowed.
    pub custom_transactions_allowed: bool,
    /// Parent account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_parent_id: Option<String>,
    /// Parent legal entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_corporate_id: Option<String>,
}
