use core::str::FromStr;

use kyc_core::DomainError;

/// Addressable part of a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    Identity,
    Addresses,
    Contacts,
    Documents,
    BankAccounts,
    BankTransactions,
}

impl SectionName {
    pub const ALL: [SectionName; 6] = [
        SectionName::Identity,
        SectionName::Addresses,
        SectionName::Contacts,
        SectionName::Documents,
        SectionName::BankAccounts,
        SectionName::BankTransactions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionName::Identity => "Identity",
            SectionName::Addresses => "Addresses",
            SectionName::Contacts => "Contacts",
            SectionName::Documents => "Documents",
            SectionName::BankAccounts => "BankAccounts",
            SectionName::BankTransactions => "BankTransactions",
        }
    }

    /// Whether the section holds a sequence of entries (as opposed to the single
    /// embedded identity).
    pub fn is_collection(self) -> bool {
        !matches!(self, SectionName::Identity)
    }

    pub fn supports(self, mode: OperationMode) -> bool {
        self.is_collection() || mode == OperationMode::Replace
    }
}

impl core::fmt::Display for SectionName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionName {
    type Err = DomainError;

    /// Accepts the canonical names and the legacy command-surface names
    /// (`BasicInfo`, `Address`, `Contact`, `CustomerDocument`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Identity" | "BasicInfo" => Ok(SectionName::Identity),
            "Addresses" | "Address" => Ok(SectionName::Addresses),
            "Contacts" | "Contact" => Ok(SectionName::Contacts),
            "Documents" | "CustomerDocument" => Ok(SectionName::Documents),
            "BankAccounts" | "BankAccount" => Ok(SectionName::BankAccounts),
            "BankTransactions" | "BankTransaction" => Ok(SectionName::BankTransactions),
            other => Err(DomainError::unknown_section(other)),
        }
    }
}

/// How a payload combines with a section's existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationMode {
    /// Substitute the section wholesale.
    Replace,
    /// Concatenate new entries after the existing ones.
    Append,
}

impl OperationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationMode::Replace => "Replace",
            OperationMode::Append => "Append",
        }
    }
}

impl core::fmt::Display for OperationMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Replace" | "replace" => Ok(OperationMode::Replace),
            "Append" | "append" | "add" => Ok(OperationMode::Append),
            other => Err(DomainError::unknown_mode(other)),
        }
    }
}
