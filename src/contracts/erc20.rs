// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ERC20 contract bindings for metadata and approval operations
//!
//! This module provides utilities for reading ERC20 token metadata (used when
//! provisioning a representative token on the spoke side) and for checking
//! and setting allowances, which are required before the hub-side adapter can
//! pull tokens for a transfer.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::sol;
use tracing::{debug, info};

use Erc20::Erc20Instance;

/// ERC20 contract wrapper for metadata and approval operations
///
/// # Example
///
/// ```rust,no_run
/// use hubspoke::Erc20Contract;
/// use alloy_primitives::{address, U256};
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
/// let token = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
///
/// let erc20 = Erc20Contract::new(token, provider);
///
/// // Read the metadata the spoke-side token is created with
/// let name = erc20.name().await?;
/// let symbol = erc20.symbol().await?;
/// let decimals = erc20.decimals().await?;
/// println!("{name} ({symbol}) with {decimals} decimals");
/// # Ok(())
/// # }
/// ```
pub struct Erc20Contract<P: Provider<Ethereum>> {
    instance: Erc20Instance<P>,
}

impl<P: Provider<Ethereum>> Erc20Contract<P> {
    /// Create a new ERC20 contract wrapper
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "erc20_contract_initialized"
        );
        Self {
            instance: Erc20Instance::new(address, provider),
        }
    }

    /// Get the token name
    pub async fn name(&self) -> Result<String, alloy_contract::Error> {
        let result = self.instance.name().call().await?;

        debug!(
            name = %result,
            contract_address = %self.instance.address(),
            event = "token_name_retrieved"
        );

        Ok(result)
    }

    /// Get the token symbol
    pub async fn symbol(&self) -> Result<String, alloy_contract::Error> {
        let result = self.instance.symbol().call().await?;

        debug!(
            symbol = %result,
            contract_address = %self.instance.address(),
            event = "token_symbol_retrieved"
        );

        Ok(result)
    }

    /// Get the token decimals
    pub async fn decimals(&self) -> Result<u8, alloy_contract::Error> {
        let result = self.instance.decimals().call().await?;

        debug!(
            decimals = result,
            contract_address = %self.instance.address(),
            event = "token_decimals_retrieved"
        );

        Ok(result)
    }

    /// Get the current allowance for a spender
    ///
    /// Returns the amount of tokens that `spender` is allowed to spend on behalf of `owner`.
    pub async fn allowance(
        &self,
        owner: Address,
        spender: Address,
    ) -> Result<U256, alloy_contract::Error> {
        debug!(
            owner = %owner,
            spender = %spender,
            contract_address = %self.instance.address(),
            event = "checking_allowance"
        );

        let result = self.instance.allowance(owner, spender).call().await?;

        info!(
            owner = %owner,
            spender = %spender,
            allowance = %result,
            contract_address = %self.instance.address(),
            event = "allowance_retrieved"
        );

        Ok(result)
    }

    /// Create a transaction request to approve a spender
    ///
    /// This creates but does not send the approval transaction. The caller is
    /// responsible for signing and sending the transaction.
    pub fn approve_transaction(
        &self,
        from: Address,
        spender: Address,
        amount: U256,
    ) -> TransactionRequest {
        info!(
            from = %from,
            spender = %spender,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "approve_transaction_created"
        );

        self.instance
            .approve(spender, amount)
            .from(from)
            .into_transaction_request()
    }

    /// Get the token balance of an address
    pub async fn balance_of(&self, account: Address) -> Result<U256, alloy_contract::Error> {
        debug!(
            account = %account,
            contract_address = %self.instance.address(),
            event = "checking_balance"
        );

        let result = self.instance.balanceOf(account).call().await?;

        info!(
            account = %account,
            balance = %result,
            contract_address = %self.instance.address(),
            event = "balance_retrieved"
        );

        Ok(result)
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

// Minimal ERC20 interface for metadata and approval operations
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract Erc20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
    }
);
