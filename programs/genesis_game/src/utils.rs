use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
    state::Mint,
};
use primitive_types::U256;

use crate::errors::GenesisError;

/// 18-decimal fixed point scale.
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_DECIMALS: u8 = 18;
pub const ONE_DAY: i64 = 86_400;

/// `floor(a * b / denom)` with a 256-bit intermediate product.
pub fn mul_div_floor(a: u128, b: u128, denom: u128) -> Result<u128> {
    require!(denom > 0, GenesisError::ArithmeticOverflow);
    let out = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(GenesisError::ArithmeticOverflow)?
        / U256::from(denom);
    require!(out <= U256::from(u128::MAX), GenesisError::ArithmeticOverflow);
    Ok(out.as_u128())
}

/// Composite spatial id of a grid cell. Not unique across redemptions.
pub fn composite_id(x: u64, y: u64, width: u64) -> Result<u64> {
    y.checked_mul(width)
        .and_then(|row| row.checked_add(x))
        .ok_or_else(|| error!(GenesisError::ArithmeticOverflow))
}

fn unit_factor(decimals: u8) -> Result<u128> {
    require!(decimals <= WAD_DECIMALS, GenesisError::UnsupportedMintDecimals);
    10u128
        .checked_pow((WAD_DECIMALS - decimals) as u32)
        .ok_or_else(|| error!(GenesisError::ArithmeticOverflow))
}

/// Convert a WAD amount into base units of a mint with `decimals`.
/// Rejects amounts that would lose precision.
pub fn wad_to_token_amount(amount: u128, decimals: u8) -> Result<u64> {
    let factor = unit_factor(decimals)?;
    require!(amount % factor == 0, GenesisError::UnrepresentableAmount);
    u64::try_from(amount / factor).map_err(|_| error!(GenesisError::ArithmeticOverflow))
}

pub fn token_amount_to_wad(amount: u64, decimals: u8) -> Result<u128> {
    (amount as u128)
        .checked_mul(unit_factor(decimals)?)
        .ok_or_else(|| error!(GenesisError::ArithmeticOverflow))
}

/// Whether a Token or Token-2022 mint withholds part of every transfer.
/// Such mints would leave the vault holding less than the credited stake.
pub fn has_transfer_fee(mint_data: &[u8]) -> Result<bool> {
    let mint = StateWithExtensions::<Mint>::unpack(mint_data)?;
    Ok(mint
        .get_extension_types()?
        .contains(&ExtensionType::TransferFeeConfig))
}
