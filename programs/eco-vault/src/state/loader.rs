use anchor_lang::{prelude::*, Owner};

/// Reads a program account that may not exist yet.
///
/// Returns `None` when the account is empty or owned by another program,
/// which is how an uninitialized PDA looks to the runtime.
pub fn load<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Writes `value` back, discriminator included.
pub fn store<T: AccountSerialize>(value: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data[..];
    value.try_serialize(&mut dst)
}
