pub const ANCHOR_DISCRIMINATOR: usize = 8;

pub const REGISTRY_SEED: &[u8] = b"registry";
pub const INITIATIVE_SEED: &[u8] = b"initiative";
pub const VAULT_BALANCE_SEED: &[u8] = b"vault-balance";

/// Names are stored with a fixed reservation so every initiative account has the same size.
pub const MAX_NAME_LENGTH: usize = 64;
