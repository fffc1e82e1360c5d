//! Display formatting for addresses and seeds

/// Shorten an address to `edge` chars on each side joined by an ellipsis.
/// Addresses that would not get shorter are returned as-is.
pub fn short_address(addr: &str, edge: usize) -> String {
    let len = addr.chars().count();
    if len <= edge * 2 {
        return addr.to_string();
    }

    let head: String = addr.chars().take(edge).collect();
    let tail: String = addr.chars().skip(len - edge).collect();
    format!("{}…{}", head, tail)
}

/// Account page URL on an explorer, with the cluster query for non-mainnet
pub fn explorer_account_url(base: &str, addr: &str, cluster: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match cluster {
        Some(cluster) => format!("{}/account/{}?cluster={}", base, addr, cluster),
        None => format!("{}/account/{}", base, addr),
    }
}

/// Hex of the little-endian seed bytes used in the vault PDA
pub fn seed_le_hex(seed: u64) -> String {
    seed.to_le_bytes().iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("AHnWUmyXfyRqtN3AwoRxMoyVKskyF9cS59YE2ZbqB8x6", 4),
            "AHnW…B8x6"
        );
    }

    #[test]
    fn test_short_address_no_gain() {
        assert_eq!(short_address("abcdefgh", 4), "abcdefgh");
        assert_eq!(short_address("abc", 4), "abc");
        assert_eq!(short_address("", 4), "");
        assert_eq!(short_address("abcdefghi", 4), "abcd…fghi");
    }

    #[test]
    fn test_short_address_multibyte() {
        // Must split on chars, not bytes
        assert_eq!(short_address("ééééxéééé", 2), "éé…éé");
    }

    #[test]
    fn test_explorer_account_url() {
        assert_eq!(
            explorer_account_url("https://explorer.solana.com/", "Abc", Some("devnet")),
            "https://explorer.solana.com/account/Abc?cluster=devnet"
        );
        assert_eq!(
            explorer_account_url("https://solscan.io", "Abc", None),
            "https://solscan.io/account/Abc"
        );
    }

    #[test]
    fn test_seed_le_hex() {
        assert_eq!(seed_le_hex(0), "0000000000000000");
        assert_eq!(seed_le_hex(42), "2a00000000000000");
        assert_eq!(seed_le_hex(0x0102), "0201000000000000");
    }
}
