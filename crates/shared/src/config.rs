/// Static app configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,
    pub dashboard_title: &'static str,

    // Vault escrow program - everything on the dashboard is derived from this
    pub program_id: &'static str,
    pub cluster: Cluster,
    pub vault_seed_prefix: &'static str,
    pub instructions: &'static [Instruction],

    pub links: Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    Mainnet,
    Devnet,
    Localnet,
}

impl Cluster {
    pub fn name(self) -> &'static str {
        match self {
            Cluster::Mainnet => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Localnet => "localnet",
        }
    }

    /// Value of the explorer `cluster` query parameter, `None` for mainnet
    pub fn explorer_param(self) -> Option<&'static str> {
        match self {
            Cluster::Mainnet => None,
            Cluster::Devnet => Some("devnet"),
            Cluster::Localnet => Some("custom"),
        }
    }
}

/// Explorer base URLs
pub struct Links {
    pub explorer: &'static str,
    pub solscan: &'static str,
}

/// One instruction exposed by the vault program
pub struct Instruction {
    pub name: &'static str,
    pub args: &'static [&'static str],
    pub summary: &'static str,
}

impl Config {
    pub fn explorer_program_url(&self) -> String {
        crate::format::explorer_account_url(self.links.explorer, self.program_id, self.cluster.explorer_param())
    }

    pub fn solscan_program_url(&self) -> String {
        crate::format::explorer_account_url(self.links.solscan, self.program_id, self.cluster.explorer_param())
    }
}

pub static CONFIG: Config = Config {
    name: "SolPe",
    tagline: "Trustless token swaps on Solana",
    dashboard_title: "SolPe Dashboard",

    program_id: "AHnWUmyXfyRqtN3AwoRxMoyVKskyF9cS59YE2ZbqB8x6",
    cluster: Cluster::Devnet,
    vault_seed_prefix: "state",

    // Order matches the lifecycle of a vault
    instructions: &[
        Instruction {
            name: "initialize",
            args: &["seed: u64", "initializer_amount: u64", "taker_amount: u64"],
            summary: "Creates the vault state account and moves initializer_amount of mint A into the vault.",
        },
        Instruction {
            name: "deposit",
            args: &[],
            summary: "Taker pays taker_amount of mint B to the initializer, receives the vaulted mint A, and the vault is closed.",
        },
        Instruction {
            name: "cancel",
            args: &[],
            summary: "Initializer reclaims the vaulted mint A and closes the vault.",
        },
    ],

    links: Links {
        explorer: "https://explorer.solana.com",
        solscan: "https://solscan.io",
    },
};
