use crate::state::BlockExplorer;

// Compile-time configuration for chain and node details
pub const CHAIN_ID: &str = if cfg!(feature = "mainnet") {
    "aca376f206b8fc25a6ed44dbdc66547c36c6c33e3a119ffbeaef943642f0e906"
} else if cfg!(feature = "testnet") {
    "73e4385a2708e6d7048834fbc1079f2fabb17b3c125b146af438971e90716c4d"
} else {
    "cf057bbfb72640471fd910bcb67639c22df9f92470936cddc1ade0e2f2e7dc4f"
};

pub const NODE: &str = if cfg!(feature = "mainnet") {
    "https://eos.greymass.com"
} else if cfg!(feature = "testnet") {
    "https://jungle4.greymass.com"
} else {
    "http://localhost:8888"
};

// a local nodeos boots with the SYS core symbol
pub const CHAIN_SYMBOL: &str = if cfg!(feature = "mainnet") || cfg!(feature = "testnet") {
    "EOS"
} else {
    "SYS"
};
pub const CORE_PRECISION: u8 = 4;

pub const BLOCK_EXPLORERS: &[BlockExplorer] = if cfg!(feature = "mainnet") {
    &[
        BlockExplorer {
            name: "bloks.io",
            transaction_url: "https://bloks.io/transaction/{txid}",
        },
        BlockExplorer {
            name: "eosq",
            transaction_url: "https://eos.eosq.eosnation.io/tx/{txid}",
        },
    ]
} else if cfg!(feature = "testnet") {
    &[BlockExplorer {
        name: "bloks.io (jungle4)",
        transaction_url: "https://local.bloks.io/transaction/{txid}?nodeUrl=jungle4.greymass.com&systemDomain=eosio",
    }]
} else {
    &[]
};

/// Where account names are kept between visits.
pub const ACCOUNT_STORAGE_KEY: &str = "rex_account";
