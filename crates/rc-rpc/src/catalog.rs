//! The fixed command catalog.
//!
//! One explicit builder invocation assembles the whole table at startup;
//! registration order here is the order help output preserves.

use crate::handlers::{deprecated, developer, neural, network, wallet};
use crate::registry::{
    CommandCategory, CommandDescriptor, CommandTable, CommandTableBuilder, RegistryError,
};

/// Build the complete command table.
///
/// Fails when the catalog contains a duplicate name; the caller treats that
/// as a fatal configuration error before any request is accepted.
pub fn build_command_table() -> Result<CommandTable, RegistryError> {
    use CommandCategory::{Deprecated, Developer, Mining, Network, Wallet};

    let builder = CommandTableBuilder::new()
        // --- Deprecated ---
        .register(CommandDescriptor::new(
            "listitem",
            deprecated::listitem,
            true,
            Deprecated,
            "listitem - deprecated, use the per-category report commands",
        ))?
        .register(CommandDescriptor::new(
            "execute",
            deprecated::execute,
            true,
            Deprecated,
            "execute - deprecated, invoke the target command directly",
        ))?
        // --- Wallet ---
        .register(CommandDescriptor::new(
            "getbalance",
            wallet::getbalance,
            true,
            Wallet,
            "getbalance - total spendable balance",
        ))?
        .register(CommandDescriptor::new(
            "backupwallet",
            wallet::backupwallet,
            false,
            Wallet,
            "backupwallet <destination> - back up the wallet file",
        ))?
        // --- Mining ---
        .register(CommandDescriptor::new(
            "currentneuralhash",
            neural::currentneuralhash,
            true,
            Mining,
            "currentneuralhash - cached consensus fingerprint",
        ))?
        .register(CommandDescriptor::new(
            "neuralhash",
            neural::neuralhash,
            true,
            Mining,
            "neuralhash - recompute the consensus fingerprint synchronously",
        ))?
        .register(CommandDescriptor::new(
            "currentneuralcontract",
            neural::currentneuralcontract,
            true,
            Mining,
            "currentneuralcontract - cached research-credit payload",
        ))?
        .register(CommandDescriptor::new(
            "explainmagnitude",
            neural::explainmagnitude,
            true,
            Mining,
            "explainmagnitude [cpid] - magnitude breakdown from the scoring engine",
        ))?
        .register(CommandDescriptor::new(
            "superblockage",
            neural::superblockage,
            true,
            Mining,
            "superblockage - age of the cached contract and bound check",
        ))?
        .register(CommandDescriptor::new(
            "syncdpor2",
            neural::syncdpor2,
            false,
            Mining,
            "syncdpor2 [cpid] [quorum_data] - start an asynchronous research-credit refresh",
        ))?
        .register(CommandDescriptor::new(
            "advertisebeacon",
            neural::advertisebeacon,
            false,
            Mining,
            "advertisebeacon [cpid] - announce a CPID/identity binding",
        ))?
        .register(CommandDescriptor::new(
            "beaconreport",
            neural::beaconreport,
            true,
            Mining,
            "beaconreport - currently known beacons",
        ))?
        // --- Developer ---
        .register(CommandDescriptor::new(
            "versionreport",
            developer::versionreport,
            true,
            Developer,
            "versionreport - node, neural, and engine status",
        ))?
        .register(CommandDescriptor::new(
            "tally",
            developer::tally,
            false,
            Developer,
            "tally - trigger a research-credit tally",
        ))?
        .register(CommandDescriptor::new(
            "tallyneural",
            developer::tallyneural,
            false,
            Developer,
            "tallyneural - ask the scoring engine to re-tally magnitudes",
        ))?
        .register(CommandDescriptor::new(
            "forcequorom",
            developer::forcequorom,
            false,
            Developer,
            "forcequorom - force participation in the next quorum round",
        ))?
        // --- Network ---
        .register(CommandDescriptor::new(
            "getblockcount",
            network::getblockcount,
            true,
            Network,
            "getblockcount - height of the best chain",
        ))?
        .register(CommandDescriptor::new(
            "getbestblockhash",
            network::getbestblockhash,
            true,
            Network,
            "getbestblockhash - hash of the best block",
        ))?
        .register(CommandDescriptor::new(
            "getconnectioncount",
            network::getconnectioncount,
            true,
            Network,
            "getconnectioncount - number of connected peers",
        ))?
        .register(CommandDescriptor::new(
            "networktime",
            network::networktime,
            true,
            Network,
            "networktime - network-adjusted Unix time",
        ))?;

    Ok(builder.build())
}
