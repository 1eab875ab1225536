//! # Help Surface Tests
//!
//! The registered catalog and the help output built from it: completeness,
//! category filtering, and ordering.

#[cfg(test)]
mod tests {
    use rc_rpc::{build_command_table, CommandCategory, HelpFormatter};

    const EXPECTED_COMMANDS: &[&str] = &[
        "listitem",
        "execute",
        "getbalance",
        "backupwallet",
        "currentneuralhash",
        "neuralhash",
        "currentneuralcontract",
        "explainmagnitude",
        "superblockage",
        "syncdpor2",
        "advertisebeacon",
        "beaconreport",
        "versionreport",
        "tally",
        "tallyneural",
        "forcequorom",
        "getblockcount",
        "getbestblockhash",
        "getconnectioncount",
        "networktime",
    ];

    #[test]
    fn test_catalog_is_complete() {
        let table = build_command_table().unwrap();
        assert_eq!(table.len(), EXPECTED_COMMANDS.len());
        for name in EXPECTED_COMMANDS {
            assert!(table.lookup(name).is_some(), "{name}");
        }
    }

    #[test]
    fn test_every_usage_line_starts_with_the_command_name() {
        let table = build_command_table().unwrap();
        for descriptor in table.commands() {
            assert!(
                descriptor.usage.starts_with(descriptor.name),
                "{}",
                descriptor.name
            );
        }
    }

    #[test]
    fn test_category_filter_is_exact_and_ordered() {
        let table = build_command_table().unwrap();
        let help = HelpFormatter::new(&table);

        let network = help.category(CommandCategory::Network);
        let lines: Vec<_> = network.lines().collect();
        let expected: Vec<_> = table
            .commands_in(CommandCategory::Network)
            .iter()
            .map(|d| d.usage)
            .collect();
        assert_eq!(lines, expected);

        // Nothing from other categories leaks in.
        assert!(!network.contains("tally"));
        assert!(!network.contains("getbalance"));
    }

    #[test]
    fn test_full_help_lists_every_command_once_with_headers() {
        let table = build_command_table().unwrap();
        let help = HelpFormatter::new(&table);
        let all = help.all();

        for descriptor in table.commands() {
            assert_eq!(all.matches(descriptor.usage).count(), 1, "{}", descriptor.name);
        }
        for category in CommandCategory::ALL {
            if !table.commands_in(category).is_empty() {
                assert!(all.contains(&format!("== {} ==", category.name())));
            }
        }
    }

    #[test]
    fn test_category_names_parse_back() {
        for category in CommandCategory::ALL {
            assert_eq!(CommandCategory::parse(category.name()), Some(category));
            assert_eq!(
                CommandCategory::parse(&category.name().to_lowercase()),
                Some(category)
            );
        }
        assert_eq!(CommandCategory::parse("nonsense"), None);
    }
}
