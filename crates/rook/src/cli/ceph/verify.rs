//! Post-parse checks for renamed flags.

use rook_clusterd::{ConfigurationError, NetworkInfo, RenamedFlag, RENAMED_FLAGS};
use std::fmt;
use tracing::warn;

/// Notice that a deprecated flag was used.
///
/// A legacy value read from its `ROOK_*` environment variable counts as
/// used, so `ROOK_PUBLIC_IPV4` or `ROOK_PRIVATE_IPV4` alone also produce a
/// notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    pub flag: &'static str,
    pub message: String,
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flag --{} has been deprecated, {}", self.flag, self.message)
    }
}

/// Check the renamed network flags against the command they were parsed for.
///
/// Fails only when the renamed-flag table itself is broken: a pair that
/// renames a flag to itself, or a name the command does not register.
/// Otherwise returns one notice per legacy flag that was set. Setting both
/// spellings is accepted and the new one wins.
pub fn verify_renamed_flags(
    command: &clap::Command,
    network: &NetworkInfo,
) -> Result<Vec<DeprecationNotice>, ConfigurationError> {
    verify_table(command, RENAMED_FLAGS, network)
}

fn verify_table(
    command: &clap::Command,
    renamed: &[RenamedFlag],
    network: &NetworkInfo,
) -> Result<Vec<DeprecationNotice>, ConfigurationError> {
    for flag in renamed {
        if flag.new_name == flag.old_name {
            return Err(ConfigurationError::SelfRenamed(flag.new_name.to_string()));
        }
        for name in [flag.new_name, flag.old_name] {
            if !has_long_flag(command, name) {
                return Err(ConfigurationError::UnknownRenamedFlag {
                    name: name.to_string(),
                    command: command.get_name().to_string(),
                });
            }
        }
    }

    let mut notices = Vec::new();
    for flag in renamed.iter().filter(|flag| flag.old_is_set(network)) {
        if flag.new_is_set(network) {
            warn!(
                "Both --{} and --{} are set; ignoring --{}",
                flag.new_name, flag.old_name, flag.old_name
            );
        }
        notices.push(DeprecationNotice {
            flag: flag.old_name,
            message: flag.deprecation_message(),
        });
    }
    Ok(notices)
}

fn has_long_flag(command: &clap::Command, name: &str) -> bool {
    command
        .get_arguments()
        .any(|arg| arg.get_long() == Some(name))
}
